//! Content of the portfolio page.

pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub code_url: &'static str,
    pub demo_url: Option<&'static str>,
}

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub focus: &'static [&'static str],
    pub about: &'static [&'static str],
    pub specializations: &'static [&'static str],
    pub stats: &'static [Stat],
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub all_projects_url: &'static str,
    pub achievements: &'static [Achievement],
    pub contact_details: &'static [ContactDetail],
    pub socials: &'static [SocialLink],
    pub availability: &'static str,
}

pub const NAVIGATION: &[NavItem] = &[
    NavItem {
        label: "Home",
        anchor: "home",
    },
    NavItem {
        label: "About",
        anchor: "about",
    },
    NavItem {
        label: "Skills",
        anchor: "skills",
    },
    NavItem {
        label: "Projects",
        anchor: "projects",
    },
    NavItem {
        label: "Achievements",
        anchor: "achievements",
    },
    NavItem {
        label: "Contact",
        anchor: "contact",
    },
];

pub static PROFILE: Profile = Profile {
    name: "Rithick M K",
    title: "AI & ML Developer",
    focus: &["Generative AI", "NLP", "Computer Vision"],
    about: &[
        "Driven Generative AI & Machine Learning Developer specializing in building intelligent, \
         data-driven applications with cutting-edge deep learning models.",
        "Skilled in generative models, NLP, and computer vision with expertise in scalable \
         deployment and production-ready solutions.",
    ],
    specializations: &[
        "Generative AI & Machine Learning",
        "Deep Learning Models",
        "Computer Vision",
        "Natural Language Processing",
        "Scalable Deployment",
    ],
    stats: &[
        Stat {
            label: "AI Models Built",
            value: "15+",
        },
        Stat {
            label: "Languages",
            value: "5+",
        },
        Stat {
            label: "Projects",
            value: "20+",
        },
        Stat {
            label: "Years Experience",
            value: "3+",
        },
    ],
    skills: &[
        SkillCategory {
            title: "Languages",
            skills: &["C", "Python", "Java"],
        },
        SkillCategory {
            title: "AI/ML Frameworks",
            skills: &[
                "PyTorch",
                "TensorFlow",
                "Keras",
                "Hugging Face",
                "Transformers",
            ],
        },
        SkillCategory {
            title: "Libraries & Tools",
            skills: &["NLTK", "spaCy", "scikit-learn", "OpenCV", "FAISS", "LLMs"],
        },
        SkillCategory {
            title: "Vision Models",
            skills: &["YOLOv8", "EfficientNet", "UNet", "ResUNet"],
        },
        SkillCategory {
            title: "DevOps & Deployment",
            skills: &[
                "CUDA", "Flask", "Gradio", "PyQt", "ONNX", "Docker", "Git", "Linux",
            ],
        },
        SkillCategory {
            title: "Additional Tools",
            skills: &["Jupyter Notebook", "Power BI", "Excel"],
        },
    ],
    projects: &[
        Project {
            title: "Chatbot with LLAMA (RAG-based)",
            description: "Built a Retrieval-Augmented Generation (RAG) chatbot using Flask, FAISS, \
                          and Hugging Face embeddings. Integrated Ollama LLM with RetrievalQA for \
                          contextual responses, boosting accuracy by 32%.",
            tech: &["Flask", "FAISS", "Hugging Face", "Ollama", "RAG"],
            code_url: "https://github.com/rithick-06/llama-rag-chatbot",
            demo_url: None,
        },
        Project {
            title: "Defect Detection for Manufacturing",
            description: "Developed a two-stage vision pipeline for defect classification and \
                          localization. Stage 1: EfficientNet for classification; Stage 2: \
                          YOLOv8, ResNet, UNet for defect detection. Achieved 95% accuracy on \
                          validation dataset.",
            tech: &["EfficientNet", "YOLOv8", "ResNet", "UNet", "Computer Vision"],
            code_url: "https://github.com/rithick-06/defect-detection",
            demo_url: None,
        },
        Project {
            title: "Comment Toxicity Detection",
            description: "Designed a CNN-RNN-LSTM hybrid model for real-time toxicity detection. \
                          Reached an 87.6% F1 score, improving over baseline by 18%.",
            tech: &["CNN", "RNN", "LSTM", "NLP", "Deep Learning"],
            code_url: "https://github.com/rithick-06/toxicity-detection",
            demo_url: None,
        },
    ],
    all_projects_url: "https://github.com/rithick-06",
    achievements: &[
        Achievement {
            title: "India Skills 2024 — Bronze Medal",
            description: "Fabric Design and Development, among 100+ participants",
            category: "National Competition",
        },
        Achievement {
            title: "Finalist — IITDM National Conference",
            description: "Osteoporosis Detection using Deep Learning",
            category: "Research & Innovation",
        },
        Achievement {
            title: "Finalist — ASET International Conference",
            description: "ITC Best Practices for Green IT",
            category: "International Recognition",
        },
        Achievement {
            title: "Caterpillar Innovation Challenge",
            description: "Sustainable Manufacturing Solutions",
            category: "Corporate Innovation",
        },
    ],
    contact_details: &[
        ContactDetail {
            label: "Email",
            value: "rithick.mk@example.com",
            href: "mailto:rithick.mk@example.com",
        },
        ContactDetail {
            label: "Phone",
            value: "+91 12345 67890",
            href: "tel:+911234567890",
        },
        ContactDetail {
            label: "Location",
            value: "India",
            href: "#contact",
        },
    ],
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com/rithick-06",
        },
        SocialLink {
            label: "LinkedIn",
            href: "#",
        },
        SocialLink {
            label: "Twitter",
            href: "#",
        },
        SocialLink {
            label: "YouTube",
            href: "#",
        },
        SocialLink {
            label: "Instagram",
            href: "#",
        },
    ],
    availability: "Currently accepting new AI/ML development opportunities",
};
