use crate::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("relay rejected the submission: {message}")]
    Rejected { message: String },

    #[error("submission task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl SubmitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmitError::Invalid(_) => ErrorKind::Invalid,
            SubmitError::AlreadySubmitting => ErrorKind::Busy,
            SubmitError::Transport(_) | SubmitError::Status { .. } | SubmitError::Task(_) => {
                ErrorKind::TransportFailure
            }
            SubmitError::Rejected { .. } => ErrorKind::RelayRejection,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;
