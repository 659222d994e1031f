use axum::{
    extract::{Form, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use portfolio_contact::{ContactForm, ContactSession, ErrorKind, Outcome};
use validator::Validate;

use crate::{
    routes::{AppState, index},
    template::Template,
    visitor::Visitor,
};

pub const SUCCESS_NOTICE: &str = "Thanks! Your message has been sent.";
pub const ERROR_NOTICE: &str = "Your message could not be sent. Please try again.";
pub const INVALID_NOTICE: &str = "Please fill in every field with a valid email address.";
pub const BUSY_NOTICE: &str = "Your previous message is still being sent.";

/// What the contact form partial needs to render one visitor's form.
pub struct ContactFormView {
    pub form: ContactForm,
    pub outcome: Outcome,
    pub submitting: bool,
    pub notice: Option<&'static str>,
    pub reset_after_ms: u128,
}

impl ContactFormView {
    pub fn empty(reset_after_ms: u128) -> Self {
        Self {
            form: ContactForm::default(),
            outcome: Outcome::Idle,
            submitting: false,
            notice: None,
            reset_after_ms,
        }
    }

    /// The fields as posted, for visitors without stored state.
    pub fn posted(form: ContactForm, reset_after_ms: u128) -> Self {
        Self {
            form,
            ..Self::empty(reset_after_ms)
        }
    }

    pub fn of(session: &ContactSession) -> Self {
        let outcome = session.outcome();
        let notice = match outcome {
            Outcome::Success => Some(SUCCESS_NOTICE),
            Outcome::Error => Some(ERROR_NOTICE),
            Outcome::Idle | Outcome::Submitting => None,
        };

        Self {
            form: session.form(),
            outcome,
            submitting: session.is_submitting(),
            notice,
            reset_after_ms: session.reset_after().as_millis(),
        }
    }

    fn with_notice(mut self, notice: &'static str) -> Self {
        self.notice = Some(notice);
        self
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub contact: ContactFormView,
}

/// The visitor's form, or a blank one for visitors without state.
pub async fn view_for(app_state: &AppState, jar: &CookieJar) -> ContactFormView {
    let visitor = Visitor::from_jar(jar);
    if visitor.is_new() {
        return ContactFormView::empty(app_state.sessions.reset_after().as_millis());
    }

    match app_state.sessions.get(visitor.id()).await {
        Some(session) => ContactFormView::of(&session),
        None => ContactFormView::empty(app_state.sessions.reset_after().as_millis()),
    }
}

/// GET /contact/form
pub async fn form(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let contact = view_for(&app_state, &jar).await;

    template.render(ContactFormTemplate { contact })
}

/// Header set by the page script; native form posts come without it.
pub const FETCH_HEADER: &str = "x-requested-with";

/// POST /contact
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Form(input): Form<ContactForm>,
) -> Response {
    let visitor = Visitor::from_jar(&jar);

    // Invalid input only touches a session that already exists.
    let session = if input.validate().is_ok() {
        Some(app_state.sessions.get_or_create(visitor.id()).await)
    } else {
        app_state.sessions.get(visitor.id()).await
    };

    let (status, contact) = match session {
        Some(session) => submit(&session, input).await,
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactFormView::posted(input, app_state.sessions.reset_after().as_millis())
                .with_notice(INVALID_NOTICE),
        ),
    };

    let response = if headers.contains_key(FETCH_HEADER) {
        template.render_with_status(status, ContactFormTemplate { contact })
    } else {
        template.render_with_status(status, index::page_template(template.theme, contact))
    };

    (visitor.remember(jar), response).into_response()
}

async fn submit(session: &ContactSession, input: ContactForm) -> (StatusCode, ContactFormView) {
    let Err(err) = session.submit_with(input).await else {
        return (StatusCode::OK, ContactFormView::of(session));
    };

    match err.kind() {
        ErrorKind::Invalid => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactFormView::of(session).with_notice(INVALID_NOTICE),
        ),
        ErrorKind::Busy => (
            StatusCode::CONFLICT,
            ContactFormView::of(session).with_notice(BUSY_NOTICE),
        ),
        ErrorKind::TransportFailure | ErrorKind::RelayRejection => {
            (StatusCode::BAD_GATEWAY, ContactFormView::of(session))
        }
    }
}
