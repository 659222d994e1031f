use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    sessions::ContactSessions,
    template::{NotFoundTemplate, Template},
};

pub mod contact;
mod health;
mod index;
mod theme;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub sessions: ContactSessions,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        axum::http::StatusCode::NOT_FOUND,
        NotFoundTemplate {
            theme: template.theme,
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/contact/form", get(contact::form))
        .route("/theme", post(theme::toggle))
        .route("/static/{*path}", get(crate::assets::serve))
        .fallback(fallback)
        .with_state(app_state)
}
