use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;

use crate::{
    profile::{NAVIGATION, NavItem, PROFILE, Profile},
    routes::{
        AppState,
        contact::{ContactFormView, view_for},
    },
    template::Template,
    theme::Theme,
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub theme: Theme,
    pub navigation: &'static [NavItem],
    pub profile: &'static Profile,
    pub contact: ContactFormView,
}

pub async fn page(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let contact = view_for(&app_state, &jar).await;

    template.render(page_template(template.theme, contact))
}

pub fn page_template(theme: Theme, contact: ContactFormView) -> IndexTemplate {
    IndexTemplate {
        theme,
        navigation: NAVIGATION,
        profile: &PROFILE,
        contact,
    }
}
