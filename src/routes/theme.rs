use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::CookieJar;

use crate::theme::Theme;

/// POST /theme - flip the light/dark preference and go back to the page
pub async fn toggle(theme: Theme, jar: CookieJar) -> impl IntoResponse {
    let theme = theme.toggled();
    tracing::debug!(%theme, "theme toggled");

    (jar.add(theme.cookie()), Redirect::to("/"))
}
