use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use strum::{AsRefStr, Display, EnumString};

pub const THEME_COOKIE: &str = "theme";

/// Light/dark preference of the current visitor, persisted in the `theme` cookie.
#[derive(EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Missing or unreadable cookies fall back to dark.
    pub fn from_jar(jar: &CookieJar) -> Self {
        jar.get(THEME_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
            .unwrap_or_default()
    }

    pub fn cookie(self) -> Cookie<'static> {
        Cookie::build((THEME_COOKIE, self.to_string()))
            .path("/")
            .max_age(time::Duration::days(365))
            .same_site(SameSite::Lax)
            .build()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Theme {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Theme::from_jar(&CookieJar::from_headers(&parts.headers)))
    }
}
