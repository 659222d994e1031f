use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use ulid::Ulid;

pub const VISITOR_COOKIE: &str = "visitor";

/// Browser identity used to key the contact form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visitor {
    id: String,
    is_new: bool,
}

impl Visitor {
    pub fn from_jar(jar: &CookieJar) -> Self {
        let known = jar
            .get(VISITOR_COOKIE)
            .and_then(|cookie| Ulid::from_string(cookie.value()).ok());

        match known {
            Some(id) => Self {
                id: id.to_string(),
                is_new: false,
            },
            None => Self {
                id: Ulid::new().to_string(),
                is_new: true,
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Issue the cookie for visitors that did not carry one.
    pub fn remember(&self, jar: CookieJar) -> CookieJar {
        if !self.is_new {
            return jar;
        }

        jar.add(
            Cookie::build((VISITOR_COOKIE, self.id.to_owned()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build(),
        )
    }
}
