#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, Response, header},
};
use http_body_util::BodyExt;
use portfolio::{
    AppState,
    config::{Config, ContactConfig, LoggingConfig, RelayConfig, ServerConfig},
    routes::contact::FETCH_HEADER,
    sessions::ContactSessions,
};
use portfolio_contact::{ContactForm, Relay, RelayResponse, SubmissionRequest, SubmitError};
use tokio::sync::Notify;

/// A visitor id the app accepts as already known.
pub const VISITOR: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";

pub fn ada() -> ContactForm {
    ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
    }
}

pub fn test_config(endpoint: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        relay: RelayConfig {
            endpoint: endpoint.to_owned(),
            access_key: "test-access-key".to_owned(),
        },
        contact: ContactConfig {
            reset_after_ms: 100,
            session_ttl_secs: 1800,
        },
        logging: LoggingConfig::default(),
    }
}

pub fn create_test_app(relay: Arc<dyn Relay>) -> Router {
    portfolio::create_app(test_config("http://127.0.0.1:9/submit"), relay)
}

/// Bare router sharing its session map with the caller.
pub fn create_test_router(relay: Arc<dyn Relay>) -> (Router, ContactSessions) {
    let config = test_config("http://127.0.0.1:9/submit");
    let sessions = ContactSessions::new(
        relay,
        config.contact.reset_after(),
        config.contact.session_ttl(),
    );
    let router = portfolio::routes::router(AppState {
        config,
        sessions: sessions.clone(),
    });

    (router, sessions)
}

/// In-process relay with a fixed answer, optionally held open until released.
pub struct StubRelay {
    reply: Result<RelayResponse, u16>,
    calls: Mutex<Vec<SubmissionRequest>>,
    pub started: Notify,
    gate: Option<Notify>,
}

impl StubRelay {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::new(Ok(RelayResponse::accepted()), false))
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self::new(Err(status), false))
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self::new(Ok(RelayResponse::accepted()), true))
    }

    fn new(reply: Result<RelayResponse, u16>, gated: bool) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
            started: Notify::new(),
            gate: gated.then(Notify::new),
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Relay for StubRelay {
    async fn send(&self, request: &SubmissionRequest) -> portfolio_contact::Result<RelayResponse> {
        self.calls.lock().unwrap().push(request.clone());
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.reply.clone().map_err(|status| SubmitError::Status {
            status,
            body: "upstream down".to_owned(),
        })
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_as(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

/// A submission as sent by the page script.
pub fn post_contact(form: &ContactForm, cookie: Option<&str>) -> Request<Body> {
    let mut request = post_contact_native(form, cookie);
    request
        .headers_mut()
        .insert(FETCH_HEADER, HeaderValue::from_static("fetch"));
    request
}

/// A plain HTML form submission, without the page script.
pub fn post_contact_native(form: &ContactForm, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder
        .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
        .unwrap()
}

pub fn visitor_cookie() -> String {
    format!("visitor={VISITOR}")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
