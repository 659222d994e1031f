#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{Form, Json, Router, extract::State, http::StatusCode, routing::post};
use portfolio_contact::{ContactForm, Relay, RelayResponse, SubmissionRequest, SubmitError};
use tokio::sync::Notify;

pub fn ada() -> ContactForm {
    ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
    }
}

/// In-process relay answering from a script, optionally held open by a gate.
pub struct ScriptedRelay {
    reply: Mutex<Result<RelayResponse, (u16, String)>>,
    pub calls: Mutex<Vec<SubmissionRequest>>,
    pub started: Notify,
    gate: Option<Notify>,
}

impl ScriptedRelay {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::new(Ok(RelayResponse::accepted()), false))
    }

    pub fn rejecting(message: &str) -> Arc<Self> {
        Arc::new(Self::new(
            Ok(RelayResponse {
                success: false,
                message: Some(message.to_owned()),
            }),
            false,
        ))
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self::new(Err((status, "upstream down".to_owned())), false))
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self::new(Ok(RelayResponse::accepted()), true))
    }

    fn new(reply: Result<RelayResponse, (u16, String)>, gated: bool) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: Mutex::new(Vec::new()),
            started: Notify::new(),
            gate: gated.then(Notify::new),
        }
    }

    pub fn reply_with(&self, reply: Result<RelayResponse, (u16, String)>) {
        *self.reply.lock().unwrap() = reply;
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
impl Relay for ScriptedRelay {
    async fn send(&self, request: &SubmissionRequest) -> portfolio_contact::Result<RelayResponse> {
        self.calls.lock().unwrap().push(request.clone());
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = self.reply.lock().unwrap().clone();
        reply.map_err(|(status, body)| SubmitError::Status { status, body })
    }
}

/// A stand-in for the hosted relay endpoint, served over real HTTP.
#[derive(Clone)]
pub struct MockRelayServer {
    pub endpoint: String,
    pub received: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: serde_json::Value,
    delay: Duration,
    received: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockRelayServer {
    pub async fn start(status: u16, body: serde_json::Value) -> anyhow::Result<Self> {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(
        status: u16,
        body: serde_json::Value,
        delay: Duration,
    ) -> anyhow::Result<Self> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status)?,
            body,
            delay,
            received: received.clone(),
        };

        let app = Router::new()
            .route("/submit", post(submit))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            endpoint: format!("http://{addr}/submit"),
            received,
        })
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.received.lock().unwrap().clone()
    }
}

async fn submit(
    State(state): State<MockState>,
    Form(fields): Form<HashMap<String, String>>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.received.lock().unwrap().push(fields);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (state.status, Json(state.body))
}
