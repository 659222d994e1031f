use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::sync::watch;

use crate::{ContactForm, Field, Outcome, Relay, RelayResponse, SubmissionRequest, SubmitError};

pub const DEFAULT_RESET_AFTER: Duration = Duration::from_secs(3);

/// One visitor's contact form: field state, outcome and the in-flight guard.
///
/// Cloning is cheap and every clone observes the same state. A submission,
/// once issued, runs to completion even if the caller stops awaiting it.
#[derive(Clone)]
pub struct ContactSession {
    relay: Arc<dyn Relay>,
    form: Arc<watch::Sender<ContactForm>>,
    outcome: Arc<watch::Sender<Outcome>>,
    attempt: Arc<AtomicU64>,
    submitting: Arc<AtomicBool>,
    reset_after: Duration,
}

impl ContactSession {
    pub fn new(relay: Arc<dyn Relay>) -> Self {
        Self::with_reset_after(relay, DEFAULT_RESET_AFTER)
    }

    pub fn with_reset_after(relay: Arc<dyn Relay>, reset_after: Duration) -> Self {
        let (form, _) = watch::channel(ContactForm::default());
        let (outcome, _) = watch::channel(Outcome::Idle);

        Self {
            relay,
            form: Arc::new(form),
            outcome: Arc::new(outcome),
            attempt: Arc::new(AtomicU64::new(0)),
            submitting: Arc::new(AtomicBool::new(false)),
            reset_after,
        }
    }

    pub fn form(&self) -> ContactForm {
        self.form.borrow().clone()
    }

    pub fn update(&self, form: ContactForm) {
        self.form.send_replace(form);
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.form.send_modify(|form| form.set(field, value));
    }

    pub fn outcome(&self) -> Outcome {
        *self.outcome.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Outcome> {
        self.outcome.subscribe()
    }

    /// The submit control is disabled while this holds.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    pub async fn submit(&self) -> crate::Result<()> {
        if self.submitting.swap(true, Ordering::AcqRel) {
            return Err(SubmitError::AlreadySubmitting);
        }

        self.run().await
    }

    /// Replace the fields and submit them, unless an attempt is already in
    /// flight, in which case the in-flight fields are left untouched.
    pub async fn submit_with(&self, form: ContactForm) -> crate::Result<()> {
        if self.submitting.swap(true, Ordering::AcqRel) {
            return Err(SubmitError::AlreadySubmitting);
        }

        self.form.send_replace(form);
        self.run().await
    }

    /// Runs with the in-flight guard held.
    async fn run(&self) -> crate::Result<()> {
        let request = match self.form.borrow().to_request() {
            Ok(request) => request,
            Err(err) => {
                self.submitting.store(false, Ordering::Release);
                return Err(err);
            }
        };

        let attempt = self.attempt.fetch_add(1, Ordering::AcqRel) + 1;
        self.outcome.send_replace(Outcome::Submitting);

        let session = self.clone();
        let handle = tokio::spawn(async move { session.deliver(attempt, request).await });

        match handle.await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(attempt, "contact submission task failed: {err}");
                self.settle(attempt, Outcome::Error);

                Err(err.into())
            }
        }
    }

    async fn deliver(&self, attempt: u64, request: SubmissionRequest) -> crate::Result<()> {
        let result = self
            .relay
            .send(&request)
            .await
            .and_then(RelayResponse::into_result);

        match result {
            Ok(_) => {
                self.form.send_modify(ContactForm::clear);
                self.settle(attempt, Outcome::Success);
                tracing::info!(attempt, "contact submission delivered");

                Ok(())
            }
            Err(err) => {
                tracing::error!(attempt, kind = %err.kind(), "contact submission failed: {err}");
                self.settle(attempt, Outcome::Error);

                Err(err)
            }
        }
    }

    fn settle(&self, attempt: u64, settled: Outcome) {
        self.outcome.send_replace(settled);
        self.submitting.store(false, Ordering::Release);

        let outcome = self.outcome.clone();
        let latest = self.attempt.clone();
        let reset_after = self.reset_after;

        tokio::spawn(async move {
            tokio::time::sleep(reset_after).await;

            // A newer attempt owns the outcome now.
            if latest.load(Ordering::Acquire) != attempt {
                return;
            }

            outcome.send_if_modified(|current| {
                if *current != settled {
                    return false;
                }

                *current = Outcome::Idle;
                true
            });
        });
    }
}
