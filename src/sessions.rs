use std::{collections::HashMap, sync::Arc, time::Duration};

use portfolio_contact::{ContactSession, Relay};
use tokio::{sync::Mutex, time::Instant};

struct Entry {
    session: ContactSession,
    last_seen: Instant,
}

/// Contact form state for every visitor currently on the site.
#[derive(Clone)]
pub struct ContactSessions {
    relay: Arc<dyn Relay>,
    reset_after: Duration,
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl ContactSessions {
    pub fn new(relay: Arc<dyn Relay>, reset_after: Duration, ttl: Duration) -> Self {
        Self {
            relay,
            reset_after,
            ttl,
            entries: Arc::default(),
        }
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    pub async fn get(&self, visitor: &str) -> Option<ContactSession> {
        let mut entries = self.entries.lock().await;
        let entry = entries.get_mut(visitor)?;
        entry.last_seen = Instant::now();

        Some(entry.session.clone())
    }

    pub async fn get_or_create(&self, visitor: &str) -> ContactSession {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        let ttl = self.ttl;

        let before = entries.len();
        entries.retain(|_, entry| {
            entry.session.is_submitting() || now.duration_since(entry.last_seen) < ttl
        });
        let evicted = before - entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, "dropped idle contact sessions");
        }

        let entry = entries.entry(visitor.to_owned()).or_insert_with(|| Entry {
            session: ContactSession::with_reset_after(self.relay.clone(), self.reset_after),
            last_seen: now,
        });
        entry.last_seen = now;

        entry.session.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use portfolio_contact::{RelayResponse, SubmissionRequest};

    struct Accepting;

    #[async_trait]
    impl Relay for Accepting {
        async fn send(
            &self,
            _request: &SubmissionRequest,
        ) -> portfolio_contact::Result<RelayResponse> {
            Ok(RelayResponse::accepted())
        }
    }

    fn sessions() -> ContactSessions {
        ContactSessions::new(
            Arc::new(Accepting),
            Duration::from_secs(3),
            Duration::from_secs(60),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_visitor_shares_state() {
        let sessions = sessions();

        let first = sessions.get_or_create("a").await;
        first.set_field(portfolio_contact::Field::Name, "Ada");

        let again = sessions.get_or_create("a").await;
        assert_eq!(again.form().name, "Ada");

        let other = sessions.get_or_create("b").await;
        assert!(other.form().is_empty());
        assert_eq!(sessions.len().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_are_evicted() {
        let sessions = sessions();
        sessions.get_or_create("a").await;

        tokio::time::advance(Duration::from_secs(61)).await;
        sessions.get_or_create("b").await;

        assert!(sessions.get("a").await.is_none());
        assert!(sessions.get("b").await.is_some());
    }
}
