use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::{SubmissionRequest, SubmitError};

pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A decoded body only counts as delivered when the relay reports success.
    pub fn into_result(self) -> crate::Result<Self> {
        if self.success {
            return Ok(self);
        }

        Err(SubmitError::Rejected {
            message: self.message.unwrap_or_default(),
        })
    }
}

/// Outbound hop of a contact submission.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn send(&self, request: &SubmissionRequest) -> crate::Result<RelayResponse>;
}

#[derive(Clone, Debug)]
pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, access_key)
    }

    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Relay for HttpRelay {
    async fn send(&self, request: &SubmissionRequest) -> crate::Result<RelayResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(&request.payload(&self.access_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<RelayResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_rejected_body_maps_to_relay_rejection() {
        let response: RelayResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid access key"}"#).unwrap();

        let err = response.into_result().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RelayRejection);
        assert!(err.to_string().contains("Invalid access key"));
    }

    #[test]
    fn test_message_is_optional() {
        let response: RelayResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();

        assert_eq!(response, RelayResponse::accepted());
        assert!(response.into_result().is_ok());
    }
}
