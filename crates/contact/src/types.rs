use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Observable state of a contact form.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl Outcome {
    /// Whether the last attempt has settled and is waiting for the auto-reset.
    pub fn is_settled(&self) -> bool {
        matches!(self, Outcome::Success | Outcome::Error)
    }
}

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Deserialize, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Invalid,
    Busy,
    TransportFailure,
    RelayRejection,
}
