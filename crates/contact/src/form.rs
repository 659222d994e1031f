use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Field;

/// In-memory state of the four contact fields.
#[derive(Validate, Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(email)]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub subject: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    /// Snapshot the form into a request, refusing empty or malformed fields.
    pub fn to_request(&self) -> crate::Result<SubmissionRequest> {
        self.validate()?;

        Ok(SubmissionRequest {
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            subject: self.subject.to_owned(),
            message: self.message.to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SubmissionRequest {
    pub fn payload<'a>(&'a self, access_key: &'a str) -> RelayPayload<'a> {
        RelayPayload {
            access_key,
            botcheck: "",
            name: &self.name,
            email: &self.email,
            subject: &self.subject,
            message: &self.message,
            from_name: &self.name,
            replyto: &self.email,
        }
    }
}

/// Body posted to the relay. `botcheck` is a honeypot and always empty.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RelayPayload<'a> {
    pub access_key: &'a str,
    pub botcheck: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub from_name: &'a str,
    pub replyto: &'a str,
}
