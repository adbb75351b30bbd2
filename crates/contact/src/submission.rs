use serde::{Deserialize, Serialize};
use validator::Validate;

/// One visitor's attempt to contact the business.
///
/// Created empty when the form mounts, mutated field by field, serialized
/// into a [`MailPayload`] on submit. Cleared on confirmed success, retained
/// on failure so the visitor can retry.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

/// Request body sent to the mail endpoint.
///
/// The `email` field carries the address and the company name joined with a
/// single space; the optional company has no field of its own on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Shape the submission into the wire payload.
    pub fn to_payload(&self) -> MailPayload {
        MailPayload {
            name: self.name.clone(),
            email: format!("{} {}", self.email, self.company),
            message: self.message.clone(),
        }
    }

    /// Reset all four fields back to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
