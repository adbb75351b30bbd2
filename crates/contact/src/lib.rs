//! Contact submission domain for the SAEMA website.
//!
//! Owns the one piece of client/server interaction the site has: collecting
//! the four contact fields, shaping them into the mail payload, and driving a
//! single send through a [`Mailer`] while reporting a human-readable status.

mod submission;
mod submitter;

pub use submission::{ContactSubmission, MailPayload};
pub use submitter::{
    MailError, Mailer, Submitter, FAILURE_MESSAGE, RETRY_MESSAGE, SUCCESS_MESSAGE,
};
