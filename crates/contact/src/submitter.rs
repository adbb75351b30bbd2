use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::{ContactSubmission, MailPayload};

/// Status shown after a confirmed delivery.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
/// Status shown when the mail endpoint rejects the message.
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
/// Status shown when the send never reaches the endpoint.
pub const RETRY_MESSAGE: &str = "Something went wrong, please retry later";

/// Failure classes of a mail send, per the taxonomy the status strings map to.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The endpoint answered, but not with success.
    #[error("mail endpoint rejected the message: {0}")]
    Rejected(String),
    /// The endpoint was never reached, or the message could not be built.
    #[error("mail transport failed: {0}")]
    Transport(String),
}

/// The mail-sending endpoint boundary. The service behind it is an opaque
/// collaborator; implementations only report which failure class occurred.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, payload: &MailPayload) -> Result<(), MailError>;
}

/// Drives one contact submission through a [`Mailer`] and surfaces the
/// resulting status string.
///
/// The submission in flight is exclusively owned by the submitter for the
/// duration of the call. A boolean in-flight flag gates re-entry, so no
/// second send can start while one is outstanding.
pub struct Submitter {
    form: ContactSubmission,
    status: Option<&'static str>,
    in_flight: Arc<AtomicBool>,
}

impl Submitter {
    pub fn new(form: ContactSubmission) -> Self {
        Self {
            form,
            status: None,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn form(&self) -> &ContactSubmission {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactSubmission {
        &mut self.form
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    /// Shared handle to the in-flight indicator, true exactly while a send
    /// is outstanding.
    pub fn in_flight(&self) -> Arc<AtomicBool> {
        self.in_flight.clone()
    }

    /// Consume the submitter, keeping whatever the form holds after the
    /// attempt (empty on success, the entered values otherwise).
    pub fn into_form(self) -> ContactSubmission {
        self.form
    }

    /// Submit the form once. Returns `false` without touching anything when
    /// a send is already in flight.
    ///
    /// On success the status becomes [`SUCCESS_MESSAGE`] and the fields are
    /// cleared. On rejection or transport failure the entered values are
    /// retained and the status becomes [`FAILURE_MESSAGE`] or
    /// [`RETRY_MESSAGE`]. The in-flight flag is lowered on every path.
    pub async fn submit(&mut self, mailer: &dyn Mailer) -> bool {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return false;
        }

        let payload = self.form.to_payload();
        let result = mailer.send(&payload).await;

        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => {
                self.form.clear();
                self.status = Some(SUCCESS_MESSAGE);
            }
            Err(err @ MailError::Rejected(_)) => {
                tracing::error!("{err}");
                self.status = Some(FAILURE_MESSAGE);
            }
            Err(err @ MailError::Transport(_)) => {
                tracing::error!("{err}");
                self.status = Some(RETRY_MESSAGE);
            }
        }

        true
    }
}
