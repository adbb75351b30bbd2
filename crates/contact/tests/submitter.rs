use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use saema_contact::{
    ContactSubmission, MailError, MailPayload, Mailer, Submitter, FAILURE_MESSAGE, RETRY_MESSAGE,
    SUCCESS_MESSAGE,
};

enum Mode {
    Deliver,
    Reject,
    Drop,
}

/// Mailer double that records every payload it receives and what the
/// submitter's in-flight indicator read while the send was outstanding.
struct MockMailer {
    mode: Mode,
    in_flight: Arc<AtomicBool>,
    sent: Mutex<Vec<MailPayload>>,
    observed_in_flight: Mutex<Vec<bool>>,
}

impl MockMailer {
    fn new(mode: Mode, in_flight: Arc<AtomicBool>) -> Self {
        Self {
            mode,
            in_flight,
            sent: Mutex::new(Vec::new()),
            observed_in_flight: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<MailPayload> {
        self.sent.lock().unwrap().clone()
    }

    fn observed_in_flight(&self) -> Vec<bool> {
        self.observed_in_flight.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, payload: &MailPayload) -> Result<(), MailError> {
        self.observed_in_flight
            .lock()
            .unwrap()
            .push(self.in_flight.load(Ordering::SeqCst));
        self.sent.lock().unwrap().push(payload.clone());

        match self.mode {
            Mode::Deliver => Ok(()),
            Mode::Reject => Err(MailError::Rejected("550 mailbox unavailable".to_owned())),
            Mode::Drop => Err(MailError::Transport("connection refused".to_owned())),
        }
    }
}

fn filled_form() -> ContactSubmission {
    ContactSubmission {
        name: "Ola Nordmann".to_owned(),
        email: "ola@nordmann.no".to_owned(),
        company: "Nordmann AS".to_owned(),
        message: "Can you pilot RPA for our claims desk?".to_owned(),
    }
}

#[tokio::test]
async fn successful_send_clears_the_form_and_sets_success_status() {
    let mut submitter = Submitter::new(filled_form());
    let mailer = MockMailer::new(Mode::Deliver, submitter.in_flight());

    assert!(submitter.submit(&mailer).await);

    assert_eq!(submitter.status(), Some(SUCCESS_MESSAGE));
    assert_eq!(*submitter.form(), ContactSubmission::default());
}

#[tokio::test]
async fn rejected_send_retains_fields_and_sets_failure_status() {
    let mut submitter = Submitter::new(filled_form());
    let mailer = MockMailer::new(Mode::Reject, submitter.in_flight());

    assert!(submitter.submit(&mailer).await);

    assert_eq!(submitter.status(), Some(FAILURE_MESSAGE));
    assert_eq!(*submitter.form(), filled_form());
}

#[tokio::test]
async fn dropped_send_retains_fields_and_sets_retry_status() {
    let mut submitter = Submitter::new(filled_form());
    let mailer = MockMailer::new(Mode::Drop, submitter.in_flight());

    assert!(submitter.submit(&mailer).await);

    assert_eq!(submitter.status(), Some(RETRY_MESSAGE));
    assert_eq!(*submitter.form(), filled_form());
}

#[tokio::test]
async fn in_flight_is_raised_exactly_during_the_send() {
    for mode in [Mode::Deliver, Mode::Reject, Mode::Drop] {
        let mut submitter = Submitter::new(filled_form());
        let in_flight = submitter.in_flight();
        let mailer = MockMailer::new(mode, in_flight.clone());

        assert!(!in_flight.load(Ordering::SeqCst));
        submitter.submit(&mailer).await;

        // The flag read true while the mailer held the payload, and is
        // lowered again once the attempt completes, whatever the outcome.
        assert_eq!(mailer.observed_in_flight(), vec![true]);
        assert!(!in_flight.load(Ordering::SeqCst));
    }
}

#[tokio::test]
async fn no_second_send_starts_while_one_is_in_flight() {
    let mut submitter = Submitter::new(filled_form());
    let mailer = MockMailer::new(Mode::Deliver, submitter.in_flight());

    submitter.in_flight().store(true, Ordering::SeqCst);

    assert!(!submitter.submit(&mailer).await);
    assert!(mailer.sent().is_empty());
    assert_eq!(submitter.status(), None);
    assert_eq!(*submitter.form(), filled_form());
}

#[tokio::test]
async fn transmitted_email_field_is_the_address_and_company_space_joined() {
    let mut submitter = Submitter::new(filled_form());
    let mailer = MockMailer::new(Mode::Deliver, submitter.in_flight());
    submitter.submit(&mailer).await;

    assert_eq!(mailer.sent()[0].email, "ola@nordmann.no Nordmann AS");

    // With no company the join still happens, leaving a trailing space. Any
    // change to this wire shape has to show up here as a deliberate edit.
    let mut form = filled_form();
    form.company.clear();
    let mut submitter = Submitter::new(form);
    let mailer = MockMailer::new(Mode::Deliver, submitter.in_flight());
    submitter.submit(&mailer).await;

    assert_eq!(mailer.sent()[0].email, "ola@nordmann.no ");
}

#[tokio::test]
async fn submit_can_run_again_after_a_failed_attempt() {
    let mut submitter = Submitter::new(filled_form());

    let rejecting = MockMailer::new(Mode::Reject, submitter.in_flight());
    assert!(submitter.submit(&rejecting).await);
    assert_eq!(submitter.status(), Some(FAILURE_MESSAGE));

    let delivering = MockMailer::new(Mode::Deliver, submitter.in_flight());
    assert!(submitter.submit(&delivering).await);
    assert_eq!(submitter.status(), Some(SUCCESS_MESSAGE));
    assert_eq!(*submitter.form(), ContactSubmission::default());
}
