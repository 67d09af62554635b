use regex::Regex;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

pub const SUBMIT_LABEL: &str = "Join Now";
pub const SUBMITTING_LABEL: &str = "Joining...";
pub const EMAIL_ERROR: &str = "Please enter a valid email address.";
pub const ACK_MESSAGE: &str = "Welcome to HandyHub! We will contact you shortly.";

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Shape check only: something, an @, something, a dot, something.
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub error_text: String,
    pub submit_label: String,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            open: false,
            error_text: String::new(),
            submit_label: SUBMIT_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Accepted,
}

/// The signup dialog. Submitting a valid email schedules a deferred
/// acknowledgment task; the state is shared with that task, and the task
/// handle is retained so closing the modal cancels it before it can touch
/// reset state.
pub struct SignupModal {
    state: Arc<Mutex<ModalState>>,
    ack_delay: Duration,
    events: mpsc::UnboundedSender<String>,
    pending_ack: Option<JoinHandle<()>>,
}

impl SignupModal {
    /// Returns the modal and the receiver on which acknowledgment messages
    /// arrive once the deferred task fires.
    pub fn new(ack_delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let modal = Self {
            state: Arc::new(Mutex::new(ModalState::default())),
            ack_delay,
            events,
            pending_ack: None,
        };
        (modal, receiver)
    }

    pub async fn open(&self) {
        self.state.lock().await.open = true;
    }

    /// Closes the dialog and resets the form. Any acknowledgment still
    /// pending is aborted so it cannot fire against the reset state.
    pub async fn close(&mut self) {
        if let Some(pending) = self.pending_ack.take() {
            pending.abort();
        }
        let mut state = self.state.lock().await;
        state.open = false;
        state.error_text.clear();
        state.submit_label = SUBMIT_LABEL.to_string();
    }

    /// Validates the email shape. A rejected submit sets the inline error
    /// and schedules nothing. An accepted submit switches the button label
    /// and schedules the deferred acknowledgment, which closes the modal
    /// and restores the label when it fires.
    pub async fn submit(&mut self, email: &str) -> SubmitOutcome {
        {
            let mut state = self.state.lock().await;
            if !email_is_valid(email) {
                state.error_text = EMAIL_ERROR.to_string();
                return SubmitOutcome::Rejected;
            }
            state.error_text.clear();
            state.submit_label = SUBMITTING_LABEL.to_string();
        }

        tracing::debug!("signup accepted, acknowledgment in {:?}", self.ack_delay);

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let delay = self.ack_delay;
        self.pending_ack = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().await;
            state.open = false;
            state.error_text.clear();
            state.submit_label = SUBMIT_LABEL.to_string();
            let _ = events.send(ACK_MESSAGE.to_string());
        }));

        SubmitOutcome::Accepted
    }

    pub async fn state(&self) -> ModalState {
        self.state.lock().await.clone()
    }

    pub fn has_pending_ack(&self) -> bool {
        self.pending_ack
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape_accepts_plain_addresses() {
        assert!(email_is_valid("user@example.com"));
        assert!(email_is_valid("first.last@sub.domain.org"));
    }

    #[test]
    fn test_email_shape_rejects_malformed_addresses() {
        assert!(!email_is_valid("not-an-email"));
        assert!(!email_is_valid("user@nodot"));
        assert!(!email_is_valid("user name@example.com"));
        assert!(!email_is_valid("@example.com"));
        assert!(!email_is_valid(""));
    }

    #[tokio::test]
    async fn test_open_and_close_reset_form() {
        let (mut modal, _events) = SignupModal::new(Duration::from_millis(10));

        modal.open().await;
        assert!(modal.state().await.open);

        modal.submit("bad").await;
        assert_eq!(modal.state().await.error_text, EMAIL_ERROR);

        modal.close().await;
        let state = modal.state().await;
        assert!(!state.open);
        assert!(state.error_text.is_empty());
        assert_eq!(state.submit_label, SUBMIT_LABEL);
    }

    #[tokio::test]
    async fn test_rejected_submit_schedules_nothing() {
        let (mut modal, _events) = SignupModal::new(Duration::from_millis(10));
        modal.open().await;

        let outcome = modal.submit("not-an-email").await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(!modal.has_pending_ack());
        let state = modal.state().await;
        assert!(state.open);
        assert_eq!(state.error_text, EMAIL_ERROR);
        assert_eq!(state.submit_label, SUBMIT_LABEL);
    }

    #[tokio::test]
    async fn test_accepted_submit_switches_label_and_schedules_ack() {
        let (mut modal, mut events) = SignupModal::new(Duration::from_millis(20));
        modal.open().await;

        let outcome = modal.submit("user@example.com").await;

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(modal.has_pending_ack());
        assert_eq!(modal.state().await.submit_label, SUBMITTING_LABEL);

        let message = events.recv().await.unwrap();
        assert_eq!(message, ACK_MESSAGE);

        let state = modal.state().await;
        assert!(!state.open);
        assert_eq!(state.submit_label, SUBMIT_LABEL);
    }

    #[tokio::test]
    async fn test_close_cancels_pending_ack() {
        let (mut modal, mut events) = SignupModal::new(Duration::from_millis(20));
        modal.open().await;
        modal.submit("user@example.com").await;
        assert!(modal.has_pending_ack());

        modal.close().await;
        assert!(!modal.has_pending_ack());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(events.try_recv().is_err());
        let state = modal.state().await;
        assert!(!state.open);
        assert_eq!(state.submit_label, SUBMIT_LABEL);
    }
}
