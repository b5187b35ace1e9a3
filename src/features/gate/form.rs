//! State behind the password form and the choice of which gate view to show.
//! Kept free of Leptos so the submit rules run in host tests.

use super::session::SessionPhase;
use crate::app_lib::AppError;
use crate::features::notify::ToastMessage;
use tracing::error;

/// The one view the gate renders for a given session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    Loading,
    Challenge,
    Protected,
}

impl GateView {
    pub fn resolve(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::Loading => Self::Loading,
            SessionPhase::Unauthenticated => Self::Challenge,
            SessionPhase::Authenticated => Self::Protected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input or a submission already in flight.
    Ignored,
    Granted,
    Denied,
    Failed,
}

impl SubmitOutcome {
    /// Notification shown for this outcome, if any.
    pub fn toast(&self, app_name: &str) -> Option<ToastMessage> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Granted => Some(ToastMessage::new(
                "Access Granted",
                format!("Welcome to {app_name}!"),
            )),
            SubmitOutcome::Denied => Some(ToastMessage::destructive(
                "Access Denied",
                "Incorrect password. Please try again.",
            )),
            SubmitOutcome::Failed => Some(ToastMessage::destructive(
                "Error",
                "An error occurred. Please try again.",
            )),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChallengeForm {
    input: String,
    reveal: bool,
    submitting: bool,
}

impl ChallengeForm {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal
    }

    /// Switches between masked and plain display. Display only.
    pub fn toggle_reveal(&mut self) {
        self.reveal = !self.reveal;
    }

    /// The `type` attribute for the credential input.
    pub fn input_type(&self) -> &'static str {
        if self.reveal { "text" } else { "password" }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.input.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Verifying..."
        } else {
            "Access Application"
        }
    }

    /// Runs `authenticate` with the current input. A rejected credential
    /// clears the input; `submitting` is reset whatever the result.
    pub fn submit<F>(&mut self, authenticate: F) -> SubmitOutcome
    where
        F: FnOnce(&str) -> Result<bool, AppError>,
    {
        if !self.can_submit() {
            return SubmitOutcome::Ignored;
        }

        self.submitting = true;
        let result = authenticate(&self.input);
        self.submitting = false;

        match result {
            Ok(true) => SubmitOutcome::Granted,
            Ok(false) => {
                self.input.clear();
                SubmitOutcome::Denied
            }
            Err(err) => {
                error!(%err, "password submission failed");
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChallengeForm, GateView, SubmitOutcome};
    use crate::app_lib::AppError;
    use crate::features::gate::{
        secret::AccessSecret,
        session::{SESSION_MARKER, Session, SessionPhase},
        storage::MemoryStorage,
    };
    use crate::features::notify::ToastVariant;

    const KEY: &str = "dr_aiva_password_auth";

    fn session(storage: &MemoryStorage) -> Session<MemoryStorage> {
        Session::new(AccessSecret::new("132800"), storage.clone(), KEY)
    }

    fn form_with(input: &str) -> ChallengeForm {
        let mut form = ChallengeForm::default();
        form.set_input(input);
        form
    }

    #[test]
    fn view_follows_the_session_phase() {
        assert_eq!(GateView::resolve(SessionPhase::Loading), GateView::Loading);
        assert_eq!(
            GateView::resolve(SessionPhase::Unauthenticated),
            GateView::Challenge
        );
        assert_eq!(
            GateView::resolve(SessionPhase::Authenticated),
            GateView::Protected
        );
    }

    #[test]
    fn loading_never_shows_protected_content() {
        for storage in [
            MemoryStorage::new(),
            MemoryStorage::with_entry(KEY, SESSION_MARKER),
            MemoryStorage::unavailable(),
        ] {
            let mut session = session(&storage);
            assert_eq!(GateView::resolve(session.phase()), GateView::Loading);

            session.authenticate("132800");
            assert_eq!(GateView::resolve(session.phase()), GateView::Loading);
        }
    }

    #[test]
    fn fresh_session_shows_the_challenge() {
        let mut session = session(&MemoryStorage::new());
        assert_eq!(GateView::resolve(session.hydrate()), GateView::Challenge);
    }

    #[test]
    fn persisted_marker_skips_the_challenge() {
        let mut session = session(&MemoryStorage::with_entry(KEY, SESSION_MARKER));
        assert_eq!(GateView::resolve(session.hydrate()), GateView::Protected);
    }

    #[test]
    fn correct_password_unlocks_and_persists() {
        let storage = MemoryStorage::new();
        let mut session = session(&storage);
        session.hydrate();
        let mut form = form_with("132800");

        let outcome = form.submit(|candidate| Ok(session.authenticate(candidate)));

        assert_eq!(outcome, SubmitOutcome::Granted);
        assert_eq!(GateView::resolve(session.phase()), GateView::Protected);
        assert_eq!(storage.peek(KEY), Some(SESSION_MARKER.to_string()));
        assert_eq!(form.input(), "132800");
        assert!(!form.is_submitting());
    }

    #[test]
    fn wrong_password_clears_input_and_keeps_challenge() {
        let storage = MemoryStorage::new();
        let mut session = session(&storage);
        session.hydrate();
        let mut form = form_with("wrong");

        let outcome = form.submit(|candidate| Ok(session.authenticate(candidate)));

        assert_eq!(outcome, SubmitOutcome::Denied);
        assert_eq!(form.input(), "");
        assert!(!form.can_submit());
        assert_eq!(GateView::resolve(session.phase()), GateView::Challenge);
        assert_eq!(storage.peek(KEY), None);
    }

    #[test]
    fn logout_returns_to_the_challenge() {
        let storage = MemoryStorage::with_entry(KEY, SESSION_MARKER);
        let mut session = session(&storage);
        session.hydrate();

        session.logout();

        assert_eq!(GateView::resolve(session.phase()), GateView::Challenge);
        assert_eq!(storage.peek(KEY), None);
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut form = ChallengeForm::default();
        let mut called = false;

        let outcome = form.submit(|_| {
            called = true;
            Ok(true)
        });

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(!called);
    }

    #[test]
    fn whitespace_input_is_submitted_as_typed() {
        let mut form = form_with("  ");
        let mut seen = String::new();

        form.submit(|candidate| {
            seen = candidate.to_string();
            Ok(false)
        });

        assert_eq!(seen, "  ");
    }

    #[test]
    fn in_flight_submission_blocks_resubmits() {
        let mut form = form_with("132800");
        form.submitting = true;
        let mut called = false;

        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), "Verifying...");
        assert_eq!(
            form.submit(|_| {
                called = true;
                Ok(true)
            }),
            SubmitOutcome::Ignored
        );
        assert!(!called);
    }

    #[test]
    fn submitting_is_cleared_after_each_attempt() {
        let mut form = form_with("132800");

        assert_eq!(form.submit(|_| Ok(true)), SubmitOutcome::Granted);
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), "Access Application");
        assert!(form.can_submit());
    }

    #[test]
    fn unexpected_failure_is_reported_and_resets_submitting() {
        let mut form = form_with("132800");

        let outcome = form.submit(|_| Err(AppError::Session("disposed".to_string())));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!form.is_submitting());
        assert_eq!(form.input(), "132800");
        assert!(form.can_submit());
    }

    #[test]
    fn reveal_toggles_the_input_type() {
        let mut form = ChallengeForm::default();
        assert_eq!(form.input_type(), "password");
        assert!(!form.is_revealed());

        form.toggle_reveal();
        assert_eq!(form.input_type(), "text");

        form.toggle_reveal();
        assert_eq!(form.input_type(), "password");
    }

    #[test]
    fn outcomes_map_to_notifications() {
        assert_eq!(SubmitOutcome::Ignored.toast("Dr. Viva"), None);

        let granted = SubmitOutcome::Granted.toast("Dr. Viva").unwrap();
        assert_eq!(granted.title, "Access Granted");
        assert_eq!(granted.description, "Welcome to Dr. Viva!");
        assert_eq!(granted.variant, ToastVariant::Default);

        let denied = SubmitOutcome::Denied.toast("Dr. Viva").unwrap();
        assert_eq!(denied.title, "Access Denied");
        assert_eq!(denied.variant, ToastVariant::Destructive);

        let failed = SubmitOutcome::Failed.toast("Dr. Viva").unwrap();
        assert_eq!(failed.title, "Error");
        assert_eq!(failed.description, "An error occurred. Please try again.");
        assert_eq!(failed.variant, ToastVariant::Destructive);
    }
}
