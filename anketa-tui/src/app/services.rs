//! Side effects of the event loop
//!
//! The reducer never touches the outside world. After each action the event
//! loop hands it to [`ServiceHandle::perform`], which runs the submission gate
//! and the mail hand-off and feeds their outcome back through the reducer.
//!
//! # Example
//!
//! ```no_run
//! use anketa_tui::app::{reduce, Action, AppState, ServiceHandle};
//! use libanketa::config::MailConfig;
//! use libanketa::mail::RecordingComposer;
//!
//! let services = ServiceHandle::new(RecordingComposer::new(), MailConfig::default());
//! let state = reduce(AppState::default(), Action::SubmitRequested);
//! let state = services.perform(state, &Action::SubmitRequested);
//! // An empty form never opens the compose sheet
//! assert!(state.compose.is_none());
//! ```

use libanketa::config::MailConfig;
use libanketa::gate;
use libanketa::mail::{ComposeResult, MailComposer};
use libanketa::message::compose_message;

use super::actions::Action;
use super::reducer::reduce;
use super::state::AppState;

/// Mail facility plus the settings needed to address a message
pub struct ServiceHandle<C: MailComposer> {
    composer: C,
    mail: MailConfig,
}

impl<C: MailComposer> ServiceHandle<C> {
    pub fn new(composer: C, mail: MailConfig) -> Self {
        Self { composer, mail }
    }

    pub fn composer(&self) -> &C {
        &self.composer
    }

    pub fn into_composer(self) -> C {
        self.composer
    }

    /// Run the side effects `action` asks for and return the resulting state
    pub fn perform(&self, state: AppState, action: &Action) -> AppState {
        match action {
            Action::SubmitRequested => self.submit(state),
            Action::ComposeConfirmed => self.hand_off(state),
            _ => state,
        }
    }

    /// Open the compose sheet if the gate passes and mail can be sent;
    /// otherwise nothing visible happens
    fn submit(&self, state: AppState) -> AppState {
        if state.compose.is_some() {
            return state;
        }

        let missing = gate::missing(&state.form);
        if !missing.is_empty() {
            tracing::debug!(?missing, "Submission blocked by unanswered questions");
            return state;
        }

        if !self.composer.can_send() {
            tracing::warn!("Submission blocked: no mail client available");
            return state;
        }

        let message = compose_message(&state.form, &self.mail, state.locale);
        tracing::info!(recipients = message.recipients.len(), "Opening compose sheet");
        reduce(state, Action::ComposeOpened(message))
    }

    /// Give the sheet's message to the mail client and dismiss the sheet
    fn hand_off(&self, state: AppState) -> AppState {
        let Some(message) = state.compose.clone() else {
            return state;
        };

        let result = match self.composer.compose(&message) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "Mail hand-off failed");
                ComposeResult::Failed
            }
        };

        reduce(state, Action::ComposeFinished(result))
    }
}
