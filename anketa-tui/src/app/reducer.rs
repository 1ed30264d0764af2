//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`. The reducer has no side effects: the gate
//! check and the mail hand-off run in `services.rs`, which feeds their
//! outcome back in as actions.

use libanketa::date_picker::{parse_date, DatePicker};
use libanketa::form::{FormEdit, TextQuestion};
use libanketa::formatter::{EditOutcome, TextEdit};
use libanketa::mail::ComposeResult;

use super::actions::Action;
use super::keymap::map_key;
use super::state::{AppState, FocusItem, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => match map_key(&state, &key) {
            Some(action) => reduce(state, action),
            None => state,
        },
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::FocusNext => {
            let index = (state.focus + 1) % FocusItem::ORDER.len();
            focus_on(state, index)
        }

        Action::FocusPrev => {
            let len = FocusItem::ORDER.len();
            let index = (state.focus + len - 1) % len;
            focus_on(state, index)
        }

        // === Text editing ===
        Action::CursorLeft => AppState {
            cursor: state.cursor.saturating_sub(1),
            ..state
        },

        Action::CursorRight => {
            let len = focused_len(&state);
            AppState {
                cursor: (state.cursor + 1).min(len),
                ..state
            }
        }

        Action::CursorHome => AppState { cursor: 0, ..state },

        Action::CursorEnd => {
            let len = focused_len(&state);
            AppState { cursor: len, ..state }
        }

        Action::InsertText(text) => {
            let at = state.cursor;
            edit_focused(state, TextEdit::insert(at, text))
        }

        Action::DeleteBackward => {
            if state.cursor == 0 {
                return state;
            }
            let at = state.cursor;
            edit_focused(state, TextEdit::delete(at - 1..at))
        }

        Action::DeleteForward => {
            let at = state.cursor;
            if at >= focused_len(&state) {
                return state;
            }
            edit_focused(state, TextEdit::delete(at..at + 1))
        }

        // === Checkboxes ===
        Action::Toggle => {
            let edit = match state.focused() {
                FocusItem::Amenity(amenity) => FormEdit::ToggleAmenity(amenity),
                FocusItem::Consent(consent) => FormEdit::ToggleConsent(consent),
                _ => return state,
            };
            AppState {
                form: state.form.apply(edit),
                ..state
            }
        }

        // === Date picker ===
        Action::OpenDatePicker => {
            if state.focused_field() != Some(TextQuestion::DateOfBirth) {
                return state;
            }
            let picker = match parse_date(&state.form.date_of_birth) {
                Some(current) => DatePicker::with_selection(state.today, state.bounds, current),
                None => DatePicker::new(state.today, state.bounds),
            };
            AppState {
                picker: Some(picker),
                ..state
            }
        }

        Action::PickerStep(unit, delta) => match state.picker.as_ref().map(|p| p.step(unit, delta)) {
            Some(picker) => {
                AppState {
                    form: state.form.apply(FormEdit::SetDate(picker.selected())),
                    picker: Some(picker),
                    ..state
                }
            }
            None => state,
        },

        Action::CloseDatePicker => AppState {
            picker: None,
            ..state
        },

        // === Submission ===
        Action::SubmitRequested => {
            // Gate and mail availability are checked in services.rs
            state
        }

        Action::ComposeOpened(message) => AppState {
            compose: Some(message),
            status: StatusBarState::default(),
            ..state
        },

        Action::ComposeConfirmed => {
            // Hand-off happens in services.rs
            state
        }

        Action::ComposeFinished(result) => {
            let message = match result {
                ComposeResult::Launched => Some(state.locale.mail_opened().to_string()),
                ComposeResult::Cancelled | ComposeResult::Failed => None,
            };
            AppState {
                compose: None,
                last_compose: Some(result),
                status: StatusBarState { message },
                ..state
            }
        }

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

fn focus_on(state: AppState, index: usize) -> AppState {
    let next = AppState {
        focus: index,
        ..state
    };
    let cursor = focused_len(&next);
    AppState { cursor, ..next }
}

/// Length in characters of the focused text field (0 for checkboxes)
fn focused_len(state: &AppState) -> usize {
    state
        .focused_field()
        .map(|q| state.form.text(q).chars().count())
        .unwrap_or(0)
}

fn edit_focused(state: AppState, edit: TextEdit) -> AppState {
    let Some(question) = state.focused_field() else {
        return state;
    };

    let (form, outcome) = state.form.clone().type_text(question, &edit);
    match outcome {
        EditOutcome::Accepted { cursor, dropped, .. } => {
            if dropped > 0 {
                tracing::trace!(?question, dropped, "Dropped characters not allowed in field");
            }
            AppState {
                form,
                cursor,
                ..state
            }
        }
        EditOutcome::Rejected => state,
    }
}
