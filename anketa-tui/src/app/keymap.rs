//! Keybindings
//!
//! Maps a key press to the action it stands for in the current state.
//! Overlays capture keys first, then global shortcuts, then the focused item.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libanketa::date_picker::DateUnit;
use libanketa::formatter::FieldKind;
use libanketa::mail::ComposeResult;

use super::actions::Action;
use super::state::{AppState, FocusItem};

/// Translate `key` into an action, or `None` if it means nothing here
pub fn map_key(state: &AppState, key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings (work everywhere)
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Some(Action::Quit),
        KeyCode::F(1) => {
            return Some(if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            });
        }
        _ => {}
    }

    if state.help_visible {
        return match key.code {
            KeyCode::Esc => Some(Action::HideHelp),
            _ => None,
        };
    }

    if state.compose.is_some() {
        return match key.code {
            KeyCode::Enter => Some(Action::ComposeConfirmed),
            KeyCode::Esc => Some(Action::ComposeFinished(ComposeResult::Cancelled)),
            _ => None,
        };
    }

    if state.picker.is_some() {
        return map_picker_key(key);
    }

    match key.code {
        KeyCode::Char('s') if ctrl => return Some(Action::SubmitRequested),
        KeyCode::Tab | KeyCode::Down => return Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(Action::FocusPrev),
        _ => {}
    }

    match state.focused() {
        FocusItem::Field(question) => map_field_key(question.kind(), key),
        FocusItem::Amenity(_) | FocusItem::Consent(_) => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
            _ => None,
        },
        FocusItem::Submit => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::SubmitRequested),
            _ => None,
        },
    }
}

fn map_picker_key(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up => Some(Action::PickerStep(DateUnit::Day, 1)),
        KeyCode::Down => Some(Action::PickerStep(DateUnit::Day, -1)),
        KeyCode::Right => Some(Action::PickerStep(DateUnit::Month, 1)),
        KeyCode::Left => Some(Action::PickerStep(DateUnit::Month, -1)),
        KeyCode::PageUp => Some(Action::PickerStep(DateUnit::Year, 1)),
        KeyCode::PageDown => Some(Action::PickerStep(DateUnit::Year, -1)),
        KeyCode::Enter | KeyCode::Esc => Some(Action::CloseDatePicker),
        _ => None,
    }
}

fn map_field_key(kind: FieldKind, key: &KeyEvent) -> Option<Action> {
    if !kind.accepts_typing() {
        return match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::OpenDatePicker),
            // Typed characters reach the formatter, which refuses them
            KeyCode::Char(c) if plain(key) => Some(Action::InsertText(c.to_string())),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::Backspace => Some(Action::DeleteBackward),
        KeyCode::Delete => Some(Action::DeleteForward),
        KeyCode::Enter => Some(Action::FocusNext),
        KeyCode::Char(c) if plain(key) => Some(Action::InsertText(c.to_string())),
        _ => None,
    }
}

/// A character key without Ctrl or Alt
fn plain(key: &KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
