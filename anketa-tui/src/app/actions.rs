//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::KeyEvent;
use libanketa::date_picker::DateUnit;
use libanketa::mail::ComposeResult;
use libanketa::message::MailMessage;

/// Actions that trigger state transitions
///
/// Actions describe what happened; the reducer (see `reducer.rs`) decides
/// what that means for the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    Quit,
    ShowHelp,
    HideHelp,
    FocusNext,
    FocusPrev,

    // === Text editing (focused field) ===
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Text typed at the cursor
    InsertText(String),
    DeleteBackward,
    DeleteForward,

    // === Checkboxes ===
    /// Flip the focused amenity or consent
    Toggle,

    // === Date picker ===
    OpenDatePicker,
    PickerStep(DateUnit, i32),
    CloseDatePicker,

    // === Submission ===
    /// Submit pressed; the gate is checked outside the reducer
    SubmitRequested,

    /// Gate passed, show the compose sheet
    ComposeOpened(MailMessage),

    /// Hand the sheet's message to the mail client
    ComposeConfirmed,

    /// Compose session over; dismiss the sheet
    ComposeFinished(ComposeResult),

    // === Status Bar ===
    SetStatus(String),
    ClearStatus,
}
