//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is mapped to the right actions in each
//! context and that the reducer applies them.

use anketa_tui::app::{map_key, reduce, Action, AppState, FocusItem};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libanketa::date_picker::{AgeBounds, DateUnit};
use libanketa::form::{Amenity, TextQuestion};
use libanketa::mail::ComposeResult;
use libanketa::{Locale, MailMessage};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    key_event(code, KeyModifiers::NONE)
}

fn state() -> AppState {
    AppState::new(
        Locale::Ru,
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        AgeBounds::default(),
    )
}

fn focus(state: AppState, item: FocusItem) -> AppState {
    let index = FocusItem::ORDER.iter().position(|i| *i == item).unwrap();
    (0..index).fold(state, |s, _| reduce(s, Action::FocusNext))
}

#[test]
fn test_ctrl_q_and_ctrl_c_quit() {
    for c in ['q', 'c'] {
        let new_state = reduce(state(), Action::Key(key_event(KeyCode::Char(c), KeyModifiers::CONTROL)));
        assert!(new_state.should_quit);
    }
}

#[test]
fn test_plain_q_is_typed_not_quit() {
    let state = reduce(state(), Action::Key(key(KeyCode::Char('q'))));
    assert!(!state.should_quit);
    assert_eq!(state.form.full_name, "q");
}

#[test]
fn test_f1_toggles_help_and_esc_closes_it() {
    let state = reduce(state(), Action::Key(key(KeyCode::F(1))));
    assert!(state.help_visible);

    let state = reduce(state, Action::Key(key(KeyCode::F(1))));
    assert!(!state.help_visible);

    let state = reduce(state, Action::Key(key(KeyCode::F(1))));
    let state = reduce(state, Action::Key(key(KeyCode::Esc)));
    assert!(!state.help_visible);
}

#[test]
fn test_help_swallows_typing() {
    let state = reduce(state(), Action::Key(key(KeyCode::F(1))));
    let state = reduce(state, Action::Key(key(KeyCode::Char('a'))));
    assert_eq!(state.form.full_name, "");
}

#[test]
fn test_tab_and_backtab_move_focus() {
    let state = reduce(state(), Action::Key(key(KeyCode::Tab)));
    assert_eq!(state.focused(), FocusItem::Field(TextQuestion::DateOfBirth));

    let state = reduce(state, Action::Key(key(KeyCode::Down)));
    assert_eq!(state.focused(), FocusItem::Field(TextQuestion::PhoneNumber));

    let state = reduce(state, Action::Key(key(KeyCode::BackTab)));
    let state = reduce(state, Action::Key(key(KeyCode::Up)));
    assert_eq!(state.focused(), FocusItem::Field(TextQuestion::FullName));
}

#[test]
fn test_enter_on_text_field_moves_to_next_item() {
    let state = reduce(state(), Action::Key(key(KeyCode::Enter)));
    assert_eq!(state.focus, 1);
}

#[test]
fn test_space_toggles_focused_amenity() {
    let state = focus(state(), FocusItem::Amenity(Amenity::Spa));
    let state = reduce(state, Action::Key(key(KeyCode::Char(' '))));
    assert!(state.form.amenities.spa);

    let state = reduce(state, Action::Key(key(KeyCode::Enter)));
    assert!(!state.form.amenities.spa);
}

#[test]
fn test_ctrl_s_requests_submission_anywhere() {
    let state = focus(state(), FocusItem::Amenity(Amenity::Surfing));
    let action = map_key(&state, &key_event(KeyCode::Char('s'), KeyModifiers::CONTROL));
    assert_eq!(action, Some(Action::SubmitRequested));
}

#[test]
fn test_enter_on_submit_button_requests_submission() {
    let state = focus(state(), FocusItem::Submit);
    assert_eq!(map_key(&state, &key(KeyCode::Enter)), Some(Action::SubmitRequested));
}

#[test]
fn test_date_field_opens_picker_and_refuses_typing() {
    let state = focus(state(), FocusItem::Field(TextQuestion::DateOfBirth));

    let typed = reduce(state.clone(), Action::Key(key(KeyCode::Char('1'))));
    assert_eq!(typed.form.date_of_birth, "");

    let state = reduce(state, Action::Key(key(KeyCode::Enter)));
    assert!(state.picker.is_some());
}

#[test]
fn test_picker_keys_step_date() {
    let state = focus(state(), FocusItem::Field(TextQuestion::DateOfBirth));
    let state = reduce(state, Action::Key(key(KeyCode::Enter)));

    assert_eq!(
        map_key(&state, &key(KeyCode::PageDown)),
        Some(Action::PickerStep(DateUnit::Year, -1))
    );

    let state = reduce(state, Action::Key(key(KeyCode::PageDown)));
    assert_eq!(state.form.date_of_birth, "19.10.2017");

    let state = reduce(state, Action::Key(key(KeyCode::Left)));
    assert_eq!(state.form.date_of_birth, "19.09.2017");

    let state = reduce(state, Action::Key(key(KeyCode::Down)));
    assert_eq!(state.form.date_of_birth, "18.09.2017");

    // Focus keys are captured by the picker
    assert_eq!(state.focused(), FocusItem::Field(TextQuestion::DateOfBirth));

    let state = reduce(state, Action::Key(key(KeyCode::Esc)));
    assert!(state.picker.is_none());
    assert_eq!(state.form.date_of_birth, "18.09.2017");
}

#[test]
fn test_picker_does_not_pass_latest_date() {
    let state = focus(state(), FocusItem::Field(TextQuestion::DateOfBirth));
    let state = reduce(state, Action::Key(key(KeyCode::Enter)));
    let state = reduce(state, Action::Key(key(KeyCode::PageUp)));
    assert_eq!(state.form.date_of_birth, "19.10.2018");
}

#[test]
fn test_compose_sheet_keys() {
    let mut state = state();
    state.compose = Some(MailMessage {
        recipients: vec!["desk@park.example".to_string()],
        subject: "s".to_string(),
        body: "b".to_string(),
    });

    assert_eq!(map_key(&state, &key(KeyCode::Enter)), Some(Action::ComposeConfirmed));
    assert_eq!(
        map_key(&state, &key(KeyCode::Esc)),
        Some(Action::ComposeFinished(ComposeResult::Cancelled))
    );
    assert_eq!(map_key(&state, &key(KeyCode::Char('x'))), None);

    let state = reduce(state, Action::Key(key(KeyCode::Esc)));
    assert!(state.compose.is_none());
}

#[test]
fn test_ctrl_letters_are_not_typed() {
    let state = reduce(state(), Action::Key(key_event(KeyCode::Char('a'), KeyModifiers::CONTROL)));
    assert_eq!(state.form.full_name, "");
}
