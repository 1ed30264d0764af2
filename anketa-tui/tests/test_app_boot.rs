//! Test application initialization and boot sequence
//!
//! Verifies that the app initializes with correct defaults
//! based on environment variables.

use anketa_tui::app::{AppState, FocusItem, UiConfig};
use libanketa::form::TextQuestion;
use libanketa::Locale;
use serial_test::serial;

#[test]
fn test_app_starts_on_first_field() {
    let state = AppState::default();

    assert_eq!(state.focused(), FocusItem::Field(TextQuestion::FullName));
    assert_eq!(state.cursor, 0);
    assert!(!state.should_quit);
}

#[test]
fn test_no_overlay_on_boot() {
    let state = AppState::default();

    assert!(!state.help_visible);
    assert!(state.picker.is_none());
    assert!(state.compose.is_none());
    assert!(!state.overlay_open());
}

#[test]
fn test_form_starts_empty() {
    let state = AppState::default();

    assert_eq!(state.form, libanketa::FormAnswer::new());
    assert!(!libanketa::can_submit(&state.form));
    assert!(state.status.message.is_none());
}

#[test]
fn test_default_locale_is_russian() {
    assert_eq!(AppState::default().locale, Locale::Ru);
}

#[test]
#[serial]
fn test_no_color_disables_colors() {
    std::env::set_var("NO_COLOR", "1");
    let config = UiConfig::default();
    std::env::remove_var("NO_COLOR");

    assert!(!config.colors_enabled);
    assert!(!config.unicode_enabled);
}

#[test]
#[serial]
fn test_colors_enabled_by_default() {
    std::env::remove_var("NO_COLOR");
    std::env::remove_var("ANKETA_TUI_NO_COLOR");

    assert!(UiConfig::default().colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("ANKETA_TUI_TICK_MS", "100");
    let config = UiConfig::default();
    std::env::remove_var("ANKETA_TUI_TICK_MS");

    assert_eq!(config.tick_rate_ms, 100);

    std::env::set_var("ANKETA_TUI_TICK_MS", "fast");
    let config = UiConfig::default();
    std::env::remove_var("ANKETA_TUI_TICK_MS");

    assert_eq!(config.tick_rate_ms, 250);
}
