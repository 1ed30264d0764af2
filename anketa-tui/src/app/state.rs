//! Application state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`).

use chrono::NaiveDate;
use libanketa::date_picker::{AgeBounds, DatePicker};
use libanketa::form::{Amenity, Consent, FormAnswer, TextQuestion};
use libanketa::mail::ComposeResult;
use libanketa::message::MailMessage;
use libanketa::Locale;

/// Focusable items of the form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusItem {
    Field(TextQuestion),
    Amenity(Amenity),
    Consent(Consent),
    Submit,
}

impl FocusItem {
    /// Screen order; the child count sits below the amenities
    pub const ORDER: [FocusItem; 15] = [
        FocusItem::Field(TextQuestion::FullName),
        FocusItem::Field(TextQuestion::DateOfBirth),
        FocusItem::Field(TextQuestion::PhoneNumber),
        FocusItem::Field(TextQuestion::Email),
        FocusItem::Field(TextQuestion::Guardian),
        FocusItem::Amenity(Amenity::WaterSlides),
        FocusItem::Amenity(Amenity::IndoorPool),
        FocusItem::Amenity(Amenity::ChildrensArea),
        FocusItem::Amenity(Amenity::FoodCourt),
        FocusItem::Amenity(Amenity::Spa),
        FocusItem::Amenity(Amenity::Surfing),
        FocusItem::Field(TextQuestion::ChildCount),
        FocusItem::Consent(Consent::BehaviourRules),
        FocusItem::Consent(Consent::DataProcessing),
        FocusItem::Submit,
    ];
}

/// Root application state
///
/// This is the single source of truth for the screen. State transitions are
/// pure functions that return new state values.
#[derive(Debug, Clone)]
pub struct AppState {
    pub should_quit: bool,

    pub help_visible: bool,

    /// Index into [`FocusItem::ORDER`]
    pub focus: usize,

    /// Character cursor within the focused text field
    pub cursor: usize,

    pub form: FormAnswer,

    /// Open date picker, if any
    pub picker: Option<DatePicker>,

    /// Open compose sheet, if any
    pub compose: Option<MailMessage>,

    /// How the last compose session ended
    pub last_compose: Option<ComposeResult>,

    pub status: StatusBarState,

    pub locale: Locale,

    /// Date the picker window is computed from
    pub today: NaiveDate,

    pub bounds: AgeBounds,

    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use emoji and box symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("ANKETA_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled;

        let tick_rate_ms = std::env::var("ANKETA_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(250);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Locale::default(), chrono::Local::now().date_naive(), AgeBounds::default())
    }
}

impl AppState {
    pub fn new(locale: Locale, today: NaiveDate, bounds: AgeBounds) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            focus: 0,
            cursor: 0,
            form: FormAnswer::new(),
            picker: None,
            compose: None,
            last_compose: None,
            status: StatusBarState::default(),
            locale,
            today,
            bounds,
            config: UiConfig::default(),
        }
    }

    pub fn focused(&self) -> FocusItem {
        FocusItem::ORDER[self.focus % FocusItem::ORDER.len()]
    }

    /// The focused text question, if a text field has focus
    pub fn focused_field(&self) -> Option<TextQuestion> {
        match self.focused() {
            FocusItem::Field(question) => Some(question),
            _ => None,
        }
    }

    /// Whether an overlay is capturing keys
    pub fn overlay_open(&self) -> bool {
        self.help_visible || self.picker.is_some() || self.compose.is_some()
    }
}
