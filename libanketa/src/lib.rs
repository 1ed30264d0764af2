//! Anketa - water park visitor questionnaire
//!
//! This library holds everything behind the questionnaire screen: per-field
//! input formatting, the date picker model, the form state and its updates,
//! the submission gate, and the hand-off of the composed message to the
//! system mail client.

pub mod config;
pub mod date_picker;
pub mod error;
pub mod form;
pub mod formatter;
pub mod gate;
pub mod locale;
pub mod logging;
pub mod mail;
pub mod message;

// Re-export commonly used types
pub use config::Config;
pub use date_picker::DatePicker;
pub use error::{AnketaError, Result};
pub use form::{Amenity, Consent, FormAnswer, FormEdit, Question, TextQuestion};
pub use formatter::{apply_edit, EditOutcome, FieldKind, TextEdit};
pub use gate::can_submit;
pub use locale::Locale;
pub use mail::{ComposeResult, MailComposer, MailtoComposer};
pub use message::{compose_message, MailMessage};
