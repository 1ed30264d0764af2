//! Message composer
//!
//! Renders the answers into the fixed plain-text template that is mailed to
//! the park. Consents gate submission but are not part of the body.

use serde::Serialize;

use crate::config::MailConfig;
use crate::form::{Amenity, FormAnswer, TextQuestion};
use crate::locale::Locale;

/// What gets handed to the mail client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Indent of every non-empty body line
const BODY_INDENT: &str = "    ";

/// Render the message body
pub fn render_body(form: &FormAnswer, locale: Locale) -> String {
    let mut lines: Vec<String> = TextQuestion::ALL
        .into_iter()
        .map(|q| format!("{}: {}", locale.message_label(q), form.text(q)))
        .collect();

    lines.push(String::new());
    lines.push(format!("{}:", locale.message_amenities_heading()));
    lines.extend(Amenity::ALL.into_iter().map(|a| {
        format!(
            "{}: {}",
            locale.message_amenity(a),
            locale.flag(form.amenity(a))
        )
    }));

    lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", BODY_INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full message for `form`
pub fn compose_message(form: &FormAnswer, mail: &MailConfig, locale: Locale) -> MailMessage {
    MailMessage {
        recipients: mail.recipients.clone(),
        subject: locale.subject(&form.full_name),
        body: render_body(form, locale),
    }
}
