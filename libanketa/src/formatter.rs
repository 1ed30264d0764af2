//! Per-keystroke input formatting
//!
//! Every text field has a [`FieldKind`]. Each proposed edit is spliced into the
//! current value and the result is passed through the kind's rule: characters
//! that the kind does not allow are silently dropped, phone numbers are
//! re-rendered with a fixed template, and date fields refuse typed input.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Maximum number of digits a phone field will hold
pub const PHONE_MAX_DIGITS: usize = 11;

/// Input filtering mode of a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Letters and whitespace
    FreeText,
    /// Digits rendered as `+7 (DDD) DDD DD DD`
    PhoneNumber,
    /// Letters, digits and `@ . _ -`
    Email,
    /// Set by the date picker only
    Date,
    /// Letters, digits, `. ,` and whitespace
    Address,
    /// Digits
    DigitsOnly,
}

/// A proposed edit: replace the characters in `range` with `replacement`
///
/// The range counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    /// Insert `text` before the character at `at`
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            range: at..at,
            replacement: text.into(),
        }
    }

    /// Remove the characters in `range`
    pub fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            replacement: String::new(),
        }
    }
}

/// Result of applying an edit to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The field takes `value`; `cursor` is the character position just after
    /// the inserted text and `dropped` counts characters the rule removed.
    Accepted {
        value: String,
        cursor: usize,
        dropped: usize,
    },
    /// The field keeps its current value
    Rejected,
}

impl FieldKind {
    /// Whether a single character survives this kind's filter
    ///
    /// Phone numbers keep digits here; the template is applied afterwards.
    /// Date fields keep nothing.
    pub fn allows(self, c: char) -> bool {
        match self {
            FieldKind::FreeText => c.is_alphabetic() || c.is_whitespace(),
            FieldKind::PhoneNumber | FieldKind::DigitsOnly => c.is_ascii_digit(),
            FieldKind::Email => {
                c.is_alphabetic() || c.is_ascii_digit() || matches!(c, '@' | '.' | '_' | '-')
            }
            FieldKind::Address => {
                c.is_alphabetic()
                    || c.is_ascii_digit()
                    || matches!(c, '.' | ',')
                    || c.is_whitespace()
            }
            FieldKind::Date => false,
        }
    }

    /// Whether the field accepts typed edits at all
    pub fn accepts_typing(self) -> bool {
        !matches!(self, FieldKind::Date)
    }
}

/// Keep only the characters `kind` allows, preserving their order
pub fn filter(kind: FieldKind, input: &str) -> String {
    input.chars().filter(|c| kind.allows(*c)).collect()
}

/// Render a digit string with the `+7 (DDD) DDD DD DD` template
///
/// Digit 0 is replaced by the `+7 (` literal and does not appear in the
/// output; digits 1 onwards fill the slots in order. A partial input renders
/// a partial template, so `"123"` becomes `"+7 (23"`.
pub fn format_phone(digits: &str) -> String {
    let mut formatted = String::with_capacity(digits.len() + 8);

    for (index, digit) in digits.chars().enumerate() {
        match index {
            0 => formatted.push_str("+7 ("),
            4 => {
                formatted.push_str(") ");
                formatted.push(digit);
            }
            7 | 9 => {
                formatted.push(' ');
                formatted.push(digit);
            }
            _ => formatted.push(digit),
        }
    }

    formatted
}

/// Apply `edit` to `current` under the rules of `kind`
///
/// An edit whose range falls outside `current` is rejected, as is any typed
/// edit into a date field and any edit that would leave a phone field with
/// more than [`PHONE_MAX_DIGITS`] digits.
pub fn apply_edit(current: &str, edit: &TextEdit, kind: FieldKind) -> EditOutcome {
    if !kind.accepts_typing() {
        return EditOutcome::Rejected;
    }

    let chars: Vec<char> = current.chars().collect();
    if edit.range.start > edit.range.end || edit.range.end > chars.len() {
        return EditOutcome::Rejected;
    }

    let prefix: String = chars[..edit.range.start].iter().collect();
    let suffix: String = chars[edit.range.end..].iter().collect();
    let spliced = format!("{}{}{}", prefix, edit.replacement, suffix);
    let spliced_len = spliced.chars().count();

    let kept = filter(kind, &spliced);
    let dropped = spliced_len - kept.chars().count();

    match kind {
        FieldKind::PhoneNumber => {
            if kept.chars().count() > PHONE_MAX_DIGITS {
                return EditOutcome::Rejected;
            }
            let value = format_phone(&kept);
            let cursor = value.chars().count();
            EditOutcome::Accepted {
                value,
                cursor,
                dropped,
            }
        }
        _ => {
            let head = format!("{}{}", prefix, edit.replacement);
            let cursor = filter(kind, &head).chars().count();
            EditOutcome::Accepted {
                value: kept,
                cursor,
                dropped,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(kind: FieldKind, input: &str) -> String {
        match apply_edit("", &TextEdit::insert(0, input), kind) {
            EditOutcome::Accepted { value, .. } => value,
            EditOutcome::Rejected => panic!("edit unexpectedly rejected"),
        }
    }

    #[test]
    fn test_free_text_drops_digits() {
        assert_eq!(typed(FieldKind::FreeText, "a1b2c3"), "abc");
    }

    #[test]
    fn test_free_text_keeps_cyrillic_and_spaces() {
        assert_eq!(typed(FieldKind::FreeText, "Иван Иванов-2"), "Иван Иванов");
    }

    #[test]
    fn test_free_text_only_letters_and_whitespace() {
        let inputs = ["x!y@z#", "  tab\there ", "ümlaut 42 ß", "🛝slide", ""];
        for input in inputs {
            let out = filter(FieldKind::FreeText, input);
            assert!(out.chars().all(|c| c.is_alphabetic() || c.is_whitespace()));
            // Kept characters keep their relative order
            let expected: String = input
                .chars()
                .filter(|c| c.is_alphabetic() || c.is_whitespace())
                .collect();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn test_digits_only_is_idempotent() {
        for input in ["12ab34", "", "no digits", "0-0-7"] {
            let once = filter(FieldKind::DigitsOnly, input);
            assert_eq!(filter(FieldKind::DigitsOnly, &once), once);
            assert!(once.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_email_keeps_allowed_punctuation() {
        assert_eq!(
            typed(FieldKind::Email, "ivan.petrov_1-x@mail.ru!"),
            "ivan.petrov_1-x@mail.ru"
        );
        assert_eq!(typed(FieldKind::Email, "a b+c"), "abc");
    }

    #[test]
    fn test_address_keeps_commas_and_dots() {
        assert_eq!(
            typed(FieldKind::Address, "ул. Морская, д. 5/1"),
            "ул. Морская, д. 51"
        );
    }

    #[test]
    fn test_date_rejects_typing() {
        assert_eq!(
            apply_edit("", &TextEdit::insert(0, "01.01.2000"), FieldKind::Date),
            EditOutcome::Rejected
        );
        assert_eq!(
            apply_edit("01.01.2000", &TextEdit::delete(9..10), FieldKind::Date),
            EditOutcome::Rejected
        );
    }

    #[test]
    fn test_phone_partial_prefix_swallows_first_digit() {
        assert_eq!(format_phone("1"), "+7 (");
        assert_eq!(format_phone("123"), "+7 (23");
        assert_eq!(format_phone("12345"), "+7 (234) 5");
    }

    #[test]
    fn test_phone_ten_digits() {
        assert_eq!(typed(FieldKind::PhoneNumber, "9991234567"), "+7 (991) 234 56 7");
    }

    #[test]
    fn test_phone_full_number() {
        assert_eq!(typed(FieldKind::PhoneNumber, "79991234567"), "+7 (999) 123 45 67");
        assert_eq!(typed(FieldKind::PhoneNumber, "8 999 123-45-67"), "+7 (999) 123 45 67");
    }

    #[test]
    fn test_phone_never_panics_and_starts_with_prefix() {
        let digits = "01234567890";
        for len in 1..=digits.len() {
            let out = format_phone(&digits[..len]);
            assert!(out.starts_with("+7 ("), "{:?} -> {:?}", &digits[..len], out);
        }
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_phone_rejects_twelfth_digit() {
        let full = "+7 (999) 123 45 67";
        let len = full.chars().count();
        assert_eq!(
            apply_edit(full, &TextEdit::insert(len, "8"), FieldKind::PhoneNumber),
            EditOutcome::Rejected
        );
    }

    #[test]
    fn test_phone_typing_one_digit_at_a_time() {
        let mut value = String::new();
        for digit in "79991234567".chars() {
            let at = value.chars().count();
            match apply_edit(&value, &TextEdit::insert(at, digit.to_string()), FieldKind::PhoneNumber) {
                EditOutcome::Accepted { value: next, cursor, .. } => {
                    assert_eq!(cursor, next.chars().count());
                    value = next;
                }
                EditOutcome::Rejected => panic!("digit {} rejected", digit),
            }
        }
        assert_eq!(value, "+7 (999) 123 45 67");
    }

    #[test]
    fn test_phone_deleting_literal_keeps_digits() {
        // The literal "7" re-enters the digit stream as digit 0
        let outcome = apply_edit("+7 (99", &TextEdit::delete(3..4), FieldKind::PhoneNumber);
        assert_eq!(
            outcome,
            EditOutcome::Accepted {
                value: "+7 (99".to_string(),
                cursor: 6,
                dropped: 2,
            }
        );
    }

    #[test]
    fn test_cursor_follows_kept_characters() {
        let outcome = apply_edit("ac", &TextEdit::insert(1, "1b"), FieldKind::FreeText);
        assert_eq!(
            outcome,
            EditOutcome::Accepted {
                value: "abc".to_string(),
                cursor: 2,
                dropped: 1,
            }
        );
    }

    #[test]
    fn test_out_of_range_edit_rejected() {
        assert_eq!(
            apply_edit("abc", &TextEdit::delete(2..5), FieldKind::FreeText),
            EditOutcome::Rejected
        );
    }

    #[test]
    fn test_backspace_on_free_text() {
        let outcome = apply_edit("Анна", &TextEdit::delete(3..4), FieldKind::FreeText);
        assert_eq!(
            outcome,
            EditOutcome::Accepted {
                value: "Анн".to_string(),
                cursor: 3,
                dropped: 0,
            }
        );
    }
}
