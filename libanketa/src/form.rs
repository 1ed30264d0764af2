//! Form model
//!
//! [`FormAnswer`] is the single in-memory record of everything the visitor
//! has entered. It is never mutated in place: each [`FormEdit`] produces the
//! next value through [`FormAnswer::apply`], which keeps screen code and tests
//! working with plain values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_picker::format_date;
use crate::formatter::{apply_edit, EditOutcome, FieldKind, TextEdit};

/// The six required text answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextQuestion {
    FullName,
    DateOfBirth,
    PhoneNumber,
    Email,
    Guardian,
    ChildCount,
}

impl TextQuestion {
    /// Order used in the message body
    pub const ALL: [TextQuestion; 6] = [
        TextQuestion::FullName,
        TextQuestion::DateOfBirth,
        TextQuestion::PhoneNumber,
        TextQuestion::Email,
        TextQuestion::Guardian,
        TextQuestion::ChildCount,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            TextQuestion::FullName | TextQuestion::Guardian => FieldKind::FreeText,
            TextQuestion::DateOfBirth => FieldKind::Date,
            TextQuestion::PhoneNumber => FieldKind::PhoneNumber,
            TextQuestion::Email => FieldKind::Email,
            TextQuestion::ChildCount => FieldKind::DigitsOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    WaterSlides,
    IndoorPool,
    ChildrensArea,
    FoodCourt,
    Spa,
    Surfing,
}

impl Amenity {
    pub const ALL: [Amenity; 6] = [
        Amenity::WaterSlides,
        Amenity::IndoorPool,
        Amenity::ChildrensArea,
        Amenity::FoodCourt,
        Amenity::Spa,
        Amenity::Surfing,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            Amenity::WaterSlides => "🛝",
            Amenity::IndoorPool => "🏊",
            Amenity::ChildrensArea => "👶",
            Amenity::FoodCourt => "🍔",
            Amenity::Spa => "🧖",
            Amenity::Surfing => "🏄",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consent {
    BehaviourRules,
    DataProcessing,
}

impl Consent {
    pub const ALL: [Consent; 2] = [Consent::BehaviourRules, Consent::DataProcessing];
}

/// Any question on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    Text(TextQuestion),
    Amenity(Amenity),
    Consent(Consent),
}

/// Current value of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerValue<'a> {
    Text(&'a str),
    Flag(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityAnswers {
    pub water_slides: bool,
    pub indoor_pool: bool,
    pub childrens_area: bool,
    pub food_court: bool,
    pub spa: bool,
    pub surfing: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentAnswers {
    pub behaviour_rules: bool,
    pub data_processing: bool,
}

/// All answers on the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAnswer {
    pub full_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email: String,
    pub guardian: String,
    pub child_count: String,
    pub amenities: AmenityAnswers,
    pub consents: ConsentAnswers,
}

/// A single change to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    /// Keystroke-level edit of a text answer
    Type {
        question: TextQuestion,
        edit: TextEdit,
    },
    /// Date picked for the date of birth
    SetDate(NaiveDate),
    ToggleAmenity(Amenity),
    ToggleConsent(Consent),
}

impl FormAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, question: TextQuestion) -> &str {
        match question {
            TextQuestion::FullName => &self.full_name,
            TextQuestion::DateOfBirth => &self.date_of_birth,
            TextQuestion::PhoneNumber => &self.phone_number,
            TextQuestion::Email => &self.email,
            TextQuestion::Guardian => &self.guardian,
            TextQuestion::ChildCount => &self.child_count,
        }
    }

    fn text_slot(&mut self, question: TextQuestion) -> &mut String {
        match question {
            TextQuestion::FullName => &mut self.full_name,
            TextQuestion::DateOfBirth => &mut self.date_of_birth,
            TextQuestion::PhoneNumber => &mut self.phone_number,
            TextQuestion::Email => &mut self.email,
            TextQuestion::Guardian => &mut self.guardian,
            TextQuestion::ChildCount => &mut self.child_count,
        }
    }

    pub fn amenity(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::WaterSlides => self.amenities.water_slides,
            Amenity::IndoorPool => self.amenities.indoor_pool,
            Amenity::ChildrensArea => self.amenities.childrens_area,
            Amenity::FoodCourt => self.amenities.food_court,
            Amenity::Spa => self.amenities.spa,
            Amenity::Surfing => self.amenities.surfing,
        }
    }

    fn amenity_slot(&mut self, amenity: Amenity) -> &mut bool {
        match amenity {
            Amenity::WaterSlides => &mut self.amenities.water_slides,
            Amenity::IndoorPool => &mut self.amenities.indoor_pool,
            Amenity::ChildrensArea => &mut self.amenities.childrens_area,
            Amenity::FoodCourt => &mut self.amenities.food_court,
            Amenity::Spa => &mut self.amenities.spa,
            Amenity::Surfing => &mut self.amenities.surfing,
        }
    }

    pub fn consent(&self, consent: Consent) -> bool {
        match consent {
            Consent::BehaviourRules => self.consents.behaviour_rules,
            Consent::DataProcessing => self.consents.data_processing,
        }
    }

    fn consent_slot(&mut self, consent: Consent) -> &mut bool {
        match consent {
            Consent::BehaviourRules => &mut self.consents.behaviour_rules,
            Consent::DataProcessing => &mut self.consents.data_processing,
        }
    }

    pub fn value(&self, question: Question) -> AnswerValue<'_> {
        match question {
            Question::Text(q) => AnswerValue::Text(self.text(q)),
            Question::Amenity(a) => AnswerValue::Flag(self.amenity(a)),
            Question::Consent(c) => AnswerValue::Flag(self.consent(c)),
        }
    }

    /// Apply a keystroke edit to a text answer, returning the formatter's verdict
    pub fn type_text(self, question: TextQuestion, edit: &TextEdit) -> (Self, EditOutcome) {
        let outcome = apply_edit(self.text(question), edit, question.kind());
        let next = match &outcome {
            EditOutcome::Accepted { value, .. } => {
                let mut next = self;
                *next.text_slot(question) = value.clone();
                next
            }
            EditOutcome::Rejected => self,
        };
        (next, outcome)
    }

    /// Produce the next form value for `edit`
    pub fn apply(self, edit: FormEdit) -> Self {
        match edit {
            FormEdit::Type { question, edit } => self.type_text(question, &edit).0,
            FormEdit::SetDate(date) => {
                let mut next = self;
                next.date_of_birth = format_date(date);
                next
            }
            FormEdit::ToggleAmenity(amenity) => {
                let mut next = self;
                let slot = next.amenity_slot(amenity);
                *slot = !*slot;
                next
            }
            FormEdit::ToggleConsent(consent) => {
                let mut next = self;
                let slot = next.consent_slot(consent);
                *slot = !*slot;
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = FormAnswer::new();
        for question in TextQuestion::ALL {
            assert_eq!(form.text(question), "");
        }
        assert!(Amenity::ALL.iter().all(|a| !form.amenity(*a)));
        assert!(Consent::ALL.iter().all(|c| !form.consent(*c)));
    }

    #[test]
    fn test_type_goes_through_formatter() {
        let form = FormAnswer::new().apply(FormEdit::Type {
            question: TextQuestion::ChildCount,
            edit: TextEdit::insert(0, "2 kids"),
        });
        assert_eq!(form.child_count, "2");
    }

    #[test]
    fn test_typing_into_date_is_ignored() {
        let form = FormAnswer::new();
        let (next, outcome) =
            form.clone().type_text(TextQuestion::DateOfBirth, &TextEdit::insert(0, "01.01.2000"));
        assert_eq!(outcome, EditOutcome::Rejected);
        assert_eq!(next, form);
    }

    #[test]
    fn test_set_date_formats() {
        let date = NaiveDate::from_ymd_opt(1990, 12, 5).unwrap();
        let form = FormAnswer::new().apply(FormEdit::SetDate(date));
        assert_eq!(form.date_of_birth, "05.12.1990");
    }

    #[test]
    fn test_toggles_flip() {
        let form = FormAnswer::new()
            .apply(FormEdit::ToggleAmenity(Amenity::Spa))
            .apply(FormEdit::ToggleConsent(Consent::DataProcessing));
        assert!(form.amenity(Amenity::Spa));
        assert!(form.consent(Consent::DataProcessing));
        assert_eq!(form.value(Question::Amenity(Amenity::Surfing)), AnswerValue::Flag(false));

        let form = form.apply(FormEdit::ToggleAmenity(Amenity::Spa));
        assert!(!form.amenity(Amenity::Spa));
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let form = FormAnswer::new();
        let snapshot = form.clone();
        let _next = form.clone().apply(FormEdit::ToggleConsent(Consent::BehaviourRules));
        assert_eq!(form, snapshot);
    }

    #[test]
    fn test_serializes_to_json() {
        let form = FormAnswer::new().apply(FormEdit::ToggleAmenity(Amenity::WaterSlides));
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["amenities"]["water_slides"], true);
        assert_eq!(json["full_name"], "");
    }
}
