//! User-facing strings
//!
//! Russian is the questionnaire's native language; English is provided for
//! visitors and for logs that should be readable without a translator.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::form::{Amenity, Consent, TextQuestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            _ => Err(format!("Invalid locale: '{}'. Valid options: ru, en", s)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Ru => write!(f, "ru"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl Locale {
    pub fn title(self) -> &'static str {
        match self {
            Locale::Ru => "Анкета Аквапарка",
            Locale::En => "Water Park Questionnaire",
        }
    }

    /// Label shown above a text field on the form
    pub fn field_title(self, question: TextQuestion) -> &'static str {
        match (self, question) {
            (Locale::Ru, TextQuestion::FullName) => "Полное Имя",
            (Locale::Ru, TextQuestion::DateOfBirth) => "Дата Рождения",
            (Locale::Ru, TextQuestion::PhoneNumber) => "Номер Телефона",
            (Locale::Ru, TextQuestion::Email) => "Электронная почта",
            (Locale::Ru, TextQuestion::Guardian) => {
                "Кто берет ответственностью за ребенка (детей)"
            }
            (Locale::Ru, TextQuestion::ChildCount) => "Количество Детей",
            (Locale::En, TextQuestion::FullName) => "Full Name",
            (Locale::En, TextQuestion::DateOfBirth) => "Date of Birth",
            (Locale::En, TextQuestion::PhoneNumber) => "Phone Number",
            (Locale::En, TextQuestion::Email) => "Email",
            (Locale::En, TextQuestion::Guardian) => "Who is responsible for the child (children)",
            (Locale::En, TextQuestion::ChildCount) => "Number of Children",
        }
    }

    pub fn placeholder(self, question: TextQuestion) -> &'static str {
        match (self, question) {
            (Locale::Ru, TextQuestion::FullName | TextQuestion::Guardian) => "Введите полное имя",
            (Locale::Ru, TextQuestion::DateOfBirth) => "Введите дату рождения",
            (Locale::Ru, TextQuestion::PhoneNumber) => "Введите номер телефона",
            (Locale::Ru, TextQuestion::Email) => "Введите электронную почту",
            (Locale::Ru, TextQuestion::ChildCount) => "Введите количество детей",
            (Locale::En, TextQuestion::FullName | TextQuestion::Guardian) => "Enter full name",
            (Locale::En, TextQuestion::DateOfBirth) => "Enter date of birth",
            (Locale::En, TextQuestion::PhoneNumber) => "Enter phone number",
            (Locale::En, TextQuestion::Email) => "Enter email",
            (Locale::En, TextQuestion::ChildCount) => "Enter number of children",
        }
    }

    /// Label used for a text answer in the message body
    pub fn message_label(self, question: TextQuestion) -> &'static str {
        match (self, question) {
            (Locale::Ru, TextQuestion::FullName) => "Полное имя",
            (Locale::Ru, TextQuestion::DateOfBirth) => "Дата Рождения",
            (Locale::Ru, TextQuestion::PhoneNumber) => "Номер Телефона",
            (Locale::Ru, TextQuestion::Email) => "Электронная Почта",
            (Locale::Ru, TextQuestion::Guardian) => "Кто несёт ответственность за детей",
            (Locale::Ru, TextQuestion::ChildCount) => "Количество Детей",
            (Locale::En, question) => self.field_title(question),
        }
    }

    pub fn amenities_heading(self) -> &'static str {
        match self {
            Locale::Ru => "Зоны отдыха и развлечения",
            Locale::En => "Leisure and entertainment areas",
        }
    }

    pub fn message_amenities_heading(self) -> &'static str {
        match self {
            Locale::Ru => "Зоны Отдыха",
            Locale::En => "Leisure Areas",
        }
    }

    pub fn amenity(self, amenity: Amenity) -> &'static str {
        match (self, amenity) {
            (Locale::Ru, Amenity::WaterSlides) => "Водные горки",
            (Locale::Ru, Amenity::IndoorPool) => "Крытый/Закрытый бассейн",
            (Locale::Ru, Amenity::ChildrensArea) => "Детская зона",
            (Locale::Ru, Amenity::FoodCourt) => "Фуд корт",
            (Locale::Ru, Amenity::Spa) => "Спа",
            (Locale::Ru, Amenity::Surfing) => "Сёрфинг",
            (Locale::En, Amenity::WaterSlides) => "Water slides",
            (Locale::En, Amenity::IndoorPool) => "Indoor pool",
            (Locale::En, Amenity::ChildrensArea) => "Children's area",
            (Locale::En, Amenity::FoodCourt) => "Food court",
            (Locale::En, Amenity::Spa) => "Spa",
            (Locale::En, Amenity::Surfing) => "Surfing",
        }
    }

    /// Amenity label in the message body
    pub fn message_amenity(self, amenity: Amenity) -> &'static str {
        match (self, amenity) {
            (Locale::Ru, Amenity::WaterSlides) => "Водные Горки",
            (Locale::Ru, Amenity::IndoorPool) => "Крытый бассейн",
            (Locale::Ru, Amenity::ChildrensArea) => "Детская Зона",
            (Locale::Ru, amenity) => self.amenity(amenity),
            (Locale::En, amenity) => self.amenity(amenity),
        }
    }

    pub fn consent(self, consent: Consent) -> &'static str {
        match (self, consent) {
            (Locale::Ru, Consent::BehaviourRules) => {
                "Я ознакомлен (а) с правилами и нормами поведения, установленными Аквапарком \
                 «Морская звезда» И в случае чего понесу полную гражданско-правовую, \
                 административную, уголовную и материальную ответственность."
            }
            (Locale::Ru, Consent::DataProcessing) => "Согласие на обработку персональных данных",
            (Locale::En, Consent::BehaviourRules) => {
                "I have read the rules of conduct of the \"Sea Star\" water park and accept full \
                 civil, administrative, criminal and financial liability for breaking them."
            }
            (Locale::En, Consent::DataProcessing) => "I consent to the processing of my personal data",
        }
    }

    pub fn submit(self) -> &'static str {
        match self {
            Locale::Ru => "Отправить Анкету",
            Locale::En => "Send Questionnaire",
        }
    }

    /// Boolean answer as it appears in the message body
    pub fn flag(self, value: bool) -> &'static str {
        match (self, value) {
            (Locale::Ru, true) => "Активно",
            (Locale::Ru, false) => "Неактивно",
            (Locale::En, true) => "Active",
            (Locale::En, false) => "Inactive",
        }
    }

    /// Status line after the mail client took over
    pub fn mail_opened(self) -> &'static str {
        match self {
            Locale::Ru => "Анкета передана в почтовый клиент",
            Locale::En => "Questionnaire handed to the mail client",
        }
    }

    /// Key hints in the status bar while the form has the keys
    pub fn form_hints(self) -> &'static str {
        match self {
            Locale::Ru => {
                "Tab: Далее | Пробел: Отметить | Ctrl+S: Отправить | F1: Справка | Ctrl+Q: Выход"
            }
            Locale::En => "Tab: Next | Space: Toggle | Ctrl+S: Send | F1: Help | Ctrl+Q: Quit",
        }
    }

    pub fn picker_hints(self) -> &'static str {
        match self {
            Locale::Ru => "↑/↓: День | ←/→: Месяц | PgUp/PgDn: Год | Enter: Готово",
            Locale::En => "Up/Down: Day | Left/Right: Month | PgUp/PgDn: Year | Enter: Done",
        }
    }

    pub fn compose_hints(self) -> &'static str {
        match self {
            Locale::Ru => "Enter: Открыть почтовый клиент | Esc: Отмена",
            Locale::En => "Enter: Open mail client | Esc: Cancel",
        }
    }

    pub fn recipients_label(self) -> &'static str {
        match self {
            Locale::Ru => "Кому",
            Locale::En => "To",
        }
    }

    pub fn subject_label(self) -> &'static str {
        match self {
            Locale::Ru => "Тема",
            Locale::En => "Subject",
        }
    }

    pub fn help_title(self) -> &'static str {
        match self {
            Locale::Ru => "Справка",
            Locale::En => "Help",
        }
    }

    /// Body of the help overlay; the first line is its heading
    pub fn help_lines(self) -> &'static [&'static str] {
        match self {
            Locale::Ru => &[
                "Клавиши",
                "",
                "Анкета:",
                "  Tab / ↓          - Следующий пункт",
                "  Shift+Tab / ↑    - Предыдущий пункт",
                "  ← / →            - Курсор",
                "  Пробел / Enter   - Отметить",
                "  Enter на дате    - Выбор даты",
                "  Ctrl+S           - Отправить анкету",
                "",
                "Общие:",
                "  F1               - Справка",
                "  Esc              - Закрыть окно",
                "  Ctrl+Q / Ctrl+C  - Выход",
                "",
                "Esc или F1 - закрыть",
            ],
            Locale::En => &[
                "Keyboard Shortcuts",
                "",
                "Form:",
                "  Tab / Down       - Next item",
                "  Shift+Tab / Up   - Previous item",
                "  Left / Right     - Move cursor",
                "  Space / Enter    - Toggle checkbox",
                "  Enter on date    - Open date picker",
                "  Ctrl+S           - Send questionnaire",
                "",
                "Global:",
                "  F1               - Toggle help",
                "  Esc              - Close overlay",
                "  Ctrl+Q / Ctrl+C  - Quit",
                "",
                "Press Esc or F1 to close",
            ],
        }
    }

    /// Mail subject for a questionnaire from `full_name`
    pub fn subject(self, full_name: &str) -> String {
        match self {
            Locale::Ru => format!("Анкета от {}", full_name),
            Locale::En => format!("Questionnaire from {}", full_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("ru".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().unwrap_err().contains("Invalid locale: 'de'"));
    }

    #[test]
    fn test_default_is_russian() {
        assert_eq!(Locale::default(), Locale::Ru);
        assert_eq!(Locale::default().to_string(), "ru");
    }

    #[test]
    fn test_flag_strings() {
        assert_eq!(Locale::Ru.flag(true), "Активно");
        assert_eq!(Locale::Ru.flag(false), "Неактивно");
        assert_eq!(Locale::En.flag(true), "Active");
        assert_eq!(Locale::En.flag(false), "Inactive");
    }

    #[test]
    fn test_screen_strings_follow_locale() {
        assert!(Locale::Ru.form_hints().contains("Отправить"));
        assert!(Locale::Ru.compose_hints().contains("Отмена"));
        assert_eq!(Locale::Ru.recipients_label(), "Кому");
        assert_eq!(Locale::En.subject_label(), "Subject");
        assert_eq!(Locale::Ru.help_lines()[0], "Клавиши");
        assert_eq!(Locale::Ru.help_lines().len(), Locale::En.help_lines().len());
    }

    #[test]
    fn test_subject() {
        assert_eq!(Locale::Ru.subject("Иван Петров"), "Анкета от Иван Петров");
        assert_eq!(Locale::En.subject("Ivan"), "Questionnaire from Ivan");
    }
}
