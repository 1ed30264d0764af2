//! Submission gate
//!
//! Submission is allowed only when every text answer is filled in and both
//! consents are given. The check runs once, when the visitor presses submit.

use crate::form::{Consent, FormAnswer, Question, TextQuestion};

/// Whether `form` may be handed to the mail client
pub fn can_submit(form: &FormAnswer) -> bool {
    missing(form).is_empty()
}

/// Questions that still block submission, in form order
pub fn missing(form: &FormAnswer) -> Vec<Question> {
    let texts = TextQuestion::ALL
        .into_iter()
        .filter(|q| form.text(*q).is_empty())
        .map(Question::Text);
    let consents = Consent::ALL
        .into_iter()
        .filter(|c| !form.consent(*c))
        .map(Question::Consent);

    texts.chain(consents).collect()
}
