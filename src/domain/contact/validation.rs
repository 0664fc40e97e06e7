// SPDX-License-Identifier: MPL-2.0
//! Contact form validation rules.

use super::field::Field;
use super::form::{ErrorState, FormState};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const PURPOSE_REQUIRED: &str = "Please select a purpose";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Validates the form and returns the failing fields with their messages.
///
/// An empty result means the form may be submitted. The phone number is
/// optional and never fails.
#[must_use]
pub fn validate(form: &FormState) -> ErrorState {
    let mut errors = ErrorState::new();

    if is_blank(&form.name) {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if is_blank(&form.email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if form.purpose.is_none() {
        errors.insert(Field::Purpose, PURPOSE_REQUIRED);
    }

    if is_blank(&form.message) {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_space)
}

/// Checks the `local@domain.tld` shape.
///
/// Accepts exactly one `@` with a non-empty part on each side, no whitespace
/// anywhere, and a `.` in the domain part that has at least one character on
/// each side of it. The value is not trimmed.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_space) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Any interior dot works as the separator: `a@b.c.d` splits as `b` / `c.d`.
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

// Matches the whitespace class used by web form validation: it counts the
// byte-order mark but not NEL (U+0085), which Rust treats as whitespace.
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::Purpose;

    fn jane() -> FormState {
        FormState {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: String::new(),
            purpose: Some(Purpose::Business),
            message: "Hi".into(),
        }
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(validate(&jane()).is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&FormState::default());

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Purpose), Some(PURPOSE_REQUIRED));
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
        assert!(!errors.contains(Field::Phone));
    }

    #[test]
    fn bad_email_scenario_reports_invalid_email() {
        let form = FormState {
            email: "bad".into(),
            ..FormState::default()
        };
        let errors = validate(&form);

        let expected: ErrorState = [
            (Field::Name, NAME_REQUIRED),
            (Field::Email, EMAIL_INVALID),
            (Field::Purpose, PURPOSE_REQUIRED),
            (Field::Message, MESSAGE_REQUIRED),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn whitespace_only_values_count_as_empty() {
        let form = FormState {
            name: "   ".into(),
            email: " ".into(),
            message: "\n\t".into(),
            ..jane()
        };
        let errors = validate(&form);

        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        let form = FormState {
            name: "\u{feff}".into(),
            email: "\u{feff} ".into(),
            message: " \u{feff}\u{a0}".into(),
            ..jane()
        };
        let errors = validate(&form);

        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn next_line_is_not_blank() {
        let form = FormState {
            name: "\u{85}".into(),
            email: "\u{85}".into(),
            ..jane()
        };
        let errors = validate(&form);

        assert!(!errors.contains(Field::Name));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert!(is_valid_email("a\u{85}@b.co"));
    }

    #[test]
    fn phone_never_fails() {
        let form = FormState {
            phone: "not a number at all".into(),
            ..jane()
        };
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn validate_is_idempotent() {
        let form = FormState {
            email: "a@b".into(),
            ..FormState::default()
        };
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn email_boundary_cases() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn surrounding_spaces_make_email_invalid_not_missing() {
        let form = FormState {
            email: " jane@x.com ".into(),
            ..jane()
        };
        assert_eq!(validate(&form).get(Field::Email), Some(EMAIL_INVALID));
    }
}
