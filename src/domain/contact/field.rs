// SPDX-License-Identifier: MPL-2.0
//! Contact form fields and the purpose choices.

use std::fmt;
use std::str::FromStr;

/// Identifies one of the fixed contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Purpose,
    Message,
}

impl Field {
    /// Returns all fields in display order.
    #[must_use]
    pub const fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::Purpose,
            Field::Message,
        ]
    }

    /// Returns the form key of this field (`name`, `email`, ...).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Purpose => "purpose",
            Field::Message => "message",
        }
    }

    /// Whether a value is required for a successful submission.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Field::Phone)
    }

    /// Returns the next field in display order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Phone,
            Field::Phone => Field::Purpose,
            Field::Purpose => Field::Message,
            Field::Message => Field::Name,
        }
    }

    /// Field before this one in display order, wrapping to the last.
    #[must_use]
    pub const fn previous(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Phone => Field::Email,
            Field::Purpose => Field::Phone,
            Field::Message => Field::Purpose,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Reason for getting in touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Business,
    Personal,
    Collaboration,
    Feedback,
    Other,
}

impl Purpose {
    /// All purposes, in the order they are offered.
    pub const ALL: [Purpose; 5] = [
        Purpose::Business,
        Purpose::Personal,
        Purpose::Collaboration,
        Purpose::Feedback,
        Purpose::Other,
    ];

    /// Returns the stored value (`business`, `personal`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Purpose::Business => "business",
            Purpose::Personal => "personal",
            Purpose::Collaboration => "collaboration",
            Purpose::Feedback => "feedback",
            Purpose::Other => "other",
        }
    }

    /// Returns the human-readable label shown in the picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Purpose::Business => "Business Inquiry",
            Purpose::Personal => "Personal Communication",
            Purpose::Collaboration => "Collaboration",
            Purpose::Feedback => "Feedback",
            Purpose::Other => "Other",
        }
    }
}

// The picker renders options through `Display`.
impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not one of the purpose values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPurpose(pub String);

impl fmt::Display for UnknownPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown purpose: {}", self.0)
    }
}

impl std::error::Error for UnknownPurpose {}

impl FromStr for Purpose {
    type Err = UnknownPurpose;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Purpose::ALL
            .into_iter()
            .find(|purpose| purpose.as_str() == s)
            .ok_or_else(|| UnknownPurpose(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_phone_is_optional() {
        for field in Field::all() {
            assert_eq!(field.is_required(), *field != Field::Phone);
        }
    }

    #[test]
    fn next_cycles_through_every_field() {
        let mut field = Field::Name;
        let mut seen = Vec::new();
        for _ in 0..Field::all().len() {
            seen.push(field);
            field = field.next();
        }
        assert_eq!(field, Field::Name);
        assert_eq!(seen, Field::all());
    }

    #[test]
    fn previous_undoes_next() {
        for field in Field::all() {
            assert_eq!(field.next().previous(), *field);
        }
        assert_eq!(Field::Name.previous(), Field::Message);
    }

    #[test]
    fn purpose_parses_stored_values() {
        for purpose in Purpose::ALL {
            assert_eq!(purpose.as_str().parse::<Purpose>(), Ok(purpose));
        }
        assert!("sales".parse::<Purpose>().is_err());
        assert!("".parse::<Purpose>().is_err());
    }

    #[test]
    fn purpose_display_uses_label() {
        assert_eq!(Purpose::Business.to_string(), "Business Inquiry");
        assert_eq!(Purpose::Personal.to_string(), "Personal Communication");
    }
}
