// SPDX-License-Identifier: MPL-2.0
//! Form values and per-field validation errors.

use super::field::{Field, Purpose};
use std::collections::BTreeMap;

/// Values currently entered in the contact form.
///
/// `purpose` is `None` until the user picks one. The default value is the
/// empty form the page starts with and returns to after a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub purpose: Option<Purpose>,
    pub message: String,
}

impl FormState {
    /// Returns the value of a field as text. An unset purpose is `""`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Purpose => self.purpose.map_or("", Purpose::as_str),
            Field::Message => &self.message,
        }
    }

    /// Sets a field from its textual value.
    ///
    /// For [`Field::Purpose`] the value is parsed; anything that is not a
    /// known purpose leaves the purpose unset.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Purpose => self.purpose = value.parse().ok(),
            Field::Message => self.message = value,
        }
    }

    /// Returns true if every field is at its empty default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Clears every field back to its empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validation errors keyed by field.
///
/// A field is present only while it fails validation; an empty mapping means
/// the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState(BTreeMap<Field, String>);

impl ErrorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error message for a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Returns the error message for a field, if it currently has one.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Removes a field's error. Returns true if there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over failing fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Returns the failing fields in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for ErrorState {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, message)| (field, message.into()))
                .collect(),
        )
    }
}
