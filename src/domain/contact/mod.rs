// SPDX-License-Identifier: MPL-2.0
//! Contact form domain: fields, values, validation and submission status.
//!
//! Everything here is plain data and pure functions; the Iced component in
//! [`crate::ui::contact_form`] drives it.

pub mod field;
pub mod form;
pub mod status;
pub mod validation;

pub use field::{Field, Purpose, UnknownPurpose};
pub use form::{ErrorState, FormState};
pub use status::SubmissionStatus;
pub use validation::{is_valid_email, validate};
