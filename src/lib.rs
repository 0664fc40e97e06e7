// SPDX-License-Identifier: MPL-2.0
//! `contact_page` is a "Contact Us" page built with the Iced GUI framework.
//!
//! It renders static contact information next to a contact form, validates
//! the form on submit and runs a simulated submission with a timed success
//! popup.

pub mod app;
pub mod application;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
