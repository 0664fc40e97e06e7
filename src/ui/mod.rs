// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`contact_form`] - The contact form: controller, Iced glue and rendering
//! - [`contact_card`] - Contact-info cards and the direct-message highlight
//! - [`social_links`] - "Follow Us" link buttons
//! - [`success_popup`] - Thank-you overlay shown after a submission
//! - [`page`] - Header and footer
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Validated timing values
//! - [`entrance`] - Page-load fade-in
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod contact_card;
pub mod contact_form;
pub mod design_tokens;
pub mod entrance;
pub mod notifications;
pub mod page;
pub mod social_links;
pub mod state;
pub mod styles;
pub mod success_popup;
pub mod theming;
pub mod widgets;
