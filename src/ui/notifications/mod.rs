// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for operational messages.
//!
//! Used for problems the user should know about but that do not belong to the
//! contact form itself, such as an unreadable settings file.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! Toast duration: 3s for info, 5s for warnings, manual dismiss for errors.
//! At most 3 toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
