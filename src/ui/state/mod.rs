// SPDX-License-Identifier: MPL-2.0
//! UI state value objects
//!
//! Validated timing values read from the configuration and handed to the
//! contact form component.

pub mod send_delay;
pub mod success_display;

pub use send_delay::SendDelay;
pub use success_display::SuccessDisplay;
