// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: Stand-in sender with an artificial network delay
//!   (implements [`MessageSender`])
//!
//! [`MessageSender`]: crate::application::port::MessageSender

pub mod simulated;

pub use simulated::{deliver_after, SimulatedSender};
