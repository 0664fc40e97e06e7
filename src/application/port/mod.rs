// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`sender`]: Delivery of a completed contact form
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Traits are `Send + Sync` so adapters can move into Iced tasks
//! - No `async fn` - delays and scheduling live in the callers' `Task`s

pub mod sender;

pub use sender::{MessageSender, SendError};
