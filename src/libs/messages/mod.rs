//! User-facing message catalogue and output macros.
//!
//! All text shown by the CLI is a [`Message`] variant; its wording lives in
//! `display.rs` and is routed to the console or to `tracing` by the macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
