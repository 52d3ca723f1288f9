//! Client for the hosted clockings backend.
//!
//! `chronos sync` pulls records from a REST endpoint and upserts them into
//! the local database keyed by their remote id.

pub mod remote;

pub use remote::{RemoteClocking, RemoteClockings};
