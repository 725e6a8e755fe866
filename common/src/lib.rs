//! Shared models and port traits for `ouilookup`.
//!
//! The traits in [`lookup`] and [`system`] are the seams between the command line front end
//! and the adapters in `ouilookup-core`, so the dispatcher can be driven by in-memory fakes.

pub mod config;
pub mod lookup;
pub mod network;
pub mod system;
