//! Tracing setup and structured log events.

pub mod events;
pub mod setup;

pub use setup::{init_tracing, init_tracing_json, init_tracing_with_filter};
