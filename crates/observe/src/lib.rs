//! This crate contains the logging setup shared between the binaries of this
//! workspace: initialization of the tracing subscriber and a panic hook that
//! routes panics through `tracing`.
mod config;
pub mod panic_hook;
pub mod tracing;

pub use config::Config;
