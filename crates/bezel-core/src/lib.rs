//! Bezel Core
//!
//! Shared plumbing for the Bezel curve toolkit: logging, profiling,
//! math re-exports, and allocation helpers used by the other crates.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{Config, ProfilingMode};
