//! Simulation inputs.

/// Text command-trace loader.
pub mod trace;

pub use trace::{end_of_trace, load_trace, parse_trace};
