//! Error Types.
//!
//! The accounting itself is pure computation over a trusted stream, so the
//! only conditions surfaced here are bad configuration, bad input files and
//! out-of-range enumeration indices.

use thiserror::Error;

/// Errors raised while configuring the model or loading input.
#[derive(Debug, Error)]
pub enum EnergyError {
    /// An enumeration or vector index fell outside `[0, len)`.
    #[error("{what} index {index} out of range [0, {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A command mnemonic did not match any known command type.
    #[error("unknown command type '{0}'")]
    UnknownCommand(String),

    /// The configured structural counts cannot describe a memory system.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// The configuration file could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// A line of a command trace could not be turned into a command.
    #[error("trace line {line}: {reason}")]
    TraceParse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
