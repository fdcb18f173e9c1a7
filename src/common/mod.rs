//! Common types shared by the energy model.
//!
//! This module provides the structural address, the command record consumed
//! by the accumulator, and the crate-wide error type.

/// Structural (channel/rank/bank/row/col) address definitions.
pub mod addr;

/// Command type enumeration and command records.
pub mod command;

/// Error types.
pub mod error;

pub use addr::{Level, MappedAddress};
pub use command::{CommandRecord, CommandType, PAYLOAD_WORDS};
pub use error::EnergyError;
