//! Structural DRAM Addresses.
//!
//! A `MappedAddress` locates a command in the memory topology after the
//! address-mapping stage has split the raw physical address into its
//! channel, rank, bank, row and column components. Mapping itself happens
//! upstream; this module only carries the result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Levels of the DRAM structural hierarchy, outermost first.
///
/// The ordinal of each level indexes the per-level counts of a
/// [`Topology`](crate::config::Topology).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Independent memory channel.
    Channel = 0,
    /// Rank within a channel.
    Rank = 1,
    /// Bank within a rank.
    Bank = 2,
    /// Row within a bank.
    Row = 3,
    /// Column within a row.
    Col = 4,
}

impl Level {
    /// Number of hierarchy levels.
    pub const COUNT: usize = 5;

    /// All levels in ordinal order.
    pub const ALL: [Level; Level::COUNT] = [
        Level::Channel,
        Level::Rank,
        Level::Bank,
        Level::Row,
        Level::Col,
    ];

    /// Returns the lowercase name of the level.
    pub fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }
}

static LEVEL_NAMES: [&str; Level::COUNT] = ["channel", "rank", "bank", "row", "col"];

/// A fully decoded DRAM address.
///
/// Immutable once built. `MappedAddress::default()` is the all-zero
/// address used to initialize bookkeeping before the first command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappedAddress {
    pub channel: usize,
    pub rank: usize,
    pub bank: usize,
    pub row: usize,
    pub col: usize,
}

impl MappedAddress {
    /// Creates a new address from its five structural indices.
    pub fn new(channel: usize, rank: usize, bank: usize, row: usize, col: usize) -> Self {
        Self {
            channel,
            rank,
            bank,
            row,
            col,
        }
    }

    /// Returns the index of this address at the given hierarchy level.
    pub fn index(&self, level: Level) -> usize {
        match level {
            Level::Channel => self.channel,
            Level::Rank => self.rank,
            Level::Bank => self.bank,
            Level::Row => self.row,
            Level::Col => self.col,
        }
    }

    /// Returns `true` if both addresses target the same bank of the same rank.
    pub fn same_bank(&self, other: &MappedAddress) -> bool {
        self.same_rank(other) && self.bank == other.bank
    }

    /// Returns `true` if both addresses target the same rank of the same channel.
    pub fn same_rank(&self, other: &MappedAddress) -> bool {
        self.channel == other.channel && self.rank == other.rank
    }
}

impl fmt::Display for MappedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chan: {}, rank: {}, bank: {}, row: {}, col: {}",
            self.channel, self.rank, self.bank, self.row, self.col
        )
    }
}
