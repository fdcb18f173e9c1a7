//! Read/write interleaving classes.
//!
//! Each RD/RDA (or WR/WRA) is compared with the previous command of the same
//! class and binned by how far apart the two land in the topology.

use crate::common::{EnergyError, MappedAddress};

/// Relation of a read (or write) to the previous read (or write).
///
/// Ordinals index the interleaving vector statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmdInterleaving {
    /// Same bank and same row: a row-buffer hit.
    SameBankSameRow = 0,
    /// Same bank, different row.
    SameBankDiffRow = 1,
    /// Same rank, different bank.
    SameRankDiffBank = 2,
    /// Different rank (or channel).
    DiffRank = 3,
}

static INTERLEAVING_NAMES: [&str; CmdInterleaving::COUNT] = [
    "sameBankSameRow",
    "sameBankDiffRow",
    "sameRankDiffBank",
    "diffRank",
];

impl CmdInterleaving {
    /// Number of interleaving classes.
    pub const COUNT: usize = 4;

    /// All classes in ordinal order.
    pub const ALL: [CmdInterleaving; CmdInterleaving::COUNT] = [
        CmdInterleaving::SameBankSameRow,
        CmdInterleaving::SameBankDiffRow,
        CmdInterleaving::SameRankDiffBank,
        CmdInterleaving::DiffRank,
    ];

    /// Classifies `current` relative to the preceding command `previous`.
    pub fn classify(previous: &MappedAddress, current: &MappedAddress) -> Self {
        if previous.same_bank(current) {
            if previous.row == current.row {
                CmdInterleaving::SameBankSameRow
            } else {
                CmdInterleaving::SameBankDiffRow
            }
        } else if previous.same_rank(current) {
            CmdInterleaving::SameRankDiffBank
        } else {
            CmdInterleaving::DiffRank
        }
    }

    /// Converts an ordinal back into a class.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyError::IndexOutOfRange`] when `index >= CmdInterleaving::COUNT`.
    pub fn from_index(index: usize) -> Result<Self, EnergyError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(EnergyError::IndexOutOfRange {
                what: "interleaving class",
                index,
                len: Self::COUNT,
            })
    }

    /// Returns the ordinal used to index interleaving vectors.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the label used in reports, e.g. `sameBankSameRow`.
    pub fn name(self) -> &'static str {
        INTERLEAVING_NAMES[self as usize]
    }
}
