//! DRAM Command Records.
//!
//! Defines the closed set of DRAM commands the energy model understands and
//! the immutable `CommandRecord` the scheduler emits for every issued
//! command. Ordinals of `CommandType` index directly into the per-command
//! vector statistics, so the enum and its name table must stay in lockstep.

use super::addr::MappedAddress;
use super::error::EnergyError;
use std::fmt;
use std::str::FromStr;

/// Number of 32-bit words carried in a command's data payload.
pub const PAYLOAD_WORDS: usize = 16;

/// DRAM command types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandType {
    /// Activate: opens a row in a bank.
    Act = 0,
    /// Precharge: closes the open row of a single bank.
    Pre = 1,
    /// Precharge all: closes every bank of a rank.
    PreAll = 2,
    /// Column read.
    Rd = 3,
    /// Column read with auto-precharge.
    Rda = 4,
    /// Column write.
    Wr = 5,
    /// Column write with auto-precharge.
    Wra = 6,
    /// All-bank refresh.
    Ref = 7,
    /// Power-down entry.
    Pde = 8,
    /// Power-down exit.
    Pdx = 9,
    /// Self-refresh entry.
    Sre = 10,
    /// Self-refresh exit.
    Srx = 11,
}

static COMMAND_NAMES: [&str; CommandType::COUNT] = [
    "ACT", "PRE", "PREA", "RD", "RDA", "WR", "WRA", "REF", "PDE", "PDX", "SRE", "SRX",
];

impl CommandType {
    /// Number of command types; every command-indexed vector has exactly this length.
    pub const COUNT: usize = 12;

    /// All command types in ordinal order.
    pub const ALL: [CommandType; CommandType::COUNT] = [
        CommandType::Act,
        CommandType::Pre,
        CommandType::PreAll,
        CommandType::Rd,
        CommandType::Rda,
        CommandType::Wr,
        CommandType::Wra,
        CommandType::Ref,
        CommandType::Pde,
        CommandType::Pdx,
        CommandType::Sre,
        CommandType::Srx,
    ];

    /// Converts an ordinal back into a command type.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyError::IndexOutOfRange`] when `index >= CommandType::COUNT`.
    pub fn from_index(index: usize) -> Result<Self, EnergyError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(EnergyError::IndexOutOfRange {
                what: "command type",
                index,
                len: Self::COUNT,
            })
    }

    /// Returns the ordinal used to index command vectors.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the mnemonic of the command.
    pub fn name(self) -> &'static str {
        COMMAND_NAMES[self as usize]
    }

    /// Returns `true` for RD and RDA.
    pub fn is_read(self) -> bool {
        matches!(self, CommandType::Rd | CommandType::Rda)
    }

    /// Returns `true` for WR and WRA.
    pub fn is_write(self) -> bool {
        matches!(self, CommandType::Wr | CommandType::Wra)
    }

    /// Returns `true` for PRE and PREA.
    pub fn is_precharge(self) -> bool {
        matches!(self, CommandType::Pre | CommandType::PreAll)
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandType {
    type Err = EnergyError;

    /// Parses a command mnemonic, case-insensitively. `PRE_ALL` is accepted
    /// as an alias of `PREA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = if upper == "PRE_ALL" { "PREA" } else { upper.as_str() };
        COMMAND_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| EnergyError::UnknownCommand(s.to_string()))
    }
}

/// A single scheduled DRAM command.
///
/// Produced by the scheduler and consumed once by the energy accumulator.
/// The payload is carried for trace fidelity only; it never affects power.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandRecord {
    kind: CommandType,
    addr: MappedAddress,
    issue_time: u64,
    finish_time: u64,
    data: [u32; PAYLOAD_WORDS],
}

impl CommandRecord {
    /// Creates a command record.
    ///
    /// # Panics
    ///
    /// Panics if `finish_time < issue_time`.
    pub fn new(
        kind: CommandType,
        addr: MappedAddress,
        issue_time: u64,
        finish_time: u64,
        data: [u32; PAYLOAD_WORDS],
    ) -> Self {
        assert!(
            issue_time <= finish_time,
            "command {} finishes at {} before it issues at {}",
            kind,
            finish_time,
            issue_time
        );
        Self {
            kind,
            addr,
            issue_time,
            finish_time,
            data,
        }
    }

    /// Creates a record with an empty payload whose finish time is
    /// `issue_time + latency`.
    ///
    /// # Panics
    ///
    /// Panics if `issue_time + latency` overflows `u64`.
    pub fn with_latency(kind: CommandType, addr: MappedAddress, issue_time: u64, latency: u64) -> Self {
        let finish_time = match issue_time.checked_add(latency) {
            Some(t) => t,
            None => panic!(
                "command {} issued at {} with latency {} overflows the cycle counter",
                kind, issue_time, latency
            ),
        };
        Self::new(kind, addr, issue_time, finish_time, [0; PAYLOAD_WORDS])
    }

    /// Command type.
    pub fn kind(&self) -> CommandType {
        self.kind
    }

    /// Structural target of the command.
    pub fn addr(&self) -> &MappedAddress {
        &self.addr
    }

    /// Cycle at which the command was issued.
    pub fn issue_time(&self) -> u64 {
        self.issue_time
    }

    /// Cycle at which the command completes.
    pub fn finish_time(&self) -> u64 {
        self.finish_time
    }

    /// Number of cycles between issue and completion.
    pub fn duration(&self) -> u64 {
        self.finish_time - self.issue_time
    }

    /// Data payload. Ignored by the energy model.
    pub fn data(&self) -> &[u32; PAYLOAD_WORDS] {
        &self.data
    }
}

impl fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {}, issueTime: {}, finishTime: {}, add: {}, data: ",
            self.kind, self.issue_time, self.finish_time, self.addr
        )?;
        for word in &self.data {
            write!(f, "{:x}", word)?;
        }
        Ok(())
    }
}
