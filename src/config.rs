//! Energy model configuration.
//!
//! Loaded from TOML. Every field has a default so that a partial file (or an
//! empty one) yields a DDR3-800 x8 single-rank device.

use crate::common::{CommandType, EnergyError, Level};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_VDD: f64 = 1.5;
const DEFAULT_CLOCK_PERIOD_NS: f64 = 2.5;

const DEFAULT_BANKS: usize = 8;
const DEFAULT_ROWS: usize = 65536;
const DEFAULT_COLS: usize = 1024;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dram: DramSpec,
    #[serde(default)]
    pub topology: Topology,
    #[serde(default)]
    pub latency: LatencyConfig,
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, EnergyError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EnergyError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// DRAM electrical parameters.
///
/// Currents are in mA, voltage in V and the clock period in ns, so
/// `current * vdd * cycles * clock_period_ns` is an energy in pJ.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DramSpec {
    #[serde(default = "default_vdd")]
    pub vdd: f64,

    /// Length of one memory clock cycle (tCK). Converts cycle counts into
    /// elapsed time when averaging power.
    #[serde(default = "default_clock_period")]
    pub clock_period_ns: f64,

    /// One-bank activate-precharge current.
    #[serde(default = "d_idd0")]
    pub idd0: f64,

    /// Precharge standby current.
    #[serde(default = "d_idd2n")]
    pub idd2n: f64,

    /// Active standby current.
    #[serde(default = "d_idd3n")]
    pub idd3n: f64,

    /// Burst read current.
    #[serde(default = "d_idd4r")]
    pub idd4r: f64,

    /// Burst write current.
    #[serde(default = "d_idd4w")]
    pub idd4w: f64,

    /// Burst refresh current.
    #[serde(default = "d_idd5b")]
    pub idd5b: f64,
}

impl Default for DramSpec {
    fn default() -> Self {
        Self {
            vdd: default_vdd(),
            clock_period_ns: default_clock_period(),
            idd0: d_idd0(),
            idd2n: d_idd2n(),
            idd3n: d_idd3n(),
            idd4r: d_idd4r(),
            idd4w: d_idd4w(),
            idd5b: d_idd5b(),
        }
    }
}

fn default_vdd() -> f64 {
    DEFAULT_VDD
}

fn default_clock_period() -> f64 {
    DEFAULT_CLOCK_PERIOD_NS
}

fn d_idd0() -> f64 {
    55.0
}

fn d_idd2n() -> f64 {
    32.0
}

fn d_idd3n() -> f64 {
    38.0
}

fn d_idd4r() -> f64 {
    157.0
}

fn d_idd4w() -> f64 {
    128.0
}

fn d_idd5b() -> f64 {
    155.0
}

/// Structural counts of the simulated memory system, one per [`Level`].
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Topology {
    #[serde(default = "d_one")]
    pub channels: usize,

    #[serde(default = "d_one")]
    pub ranks: usize,

    #[serde(default = "d_banks")]
    pub banks: usize,

    #[serde(default = "d_rows")]
    pub rows: usize,

    #[serde(default = "d_cols")]
    pub cols: usize,
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            channels: d_one(),
            ranks: d_one(),
            banks: d_banks(),
            rows: d_rows(),
            cols: d_cols(),
        }
    }
}

impl Topology {
    /// Returns the number of structures at the given level.
    pub fn count(&self, level: Level) -> usize {
        match level {
            Level::Channel => self.channels,
            Level::Rank => self.ranks,
            Level::Bank => self.banks,
            Level::Row => self.rows,
            Level::Col => self.cols,
        }
    }

    /// Checks that every level has at least one structure.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyError::InvalidTopology`] naming the first empty level.
    pub fn validate(&self) -> Result<(), EnergyError> {
        match Level::ALL.iter().find(|&&level| self.count(level) == 0) {
            Some(level) => Err(EnergyError::InvalidTopology(format!(
                "{} count must be at least 1",
                level.name()
            ))),
            None => Ok(()),
        }
    }
}

fn d_one() -> usize {
    1
}

fn d_banks() -> usize {
    DEFAULT_BANKS
}

fn d_rows() -> usize {
    DEFAULT_ROWS
}

fn d_cols() -> usize {
    DEFAULT_COLS
}

/// Fixed latency, in memory cycles, of each command type.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LatencyConfig {
    #[serde(default = "d_t_act")]
    pub act: u64,

    #[serde(default = "d_t_pre")]
    pub pre: u64,

    #[serde(default = "d_t_pre")]
    pub prea: u64,

    #[serde(default = "d_t_rw")]
    pub rd: u64,

    #[serde(default = "d_t_rw_ap")]
    pub rda: u64,

    #[serde(default = "d_t_rw")]
    pub wr: u64,

    #[serde(default = "d_t_rw_ap")]
    pub wra: u64,

    #[serde(default = "d_t_rfc", rename = "ref")]
    pub refresh: u64,

    #[serde(default = "d_t_pd")]
    pub pde: u64,

    #[serde(default = "d_t_pd")]
    pub pdx: u64,

    #[serde(default = "d_t_sr")]
    pub sre: u64,

    #[serde(default = "d_t_sr")]
    pub srx: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            act: d_t_act(),
            pre: d_t_pre(),
            prea: d_t_pre(),
            rd: d_t_rw(),
            rda: d_t_rw_ap(),
            wr: d_t_rw(),
            wra: d_t_rw_ap(),
            refresh: d_t_rfc(),
            pde: d_t_pd(),
            pdx: d_t_pd(),
            sre: d_t_sr(),
            srx: d_t_sr(),
        }
    }
}

impl LatencyConfig {
    /// Returns the latency of the given command type.
    pub fn latency(&self, cmd: CommandType) -> u64 {
        match cmd {
            CommandType::Act => self.act,
            CommandType::Pre => self.pre,
            CommandType::PreAll => self.prea,
            CommandType::Rd => self.rd,
            CommandType::Rda => self.rda,
            CommandType::Wr => self.wr,
            CommandType::Wra => self.wra,
            CommandType::Ref => self.refresh,
            CommandType::Pde => self.pde,
            CommandType::Pdx => self.pdx,
            CommandType::Sre => self.sre,
            CommandType::Srx => self.srx,
        }
    }
}

fn d_t_act() -> u64 {
    5
}

fn d_t_pre() -> u64 {
    5
}

fn d_t_rw() -> u64 {
    10
}

fn d_t_rw_ap() -> u64 {
    15
}

fn d_t_rfc() -> u64 {
    64
}

fn d_t_pd() -> u64 {
    3
}

fn d_t_sr() -> u64 {
    5
}
