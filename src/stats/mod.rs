//! Energy and timing statistics.
//!
//! `Statistics` owns every named stat cell of one channel's accounting. The
//! accumulator mutates the cells in place while commands stream in; everyone
//! else gets read-only references through the accessors below.

/// Text report rendering.
pub mod report;

/// Named scalar statistic.
pub mod scalar;

/// Fixed-length indexed statistic.
pub mod vector;

pub use scalar::ScalarStat;
pub use vector::VectorStat;

use crate::common::CommandType;
use crate::power::interleaving::CmdInterleaving;
use serde::Serialize;

/// The full set of statistics tracked for one channel.
#[derive(Clone, Debug)]
pub struct Statistics {
    pub(crate) cmd_count: VectorStat<u64>,
    pub(crate) cmd_cycles: VectorStat<u64>,
    pub(crate) total_cycle_count: ScalarStat<u64>,
    pub(crate) total_act_standby_cycles: ScalarStat<u64>,
    pub(crate) total_pre_standby_cycles: ScalarStat<u64>,
    pub(crate) total_read_energy: ScalarStat<f64>,
    pub(crate) total_write_energy: ScalarStat<f64>,
    pub(crate) total_pre_cmd_energy: ScalarStat<f64>,
    pub(crate) total_act_cmd_energy: ScalarStat<f64>,
    pub(crate) total_precharge_standby_energy: ScalarStat<f64>,
    pub(crate) total_active_standby_energy: ScalarStat<f64>,
    pub(crate) total_energy: ScalarStat<f64>,
    pub(crate) rd_interleaving_count: VectorStat<u64>,
    pub(crate) wr_interleaving_count: VectorStat<u64>,
    pub(crate) avg_power: ScalarStat<f64>,
    pub(crate) avg_current: ScalarStat<f64>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// Creates a zeroed statistics set.
    pub fn new() -> Self {
        Self {
            cmd_count: VectorStat::new(
                CommandType::COUNT,
                0,
                "cmdCount",
                "",
                "Count of each command type",
            ),
            cmd_cycles: VectorStat::new(
                CommandType::COUNT,
                0,
                "cmdCycles",
                "",
                "Number of memory cycles spent on each command type",
            ),
            total_cycle_count: ScalarStat::new(0, "totalCycleCount", "", ""),
            total_act_standby_cycles: ScalarStat::new(
                0,
                "totalActStandbyCycles",
                "",
                "Total number of cycles for which the rank was in active standby mode",
            ),
            total_pre_standby_cycles: ScalarStat::new(
                0,
                "totalPreStandbyCycles",
                "",
                "Total number of cycles for which the rank was in precharge standby mode",
            ),
            total_read_energy: ScalarStat::new(
                0.0,
                "totalReadEnergy",
                "pJ",
                "Energy of RD/RDA commands excluding active standby energy for the command duration",
            ),
            total_write_energy: ScalarStat::new(
                0.0,
                "totalWriteEnergy",
                "pJ",
                "Energy of WR/WRA commands excluding active standby energy for the command duration",
            ),
            total_pre_cmd_energy: ScalarStat::new(0.0, "totalPreCmdEnergy", "pJ", ""),
            total_act_cmd_energy: ScalarStat::new(0.0, "totalActCmdEnergy", "pJ", ""),
            total_precharge_standby_energy: ScalarStat::new(
                0.0,
                "totalPrechargeStandbyEnergy",
                "pJ",
                "Energy consumed while none of the banks were active",
            ),
            total_active_standby_energy: ScalarStat::new(
                0.0,
                "totalActiveStandbyEnergy",
                "pJ",
                "Energy consumed while at least one bank was active",
            ),
            total_energy: ScalarStat::new(0.0, "totalEnergy", "pJ", ""),
            rd_interleaving_count: VectorStat::new(
                CmdInterleaving::COUNT,
                0,
                "rdInterleavingCount",
                "",
                "Relation of each RD/RDA to the preceding RD/RDA",
            ),
            wr_interleaving_count: VectorStat::new(
                CmdInterleaving::COUNT,
                0,
                "wrInterleavingCount",
                "",
                "Relation of each WR/WRA to the preceding WR/WRA",
            ),
            avg_power: ScalarStat::new(0.0, "avgPower", "mW", ""),
            avg_current: ScalarStat::new(0.0, "avgCurrent", "mA", ""),
        }
    }

    /// Number of commands of each type, indexed by `CommandType`.
    pub fn cmd_count(&self) -> &VectorStat<u64> {
        &self.cmd_count
    }

    /// Cycles spent in each command type, indexed by `CommandType`.
    pub fn cmd_cycles(&self) -> &VectorStat<u64> {
        &self.cmd_cycles
    }

    /// Length of the run in memory cycles. Set by finalize.
    pub fn total_cycle_count(&self) -> &ScalarStat<u64> {
        &self.total_cycle_count
    }

    /// Rank-cycles spent with at least one bank open.
    pub fn total_act_standby_cycles(&self) -> &ScalarStat<u64> {
        &self.total_act_standby_cycles
    }

    /// Rank-cycles spent with every bank precharged.
    pub fn total_pre_standby_cycles(&self) -> &ScalarStat<u64> {
        &self.total_pre_standby_cycles
    }

    /// RD/RDA command energy, in pJ.
    pub fn total_read_energy(&self) -> &ScalarStat<f64> {
        &self.total_read_energy
    }

    /// WR/WRA command energy, in pJ.
    pub fn total_write_energy(&self) -> &ScalarStat<f64> {
        &self.total_write_energy
    }

    /// PRE/PREA command energy, in pJ.
    pub fn total_pre_cmd_energy(&self) -> &ScalarStat<f64> {
        &self.total_pre_cmd_energy
    }

    /// ACT command energy, in pJ.
    pub fn total_act_cmd_energy(&self) -> &ScalarStat<f64> {
        &self.total_act_cmd_energy
    }

    /// Precharge standby energy, in pJ.
    pub fn total_precharge_standby_energy(&self) -> &ScalarStat<f64> {
        &self.total_precharge_standby_energy
    }

    /// Active standby energy, in pJ.
    pub fn total_active_standby_energy(&self) -> &ScalarStat<f64> {
        &self.total_active_standby_energy
    }

    /// Sum of the six energy buckets, in pJ. Set by finalize.
    pub fn total_energy(&self) -> &ScalarStat<f64> {
        &self.total_energy
    }

    /// Reads binned by `CmdInterleaving` against the previous read.
    pub fn rd_interleaving_count(&self) -> &VectorStat<u64> {
        &self.rd_interleaving_count
    }

    /// Writes binned by `CmdInterleaving` against the previous write.
    pub fn wr_interleaving_count(&self) -> &VectorStat<u64> {
        &self.wr_interleaving_count
    }

    /// Average power over the run, in mW.
    pub fn avg_power(&self) -> &ScalarStat<f64> {
        &self.avg_power
    }

    /// Average current over the run, in mA.
    pub fn avg_current(&self) -> &ScalarStat<f64> {
        &self.avg_current
    }

    /// Renders the full text report.
    pub fn report(&self) -> String {
        report::render(self)
    }

    /// Captures every statistic as a serializable value.
    pub fn snapshot(&self) -> StatsSnapshot {
        let by_command = |v: &VectorStat<u64>| {
            CommandType::ALL
                .iter()
                .map(|&cmd| (cmd.name().to_string(), v.get(cmd.index())))
                .collect::<Vec<_>>()
        };
        let by_interleaving = |v: &VectorStat<u64>| {
            CmdInterleaving::ALL
                .iter()
                .map(|&class| (class.name().to_string(), v.get(class.index())))
                .collect::<Vec<_>>()
        };
        StatsSnapshot {
            cmd_count: by_command(&self.cmd_count),
            cmd_cycles: by_command(&self.cmd_cycles),
            total_cycle_count: self.total_cycle_count.value(),
            total_act_standby_cycles: self.total_act_standby_cycles.value(),
            total_pre_standby_cycles: self.total_pre_standby_cycles.value(),
            total_read_energy: self.total_read_energy.value(),
            total_write_energy: self.total_write_energy.value(),
            total_pre_cmd_energy: self.total_pre_cmd_energy.value(),
            total_act_cmd_energy: self.total_act_cmd_energy.value(),
            total_precharge_standby_energy: self.total_precharge_standby_energy.value(),
            total_active_standby_energy: self.total_active_standby_energy.value(),
            total_energy: self.total_energy.value(),
            rd_interleaving_count: by_interleaving(&self.rd_interleaving_count),
            wr_interleaving_count: by_interleaving(&self.wr_interleaving_count),
            avg_power: self.avg_power.value(),
            avg_current: self.avg_current.value(),
        }
    }
}

/// Plain-value copy of a [`Statistics`] set, for machine-readable output.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub cmd_count: Vec<(String, u64)>,
    pub cmd_cycles: Vec<(String, u64)>,
    pub total_cycle_count: u64,
    pub total_act_standby_cycles: u64,
    pub total_pre_standby_cycles: u64,
    pub total_read_energy: f64,
    pub total_write_energy: f64,
    pub total_pre_cmd_energy: f64,
    pub total_act_cmd_energy: f64,
    pub total_precharge_standby_energy: f64,
    pub total_active_standby_energy: f64,
    pub total_energy: f64,
    pub rd_interleaving_count: Vec<(String, u64)>,
    pub wr_interleaving_count: Vec<(String, u64)>,
    pub avg_power: f64,
    pub avg_current: f64,
}
