//! Energy Accumulator.
//!
//! Consumes the scheduler's command stream for one channel and keeps every
//! statistic of that channel up to date: per-command counts and cycles, the
//! command energy buckets, the rank standby intervals and the RD/WR
//! interleaving classes. Commands must arrive in non-decreasing issue order.

use super::interleaving::CmdInterleaving;
use super::model::EnergyModel;
use super::standby::{Interval, StandbyState, StandbyTracker};
use super::totals::TotalsCalculator;
use crate::common::{CommandRecord, CommandType, EnergyError, MappedAddress, PAYLOAD_WORDS};
use crate::config::{DramSpec, Topology};
use crate::stats::Statistics;
use log::{debug, info, trace, warn};

/// Per-channel energy accounting.
pub struct EnergyAccumulator {
    model: Box<dyn EnergyModel>,
    topology: Topology,
    stats: Statistics,
    standby: StandbyTracker,
    last_read: Option<MappedAddress>,
    last_write: Option<MappedAddress>,
    last_issue: u64,
    finalized_at: Option<u64>,
}

/// Adds a closed standby interval to the cycle and energy stats.
fn charge_interval(stats: &mut Statistics, model: &dyn EnergyModel, interval: Interval) {
    trace!(
        "rank {} closed {:?} interval of {} cycles",
        interval.rank,
        interval.state,
        interval.cycles
    );
    let energy = model.standby_energy(interval.state, interval.cycles);
    match interval.state {
        StandbyState::Active => {
            stats.total_act_standby_cycles += interval.cycles;
            stats.total_active_standby_energy += energy;
        }
        StandbyState::Precharged => {
            stats.total_pre_standby_cycles += interval.cycles;
            stats.total_precharge_standby_energy += energy;
        }
    }
}

impl EnergyAccumulator {
    /// Creates an accumulator for one channel of `topology`.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyError::InvalidTopology`] if any structural count is zero.
    pub fn new(model: Box<dyn EnergyModel>, topology: &Topology) -> Result<Self, EnergyError> {
        topology.validate()?;
        debug!(
            "energy accumulator: {} ranks x {} banks",
            topology.ranks, topology.banks
        );
        Ok(Self {
            model,
            topology: topology.clone(),
            stats: Statistics::new(),
            standby: StandbyTracker::new(topology.ranks, topology.banks),
            last_read: None,
            last_write: None,
            last_issue: 0,
            finalized_at: None,
        })
    }

    /// Creates an accumulator priced by `spec`'s IDD model.
    pub fn with_spec(spec: &DramSpec, topology: &Topology) -> Result<Self, EnergyError> {
        Self::new(Box::new(spec.clone()), topology)
    }

    /// Records one issued command. See [`EnergyAccumulator::record`].
    pub fn record_command(
        &mut self,
        kind: CommandType,
        addr: MappedAddress,
        issue_time: u64,
        finish_time: u64,
        data: [u32; PAYLOAD_WORDS],
    ) {
        self.record(&CommandRecord::new(kind, addr, issue_time, finish_time, data));
    }

    /// Records one issued command.
    ///
    /// # Panics
    ///
    /// Panics if the command's channel, rank or bank lies outside the
    /// topology.
    pub fn record(&mut self, cmd: &CommandRecord) {
        let kind = cmd.kind();
        let addr = *cmd.addr();
        let now = cmd.issue_time();
        self.check_addr(&addr);

        if now < self.last_issue {
            warn!(
                "command {} issued at {} after a command issued at {}",
                kind, now, self.last_issue
            );
        }
        self.last_issue = self.last_issue.max(now);

        let stats = &mut self.stats;
        let model = self.model.as_ref();
        let mut sink = |interval: Interval| charge_interval(stats, model, interval);
        self.standby.advance(now, &mut sink);

        match kind {
            CommandType::Act => self.standby.activate(addr.rank, addr.bank, now, &mut sink),
            CommandType::Pre => {
                self.standby
                    .schedule_precharge(addr.rank, Some(addr.bank), cmd.finish_time())
            }
            CommandType::PreAll => {
                self.standby
                    .schedule_precharge(addr.rank, None, cmd.finish_time())
            }
            // Auto-precharge closes the bank once the access completes.
            CommandType::Rda | CommandType::Wra => {
                self.standby
                    .schedule_precharge(addr.rank, Some(addr.bank), cmd.finish_time())
            }
            _ => {}
        }

        let duration = cmd.duration();
        self.stats.cmd_count.add(kind.index(), 1);
        self.stats.cmd_cycles.add(kind.index(), duration);

        let energy = self.model.command_energy(kind, duration);
        match kind {
            CommandType::Rd | CommandType::Rda => self.stats.total_read_energy += energy,
            CommandType::Wr | CommandType::Wra => self.stats.total_write_energy += energy,
            CommandType::Act => self.stats.total_act_cmd_energy += energy,
            CommandType::Pre | CommandType::PreAll => self.stats.total_pre_cmd_energy += energy,
            _ => {}
        }

        if kind.is_read() {
            if let Some(prev) = self.last_read.replace(addr) {
                let class = CmdInterleaving::classify(&prev, &addr);
                self.stats.rd_interleaving_count.add(class.index(), 1);
            }
        } else if kind.is_write() {
            if let Some(prev) = self.last_write.replace(addr) {
                let class = CmdInterleaving::classify(&prev, &addr);
                self.stats.wr_interleaving_count.add(class.index(), 1);
            }
        }

        trace!("recorded {}", cmd);
    }

    fn check_addr(&self, addr: &MappedAddress) {
        if addr.channel >= self.topology.channels {
            let err = EnergyError::IndexOutOfRange {
                what: "channel",
                index: addr.channel,
                len: self.topology.channels,
            };
            panic!("{}", err);
        }
        if addr.rank >= self.topology.ranks {
            let err = EnergyError::IndexOutOfRange {
                what: "rank",
                index: addr.rank,
                len: self.topology.ranks,
            };
            panic!("{}", err);
        }
        if addr.bank >= self.topology.banks {
            let err = EnergyError::IndexOutOfRange {
                what: "bank",
                index: addr.bank,
                len: self.topology.banks,
            };
            panic!("{}", err);
        }
    }

    /// Closes the run at `end_time` and computes the derived totals.
    ///
    /// Meant to be called once. Calling it again with the same `end_time`
    /// leaves the statistics unchanged; a different `end_time` would credit
    /// the extra span on top of the first finalize.
    pub fn finalize(&mut self, spec: &DramSpec, end_time: u64) {
        match self.finalized_at {
            Some(prev) if prev != end_time => warn!(
                "finalize called again with end time {} (previously {})",
                end_time, prev
            ),
            _ => {}
        }
        if end_time < self.last_issue {
            warn!(
                "end time {} precedes the last issued command at {}",
                end_time, self.last_issue
            );
        }

        let stats = &mut self.stats;
        let model = self.model.as_ref();
        self.standby
            .flush(end_time, &mut |interval| charge_interval(stats, model, interval));

        TotalsCalculator::new(spec).calculate_total(&mut self.stats, end_time);
        self.finalized_at = Some(end_time);

        info!(
            "finalized at cycle {}: {} commands, {:.3} pJ, {:.3} mW",
            end_time,
            self.stats.cmd_count.total(),
            self.stats.total_energy.value(),
            self.stats.avg_power.value()
        );
    }

    /// Read-only view of the channel's statistics.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Topology the accumulator was built for.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Current standby state of `rank`.
    pub fn rank_state(&self, rank: usize) -> StandbyState {
        self.standby.rank_state(rank)
    }

    /// Renders the channel's text report.
    pub fn report(&self) -> String {
        self.stats.report()
    }
}
