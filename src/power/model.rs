//! Per-command energy model.
//!
//! The accumulator does not know how a command's energy is derived from the
//! device's electrical parameters; it asks an `EnergyModel`. `DramSpec`
//! provides the default IDD-based model: the current drawn above the
//! relevant standby baseline, times supply voltage, times elapsed time.

use super::standby::StandbyState;
use crate::common::CommandType;
use crate::config::DramSpec;

/// Source of command and standby energies, in pJ.
pub trait EnergyModel: Send {
    /// Energy of a command that occupies `duration` memory cycles.
    fn command_energy(&self, cmd: CommandType, duration: u64) -> f64;

    /// Energy of a rank idling in `state` for `cycles` memory cycles.
    fn standby_energy(&self, state: StandbyState, cycles: u64) -> f64;
}

impl DramSpec {
    /// Converts a cycle count into nanoseconds at this device's clock period.
    pub fn cycles_to_ns(&self, cycles: u64) -> f64 {
        cycles as f64 * self.clock_period_ns
    }

    /// Energy in pJ of drawing `current_ma` for `cycles`.
    fn energy(&self, current_ma: f64, cycles: u64) -> f64 {
        current_ma.max(0.0) * self.vdd * self.cycles_to_ns(cycles)
    }
}

impl EnergyModel for DramSpec {
    fn command_energy(&self, cmd: CommandType, duration: u64) -> f64 {
        let current = match cmd {
            CommandType::Act => self.idd0 - self.idd3n,
            CommandType::Pre | CommandType::PreAll => self.idd0 - self.idd2n,
            CommandType::Rd | CommandType::Rda => self.idd4r - self.idd3n,
            CommandType::Wr | CommandType::Wra => self.idd4w - self.idd3n,
            CommandType::Ref => self.idd5b - self.idd3n,
            CommandType::Pde | CommandType::Pdx | CommandType::Sre | CommandType::Srx => 0.0,
        };
        self.energy(current, duration)
    }

    fn standby_energy(&self, state: StandbyState, cycles: u64) -> f64 {
        match state {
            StandbyState::Active => self.energy(self.idd3n, cycles),
            StandbyState::Precharged => self.energy(self.idd2n, cycles),
        }
    }
}
