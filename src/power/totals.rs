//! End-of-run totals.
//!
//! Energy buckets are in pJ and cycles convert to ns through the clock
//! period, so `pJ / ns` yields average power directly in mW and dividing by
//! VDD gives the average current in mA.

use crate::config::DramSpec;
use crate::stats::Statistics;

/// Derives total energy, average power and average current.
pub struct TotalsCalculator<'a> {
    spec: &'a DramSpec,
}

impl<'a> TotalsCalculator<'a> {
    /// Creates a calculator for a device described by `spec`.
    ///
    /// # Arguments
    ///
    /// * `spec` - Supplies the clock period and supply voltage.
    pub fn new(spec: &'a DramSpec) -> Self {
        Self { spec }
    }

    /// Factor `K` turning a cycle count into the time base of the power
    /// average: the clock period in ns.
    pub fn conversion_factor(&self) -> f64 {
        self.spec.clock_period_ns
    }

    /// Average power in mW of `energy_pj` spent over `cycles`.
    ///
    /// Zero when no time has elapsed.
    pub fn average_power(&self, energy_pj: f64, cycles: u64) -> f64 {
        let elapsed = self.conversion_factor() * cycles as f64;
        if elapsed > 0.0 {
            energy_pj / elapsed
        } else {
            0.0
        }
    }

    /// Average current in mA drawn at `power_mw`.
    pub fn average_current(&self, power_mw: f64) -> f64 {
        if self.spec.vdd != 0.0 {
            power_mw / self.spec.vdd
        } else {
            0.0
        }
    }

    /// Fills in the derived totals of `stats` for a run ending at `end_time`.
    ///
    /// Standby intervals must already be flushed up to `end_time`.
    pub fn calculate_total(&self, stats: &mut Statistics, end_time: u64) {
        let mut total = stats.total_act_cmd_energy.clone()
            + stats.total_pre_cmd_energy.clone()
            + stats.total_active_standby_energy.clone()
            + stats.total_precharge_standby_energy.clone()
            + stats.total_read_energy.clone()
            + stats.total_write_energy.clone();
        total.set_name("totalEnergy");
        stats.total_energy = total;

        stats.total_cycle_count.set_value(end_time);

        let power = self.average_power(stats.total_energy.value(), end_time);
        stats.avg_power.set_value(power);
        stats.avg_current.set_value(self.average_current(power));
    }
}
