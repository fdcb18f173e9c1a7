//! Energy and power accounting.
//!
//! Data flows scheduler -> [`EnergyAccumulator`] (per command) ->
//! [`TotalsCalculator`] (once, at finalize) -> report.

/// Per-channel command accumulator.
pub mod accumulator;

/// Independent accumulators for multiple channels.
pub mod channels;

/// RD/WR interleaving classification.
pub mod interleaving;

/// Energy model collaborator and the IDD-based default.
pub mod model;

/// Rank standby state machine.
pub mod standby;

/// Total energy, average power and current.
pub mod totals;

pub use accumulator::EnergyAccumulator;
pub use channels::ChannelEnergy;
pub use interleaving::CmdInterleaving;
pub use model::EnergyModel;
pub use standby::StandbyState;
pub use totals::TotalsCalculator;
