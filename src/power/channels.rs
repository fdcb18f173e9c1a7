//! Multi-channel accounting.
//!
//! Channels share nothing: each owns its own accumulator and statistics, and
//! commands are routed by their channel index.

use super::accumulator::EnergyAccumulator;
use crate::common::{CommandRecord, EnergyError};
use crate::config::{Config, DramSpec};
use log::debug;

/// Energy accounting for every channel of a memory system.
///
/// Holds one [`EnergyAccumulator`] per configured channel, indexed by the
/// channel component of each command's address.
pub struct ChannelEnergy {
    channels: Vec<EnergyAccumulator>,
}

impl ChannelEnergy {
    /// Creates one accumulator per configured channel, each priced by the
    /// configured `DramSpec`.
    pub fn new(config: &Config) -> Result<Self, EnergyError> {
        config.topology.validate()?;
        let channels = (0..config.topology.channels)
            .map(|_| EnergyAccumulator::with_spec(&config.dram, &config.topology))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("accounting {} channel(s)", channels.len());
        Ok(Self { channels })
    }

    /// Routes `cmd` to the accumulator of its channel.
    ///
    /// # Panics
    ///
    /// Panics if the command's channel is not configured.
    pub fn record(&mut self, cmd: &CommandRecord) {
        let channel = cmd.addr().channel;
        let len = self.channels.len();
        match self.channels.get_mut(channel) {
            Some(acc) => acc.record(cmd),
            None => panic!(
                "{}",
                EnergyError::IndexOutOfRange {
                    what: "channel",
                    index: channel,
                    len,
                }
            ),
        }
    }

    /// Finalizes every channel at the same `end_time`.
    pub fn finalize(&mut self, spec: &DramSpec, end_time: u64) {
        for acc in &mut self.channels {
            acc.finalize(spec, end_time);
        }
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns `true` if no channel is configured.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Accumulator of channel `index`, if configured.
    pub fn channel(&self, index: usize) -> Option<&EnergyAccumulator> {
        self.channels.get(index)
    }

    /// Iterates over the channel accumulators in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, EnergyAccumulator> {
        self.channels.iter()
    }

    /// Renders every channel's report under a `Channel N` heading.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for (i, acc) in self.channels.iter().enumerate() {
            out.push_str(&format!("Channel {}\n", i));
            out.push_str(&acc.report());
            out.push('\n');
        }
        out
    }
}
