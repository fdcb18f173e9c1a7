//! Text report.
//!
//! Sections appear in a fixed order: command counts, command cycles, total
//! cycles, standby cycles, energy buckets, total energy, interleaving
//! vectors, then average power and current. Groups are separated by a blank
//! line.

use super::Statistics;
use crate::common::CommandType;
use crate::power::interleaving::CmdInterleaving;
use std::fmt;

fn command_label(suffix: &'static str) -> impl Fn(usize) -> String {
    move |i| format!("{} {}", CommandType::ALL[i].name(), suffix)
}

fn interleaving_label(parent: &'static str) -> impl Fn(usize) -> String {
    move |i| format!("{}.{}", parent, CmdInterleaving::ALL[i].name())
}

fn line(out: &mut String, stat: &impl fmt::Display) {
    out.push_str(&stat.to_string());
    out.push('\n');
}

/// Renders `stats` as a multi-line report.
pub fn render(stats: &Statistics) -> String {
    let mut out = String::new();

    out.push_str(&stats.cmd_count.render(command_label("count")));
    out.push('\n');
    out.push_str(&stats.cmd_cycles.render(command_label("cycles")));
    out.push('\n');

    line(&mut out, &stats.total_cycle_count);
    out.push('\n');

    line(&mut out, &stats.total_act_standby_cycles);
    line(&mut out, &stats.total_pre_standby_cycles);
    out.push('\n');

    line(&mut out, &stats.total_read_energy);
    line(&mut out, &stats.total_write_energy);
    line(&mut out, &stats.total_pre_cmd_energy);
    line(&mut out, &stats.total_act_cmd_energy);
    line(&mut out, &stats.total_precharge_standby_energy);
    line(&mut out, &stats.total_active_standby_energy);
    line(&mut out, &stats.total_energy);
    out.push('\n');

    out.push_str(
        &stats
            .rd_interleaving_count
            .render(interleaving_label("RD_Interleaving")),
    );
    out.push('\n');
    out.push_str(
        &stats
            .wr_interleaving_count
            .render(interleaving_label("WR_Interleaving")),
    );
    out.push('\n');

    line(&mut out, &stats.avg_power);
    line(&mut out, &stats.avg_current);
    out
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
