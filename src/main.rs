//! DRAM Energy Accounting CLI.
//!
//! Replays a scheduled-command trace through the energy accumulator of each
//! channel and prints the resulting statistics.
//!
//! # Usage
//!
//! ```text
//! dram-energy --config configs/ddr3_800.toml --trace traces/act_rd_pre.trace
//! ```
//!
//! Without `--end-time` the run ends at the latest finish cycle of the
//! trace. `--json` also writes every statistic to a JSON file.

use clap::Parser;
use log::{error, info};
use std::{fs, process};

use dram_energy::common::EnergyError;
use dram_energy::config::Config;
use dram_energy::power::ChannelEnergy;
use dram_energy::sim::trace;

/// Command-line arguments for the energy accounting tool.
#[derive(Parser, Debug)]
#[command(author, version, about = "DRAM energy and power accounting")]
struct Args {
    #[arg(short, long, default_value = "configs/ddr3_800.toml")]
    config: String,

    #[arg(short, long)]
    trace: String,

    /// Cycle at which the run ends. Defaults to the last finish cycle.
    #[arg(short, long)]
    end_time: Option<u64>,

    /// Write a JSON snapshot of all statistics to this path.
    #[arg(long)]
    json: Option<String>,
}

fn run(args: &Args) -> Result<(), EnergyError> {
    let config = Config::from_file(&args.config)?;
    let commands = trace::load_trace(&args.trace, &config)?;
    info!("loaded {} commands from {}", commands.len(), args.trace);

    let mut energy = ChannelEnergy::new(&config)?;
    for cmd in &commands {
        energy.record(cmd);
    }

    let end_time = args
        .end_time
        .unwrap_or_else(|| trace::end_of_trace(&commands));
    energy.finalize(&config.dram, end_time);

    print!("{}", energy.report());

    if let Some(path) = &args.json {
        let snapshots: Vec<_> = energy.iter().map(|acc| acc.stats().snapshot()).collect();
        fs::write(path, serde_json::to_string_pretty(&snapshots)?)?;
        info!("wrote statistics to {}", path);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
