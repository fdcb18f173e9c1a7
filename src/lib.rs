//! DRAM Energy Accounting Library.
//!
//! This crate implements the energy and power accounting layer of a
//! cycle-level DRAM simulator. It consumes a time-ordered stream of already
//! scheduled DRAM commands and produces per-command counts and cycles,
//! energy buckets, standby cycle attribution, and the resulting average
//! power and current of each memory channel.
//!
//! # Architecture
//!
//! * **Stats**: generic named scalar and vector statistic cells.
//! * **Accumulator**: per-command bucketing plus a per-rank standby state
//!   machine that attributes idle cycles interval by interval.
//! * **Totals**: end-of-run energy, power and current.
//! * **Report**: fixed-order, fixed-width text rendering.
//!
//! # Modules
//!
//! * `common`: Addresses, command records and error handling.
//! * `config`: Configuration loading and parsing.
//! * `power`: Energy model, standby tracking, accumulation and totals.
//! * `sim`: Command-trace loading.
//! * `stats`: Statistic cells, the statistics aggregate and the report.

/// Shared types: structural addresses, command records and errors.
pub mod common;

/// Configuration system for DRAM electrical parameters, topology and
/// command latencies.
///
/// Loads and parses TOML configuration files.
pub mod config;

/// Energy model, standby tracking, per-channel accumulation and totals.
pub mod power;

/// Command-trace loading.
pub mod sim;

/// Statistic cells and reporting.
///
/// Tracks command counts, cycles, standby cycles, energy buckets and the
/// derived power figures.
pub mod stats;
