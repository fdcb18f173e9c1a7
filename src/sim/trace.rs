//! Command Trace Loader.
//!
//! Reads a scheduled-command trace from text. One command per line:
//!
//! ```text
//! <issue> <CMD> <channel> <rank> <bank> <row> <col> [<finish>]
//! ```
//!
//! Blank lines and anything after `#` are ignored. When the finish cycle is
//! omitted it is derived from the configured latency of the command.

use crate::common::{CommandRecord, CommandType, EnergyError, Level, MappedAddress, PAYLOAD_WORDS};
use crate::config::Config;
use log::debug;
use std::fs;
use std::path::Path;

fn parse_err(line: usize, reason: impl Into<String>) -> EnergyError {
    EnergyError::TraceParse {
        line,
        reason: reason.into(),
    }
}

fn parse_u64(field: &str, what: &str, line: usize) -> Result<u64, EnergyError> {
    field
        .parse::<u64>()
        .map_err(|_| parse_err(line, format!("invalid {} '{}'", what, field)))
}

/// Parses a single non-empty trace line.
fn parse_line(text: &str, line: usize, config: &Config) -> Result<CommandRecord, EnergyError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 7 && fields.len() != 8 {
        return Err(parse_err(
            line,
            format!("expected 7 or 8 fields, found {}", fields.len()),
        ));
    }

    let issue = parse_u64(fields[0], "issue cycle", line)?;
    let kind: CommandType = fields[1]
        .parse()
        .map_err(|e: EnergyError| parse_err(line, e.to_string()))?;

    let mut idx = [0usize; Level::COUNT];
    for (slot, level) in Level::ALL.iter().enumerate() {
        let value = parse_u64(fields[2 + slot], level.name(), line)? as usize;
        let count = config.topology.count(*level);
        if value >= count {
            return Err(parse_err(
                line,
                format!("{} {} outside topology (count {})", level.name(), value, count),
            ));
        }
        idx[slot] = value;
    }
    let addr = MappedAddress::new(idx[0], idx[1], idx[2], idx[3], idx[4]);

    let finish = match fields.get(7) {
        Some(f) => parse_u64(f, "finish cycle", line)?,
        None => issue.checked_add(config.latency.latency(kind)).ok_or_else(|| {
            parse_err(
                line,
                format!("finish cycle of {} issued at {} overflows", kind, issue),
            )
        })?,
    };
    if finish < issue {
        return Err(parse_err(
            line,
            format!("finish cycle {} precedes issue cycle {}", finish, issue),
        ));
    }

    Ok(CommandRecord::new(kind, addr, issue, finish, [0; PAYLOAD_WORDS]))
}

/// Parses a whole trace.
///
/// # Errors
///
/// Returns [`EnergyError::TraceParse`] naming the first offending line
/// (1-based), including a line whose issue cycle is earlier than the
/// previous command's.
pub fn parse_trace(text: &str, config: &Config) -> Result<Vec<CommandRecord>, EnergyError> {
    let mut commands = Vec::new();
    let mut last_issue = 0;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let cmd = parse_line(content, line, config)?;
        if cmd.issue_time() < last_issue {
            return Err(parse_err(
                line,
                format!(
                    "issue cycle {} is earlier than previous issue cycle {}",
                    cmd.issue_time(),
                    last_issue
                ),
            ));
        }
        last_issue = cmd.issue_time();
        commands.push(cmd);
    }

    debug!("parsed {} commands", commands.len());
    Ok(commands)
}

/// Reads and parses a trace file.
pub fn load_trace<P: AsRef<Path>>(path: P, config: &Config) -> Result<Vec<CommandRecord>, EnergyError> {
    let text = fs::read_to_string(path)?;
    parse_trace(&text, config)
}

/// Latest finish cycle in `commands`, or 0 for an empty trace.
pub fn end_of_trace(commands: &[CommandRecord]) -> u64 {
    commands.iter().map(|c| c.finish_time()).max().unwrap_or(0)
}
