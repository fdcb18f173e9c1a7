//! Integration tests for the command-trace loader.

use dram_energy::common::{CommandType, EnergyError, MappedAddress};
use dram_energy::config::Config;
use dram_energy::sim::{end_of_trace, load_trace, parse_trace};
use std::io::Write;

/// Tests parsing with explicit and derived finish cycles.
#[test]
fn test_parse_trace() {
    let config = Config::default();
    let text = "\
# header comment
0 ACT 0 0 1 100 0 5

5 RD 0 0 1 100 8   # finish from latency
20 pre_all 0 0 0 0 0 25
";
    let cmds = parse_trace(text, &config).unwrap();
    assert_eq!(cmds.len(), 3);

    assert_eq!(cmds[0].kind(), CommandType::Act);
    assert_eq!(*cmds[0].addr(), MappedAddress::new(0, 0, 1, 100, 0));
    assert_eq!(cmds[0].finish_time(), 5);

    assert_eq!(cmds[1].kind(), CommandType::Rd);
    assert_eq!(cmds[1].finish_time(), 5 + config.latency.rd);
    assert_eq!(cmds[1].duration(), config.latency.rd);

    assert_eq!(cmds[2].kind(), CommandType::PreAll);
    assert_eq!(end_of_trace(&cmds), 25);
}

fn parse_error_line(text: &str) -> usize {
    match parse_trace(text, &Config::default()) {
        Err(EnergyError::TraceParse { line, .. }) => line,
        other => panic!("expected a parse error, got {:?}", other),
    }
}

/// Tests that malformed lines are reported with their line number.
#[test]
fn test_parse_errors() {
    assert_eq!(parse_error_line("0 NOP 0 0 0 0 0"), 1);
    assert_eq!(parse_error_line("0 ACT 0 0 0 0"), 1);
    assert_eq!(parse_error_line("0 ACT 0 0 x 0 0"), 1);
    assert_eq!(parse_error_line("\n0 ACT 0 0 8 0 0"), 2);
    assert_eq!(parse_error_line("0 ACT 1 0 0 0 0"), 1);
    assert_eq!(parse_error_line("10 RD 0 0 0 0 0 5"), 1);
    assert_eq!(parse_error_line("10 ACT 0 0 0 0 0\n5 RD 0 0 0 0 0"), 2);
}

/// Tests that a derived finish cycle past `u64::MAX` is a parse error.
#[test]
fn test_finish_cycle_overflow() {
    let text = format!("{} ACT 0 0 0 0 0", u64::MAX);
    match parse_trace(&text, &Config::default()) {
        Err(EnergyError::TraceParse { line, reason }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("overflows"), "{}", reason);
        }
        other => panic!("expected a parse error, got {:?}", other),
    }

    let explicit = format!("{} ACT 0 0 0 0 0 {}", u64::MAX, u64::MAX);
    let cmds = parse_trace(&explicit, &Config::default()).unwrap();
    assert_eq!(cmds[0].duration(), 0);
}

/// Tests loading a trace from a file.
#[test]
fn test_load_trace_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0 ACT 0 0 0 1 0").unwrap();
    writeln!(file, "5 WR 0 0 0 1 4").unwrap();
    file.flush().unwrap();

    let config = Config::default();
    let cmds = load_trace(file.path(), &config).unwrap();
    assert_eq!(cmds.len(), 2);
    assert_eq!(cmds[1].kind(), CommandType::Wr);
    assert_eq!(cmds[1].finish_time(), 5 + config.latency.wr);
}

/// Tests that a missing file surfaces as an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_trace("does/not/exist.trace", &Config::default());
    assert!(matches!(result, Err(EnergyError::Io(_))));
}

/// Tests the bundled sample trace.
#[test]
fn test_sample_trace() {
    let config = Config::from_file("configs/ddr3_800.toml").unwrap();
    let cmds = load_trace("traces/act_rd_pre.trace", &config).unwrap();
    assert_eq!(cmds.len(), 7);
    assert_eq!(end_of_trace(&cmds), 75);
}
