//! Integration tests for the text report.

use dram_energy::common::{CommandRecord, CommandType, MappedAddress, PAYLOAD_WORDS};
use dram_energy::config::{DramSpec, Topology};
use dram_energy::power::EnergyAccumulator;
use pretty_assertions::assert_eq;

const REPORT_ORDER: [&str; 16] = [
    "cmdCount",
    "cmdCycles",
    "totalCycleCount",
    "totalActStandbyCycles",
    "totalPreStandbyCycles",
    "totalReadEnergy",
    "totalWriteEnergy",
    "totalPreCmdEnergy",
    "totalActCmdEnergy",
    "totalPrechargeStandbyEnergy",
    "totalActiveStandbyEnergy",
    "totalEnergy",
    "rdInterleavingCount",
    "wrInterleavingCount",
    "avgPower",
    "avgCurrent",
];

fn finalized_report() -> String {
    let spec = DramSpec::default();
    let mut acc = EnergyAccumulator::with_spec(&spec, &Topology::default()).unwrap();
    let addr = MappedAddress::new(0, 0, 0, 3, 0);
    for (kind, issue, finish) in [
        (CommandType::Act, 0, 5),
        (CommandType::Rd, 5, 15),
        (CommandType::Pre, 15, 20),
    ] {
        acc.record(&CommandRecord::new(kind, addr, issue, finish, [0; PAYLOAD_WORDS]));
    }
    acc.finalize(&spec, 20);
    acc.report()
}

fn line_name(line: &str) -> &str {
    line.split(':').next().unwrap_or("").trim()
}

/// Tests that each registered statistic appears exactly once, in order.
#[test]
fn test_report_order() {
    let report = finalized_report();
    let names: Vec<&str> = report
        .lines()
        .map(line_name)
        .filter(|name| REPORT_ORDER.contains(name))
        .collect();
    assert_eq!(names, REPORT_ORDER.to_vec());
}

/// Tests per-command element lines.
#[test]
fn test_report_command_lines() {
    let report = finalized_report();
    let value_of = |label: &str| {
        report
            .lines()
            .find(|l| line_name(l) == label)
            .map(|l| l.split(':').nth(1).unwrap_or("").trim().to_string())
    };
    assert_eq!(value_of("RD count").as_deref(), Some("1"));
    assert_eq!(value_of("RD cycles").as_deref(), Some("10"));
    assert_eq!(value_of("WR count").as_deref(), Some("0"));
    assert_eq!(value_of("totalActStandbyCycles").map(|v| v.starts_with("20")), Some(true));
    assert!(report.contains("RD_Interleaving.sameBankSameRow"));
    assert!(report.contains("WR_Interleaving.diffRank"));
}

/// Tests column layout and the optional description suffix.
#[test]
fn test_report_columns() {
    let report = finalized_report();
    let total = report
        .lines()
        .find(|l| line_name(l) == "totalEnergy")
        .unwrap();
    assert_eq!(total.find(':'), Some(40));
    assert!(total.ends_with("   pJ"));
    assert!(!total.contains('#'));

    let act = report
        .lines()
        .find(|l| line_name(l) == "totalActStandbyCycles")
        .unwrap();
    assert!(act.contains("  # Total number of cycles for which the rank was in active standby mode"));
}
