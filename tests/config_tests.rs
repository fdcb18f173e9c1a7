//! Integration tests for configuration loading.

use dram_energy::common::{CommandType, EnergyError, Level};
use dram_energy::config::{Config, Topology};

/// Tests that an empty file yields the defaults.
#[test]
fn test_empty_config_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.dram.clock_period_ns, 2.5);
    assert_eq!(config.topology.count(Level::Bank), 8);
}

/// Tests partial overrides.
#[test]
fn test_partial_override() {
    let text = "
[dram]
vdd = 1.2
clock_period_ns = 0.625

[topology]
ranks = 2

[latency]
ref = 280
";
    let config = Config::from_toml_str(text).unwrap();
    assert_eq!(config.dram.vdd, 1.2);
    assert_eq!(config.dram.clock_period_ns, 0.625);
    assert_eq!(config.dram.idd0, Config::default().dram.idd0);
    assert_eq!(config.topology.ranks, 2);
    assert_eq!(config.topology.banks, 8);
    assert_eq!(config.latency.latency(CommandType::Ref), 280);
    assert_eq!(config.latency.latency(CommandType::Rd), 10);
}

/// Tests that malformed TOML is rejected.
#[test]
fn test_invalid_toml() {
    let result = Config::from_toml_str("[dram]\nvdd = \"high\"");
    assert!(matches!(result, Err(EnergyError::Config(_))));
}

/// Tests topology validation.
#[test]
fn test_topology_validation() {
    assert!(Topology::default().validate().is_ok());
    let err = Topology {
        ranks: 0,
        ..Topology::default()
    }
    .validate()
    .unwrap_err();
    assert_eq!(err.to_string(), "invalid topology: rank count must be at least 1");
}

/// Tests that the bundled config matches the defaults.
#[test]
fn test_bundled_config() {
    let config = Config::from_file("configs/ddr3_800.toml").unwrap();
    assert_eq!(config, Config::default());
}
