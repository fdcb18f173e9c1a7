//! Test module organization.
//!
//! This module organizes all integration tests for the energy accounting
//! library.


/// Configuration loading tests.
mod config_tests;

/// Report rendering tests.
mod report_tests;



/// Command-trace loader tests.
mod trace_tests;
