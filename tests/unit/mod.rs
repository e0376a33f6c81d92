//! Unit test harness for leadscrew-indexer.
//!
//! This module organizes configuration tests that exercise the public API.

mod config_parsing;
mod config_validation;
