//! Unit test harness for sonar-stepper.
//!
//! This module organizes configuration tests that exercise the public API only.

mod config_parsing;
mod config_validation;
