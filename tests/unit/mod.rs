//! Unit test suites for bed-tramming configuration.

mod config_parsing;
mod config_validation;
