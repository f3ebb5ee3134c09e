//! Harness for the configuration unit suites under `tests/unit/`.

mod unit;
