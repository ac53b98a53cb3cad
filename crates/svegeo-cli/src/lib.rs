//! CLI library components for the geodata validator.

pub mod logging;
