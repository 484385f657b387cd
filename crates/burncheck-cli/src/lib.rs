//! burncheck-cli
//!
//! Everything between the `burncheck` binary and the engine: config loading,
//! answer file decoding and text reports.

pub mod answers;
pub mod config;
pub mod report;
