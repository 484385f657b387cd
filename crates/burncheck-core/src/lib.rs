//! burncheck-core
//!
//! Pure domain types shared by the scoring engine, the history store and the
//! CLI. No I/O; this is the shared vocabulary of the burncheck system.

pub mod error;
pub mod models;
