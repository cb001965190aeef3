//! YAML cassettes capturing port interactions for later replay.
//!
//! A cassette is written by the recording adapters while the tool runs
//! against real collaborators and read back by the replaying adapters in
//! tests.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
