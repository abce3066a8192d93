//! Data layer for the backup analyzer.
//!
//! Loads a tracking-app backup from disk and derives the aggregates the
//! reports are built from: 1RM history, session counts, muscle volume,
//! weekly compliance and top-set progression.

pub mod aggregator;
pub mod analysis;
pub mod compliance;
pub mod progress;
pub mod reader;

pub use analyzer_core as core;
