//! Report layer for the backup analyzer.
//!
//! Turns a [`BackupAnalysis`](analyzer_data::analysis::BackupAnalysis) into
//! CSV files, optional PNG charts (behind the `charts` feature) and the
//! console summary.

pub mod charts;
pub mod csv_export;
pub mod summary;

pub use analyzer_core as core;
