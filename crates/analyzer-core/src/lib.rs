//! Shared building blocks for the backup analyzer.
//!
//! Holds the backup data model, the error type, command-line settings,
//! value formatting helpers and the embedded exercise-to-muscle table.

pub mod error;
pub mod formatting;
pub mod models;
pub mod muscles;
pub mod settings;

pub use error::{AnalyzerError, Result};
