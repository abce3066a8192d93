use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Directory reports are written to when `--output-dir` is absent or empty.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Analyze powerlifting tracker backup files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "analyze-backup",
    about = "Analyze powerlifting tracker backup files into CSV reports and charts",
    version
)]
pub struct Settings {
    /// Backup JSON file exported by the tracking app
    #[arg(value_name = "BACKUP_FILE")]
    pub backup_file: PathBuf,

    /// Directory for generated reports (created if missing)
    #[arg(
        long,
        value_name = "DIR",
        num_args = 0..=1,
        default_value = DEFAULT_OUTPUT_DIR,
        default_missing_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse an explicit argument list (first element is the program name).
    ///
    /// Used by tests; the binary goes through [`Parser::parse`] so that clap
    /// prints usage and exits on bad input.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Log level after applying `--debug`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
