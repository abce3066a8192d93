mod bootstrap;

use std::path::Path;

use analyzer_core::models::BackupRecord;
use analyzer_core::settings::Settings;
use analyzer_data::analysis::{analyze_backup, BackupAnalysis};
use analyzer_data::reader::load_backup;
use analyzer_report::charts::{write_charts, ChartOutcome};
use analyzer_report::csv_export::write_csv_reports;
use analyzer_report::summary::print_summary;
use anyhow::{Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("Backup analyzer v{} starting", env!("CARGO_PKG_VERSION"));

    run(&settings)
}

/// Load, analyze and report on one backup file.
fn run(settings: &Settings) -> Result<()> {
    let record = load_backup(&settings.backup_file).with_context(|| {
        format!(
            "failed to load backup {}",
            settings.backup_file.display()
        )
    })?;
    let analysis = analyze_backup(&record);

    print_summary(&record, &analysis);

    emit_csvs(&record, &analysis, &settings.output_dir)?;
    emit_charts(&analysis, &settings.output_dir)?;

    println!();
    println!("Done!");
    Ok(())
}

fn emit_csvs(record: &BackupRecord, analysis: &BackupAnalysis, output_dir: &Path) -> Result<()> {
    let csvs = write_csv_reports(&record.logged_sessions, analysis, output_dir)
        .context("failed to write CSV reports")?;
    for path in &csvs {
        println!("CSV saved: {}", path.display());
    }
    println!("CSVs saved to {}/", output_dir.display());
    Ok(())
}

fn emit_charts(analysis: &BackupAnalysis, output_dir: &Path) -> Result<()> {
    match write_charts(analysis, output_dir).context("failed to render charts")? {
        ChartOutcome::Unavailable => {
            println!("Chart support not built in (enable the `charts` feature). Skipping plots.");
        }
        ChartOutcome::Rendered(paths) => {
            for path in &paths {
                println!("Plot saved: {}", path.display());
            }
        }
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
