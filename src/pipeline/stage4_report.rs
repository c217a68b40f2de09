use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;
use tracing::info;

use crate::model::{AssociationMode, ScoreReport};
use crate::report::json::{SummaryData, render_summary_json};
use crate::report::render_radar_tsv;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    All,
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes `radar.tsv` always, plus `report.txt` and/or `summary.json` per `format`.
/// Returns the written paths in write order.
pub fn write_reports(
    report: &ScoreReport,
    mode: AssociationMode,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let radar_path = out_dir.join("radar.tsv");
    write_text(&radar_path, &render_radar_tsv(report))?;
    written.push(radar_path);

    if matches!(format, ReportFormat::All | ReportFormat::Text) {
        let report_path = out_dir.join("report.txt");
        write_text(&report_path, &render_report_text(report, mode))?;
        written.push(report_path);
    }

    if matches!(format, ReportFormat::All | ReportFormat::Json) {
        let summary_path = out_dir.join("summary.json");
        let json = render_summary_json(&SummaryData::new(report, mode))?;
        write_text(&summary_path, &json)?;
        written.push(summary_path);
    }

    info!(files = written.len(), out_dir = %out_dir.display(), "reports written");
    Ok(written)
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
