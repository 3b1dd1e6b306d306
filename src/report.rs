//! Summary serialization: the fixed-shape output table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::extract::{COLUMN_SLOTS, HeaderRecord};

/// Name of the summary file written into the scanned directory.
pub const OUTPUT_FILE_NAME: &str = "header_analysis.csv";

const SUMMARY_HEADER: [&str; COLUMN_SLOTS + 1] = [
    "File Name",
    "Column 1 Header",
    "Column 2 Header",
    "Column 3 Header",
    "Column 4 Header",
    "Column 5 Header",
    "Column 6 Header",
    "Column 7 Header",
    "Column 8 Header",
];

/// Writes the summary table to `<dir>/header_analysis.csv`, replacing any
/// existing file of that name. The header row is always written, even for an
/// empty batch; `None` slots render as empty fields.
pub fn write_summary(dir: &Path, records: &[HeaderRecord]) -> Result<PathBuf> {
    let output_path = dir.join(OUTPUT_FILE_NAME);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;

    writer
        .write_record(SUMMARY_HEADER)
        .with_context(|| format!("failed to write to {}", output_path.display()))?;

    for record in records {
        let mut row = Vec::with_capacity(SUMMARY_HEADER.len());
        row.push(record.file_name.as_str());
        for slot in &record.columns {
            row.push(slot.as_deref().unwrap_or(""));
        }
        writer
            .write_record(&row)
            .with_context(|| format!("failed to write to {}", output_path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", output_path.display()))?;

    Ok(output_path)
}
