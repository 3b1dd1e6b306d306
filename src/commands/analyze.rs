//! Analyze command: scan a directory and summarize its CSV headers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    Cli,
    extract::{self, HeaderRecord},
    report, scan,
};

/// What a completed run produced.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub output_path: PathBuf,
    pub written: usize,
    pub skipped: usize,
}

pub fn run(cli: &Cli) -> Result<()> {
    let outcome = analyze_headers(&cli.directory)?;
    println!(
        "Analysis complete. Results saved to: {}",
        outcome.output_path.display()
    );
    Ok(())
}

/// Scans `directory` for `.csv` files, extracts each file's header row, and
/// writes the summary table next to the inputs.
///
/// Files that fail extraction are logged and skipped; one bad file never
/// aborts the batch. Only the directory precondition and the final write can
/// fail the run as a whole.
pub fn analyze_headers(directory: &Path) -> Result<AnalysisOutcome> {
    let candidates = scan::find_candidates(directory)?;
    info!(
        directory = %directory.display(),
        candidates = candidates.len(),
        "scanning for CSV headers"
    );

    let mut records: Vec<HeaderRecord> = Vec::with_capacity(candidates.len());
    let mut skipped = 0;
    for candidate in &candidates {
        match extract::extract_record(candidate) {
            Ok(record) => {
                debug!(file = %candidate.name, "extracted headers");
                records.push(record);
            }
            Err(e) => {
                warn!("Error processing {}: {:#}", candidate.name, e);
                skipped += 1;
            }
        }
    }

    let written = records.len();
    let output_path = report::write_summary(directory, &records)?;
    info!(output = %output_path.display(), written, skipped, "summary written");

    Ok(AnalysisOutcome {
        output_path,
        written,
        skipped,
    })
}
