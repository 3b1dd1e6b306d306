pub mod commands;
pub mod extract;
pub mod report;
pub mod scan;

use clap::Parser;
use std::path::PathBuf;

/// Summarize the column headers of every CSV file in a directory.
///
/// Scans DIRECTORY (non-recursively) for files ending in `.csv`, reads the
/// header row of each, and writes `header_analysis.csv` into the same
/// directory: one row per input file, listing the file name and its first
/// eight column headers. Files that cannot be parsed are skipped with a
/// diagnostic on stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for `.csv` files.
    pub directory: PathBuf,
}
