//! Candidate discovery: non-recursive listing of `.csv` directory entries.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::report::OUTPUT_FILE_NAME;

/// A directory entry selected for header extraction.
#[derive(Debug, Clone)]
pub struct InputFile {
    /// File name including extension, lossily decoded. Used for display and
    /// for the output row.
    pub name: String,
    /// Exact OS path, used for I/O.
    pub path: PathBuf,
}

/// Lists the entries of `dir` whose names end in the literal suffix `.csv`
/// (case-sensitive), in whatever order the filesystem yields them.
///
/// The match is on the name only, not the content; entries that are not
/// readable CSV files fail later, at extraction. The reserved output name is
/// excluded so a previous run's summary never feeds the next one.
pub fn find_candidates(dir: &Path) -> Result<Vec<InputFile>> {
    if !dir.is_dir() {
        bail!("directory not found: {}", dir.display());
    }

    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read an entry of {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".csv") && name != OUTPUT_FILE_NAME {
            candidates.push(InputFile {
                name,
                path: entry.path(),
            });
        }
    }

    Ok(candidates)
}
