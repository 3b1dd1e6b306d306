//! Header extraction: the first row of a candidate file, padded or truncated
//! to the fixed slot count.

use anyhow::{Context, Result, bail};

use crate::scan::InputFile;

/// Number of header slots recorded per file.
pub const COLUMN_SLOTS: usize = 8;

/// One summary row: a file name and its first eight column headers.
///
/// `None` marks a slot past the file's last column. A header row with an
/// empty field yields `Some("")` for that slot instead; both render as empty
/// output fields, but only the latter is a real column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    pub file_name: String,
    pub columns: [Option<String>; COLUMN_SLOTS],
}

/// Reads the header row of `file` and folds it into a [`HeaderRecord`].
///
/// Fails on files that cannot be opened, hold no rows at all, or whose first
/// row is not parseable as CSV. The caller decides what a failure aborts.
pub fn extract_record(file: &InputFile) -> Result<HeaderRecord> {
    let mut reader = csv::Reader::from_path(&file.path)
        .with_context(|| format!("failed to open {}", file.path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to parse the header row of {}", file.path.display()))?;

    if headers.is_empty() {
        bail!("{} has no header row", file.path.display());
    }

    let mut columns: [Option<String>; COLUMN_SLOTS] = Default::default();
    for (slot, header) in columns.iter_mut().zip(headers.iter()) {
        *slot = Some(header.to_string());
    }

    Ok(HeaderRecord {
        file_name: file.name.clone(),
        columns,
    })
}
