use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a schedule CSV file into raw records.
///
/// Plain comma splitting, no quoting: the schedule format never quotes
/// fields. Blank lines (including the trailing newline) are skipped.
pub fn read_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not open {}", path.display()))?;
    Ok(split_records(&raw))
}

fn split_records(raw: &str) -> Vec<Vec<String>> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}
