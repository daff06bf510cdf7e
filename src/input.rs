//! Input CSV reading.
//!
//! A header cell named `url` or `domain` (any column, case-insensitive)
//! selects that column as the token source; without one, every row's first
//! column is a token. Tokens are not validated here — a malformed token still
//! flows through so resolution can fail gracefully for it.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read the ordered token list from a CSV file.
pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read input file: {}", path.display()))?;
    parse_tokens(&content)
}

/// Parse the ordered token list from CSV content.
pub fn parse_tokens(content: &str) -> Result<Vec<String>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .context("Failed to parse input CSV")?;

    if records.is_empty() {
        return Ok(Vec::new());
    }

    let header: Vec<String> = records[0]
        .iter()
        .map(|c| c.trim().to_lowercase())
        .collect();
    let (start_idx, col_idx) = match header.iter().position(|h| h == "url" || h == "domain") {
        Some(idx) => (1, idx),
        None => (0, 0),
    };

    let tokens = records[start_idx..]
        .iter()
        .filter_map(|record| record.get(col_idx))
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect();

    Ok(tokens)
}
