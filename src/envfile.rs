//! Line-oriented `KEY=VALUE` parsing of the source `.env` file.
//!
//! Only the simple form is understood: one pair per line, `#` comments,
//! and at most one layer of matching quotes around the value. Multi-line
//! values, escapes and `${VAR}` interpolation are not supported.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::EnvFileError;

/// One `KEY=VALUE` line of the source file, after quote stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub key: String,
    pub value: String,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// Strip one layer of matching single or double quotes.
pub fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Parse a single line into `(key, value)`.
///
/// Returns `None` for blank lines, comments and lines without `=`.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some((key.to_string(), strip_quotes(value).to_string()))
}

/// Parse file content into entries, in file order.
pub fn parse_str(content: &str) -> Vec<RawEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            parse_line(line).map(|(key, value)| RawEntry {
                key,
                value,
                line: idx + 1,
            })
        })
        .collect()
}

/// Read and parse the file at `path`.
///
/// A missing or unreadable file is fatal; nothing is returned for partial reads.
pub fn load(path: &Path) -> Result<Vec<RawEntry>> {
    let content = fs::read_to_string(path).map_err(|source| EnvFileError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    let entries = parse_str(&content);
    debug!(
        path = %path.display(),
        lines = content.lines().count(),
        entries = entries.len(),
        "parsed env file"
    );
    Ok(entries)
}
