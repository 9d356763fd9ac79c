//! Line-oriented input loading.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::{DataRecord, IndexRecord};

const BOM: char = '\u{feff}';

/// What to do with a line that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnParseError {
    /// Stop at the first bad line.
    #[default]
    Abort,
    /// Keep going and collect rejected lines.
    Skip,
}

/// Records parsed from one input, plus the lines rejected in [`OnParseError::Skip`] mode.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub rejected: Vec<Error>,
}

pub fn load_index(path: &Path, on_error: OnParseError) -> Result<Loaded<IndexRecord>> {
    load(path, IndexRecord::parse_line, on_error)
}

pub fn load_data(path: &Path, on_error: OnParseError) -> Result<Loaded<DataRecord>> {
    load(path, DataRecord::parse_line, on_error)
}

fn load<T, F>(path: &Path, parse: F, on_error: OnParseError) -> Result<Loaded<T>>
where
    F: Fn(&str) -> Result<T>,
{
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let loaded = parse_lines(path, &content, parse, on_error)?;
    log::info!(
        "Loaded {} records from {}",
        loaded.records.len(),
        path.display()
    );
    Ok(loaded)
}

/// Parse every non-blank line of `content`, stripping a leading BOM.
///
/// `source` only labels errors; line numbers are 1-based.
pub fn parse_lines<T, F>(
    source: &Path,
    content: &str,
    parse: F,
    on_error: OnParseError,
) -> Result<Loaded<T>>
where
    F: Fn(&str) -> Result<T>,
{
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut loaded = Loaded {
        records: Vec::new(),
        rejected: Vec::new(),
    };

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse(line) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                let err = e.at_line(source, idx + 1);
                match on_error {
                    OnParseError::Abort => return Err(err),
                    OnParseError::Skip => {
                        log::warn!("Skipping line: {}", err);
                        loaded.rejected.push(err);
                    }
                }
            }
        }
    }

    Ok(loaded)
}
