//! Flattening a join into pipe-delimited report lines, and writing them.
//!
//! Payloads are written verbatim: a payload containing `|` shifts the
//! column boundaries for that line.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::join::JoinResult;
use crate::timestamp::{format, TimestampFormat};

pub const DELIMITER: &str = "|";

/// One line per (index, matched data) pair, in group order then match order.
pub fn report_lines(result: &JoinResult<'_>) -> Vec<String> {
    result
        .groups
        .iter()
        .flat_map(|group| {
            let id = group.index.id.to_string();
            let index_time = format(&group.index.instant, TimestampFormat::Index);
            group.matches.iter().map(move |data| {
                let data_time = format(&data.instant, TimestampFormat::Data);
                [
                    id.as_str(),
                    index_time.as_str(),
                    data_time.as_str(),
                    data.payload.as_str(),
                ]
                .join(DELIMITER)
            })
        })
        .collect()
}

/// Write `lines`, each newline-terminated, replacing `path`.
///
/// Output goes to a sibling `.tmp` file first and is renamed over `path` only
/// once fully flushed, so a failed run never leaves a truncated report.
pub fn write_report(path: &Path, lines: &[String]) -> Result<()> {
    let tmp = temp_path(path);

    let written = write_lines(&tmp, lines).and_then(|()| {
        fs::rename(&tmp, path).map_err(|e| Error::io(path, e))
    });
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written?;

    log::info!("Wrote {} report lines to {}", lines.len(), path.display());
    Ok(())
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    for line in lines {
        out.write_all(line.as_bytes())
            .and_then(|()| out.write_all(b"\n"))
            .map_err(|e| Error::io(path, e))?;
    }
    let file = out.into_inner().map_err(|e| Error::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| Error::io(path, e))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "report".into());
    name.push(".tmp");
    path.with_file_name(name)
}
