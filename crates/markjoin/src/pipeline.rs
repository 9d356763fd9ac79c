//! One report run: load both inputs, join, format, write.

use std::fmt;

use crate::config::JoinConfig;
use crate::error::Result;
use crate::join::join;
use crate::loader::{load_data, load_index};
use crate::report::{report_lines, write_report};

/// Counts from a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub index_records: usize,
    pub data_records: usize,
    pub rejected_lines: usize,
    pub unmatched_indices: usize,
    pub report_lines: usize,
    pub written: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index records:     {}", self.index_records)?;
        writeln!(f, "Data records:      {}", self.data_records)?;
        writeln!(f, "Rejected lines:    {}", self.rejected_lines)?;
        writeln!(f, "Unmatched indices: {}", self.unmatched_indices)?;
        write!(f, "Report lines:      {}", self.report_lines)
    }
}

/// Run the join described by `config`. With `dry_run` nothing is written.
pub fn run(config: &JoinConfig, dry_run: bool) -> Result<RunSummary> {
    config.validate()?;

    let data = load_data(&config.data_path, config.on_parse_error)?;
    let index = load_index(&config.index_path, config.on_parse_error)?;

    let result = join(&index.records, &data.records, config.window, config.strategy);
    for record in result.unmatched() {
        log::debug!("Index {} has no data in its window", record.id);
    }

    let lines = report_lines(&result);
    let mut summary = RunSummary {
        index_records: index.records.len(),
        data_records: data.records.len(),
        rejected_lines: index.rejected.len() + data.rejected.len(),
        unmatched_indices: result.unmatched().count(),
        report_lines: lines.len(),
        written: false,
    };

    if dry_run {
        log::info!("Dry run, not writing {}", config.report_path.display());
    } else {
        write_report(&config.report_path, &lines)?;
        summary.written = true;
    }

    Ok(summary)
}
