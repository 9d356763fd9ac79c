//! Command-line interface for markjoin

use argh::FromArgs;
use std::path::PathBuf;

use crate::config::JoinConfig;
use crate::join::JoinStrategy;
use crate::loader::OnParseError;

/// Join index markers against timestamped data events and write a report
#[derive(FromArgs, Debug)]
pub struct JoinArgs {
    /// path to a YAML configuration file (default: built-in defaults)
    #[argh(option, short = 'c')]
    pub config: Option<PathBuf>,

    /// data events file (default: data.csv)
    #[argh(option)]
    pub data: Option<PathBuf>,

    /// index markers file (default: data_from_ipad.csv)
    #[argh(option)]
    pub index: Option<PathBuf>,

    /// report output file (default: report.csv)
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// seconds before each index instant, inclusive (default: 10)
    #[argh(option)]
    pub lower: Option<i64>,

    /// seconds after each index instant, exclusive (default: 2)
    #[argh(option)]
    pub upper: Option<i64>,

    /// use the sorted binary-search join instead of the nested loop
    #[argh(switch)]
    pub sorted: bool,

    /// skip malformed lines instead of aborting the run
    #[argh(switch)]
    pub skip_invalid: bool,

    /// load and join, print a summary, write nothing
    #[argh(switch)]
    pub dry_run: bool,

    /// log level (error, warn, info, debug, trace)
    #[argh(option, short = 'l', default = "String::from(\"info\")", from_str_fn(parse_log_level))]
    pub log_level: String,
}

/// Accept only the levels env_logger understands
fn parse_log_level(s: &str) -> Result<String, String> {
    let level = s.to_lowercase();
    match level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => Ok(level),
        _ => Err(format!(
            "Invalid log level '{}'. Expected error, warn, info, debug or trace",
            s
        )),
    }
}

impl JoinArgs {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply(&self, config: &mut JoinConfig) {
        if let Some(path) = &self.data {
            config.data_path = path.clone();
        }
        if let Some(path) = &self.index {
            config.index_path = path.clone();
        }
        if let Some(path) = &self.output {
            config.report_path = path.clone();
        }
        if let Some(lower) = self.lower {
            config.window.lower_secs = lower;
        }
        if let Some(upper) = self.upper {
            config.window.upper_secs = upper;
        }
        if self.sorted {
            config.strategy = JoinStrategy::Sorted;
        }
        if self.skip_invalid {
            config.on_parse_error = OnParseError::Skip;
        }
    }
}
