//! Markjoin
//!
//! Joins a sparse log of index markers against a dense log of timestamped
//! data events. Every index marker is paired with the data events that fall
//! inside an asymmetric, half-open window around its instant
//! (`[t - 10s, t + 2s)` by default), and each pair becomes one line of a
//! pipe-delimited report.
//!
//! # Architecture
//!
//! ```text
//! data.csv ──────────► loader ──┐
//!                               ├──► join ──► report ──► report.csv
//! data_from_ipad.csv ─► loader ──┘     │
//!                                      └─ window per index record
//! ```
//!
//! # Modules
//!
//! - [`timestamp`]: Parsing and formatting of the two datetime layouts.
//! - [`window`]: Half-open time windows and their offsets.
//! - [`record`]: Index and data records, one per input line.
//! - [`loader`]: File loading with BOM stripping and strict/lenient parsing.
//! - [`join`]: The time-window join (nested loop or sorted).
//! - [`report`]: Report line formatting and atomic report writing.
//! - [`config`]: YAML configuration with reference defaults.
//! - [`pipeline`]: A complete run from configuration to report.
//! - [`cli`]: argh arguments that override the configuration.
//! - [`error`]: Unified error type for loading, joining and writing.

pub mod cli;
pub mod config;
pub mod error;
pub mod join;
pub mod loader;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod timestamp;
pub mod window;

pub use cli::JoinArgs;
pub use config::JoinConfig;
pub use error::{Error, Result};
pub use join::{join, JoinGroup, JoinResult, JoinStrategy};
pub use loader::{Loaded, OnParseError};
pub use pipeline::{run, RunSummary};
pub use record::{DataRecord, IndexRecord};
pub use timestamp::{Instant, TimestampFormat};
pub use window::{TimeWindow, WindowOffsets};
