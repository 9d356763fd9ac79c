//! Timestamp codec for the two textual datetime layouts.
//!
//! Neither layout carries a zone or fractional seconds. Wall-clock fields are
//! read as UTC and written back from the instant's UTC fields, so
//! `format(parse(s)?, f) == s` for every accepted `s`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};
use std::fmt;

use crate::error::{Error, Result};

/// Absolute point in time shared by both record kinds.
pub type Instant = DateTime<Utc>;

/// Textual layout of a timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `YYYY-MM-DD HH:MM:SS`, used by the data input.
    Data,
    /// `DD/MM/YYYY HH:MM:SS`, used by the index input.
    Index,
}

impl TimestampFormat {
    /// chrono pattern for this layout.
    pub fn pattern(self) -> &'static str {
        match self {
            TimestampFormat::Data => "%Y-%m-%d %H:%M:%S",
            TimestampFormat::Index => "%d/%m/%Y %H:%M:%S",
        }
    }

    /// Human readable pattern, used in error messages.
    pub fn pattern_hint(self) -> &'static str {
        match self {
            TimestampFormat::Data => "YYYY-MM-DD HH:MM:SS",
            TimestampFormat::Index => "DD/MM/YYYY HH:MM:SS",
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampFormat::Data => write!(f, "data"),
            TimestampFormat::Index => write!(f, "index"),
        }
    }
}

/// Parse `text` in the given layout, reading the fields as UTC.
///
/// Surrounding whitespace is ignored. Fields must be zero-padded: chrono
/// alone would accept `2020-3-4 1:02:03`, which cannot be reproduced by
/// [`format`], so such input is rejected as well. So is a seconds field of
/// `60`, which chrono reads as a leap second.
pub fn parse(text: &str, format: TimestampFormat) -> Result<Instant> {
    let text = text.trim();
    let invalid = || Error::Timestamp {
        text: text.to_string(),
        format,
    };

    let naive = NaiveDateTime::parse_from_str(text, format.pattern()).map_err(|_| invalid())?;
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(invalid());
    }
    let instant = Utc.from_utc_datetime(&naive);

    if self::format(&instant, format) != text {
        return Err(invalid());
    }
    Ok(instant)
}

/// Render the instant's UTC wall-clock fields in the given layout.
pub fn format(instant: &Instant, format: TimestampFormat) -> String {
    instant.format(format.pattern()).to_string()
}
