//! Index and data records and their single-line parsers.

use crate::error::{Error, Result};
use crate::timestamp::{self, Instant, TimestampFormat};

/// Sparse marker defining the center of a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub id: i64,
    pub instant: Instant,
}

/// Dense timestamped event with an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRecord {
    pub instant: Instant,
    pub payload: String,
}

impl IndexRecord {
    pub fn new(id: i64, instant: Instant) -> Self {
        Self { id, instant }
    }

    /// Parse `<id>,<DD/MM/YYYY HH:MM:SS>`.
    pub fn parse_line(line: &str) -> Result<Self> {
        let (id, time) = line
            .split_once(',')
            .ok_or(Error::MissingField { field: "timestamp" })?;
        let id = id.trim();
        let id = id.parse::<i64>().map_err(|source| Error::Id {
            text: id.to_string(),
            source,
        })?;
        let instant = timestamp::parse(time, TimestampFormat::Index)?;
        Ok(Self::new(id, instant))
    }
}

impl DataRecord {
    pub fn new(instant: Instant, payload: impl Into<String>) -> Self {
        Self {
            instant,
            payload: payload.into(),
        }
    }

    /// Parse `<YYYY-MM-DD HH:MM:SS>,<payload>`.
    ///
    /// The payload is everything after the first comma, trimmed.
    pub fn parse_line(line: &str) -> Result<Self> {
        let (time, payload) = line
            .split_once(',')
            .ok_or(Error::MissingField { field: "payload" })?;
        let instant = timestamp::parse(time, TimestampFormat::Data)?;
        Ok(Self::new(instant, payload.trim()))
    }
}
