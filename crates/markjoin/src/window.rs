//! Asymmetric half-open time windows around an index instant.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp::Instant;

/// Largest accepted offset on either side of the center, 100 years.
pub const MAX_OFFSET_SECS: i64 = 100 * 366 * 24 * 60 * 60;

/// Window shape in whole seconds before and after the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOffsets {
    /// Seconds before the center, inclusive.
    #[serde(default = "default_lower_secs")]
    pub lower_secs: i64,
    /// Seconds after the center, exclusive.
    #[serde(default = "default_upper_secs")]
    pub upper_secs: i64,
}

fn default_lower_secs() -> i64 {
    10
}

fn default_upper_secs() -> i64 {
    2
}

impl WindowOffsets {
    /// Both offsets in `0..=MAX_OFFSET_SECS`, not both zero.
    pub fn check(&self) -> Result<(), String> {
        for (name, secs) in [("lower_secs", self.lower_secs), ("upper_secs", self.upper_secs)] {
            if !(0..=MAX_OFFSET_SECS).contains(&secs) {
                return Err(format!(
                    "{name} must be between 0 and {MAX_OFFSET_SECS}, got {secs}"
                ));
            }
        }
        if self.lower_secs == 0 && self.upper_secs == 0 {
            return Err("Window is empty: lower_secs and upper_secs are both 0".to_string());
        }
        Ok(())
    }
}

impl Default for WindowOffsets {
    fn default() -> Self {
        Self {
            lower_secs: default_lower_secs(),
            upper_secs: default_upper_secs(),
        }
    }
}

/// `[center - lower, center + upper)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub center: Instant,
    pub lower_offset_secs: i64,
    pub upper_offset_secs: i64,
}

impl TimeWindow {
    pub fn new(center: Instant, lower_offset_secs: i64, upper_offset_secs: i64) -> Self {
        Self {
            center,
            lower_offset_secs,
            upper_offset_secs,
        }
    }

    /// Window with the same offset on both sides of `center`.
    pub fn symmetric(center: Instant, secs: i64) -> Self {
        Self::new(center, secs, secs)
    }

    pub fn around(center: Instant, offsets: WindowOffsets) -> Self {
        Self::new(center, offsets.lower_secs, offsets.upper_secs)
    }

    /// First instant inside the window, clamped to the earliest representable instant.
    pub fn start(&self) -> Instant {
        TimeDelta::try_seconds(self.lower_offset_secs)
            .and_then(|d| self.center.checked_sub_signed(d))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// First instant past the window, clamped to the latest representable instant.
    pub fn end(&self) -> Instant {
        TimeDelta::try_seconds(self.upper_offset_secs)
            .and_then(|d| self.center.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn contains(&self, candidate: &Instant) -> bool {
        *candidate >= self.start() && *candidate < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::{parse, TimestampFormat};

    fn at(text: &str) -> Instant {
        parse(text, TimestampFormat::Data).unwrap()
    }

    #[test]
    fn test_boundaries() {
        let center = at("2020-03-04 13:27:55");
        let window = TimeWindow::new(center, 10, 2);
        let secs = TimeDelta::seconds;

        assert!(window.contains(&(center - secs(10))));
        assert!(!window.contains(&(center - secs(11))));
        assert!(!window.contains(&(center + secs(2))));
        assert!(window.contains(&(center + secs(1))));
        assert!(window.contains(&center));
    }

    #[test]
    fn test_reference_range() {
        let window = TimeWindow::around(at("2020-03-04 10:24:55"), WindowOffsets::default());
        for text in [
            "2020-03-04 10:24:45",
            "2020-03-04 10:24:47",
            "2020-03-04 10:24:50",
            "2020-03-04 10:24:53",
            "2020-03-04 10:24:55",
            "2020-03-04 10:24:56",
        ] {
            assert!(window.contains(&at(text)), "{text} should be inside");
        }
        assert!(!window.contains(&at("2020-03-04 10:24:44")));
        assert!(!window.contains(&at("2020-03-04 10:24:57")));
    }

    #[test]
    fn test_symmetric() {
        let center = at("2020-03-04 00:00:30");
        let window = TimeWindow::symmetric(center, 60);
        assert_eq!(window.start(), at("2020-03-03 23:59:30"));
        assert_eq!(window.end(), at("2020-03-04 00:01:30"));
        assert!(window.contains(&at("2020-03-03 23:59:30")));
        assert!(!window.contains(&at("2020-03-04 00:01:30")));
    }

    #[test]
    fn test_zero_width_window_is_empty() {
        let center = at("2020-03-04 00:00:30");
        let window = TimeWindow::new(center, 0, 0);
        assert!(!window.contains(&center));
    }

    #[test]
    fn test_huge_offsets_clamp() {
        let center = at("2020-03-04 00:00:30");
        let window = TimeWindow::new(center, 10_000_000_000_000, i64::MAX);
        assert_eq!(window.start(), DateTime::<Utc>::MIN_UTC);
        assert_eq!(window.end(), DateTime::<Utc>::MAX_UTC);
        assert!(window.contains(&at("1970-01-01 00:00:00")));
        assert!(window.contains(&at("9999-12-31 23:59:59")));
    }

    #[test]
    fn test_check_offsets() {
        assert!(WindowOffsets::default().check().is_ok());
        assert!(WindowOffsets { lower_secs: 0, upper_secs: 1 }.check().is_ok());
        assert!(WindowOffsets { lower_secs: MAX_OFFSET_SECS, upper_secs: MAX_OFFSET_SECS }
            .check()
            .is_ok());

        for (lower_secs, upper_secs) in [
            (-1, 2),
            (10, -2),
            (0, 0),
            (10_000_000_000_000, 2),
            (i64::MAX, 1),
            (1, i64::MAX),
            (i64::MIN, 0),
        ] {
            let offsets = WindowOffsets { lower_secs, upper_secs };
            assert!(offsets.check().is_err(), "accepted {offsets:?}");
        }
    }

    #[test]
    fn test_default_offsets() {
        let offsets = WindowOffsets::default();
        assert_eq!(offsets.lower_secs, 10);
        assert_eq!(offsets.upper_secs, 2);
    }
}
