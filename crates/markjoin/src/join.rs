//! Time-window join of index records against data records.
//!
//! Each index record gets every data record whose instant falls inside
//! [`TimeWindow::around`] its own instant. Groups follow index input order and
//! matches inside a group follow data input order. Memberships are
//! independent: a data record may land in several groups, or in none.

use serde::{Deserialize, Serialize};

use crate::record::{DataRecord, IndexRecord};
use crate::window::{TimeWindow, WindowOffsets};

/// How the per-index filter is evaluated. Both produce identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
    /// Scan every data record for every index record.
    #[default]
    NestedLoop,
    /// Sort data positions by instant once and binary-search each window.
    Sorted,
}

/// One index record and the data records inside its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinGroup<'a> {
    pub index: &'a IndexRecord,
    pub matches: Vec<&'a DataRecord>,
}

/// Groups in index input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinResult<'a> {
    pub groups: Vec<JoinGroup<'a>>,
}

impl<'a> JoinResult<'a> {
    /// Total number of (index, data) pairs.
    pub fn match_count(&self) -> usize {
        self.groups.iter().map(|g| g.matches.len()).sum()
    }

    /// Index records whose window matched nothing.
    pub fn unmatched(&self) -> impl Iterator<Item = &'a IndexRecord> + '_ {
        self.groups
            .iter()
            .filter(|g| g.matches.is_empty())
            .map(|g| g.index)
    }
}

pub fn join<'a>(
    index: &'a [IndexRecord],
    data: &'a [DataRecord],
    offsets: WindowOffsets,
    strategy: JoinStrategy,
) -> JoinResult<'a> {
    let groups = match strategy {
        JoinStrategy::NestedLoop => nested_loop(index, data, offsets),
        JoinStrategy::Sorted => sorted(index, data, offsets),
    };

    for group in &groups {
        log::debug!(
            "Index {} matched {} data records",
            group.index.id,
            group.matches.len()
        );
    }

    JoinResult { groups }
}

fn nested_loop<'a>(
    index: &'a [IndexRecord],
    data: &'a [DataRecord],
    offsets: WindowOffsets,
) -> Vec<JoinGroup<'a>> {
    index
        .iter()
        .map(|record| {
            let window = TimeWindow::around(record.instant, offsets);
            JoinGroup {
                index: record,
                matches: data.iter().filter(|d| window.contains(&d.instant)).collect(),
            }
        })
        .collect()
}

fn sorted<'a>(
    index: &'a [IndexRecord],
    data: &'a [DataRecord],
    offsets: WindowOffsets,
) -> Vec<JoinGroup<'a>> {
    let mut by_time: Vec<usize> = (0..data.len()).collect();
    by_time.sort_by_key(|&i| data[i].instant);

    index
        .iter()
        .map(|record| {
            let window = TimeWindow::around(record.instant, offsets);
            let (start, end) = (window.start(), window.end());
            let lo = by_time.partition_point(|&i| data[i].instant < start);
            let hi = by_time.partition_point(|&i| data[i].instant < end).max(lo);

            // back to data input order
            let mut positions = by_time[lo..hi].to_vec();
            positions.sort_unstable();

            JoinGroup {
                index: record,
                matches: positions.into_iter().map(|i| &data[i]).collect(),
            }
        })
        .collect()
}
