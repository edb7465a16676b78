// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date sequence generation by repeated offset application.
//!
//! Thin convenience layer over the offset algebra: an iterator of successive
//! forward applications, and an inclusive bounded collector.

use crate::error::OffsetError;
use crate::offset::Offset;
use crate::point::TimePoint;

/// Iterator of successive forward applications of an offset.
///
/// The first item is the starting point itself. Iteration fuses when the
/// host type can no longer represent the next point.
///
/// ```
/// use calstep::{MonthEnd, Offset, OffsetRange};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let ends: Vec<_> = OffsetRange::new(start, Offset::from(MonthEnd::new(1)))
///     .skip(1)
///     .take(3)
///     .collect();
///
/// let d = |m, d| NaiveDate::from_ymd_opt(2020, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(ends, vec![d(1, 31), d(2, 29), d(3, 31)]);
/// ```
#[derive(Debug, Clone)]
pub struct OffsetRange<P: TimePoint> {
    next: Option<P>,
    offset: Offset,
}

impl<P: TimePoint> OffsetRange<P> {
    /// An infinite sequence starting at `start`, stepped by `offset`.
    pub fn new(start: P, offset: Offset) -> Self {
        Self {
            next: Some(start),
            offset,
        }
    }
}

impl<P: TimePoint> Iterator for OffsetRange<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        let current = self.next?;
        self.next = self.offset.try_forward(current).ok();
        Some(current)
    }
}

/// Collect every point from `start` up to and including `end`, stepping
/// forward by `offset`.
///
/// Stops early if an application fails to advance the point (e.g. an offset
/// built with a non-positive count), so a misconfigured offset cannot loop
/// forever.
///
/// # Errors
///
/// Returns [`OffsetError::OutOfRange`] if an application leaves the host
/// type's representable range before reaching `end`.
pub fn date_range<P: TimePoint>(
    start: P,
    end: P,
    offset: &Offset,
) -> Result<Vec<P>, OffsetError> {
    let mut points = Vec::new();
    let mut current = start;
    while current <= end {
        points.push(current);
        let next = offset.try_forward(current)?;
        if next <= current {
            break;
        }
        current = next;
    }
    Ok(points)
}
