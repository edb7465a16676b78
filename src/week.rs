// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Weekday-relative offsets.
//!
//! A [`Week`] offset moves to the `n`-th occurrence of a target weekday.
//! Going forward, the next occurrence counts as the 1st even when the
//! starting point already sits on the target weekday, so a point on the
//! target always moves a full seven days. Backward is the exact mirror.

use crate::point::TimePoint;
use chrono::Weekday;

/// Fixed three-letter code for a weekday (locale-aware naming is out of
/// scope).
const fn weekday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}

/// An offset to the `n`-th occurrence of a target weekday.
///
/// ```
/// use calstep::Week;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2024-01-01 was a Monday; the next Monday is a full week away.
/// let mon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let next = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(Week::new(1, Weekday::Mon).forward(mon), Some(next));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    n: i64,
    target: Weekday,
}

impl Week {
    /// An offset to the `n`-th occurrence of `target`.
    #[inline]
    pub const fn new(n: i64, target: Weekday) -> Self {
        Self { n, target }
    }

    /// The first occurrence of `target` (repeat count 1).
    #[inline]
    pub const fn on(target: Weekday) -> Self {
        Self::new(1, target)
    }

    /// Repeat count.
    #[inline]
    pub const fn count(&self) -> i64 {
        self.n
    }

    /// Target weekday.
    #[inline]
    pub const fn target(&self) -> Weekday {
        self.target
    }

    /// `true` iff `point` falls on the target weekday.
    #[inline]
    pub fn on_boundary<P: TimePoint>(&self, point: P) -> bool {
        point.weekday0() == self.target.num_days_from_monday()
    }

    /// Move to the `n`-th occurrence of the target weekday after `point`.
    ///
    /// The next occurrence counts as the 1st; a point already on the target
    /// weekday moves a full seven days for `n = 1`.
    pub fn forward<P: TimePoint>(&self, point: P) -> Option<P> {
        let wd = point.weekday0() as i64;
        let target = self.target.num_days_from_monday() as i64;
        let dist = (target - wd).abs();
        let days = if target > wd {
            dist + 7 * (self.n - 1)
        } else {
            (7 - dist) + 7 * (self.n - 1)
        };
        point.checked_shift_days(days)
    }

    /// Move to the `n`-th occurrence of the target weekday before `point`.
    ///
    /// Mirror of [`Week::forward`]: a point on the target weekday moves a
    /// full seven days back for `n = 1`.
    pub fn backward<P: TimePoint>(&self, point: P) -> Option<P> {
        let wd = point.weekday0() as i64;
        let target = self.target.num_days_from_monday() as i64;
        let dist = (target - wd).abs();
        let days = if target >= wd {
            (7 - dist) + 7 * (self.n - 1)
        } else {
            dist + 7 * (self.n - 1)
        };
        point.checked_shift_days(-days)
    }

    /// Frequency code `"W-"` plus the weekday name, count-prefixed when the
    /// count is not 1 (`"W-MON"`, `"3W-FRI"`, ...).
    pub fn freq_label(&self) -> String {
        if self.n == 1 {
            format!("W-{}", weekday_code(self.target))
        } else {
            format!("{}W-{}", self.n, weekday_code(self.target))
        }
    }
}
