// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Boundary-anchored offsets: month and year begin/end.
//!
//! These offsets snap to calendar landmarks instead of moving by a fixed
//! duration. They never take day-count shortcuts across months; every
//! iteration resolves through [`days_in_month`] or the host's clamping
//! month-step primitive, which keeps the arithmetic exact across variable
//! month lengths and leap years.
//!
//! The `n` count is applied as an iteration count for the month anchors and
//! as a year delta for the year anchors. A non-positive `n` is not validated:
//! the month anchors then perform no iterations and the year anchors move
//! backward on `forward`. The backward semantics of [`YearBegin`] and
//! [`YearEnd`] are deliberately asymmetric with their forward counterparts
//! (time-of-day reset, `n` ignored by `YearEnd::backward`); both quirks are
//! preserved from the system this crate models.

use crate::calendar::days_in_month;
use crate::point::TimePoint;

#[inline]
fn label(n: i64, code: &str) -> String {
    if n == 1 {
        code.to_string()
    } else {
        format!("{n}{code}")
    }
}

#[inline]
fn year_plus<P: TimePoint>(point: P, delta: i64) -> Option<i32> {
    i32::try_from(point.year() as i64 + delta).ok()
}

// ───────────────────────────────────────────────────────────────────────────
// MonthBegin
// ───────────────────────────────────────────────────────────────────────────

/// Offset anchored to the first day of a month.
///
/// ```
/// use calstep::MonthBegin;
/// use chrono::NaiveDate;
///
/// let may5 = NaiveDate::from_ymd_opt(2012, 5, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let jul1 = NaiveDate::from_ymd_opt(2012, 7, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(MonthBegin::new(2).forward(may5), Some(jul1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBegin {
    n: i64,
}

impl MonthBegin {
    /// An offset of `n` month-begin steps.
    #[inline]
    pub const fn new(n: i64) -> Self {
        Self { n }
    }

    /// Repeat count.
    #[inline]
    pub const fn count(&self) -> i64 {
        self.n
    }

    /// `true` iff `point` is the first day of its month.
    #[inline]
    pub fn on_boundary<P: TimePoint>(&self, point: P) -> bool {
        point.day() == 1
    }

    /// Advance to the first day of the following month, `n` times.
    ///
    /// Each iteration adds exactly the number of days remaining in the
    /// current month plus one, so the result always lands on day 1 while
    /// preserving the time of day.
    pub fn forward<P: TimePoint>(&self, point: P) -> Option<P> {
        let mut p = point;
        for _ in 0..self.n {
            let remaining = days_in_month(p.year(), p.month()) - p.day() + 1;
            p = p.checked_shift_days(remaining as i64)?;
        }
        Some(p)
    }

    /// Move to the most recent month-begin, `n` times.
    ///
    /// When already on a boundary an iteration first steps back one whole
    /// month, so the result is always strictly before the starting point.
    pub fn backward<P: TimePoint>(&self, point: P) -> Option<P> {
        let mut p = point;
        for _ in 0..self.n {
            if p.day() == 1 {
                p = p.checked_shift_months(-1)?;
            }
            p = P::from_fields(p.year(), p.month(), 1, p.hour(), p.minute(), p.second())?;
        }
        Some(p)
    }

    /// Frequency code `"MB"`, count-prefixed when the count is not 1.
    pub fn freq_label(&self) -> String {
        label(self.n, "MB")
    }
}

impl Default for MonthBegin {
    fn default() -> Self {
        Self::new(1)
    }
}

// ───────────────────────────────────────────────────────────────────────────
// MonthEnd
// ───────────────────────────────────────────────────────────────────────────

/// Offset anchored to the last day of a month.
///
/// ```
/// use calstep::MonthEnd;
/// use chrono::NaiveDate;
///
/// let feb1 = NaiveDate::from_ymd_opt(2020, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let feb29 = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(MonthEnd::new(1).forward(feb1), Some(feb29));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEnd {
    n: i64,
}

impl MonthEnd {
    /// An offset of `n` month-end steps.
    #[inline]
    pub const fn new(n: i64) -> Self {
        Self { n }
    }

    /// Repeat count.
    #[inline]
    pub const fn count(&self) -> i64 {
        self.n
    }

    /// `true` iff `point` is the last day of its month (the next day has
    /// day-of-month 1).
    #[inline]
    pub fn on_boundary<P: TimePoint>(&self, point: P) -> bool {
        point
            .checked_shift_days(1)
            .map_or(false, |next| next.day() == 1)
    }

    /// Advance to the next month-end, `n` times.
    ///
    /// An iteration starting exactly on a month-end first steps forward one
    /// whole month; it then lands on the (possibly new) month's last day.
    pub fn forward<P: TimePoint>(&self, point: P) -> Option<P> {
        let mut p = point;
        for _ in 0..self.n {
            if self.on_boundary(p) {
                p = p.checked_shift_months(1)?;
            }
            let to_end = days_in_month(p.year(), p.month()) - p.day();
            p = p.checked_shift_days(to_end as i64)?;
        }
        Some(p)
    }

    /// Step to the end of the previous month, `n` times, regardless of
    /// whether the starting point is on a boundary.
    pub fn backward<P: TimePoint>(&self, point: P) -> Option<P> {
        let mut p = point;
        for _ in 0..self.n {
            p = p.checked_shift_months(-1)?;
            let to_end = days_in_month(p.year(), p.month()) - p.day();
            p = p.checked_shift_days(to_end as i64)?;
        }
        Some(p)
    }

    /// Frequency code `"ME"`, count-prefixed when the count is not 1.
    pub fn freq_label(&self) -> String {
        label(self.n, "ME")
    }
}

impl Default for MonthEnd {
    fn default() -> Self {
        Self::new(1)
    }
}

// ───────────────────────────────────────────────────────────────────────────
// YearBegin
// ───────────────────────────────────────────────────────────────────────────

/// Offset anchored to January 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBegin {
    n: i64,
}

impl YearBegin {
    /// An offset of `n` year-begin steps.
    #[inline]
    pub const fn new(n: i64) -> Self {
        Self { n }
    }

    /// Repeat count.
    #[inline]
    pub const fn count(&self) -> i64 {
        self.n
    }

    /// `true` iff `point` is January 1.
    #[inline]
    pub fn on_boundary<P: TimePoint>(&self, point: P) -> bool {
        point.month() == 1 && point.day() == 1
    }

    /// January 1 of `year + n`, preserving the time of day.
    pub fn forward<P: TimePoint>(&self, point: P) -> Option<P> {
        let year = year_plus(point, self.n)?;
        P::from_fields(year, 1, 1, point.hour(), point.minute(), point.second())
    }

    /// January 1 of an earlier year.
    ///
    /// On a boundary this is `year - n` with the time of day preserved;
    /// otherwise `year - (n - 1)` at midnight. The midnight reset mirrors
    /// the modelled system and is intentional.
    pub fn backward<P: TimePoint>(&self, point: P) -> Option<P> {
        if self.on_boundary(point) {
            let year = year_plus(point, -self.n)?;
            P::from_fields(year, 1, 1, point.hour(), point.minute(), point.second())
        } else {
            let year = year_plus(point, -(self.n - 1))?;
            P::from_fields(year, 1, 1, 0, 0, 0)
        }
    }

    /// Frequency code `"YB"`, count-prefixed when the count is not 1.
    pub fn freq_label(&self) -> String {
        label(self.n, "YB")
    }
}

impl Default for YearBegin {
    fn default() -> Self {
        Self::new(1)
    }
}

// ───────────────────────────────────────────────────────────────────────────
// YearEnd
// ───────────────────────────────────────────────────────────────────────────

/// Offset anchored to December 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearEnd {
    n: i64,
}

impl YearEnd {
    /// An offset of `n` year-end steps.
    #[inline]
    pub const fn new(n: i64) -> Self {
        Self { n }
    }

    /// Repeat count.
    #[inline]
    pub const fn count(&self) -> i64 {
        self.n
    }

    /// `true` iff `point` is December 31.
    #[inline]
    pub fn on_boundary<P: TimePoint>(&self, point: P) -> bool {
        point.month() == 12 && point.day() == 31
    }

    /// December 31 of a later year, preserving the time of day.
    ///
    /// On a boundary this is `year + n`; otherwise `year + (n - 1)`, i.e.
    /// the first application from mid-year snaps to the current year's end.
    pub fn forward<P: TimePoint>(&self, point: P) -> Option<P> {
        let delta = if self.on_boundary(point) { self.n } else { self.n - 1 };
        let year = year_plus(point, delta)?;
        P::from_fields(year, 12, 31, point.hour(), point.minute(), point.second())
    }

    /// December 31 of the previous year, at midnight.
    ///
    /// Ignores both `n` and the boundary state; the asymmetry with
    /// [`YearEnd::forward`] mirrors the modelled system and is intentional.
    pub fn backward<P: TimePoint>(&self, point: P) -> Option<P> {
        let year = year_plus(point, -1)?;
        P::from_fields(year, 12, 31, 0, 0, 0)
    }

    /// Frequency code `"YE"`, count-prefixed when the count is not 1.
    pub fn freq_label(&self) -> String {
        label(self.n, "YE")
    }
}

impl Default for YearEnd {
    fn default() -> Self {
        Self::new(1)
    }
}
