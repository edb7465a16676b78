// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Whole-month and whole-year stepping offsets.
//!
//! Unlike the boundary anchors, a calendar step performs no snapping: the
//! day-of-month is preserved, or clamped by the host primitive when the
//! target month is shorter (Jan 31 + 1 month lands on the last day of
//! February).

use crate::point::TimePoint;

/// Unit of a calendar step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepUnit {
    /// One whole calendar month.
    Month,
    /// One whole calendar year (12 months).
    Year,
}

impl StepUnit {
    /// Months covered by one unit.
    #[inline]
    pub const fn months_per_unit(self) -> i64 {
        match self {
            StepUnit::Month => 1,
            StepUnit::Year => 12,
        }
    }

    /// Frequency code for this unit.
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            StepUnit::Month => "M",
            StepUnit::Year => "Y",
        }
    }
}

/// An offset of `n` whole months or years.
///
/// ```
/// use calstep::CalendarStep;
/// use chrono::NaiveDate;
///
/// let step = CalendarStep::months(1);
/// let jan31 = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let feb28 = NaiveDate::from_ymd_opt(2021, 2, 28).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// assert_eq!(step.forward(jan31), Some(feb28));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarStep {
    n: i64,
    unit: StepUnit,
}

impl CalendarStep {
    /// A step of `n` units.
    #[inline]
    pub const fn new(n: i64, unit: StepUnit) -> Self {
        Self { n, unit }
    }

    /// `n` whole months.
    #[inline]
    pub const fn months(n: i64) -> Self {
        Self::new(n, StepUnit::Month)
    }

    /// `n` whole years.
    #[inline]
    pub const fn years(n: i64) -> Self {
        Self::new(n, StepUnit::Year)
    }

    /// Repeat count.
    #[inline]
    pub const fn count(&self) -> i64 {
        self.n
    }

    /// Unit of this step.
    #[inline]
    pub const fn unit(&self) -> StepUnit {
        self.unit
    }

    /// Total months moved by one application.
    #[inline]
    pub const fn total_months(&self) -> i64 {
        self.n * self.unit.months_per_unit()
    }

    /// Step `point` forward by `n` whole units.
    #[inline]
    pub fn forward<P: TimePoint>(&self, point: P) -> Option<P> {
        point.checked_shift_months(i32::try_from(self.total_months()).ok()?)
    }

    /// Step `point` backward by `n` whole units.
    #[inline]
    pub fn backward<P: TimePoint>(&self, point: P) -> Option<P> {
        point.checked_shift_months(i32::try_from(-self.total_months()).ok()?)
    }

    /// Short frequency code, count-prefixed when the count is not 1
    /// (`"M"`, `"3M"`, `"2Y"`, ...).
    pub fn freq_label(&self) -> String {
        if self.n == 1 {
            self.unit.code().to_string()
        } else {
            format!("{}{}", self.n, self.unit.code())
        }
    }
}
