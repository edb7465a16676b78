// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Host point-in-time seam.
//!
//! Offsets never manipulate a concrete date type directly; they go through
//! [`TimePoint`], which captures exactly the capabilities the offset algebra
//! needs from the host environment:
//!
//! 1. Reading calendar fields (year/month/day, hour/minute/second, weekday).
//! 2. Constructing a new value from explicit fields.
//! 3. Exact sub-day shifting (whole seconds; every tick step is a whole
//!    number of seconds).
//! 4. Whole-month stepping with day-of-month clamping (Jan 31 + 1 month
//!    lands on the last valid day of February).
//!
//! Implementations are provided for [`chrono::NaiveDateTime`] and
//! [`chrono::DateTime<Utc>`]. The `DateTime<Utc>` implementation routes
//! through the naive value; UTC has no transitions, so the round trip is
//! lossless. Time-zone conversion itself is out of scope.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Trait for types that represent a point in time the offset algebra can
/// shift.
///
/// Every method that produces a new point returns `Option`: `None` means the
/// host type cannot represent the result, which the offset layer surfaces as
/// [`OffsetError::OutOfRange`](crate::OffsetError::OutOfRange).
pub trait TimePoint: Copy + PartialEq + PartialOrd + Sized {
    /// Calendar year.
    fn year(&self) -> i32;
    /// Month of year (1..=12).
    fn month(&self) -> u32;
    /// Day of month (1..=31).
    fn day(&self) -> u32;
    /// Hour of day (0..=23).
    fn hour(&self) -> u32;
    /// Minute of hour (0..=59).
    fn minute(&self) -> u32;
    /// Second of minute (0..=59).
    fn second(&self) -> u32;
    /// Weekday with Monday = 0, ..., Sunday = 6.
    fn weekday0(&self) -> u32;

    /// Construct a point from explicit calendar fields.
    ///
    /// Returns `None` if the fields do not name a representable date.
    fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self>;

    /// Shift by a signed number of whole seconds.
    fn checked_shift_seconds(&self, secs: i64) -> Option<Self>;

    /// Shift by a signed number of whole days.
    fn checked_shift_days(&self, days: i64) -> Option<Self>;

    /// Shift by a signed number of whole calendar months, clamping the
    /// day-of-month when the target month is shorter.
    fn checked_shift_months(&self, months: i32) -> Option<Self>;
}

impl TimePoint for NaiveDateTime {
    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    #[inline]
    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    #[inline]
    fn hour(&self) -> u32 {
        Timelike::hour(self)
    }

    #[inline]
    fn minute(&self) -> u32 {
        Timelike::minute(self)
    }

    #[inline]
    fn second(&self) -> u32 {
        Timelike::second(self)
    }

    #[inline]
    fn weekday0(&self) -> u32 {
        self.weekday().num_days_from_monday()
    }

    fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
    }

    #[inline]
    fn checked_shift_seconds(&self, secs: i64) -> Option<Self> {
        self.checked_add_signed(Duration::try_seconds(secs)?)
    }

    #[inline]
    fn checked_shift_days(&self, days: i64) -> Option<Self> {
        self.checked_add_signed(Duration::try_days(days)?)
    }

    fn checked_shift_months(&self, months: i32) -> Option<Self> {
        if months >= 0 {
            self.checked_add_months(Months::new(months as u32))
        } else {
            self.checked_sub_months(Months::new(months.unsigned_abs()))
        }
    }
}

impl TimePoint for DateTime<Utc> {
    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    #[inline]
    fn day(&self) -> u32 {
        Datelike::day(self)
    }

    #[inline]
    fn hour(&self) -> u32 {
        Timelike::hour(self)
    }

    #[inline]
    fn minute(&self) -> u32 {
        Timelike::minute(self)
    }

    #[inline]
    fn second(&self) -> u32 {
        Timelike::second(self)
    }

    #[inline]
    fn weekday0(&self) -> u32 {
        self.weekday().num_days_from_monday()
    }

    fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDateTime::from_fields(year, month, day, hour, minute, second)
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
    }

    #[inline]
    fn checked_shift_seconds(&self, secs: i64) -> Option<Self> {
        self.naive_utc()
            .checked_shift_seconds(secs)
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
    }

    #[inline]
    fn checked_shift_days(&self, days: i64) -> Option<Self> {
        self.naive_utc()
            .checked_shift_days(days)
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
    }

    #[inline]
    fn checked_shift_months(&self, months: i32) -> Option<Self> {
        self.naive_utc()
            .checked_shift_months(months)
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
    }
}
