// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed-duration ("tick") offsets.
//!
//! A tick steps by an exact multiple of one day: seconds, minutes, hours or
//! whole days. Every tick unit divides one day evenly, so the effective
//! period is always a whole number of seconds and forward/backward are exact
//! inverses of each other.

use crate::point::TimePoint;
use qtty::{Day, Days, Seconds};

// ───────────────────────────────────────────────────────────────────────────
// TickUnit
// ───────────────────────────────────────────────────────────────────────────

/// Unit of a fixed-duration offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickUnit {
    /// One second (1/86 400 of a day).
    Second,
    /// One minute (1/1 440 of a day).
    Minute,
    /// One hour (1/24 of a day).
    Hour,
    /// One whole day.
    Day,
}

impl TickUnit {
    /// Exact length of one unit in seconds.
    #[inline]
    pub const fn seconds_per_unit(self) -> i64 {
        match self {
            TickUnit::Second => 1,
            TickUnit::Minute => 60,
            TickUnit::Hour => 3_600,
            TickUnit::Day => 86_400,
        }
    }

    /// Frequency code for this unit.
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            TickUnit::Second => "S",
            TickUnit::Minute => "MIN",
            TickUnit::Hour => "H",
            TickUnit::Day => "D",
        }
    }
}

// ───────────────────────────────────────────────────────────────────────────
// Tick
// ───────────────────────────────────────────────────────────────────────────

/// A fixed-duration offset: `n` units of [`TickUnit`].
///
/// Two ticks compare equal iff their effective periods are equal, regardless
/// of the unit that produced them:
///
/// ```
/// use calstep::Tick;
///
/// assert_eq!(Tick::seconds(60), Tick::minutes(1));
/// assert_eq!(Tick::minutes(60), Tick::hours(1));
/// assert_eq!(Tick::hours(24), Tick::days(1));
/// ```
///
/// A negative `n` shifts backward on `forward` (and forward on `backward`);
/// the core does not validate the sign.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Tick {
    n: i64,
    unit: TickUnit,
}

impl Tick {
    /// A tick of `n` units.
    #[inline]
    pub const fn new(n: i64, unit: TickUnit) -> Self {
        Self { n, unit }
    }

    /// `n` seconds.
    #[inline]
    pub const fn seconds(n: i64) -> Self {
        Self::new(n, TickUnit::Second)
    }

    /// `n` minutes.
    #[inline]
    pub const fn minutes(n: i64) -> Self {
        Self::new(n, TickUnit::Minute)
    }

    /// `n` hours.
    #[inline]
    pub const fn hours(n: i64) -> Self {
        Self::new(n, TickUnit::Hour)
    }

    /// `n` whole days.
    #[inline]
    pub const fn days(n: i64) -> Self {
        Self::new(n, TickUnit::Day)
    }

    /// Repeat count.
    #[inline]
    pub const fn count(&self) -> i64 {
        self.n
    }

    /// Unit of this tick.
    #[inline]
    pub const fn unit(&self) -> TickUnit {
        self.unit
    }

    /// Effective period in whole seconds (`n * seconds_per_unit`).
    #[inline]
    pub const fn period_seconds(&self) -> i64 {
        self.n * self.unit.seconds_per_unit()
    }

    /// Effective period as a [`qtty::Seconds`] quantity.
    #[inline]
    pub fn period(&self) -> Seconds {
        Seconds::new(self.period_seconds() as f64)
    }

    /// Effective period as a fraction of a day.
    #[inline]
    pub fn period_days(&self) -> Days {
        self.period().to::<Day>()
    }

    /// Shift `point` forward by the effective period.
    #[inline]
    pub fn forward<P: TimePoint>(&self, point: P) -> Option<P> {
        point.checked_shift_seconds(self.period_seconds())
    }

    /// Shift `point` backward by the effective period.
    #[inline]
    pub fn backward<P: TimePoint>(&self, point: P) -> Option<P> {
        point.checked_shift_seconds(-self.period_seconds())
    }

    /// Short frequency code, count-prefixed when the count is not 1
    /// (`"S"`, `"5S"`, `"3MIN"`, ...).
    pub fn freq_label(&self) -> String {
        if self.n == 1 {
            self.unit.code().to_string()
        } else {
            format!("{}{}", self.n, self.unit.code())
        }
    }
}

impl PartialEq for Tick {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.period_seconds() == other.period_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        TimePoint::from_fields(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn seconds_per_unit_divides_one_day() {
        for unit in [TickUnit::Second, TickUnit::Minute, TickUnit::Hour, TickUnit::Day] {
            assert_eq!(86_400 % unit.seconds_per_unit(), 0);
        }
    }

    #[test]
    fn forward_shifts_by_exact_period() {
        let p = dt(2020, 1, 1, 0, 0, 0);
        assert_eq!(Tick::seconds(90).forward(p).unwrap(), dt(2020, 1, 1, 0, 1, 30));
        assert_eq!(Tick::minutes(3).forward(p).unwrap(), dt(2020, 1, 1, 0, 3, 0));
        assert_eq!(Tick::hours(25).forward(p).unwrap(), dt(2020, 1, 2, 1, 0, 0));
        assert_eq!(Tick::days(2).forward(p).unwrap(), dt(2020, 1, 3, 0, 0, 0));
    }

    #[test]
    fn forward_backward_roundtrip_is_identity() {
        let p = dt(2019, 12, 31, 23, 59, 59);
        for tick in [Tick::seconds(7), Tick::minutes(11), Tick::hours(5), Tick::days(400)] {
            let there = tick.forward(p).unwrap();
            assert_eq!(tick.backward(there).unwrap(), p);
        }
    }

    #[test]
    fn negative_count_shifts_backward() {
        let p = dt(2020, 3, 1, 0, 0, 0);
        assert_eq!(Tick::days(-1).forward(p).unwrap(), dt(2020, 2, 29, 0, 0, 0));
    }

    #[test]
    fn equality_is_period_based() {
        assert_eq!(Tick::seconds(60), Tick::minutes(1));
        assert_eq!(Tick::minutes(60), Tick::hours(1));
        assert_eq!(Tick::hours(24), Tick::days(1));
        assert_eq!(Tick::seconds(86_400), Tick::days(1));
        assert_ne!(Tick::seconds(61), Tick::minutes(1));
    }

    #[test]
    fn period_quantities() {
        let tick = Tick::hours(6);
        assert_eq!(tick.period(), Seconds::new(21_600.0));
        assert_eq!(tick.period_days(), Days::new(0.25));
    }

    #[test]
    fn freq_labels() {
        assert_eq!(Tick::seconds(5).freq_label(), "5S");
        assert_eq!(Tick::seconds(1).freq_label(), "S");
        assert_eq!(Tick::minutes(15).freq_label(), "15MIN");
        assert_eq!(Tick::hours(1).freq_label(), "H");
        assert_eq!(Tick::days(3).freq_label(), "3D");
    }
}
