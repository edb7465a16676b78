// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The offset sum type and its algebra.
//!
//! [`Offset`] is a closed union over every offset kind the crate provides.
//! Construction happens once (directly or through
//! [`DateOffset`](crate::DateOffset)); the value is immutable afterwards and
//! can be applied to any number of points.
//!
//! Negation is a wrapping variant: `-offset` swaps the forward and backward
//! directions, and negating twice unwraps back to the original variant
//! rather than stacking decorators.

use crate::anchor::{MonthBegin, MonthEnd, YearBegin, YearEnd};
use crate::error::OffsetError;
use crate::point::TimePoint;
use crate::step::CalendarStep;
use crate::tick::Tick;
use crate::week::Week;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A symbolic calendar duration that can be applied to a point in time.
///
/// ```
/// use calstep::{MonthEnd, Offset};
/// use chrono::NaiveDate;
///
/// let offset = Offset::from(MonthEnd::new(1));
/// let may5 = NaiveDate::from_ymd_opt(2012, 5, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let may31 = NaiveDate::from_ymd_opt(2012, 5, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// assert_eq!(offset.try_forward(may5), Ok(may31));
/// assert_eq!(may5 + &offset, may31);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Offset {
    /// Fixed-duration offset (seconds/minutes/hours/days).
    Tick(Tick),
    /// Whole-month or whole-year step without snapping.
    Step(CalendarStep),
    /// Anchored to the first day of a month.
    MonthBegin(MonthBegin),
    /// Anchored to the last day of a month.
    MonthEnd(MonthEnd),
    /// Anchored to January 1.
    YearBegin(YearBegin),
    /// Anchored to December 31.
    YearEnd(YearEnd),
    /// Anchored to a target weekday.
    Week(Week),
    /// Direction-swapping wrapper around another offset.
    Negated(Box<Offset>),
}

impl Offset {
    /// Apply the offset in the forward direction.
    ///
    /// # Errors
    ///
    /// Returns [`OffsetError::OutOfRange`] when the host point type cannot
    /// represent the result.
    pub fn try_forward<P: TimePoint>(&self, point: P) -> Result<P, OffsetError> {
        match self {
            Offset::Tick(tick) => tick.forward(point),
            Offset::Step(step) => step.forward(point),
            Offset::MonthBegin(mb) => mb.forward(point),
            Offset::MonthEnd(me) => me.forward(point),
            Offset::YearBegin(yb) => yb.forward(point),
            Offset::YearEnd(ye) => ye.forward(point),
            Offset::Week(week) => week.forward(point),
            Offset::Negated(inner) => return inner.try_backward(point),
        }
        .ok_or(OffsetError::OutOfRange)
    }

    /// Apply the offset in the backward direction.
    ///
    /// # Errors
    ///
    /// Returns [`OffsetError::OutOfRange`] when the host point type cannot
    /// represent the result.
    pub fn try_backward<P: TimePoint>(&self, point: P) -> Result<P, OffsetError> {
        match self {
            Offset::Tick(tick) => tick.backward(point),
            Offset::Step(step) => step.backward(point),
            Offset::MonthBegin(mb) => mb.backward(point),
            Offset::MonthEnd(me) => me.backward(point),
            Offset::YearBegin(yb) => yb.backward(point),
            Offset::YearEnd(ye) => ye.backward(point),
            Offset::Week(week) => week.backward(point),
            Offset::Negated(inner) => return inner.try_forward(point),
        }
        .ok_or(OffsetError::OutOfRange)
    }

    /// `true` iff `point` already sits on the landmark this offset steps
    /// between.
    ///
    /// Tick and plain calendar-step offsets have no landmark; every instant
    /// counts as on-boundary for them.
    pub fn is_on_boundary<P: TimePoint>(&self, point: P) -> bool {
        match self {
            Offset::Tick(_) | Offset::Step(_) => true,
            Offset::MonthBegin(mb) => mb.on_boundary(point),
            Offset::MonthEnd(me) => me.on_boundary(point),
            Offset::YearBegin(yb) => yb.on_boundary(point),
            Offset::YearEnd(ye) => ye.on_boundary(point),
            Offset::Week(week) => week.on_boundary(point),
            Offset::Negated(inner) => inner.is_on_boundary(point),
        }
    }

    /// Short textual frequency code (`"5S"`, `"MB"`, `"3W-MON"`, ...).
    ///
    /// Negated offsets carry a `-` prefix. The code is for display only; no
    /// parsing back into offsets is provided.
    pub fn freq_label(&self) -> String {
        match self {
            Offset::Tick(tick) => tick.freq_label(),
            Offset::Step(step) => step.freq_label(),
            Offset::MonthBegin(mb) => mb.freq_label(),
            Offset::MonthEnd(me) => me.freq_label(),
            Offset::YearBegin(yb) => yb.freq_label(),
            Offset::YearEnd(ye) => ye.freq_label(),
            Offset::Week(week) => week.freq_label(),
            Offset::Negated(inner) => format!("-{}", inner.freq_label()),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.freq_label())
    }
}

// ── construction from the concrete kinds ──────────────────────────────────

impl From<Tick> for Offset {
    #[inline]
    fn from(tick: Tick) -> Self {
        Offset::Tick(tick)
    }
}

impl From<CalendarStep> for Offset {
    #[inline]
    fn from(step: CalendarStep) -> Self {
        Offset::Step(step)
    }
}

impl From<MonthBegin> for Offset {
    #[inline]
    fn from(mb: MonthBegin) -> Self {
        Offset::MonthBegin(mb)
    }
}

impl From<MonthEnd> for Offset {
    #[inline]
    fn from(me: MonthEnd) -> Self {
        Offset::MonthEnd(me)
    }
}

impl From<YearBegin> for Offset {
    #[inline]
    fn from(yb: YearBegin) -> Self {
        Offset::YearBegin(yb)
    }
}

impl From<YearEnd> for Offset {
    #[inline]
    fn from(ye: YearEnd) -> Self {
        Offset::YearEnd(ye)
    }
}

impl From<Week> for Offset {
    #[inline]
    fn from(week: Week) -> Self {
        Offset::Week(week)
    }
}

// ── negation ──────────────────────────────────────────────────────────────

impl Neg for Offset {
    type Output = Offset;

    /// Swap the forward and backward directions.
    ///
    /// Double negation unwraps: `-(-x) == x`, never a nested wrapper.
    fn neg(self) -> Self::Output {
        match self {
            Offset::Negated(inner) => *inner,
            other => Offset::Negated(Box::new(other)),
        }
    }
}

impl Neg for &Offset {
    type Output = Offset;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// ── operator sugar on the host point types ────────────────────────────────
//
// The fallible API is `try_forward` / `try_backward`; the operators are the
// ergonomic path and surface a host-range failure as a panic, like the host
// library's own `Add<Months>` does.

impl Add<&Offset> for NaiveDateTime {
    type Output = NaiveDateTime;

    #[inline]
    fn add(self, rhs: &Offset) -> Self::Output {
        rhs.try_forward(self)
            .expect("offset application out of representable date range")
    }
}

impl Sub<&Offset> for NaiveDateTime {
    type Output = NaiveDateTime;

    #[inline]
    fn sub(self, rhs: &Offset) -> Self::Output {
        rhs.try_backward(self)
            .expect("offset application out of representable date range")
    }
}

impl Add<&Offset> for DateTime<Utc> {
    type Output = DateTime<Utc>;

    #[inline]
    fn add(self, rhs: &Offset) -> Self::Output {
        rhs.try_forward(self)
            .expect("offset application out of representable date range")
    }
}

impl Sub<&Offset> for DateTime<Utc> {
    type Output = DateTime<Utc>;

    #[inline]
    fn sub(self, rhs: &Offset) -> Self::Output {
        rhs.try_backward(self)
            .expect("offset application out of representable date range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        TimePoint::from_fields(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn dispatches_to_each_kind() {
        let p = dt(2012, 5, 5, 0, 0, 0);
        assert_eq!(Offset::from(Tick::days(1)).try_forward(p).unwrap(), dt(2012, 5, 6, 0, 0, 0));
        assert_eq!(Offset::from(CalendarStep::months(1)).try_forward(p).unwrap(), dt(2012, 6, 5, 0, 0, 0));
        assert_eq!(Offset::from(MonthBegin::new(1)).try_forward(p).unwrap(), dt(2012, 6, 1, 0, 0, 0));
        assert_eq!(Offset::from(MonthEnd::new(1)).try_forward(p).unwrap(), dt(2012, 5, 31, 0, 0, 0));
        assert_eq!(Offset::from(YearBegin::new(1)).try_forward(p).unwrap(), dt(2013, 1, 1, 0, 0, 0));
        assert_eq!(Offset::from(YearEnd::new(1)).try_forward(p).unwrap(), dt(2012, 12, 31, 0, 0, 0));
        // 2012-05-05 is a Saturday; next Monday is May 7.
        assert_eq!(Offset::from(Week::on(Weekday::Mon)).try_forward(p).unwrap(), dt(2012, 5, 7, 0, 0, 0));
    }

    #[test]
    fn negation_swaps_directions() {
        let p = dt(2012, 5, 5, 0, 0, 0);
        let offset = Offset::from(Tick::days(3));
        let negated = -offset.clone();
        assert_eq!(negated.try_forward(p), offset.try_backward(p));
        assert_eq!(negated.try_backward(p), offset.try_forward(p));
    }

    #[test]
    fn double_negation_unwraps_to_original_variant() {
        let offset = Offset::from(MonthEnd::new(2));
        let twice = -(-offset.clone());
        assert_eq!(twice, offset);
        assert!(matches!(twice, Offset::MonthEnd(_)));
    }

    #[test]
    fn double_negation_behaves_identically() {
        let p = dt(2020, 2, 1, 7, 0, 0);
        for offset in [
            Offset::from(Tick::hours(30)),
            Offset::from(MonthBegin::new(1)),
            Offset::from(Week::on(Weekday::Fri)),
        ] {
            let twice = -(-offset.clone());
            assert_eq!(twice.try_forward(p), offset.try_forward(p));
        }
    }

    #[test]
    fn boundary_delegation() {
        let may31 = dt(2012, 5, 31, 0, 0, 0);
        assert!(Offset::from(MonthEnd::new(1)).is_on_boundary(may31));
        assert!(!Offset::from(MonthBegin::new(1)).is_on_boundary(may31));
        assert!(Offset::from(Tick::seconds(5)).is_on_boundary(may31));
        assert!(Offset::from(CalendarStep::years(1)).is_on_boundary(may31));
        assert!((-Offset::from(MonthEnd::new(1))).is_on_boundary(may31));
    }

    #[test]
    fn tick_equality_carries_into_the_enum() {
        assert_eq!(Offset::from(Tick::seconds(60)), Offset::from(Tick::minutes(1)));
        assert_ne!(Offset::from(Tick::seconds(60)), Offset::from(CalendarStep::months(1)));
    }

    #[test]
    fn labels_and_display() {
        assert_eq!(Offset::from(Tick::seconds(5)).freq_label(), "5S");
        assert_eq!(Offset::from(MonthBegin::new(1)).freq_label(), "MB");
        let negated = -Offset::from(Week::new(3, Weekday::Mon));
        assert_eq!(negated.freq_label(), "-3W-MON");
        assert_eq!(format!("{negated}"), "-3W-MON");
    }

    #[test]
    fn operator_sugar_on_both_host_types() {
        let naive = dt(2012, 5, 5, 0, 0, 0);
        let offset = Offset::from(MonthEnd::new(1));
        assert_eq!(naive + &offset, dt(2012, 5, 31, 0, 0, 0));
        assert_eq!(naive - &offset, dt(2012, 4, 30, 0, 0, 0));

        let utc = DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc);
        assert_eq!((utc + &offset).naive_utc(), dt(2012, 5, 31, 0, 0, 0));
    }

    #[test]
    fn out_of_range_surfaces_as_error() {
        let near_max = dt(262_000, 12, 1, 0, 0, 0);
        let offset = Offset::from(CalendarStep::years(1_000));
        assert_eq!(offset.try_forward(near_max), Err(OffsetError::OutOfRange));
    }
}
