// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Configuration record and the [`DateOffset`] facade.
//!
//! A [`DateOffset`] is built from an [`OffsetConfig`] holding at most one
//! effective duration key. Key resolution is deliberately quirky and matches
//! the modelled system:
//!
//! 1. `weeks`, when present, always wins and produces a **day-based tick**
//!    of `7 * n * weeks` days — never a weekday-anchored [`Week`](crate::Week)
//!    offset.
//! 2. Otherwise the first present key in the fixed order
//!    `secs, mins, hours, days, months, years` is selected and any further
//!    keys are silently ignored. Supplying several keys is a documented
//!    quirk, not an error.
//! 3. With no key at all, construction still succeeds but the facade holds
//!    no offset; arithmetic then fails with
//!    [`OffsetError::Unconfigured`].

use crate::error::OffsetError;
use crate::offset::Offset;
use crate::point::TimePoint;
use crate::step::CalendarStep;
use crate::tick::Tick;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Configuration record for [`DateOffset::new`].
///
/// All keys are optional; `n` defaults to 1 and scales whichever duration
/// key is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OffsetConfig {
    /// Multiplier applied to the selected duration key (default 1).
    pub n: Option<i64>,
    /// Seconds.
    pub secs: Option<i64>,
    /// Minutes.
    pub mins: Option<i64>,
    /// Hours.
    pub hours: Option<i64>,
    /// Days.
    pub days: Option<i64>,
    /// Weeks; resolved to a day-based tick of `7 * n * weeks` days.
    pub weeks: Option<i64>,
    /// Whole calendar months.
    pub months: Option<i64>,
    /// Whole calendar years.
    pub years: Option<i64>,
}

impl OffsetConfig {
    /// The effective multiplier (`n`, defaulting to 1).
    #[inline]
    pub fn multiplier(&self) -> i64 {
        self.n.unwrap_or(1)
    }

    /// Resolve this configuration to a concrete offset, if any duration key
    /// is present.
    pub fn select(&self) -> Option<Offset> {
        let n = self.multiplier();
        if let Some(weeks) = self.weeks {
            return Some(Offset::Tick(Tick::days(7 * n * weeks)));
        }
        if let Some(secs) = self.secs {
            return Some(Offset::Tick(Tick::seconds(n * secs)));
        }
        if let Some(mins) = self.mins {
            return Some(Offset::Tick(Tick::minutes(n * mins)));
        }
        if let Some(hours) = self.hours {
            return Some(Offset::Tick(Tick::hours(n * hours)));
        }
        if let Some(days) = self.days {
            return Some(Offset::Tick(Tick::days(n * days)));
        }
        if let Some(months) = self.months {
            return Some(Offset::Step(CalendarStep::months(n * months)));
        }
        if let Some(years) = self.years {
            return Some(Offset::Step(CalendarStep::years(n * years)));
        }
        None
    }
}

/// Facade that selects one concrete [`Offset`] from a configuration record
/// and delegates all arithmetic to it.
///
/// ```
/// use calstep::{DateOffset, OffsetConfig};
/// use chrono::NaiveDate;
///
/// let offset = DateOffset::new(OffsetConfig {
///     days: Some(2),
///     n: Some(3),
///     ..OffsetConfig::default()
/// });
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 1, 7).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(offset.try_forward(start), Ok(end));
/// assert_eq!(offset.freq_label().as_deref(), Some("6D"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DateOffset {
    inner: Option<Offset>,
}

impl DateOffset {
    /// Build a facade from a configuration record.
    ///
    /// Never fails; an empty configuration yields an unconfigured facade
    /// whose arithmetic reports [`OffsetError::Unconfigured`].
    pub fn new(config: OffsetConfig) -> Self {
        Self {
            inner: config.select(),
        }
    }

    /// The selected concrete offset, if any.
    #[inline]
    pub fn offset(&self) -> Option<&Offset> {
        self.inner.as_ref()
    }

    /// `true` iff a duration key was selected at construction.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    /// Apply the selected offset forward.
    ///
    /// # Errors
    ///
    /// [`OffsetError::Unconfigured`] when no duration key was selected;
    /// [`OffsetError::OutOfRange`] from the underlying offset otherwise.
    pub fn try_forward<P: TimePoint>(&self, point: P) -> Result<P, OffsetError> {
        self.inner
            .as_ref()
            .ok_or(OffsetError::Unconfigured)?
            .try_forward(point)
    }

    /// Apply the selected offset backward.
    ///
    /// # Errors
    ///
    /// Same as [`DateOffset::try_forward`].
    pub fn try_backward<P: TimePoint>(&self, point: P) -> Result<P, OffsetError> {
        self.inner
            .as_ref()
            .ok_or(OffsetError::Unconfigured)?
            .try_backward(point)
    }

    /// Frequency label of the selected offset, `None` when unconfigured.
    pub fn freq_label(&self) -> Option<String> {
        self.inner.as_ref().map(Offset::freq_label)
    }
}

impl From<Offset> for DateOffset {
    #[inline]
    fn from(offset: Offset) -> Self {
        Self {
            inner: Some(offset),
        }
    }
}

impl Neg for DateOffset {
    type Output = DateOffset;

    /// Negate the selected offset; an unconfigured facade stays
    /// unconfigured.
    fn neg(self) -> Self::Output {
        Self {
            inner: self.inner.map(Neg::neg),
        }
    }
}

impl fmt::Display for DateOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(offset) => write!(f, "{offset}"),
            None => write!(f, "<unconfigured>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick::TickUnit;
    use chrono::NaiveDateTime;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        TimePoint::from_fields(y, mo, d, h, mi, s).unwrap()
    }

    fn cfg() -> OffsetConfig {
        OffsetConfig::default()
    }

    #[test]
    fn empty_config_yields_unconfigured_facade() {
        let offset = DateOffset::new(cfg());
        assert!(!offset.is_configured());
        assert_eq!(offset.freq_label(), None);
        assert_eq!(
            offset.try_forward(dt(2020, 1, 1, 0, 0, 0)),
            Err(OffsetError::Unconfigured)
        );
        assert_eq!(
            offset.try_backward(dt(2020, 1, 1, 0, 0, 0)),
            Err(OffsetError::Unconfigured)
        );
    }

    #[test]
    fn n_scales_the_selected_key() {
        let offset = DateOffset::new(OffsetConfig {
            secs: Some(5),
            n: Some(3),
            ..cfg()
        });
        assert_eq!(offset.offset(), Some(&Offset::Tick(Tick::seconds(15))));
    }

    #[test]
    fn priority_order_first_key_wins() {
        let offset = DateOffset::new(OffsetConfig {
            mins: Some(2),
            hours: Some(99),
            years: Some(7),
            ..cfg()
        });
        // `mins` precedes `hours` and `years`; the rest is ignored.
        assert_eq!(offset.offset(), Some(&Offset::Tick(Tick::minutes(2))));
    }

    #[test]
    fn weeks_always_resolve_to_a_day_tick() {
        let offset = DateOffset::new(OffsetConfig {
            weeks: Some(2),
            n: Some(3),
            secs: Some(1),
            ..cfg()
        });
        let expected = Tick::days(42);
        match offset.offset() {
            Some(Offset::Tick(tick)) => {
                assert_eq!(tick.unit(), TickUnit::Day);
                assert_eq!(*tick, expected);
            }
            other => panic!("expected a day tick, got {other:?}"),
        }
    }

    #[test]
    fn months_and_years_become_calendar_steps() {
        let months = DateOffset::new(OffsetConfig {
            months: Some(2),
            n: Some(2),
            ..cfg()
        });
        assert_eq!(months.offset(), Some(&Offset::Step(CalendarStep::months(4))));

        let years = DateOffset::new(OffsetConfig {
            years: Some(1),
            ..cfg()
        });
        assert_eq!(years.offset(), Some(&Offset::Step(CalendarStep::years(1))));
    }

    #[test]
    fn facade_delegates_arithmetic() {
        let offset = DateOffset::new(OffsetConfig {
            months: Some(1),
            ..cfg()
        });
        let p = dt(2021, 1, 31, 9, 0, 0);
        assert_eq!(offset.try_forward(p), Ok(dt(2021, 2, 28, 9, 0, 0)));
        assert_eq!(offset.try_backward(p), Ok(dt(2020, 12, 31, 9, 0, 0)));
    }

    #[test]
    fn negation_inverts_a_configured_facade() {
        let offset = DateOffset::new(OffsetConfig {
            days: Some(1),
            ..cfg()
        });
        let p = dt(2020, 3, 1, 0, 0, 0);
        let negated = -offset.clone();
        assert_eq!(negated.try_forward(p), offset.try_backward(p));
        // Double negation restores the original behaviour.
        let twice = -negated;
        assert_eq!(twice.try_forward(p), offset.try_forward(p));
    }

    #[test]
    fn negation_of_unconfigured_stays_unconfigured() {
        let offset = -DateOffset::new(cfg());
        assert!(!offset.is_configured());
    }

    #[test]
    fn display_shows_label_or_placeholder() {
        let offset = DateOffset::new(OffsetConfig {
            hours: Some(6),
            ..cfg()
        });
        assert_eq!(format!("{offset}"), "6H");
        assert_eq!(format!("{}", DateOffset::new(cfg())), "<unconfigured>");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_from_json() {
        let config: OffsetConfig = serde_json::from_str(r#"{"secs": 5, "n": 2}"#).unwrap();
        assert_eq!(config.secs, Some(5));
        assert_eq!(config.multiplier(), 2);
        let offset = DateOffset::new(config);
        assert_eq!(offset.freq_label().as_deref(), Some("10S"));
    }
}
