// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar Offset Module
//!
//! This crate provides a calendar-offset algebra: symbolic durations that
//! shift a point-in-time value while respecting calendar irregularities
//! (variable month lengths, leap years, weekday targeting) instead of doing
//! fixed-duration arithmetic.
//!
//! # Core types
//!
//! - [`Offset`] — closed sum type over every offset kind, with negation.
//! - [`Tick`] — fixed-duration offsets (second/minute/hour/day).
//! - [`CalendarStep`] — whole-month / whole-year stepping with day clamping.
//! - [`MonthBegin`] / [`MonthEnd`] / [`YearBegin`] / [`YearEnd`] —
//!   boundary-anchored offsets.
//! - [`Week`] — offsets to the n-th occurrence of a target weekday.
//! - [`DateOffset`] — facade selecting one concrete offset from an
//!   [`OffsetConfig`] record.
//! - [`TimePoint`] — the seam to the host date type; implemented for
//!   `chrono::NaiveDateTime` and `chrono::DateTime<Utc>`.
//! - [`OffsetRange`] / [`date_range`] — sequences by repeated application.
//!
//! # Quick start
//!
//! ```
//! use calstep::{DateOffset, MonthEnd, Offset, OffsetConfig};
//! use chrono::NaiveDate;
//!
//! let ts = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! // Boundary-anchored arithmetic via operators.
//! let month_end = Offset::from(MonthEnd::new(1));
//! assert_eq!(ts(2020, 2, 1) + &month_end, ts(2020, 2, 29)); // leap year
//! assert_eq!(ts(2021, 2, 1) + &month_end, ts(2021, 2, 28));
//!
//! // Negation swaps directions; double negation is the identity.
//! let back = -month_end.clone();
//! assert_eq!(ts(2020, 3, 15) + &back, ts(2020, 2, 29));
//! assert_eq!(-back, month_end);
//!
//! // Facade construction from a configuration record.
//! let every_45_min = DateOffset::new(OffsetConfig {
//!     mins: Some(45),
//!     ..OffsetConfig::default()
//! });
//! assert_eq!(every_45_min.freq_label().as_deref(), Some("45MIN"));
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | Days-in-month and leap-year facts |
//! | `point` | Host point-in-time seam ([`TimePoint`]) |
//! | `tick` | Fixed-duration offsets |
//! | `step` | Whole-month/year stepping |
//! | `anchor` | Month/year boundary anchors |
//! | `week` | Weekday-relative offsets |
//! | `offset` | The [`Offset`] sum type, negation, operators |
//! | `config` | [`OffsetConfig`] and the [`DateOffset`] facade |
//! | `range` | Sequence generation |
//! | `error` | Error types |

mod anchor;
mod calendar;
mod config;
mod error;
mod offset;
mod point;
mod range;
mod step;
mod tick;
mod week;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use anchor::{MonthBegin, MonthEnd, YearBegin, YearEnd};
pub use calendar::{days_in_month, is_leap_year};
pub use config::{DateOffset, OffsetConfig};
pub use error::OffsetError;
pub use offset::Offset;
pub use point::TimePoint;
pub use range::{date_range, OffsetRange};
pub use step::{CalendarStep, StepUnit};
pub use tick::{Tick, TickUnit};
pub use week::Week;
