// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time Module
//!
//! Immutable instants and durations with calendar accessors, modelled on
//! Go's `time` package.
//!
//! # Core types
//!
//! - [`Instant`] — absolute point in time, milliseconds since 1970-01-01 UTC.
//! - [`Duration`] — signed span of time in milliseconds.
//! - [`TimeFields`] — partially specified calendar fields for
//!   [`Instant::from_fields`].
//! - [`ParseError`] — returned by [`Instant::from_iso_string`].
//!
//! # Calendar
//!
//! All calendar fields are read on the proleptic Gregorian calendar in UTC.
//! Construction from fields never fails: out-of-range components roll over
//! into the neighbouring unit.
//!
//! | Input | Result |
//! |-------|--------|
//! | 2023-13-01 | 2024-01-01 |
//! | 2023-02-31 | 2023-03-03 |
//! | 2023-03-00 | 2023-02-28 |
//! | year `0..=99` | year `1900..=1999` |
//!
//! ```
//! use epochal::{Duration, Instant, TimeFields};
//!
//! let t = Instant::from_fields(TimeFields::new().year(2021).month(1).day(1));
//! assert_eq!(t.week(), 53);
//! assert_eq!(t.add_date(0, 0, 3).week(), 1);
//!
//! let later = t + Duration::minutes(90.0);
//! assert_eq!(later.to_string(), "2021-01-01T01:30:00.000Z");
//! ```
//!
//! # Features
//!
//! - `serde` — serialise [`Instant`] as its epoch milliseconds and
//!   [`Duration`] as its millisecond count.
//! - `logging` — emit diagnostics through the `log` facade.

#[macro_use]
mod logging;

mod calendar;
mod duration;
mod error;
mod instant;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::TimeFields;
pub use duration::Duration;
pub use error::ParseError;
pub use instant::Instant;
