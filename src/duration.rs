// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Signed elapsed-time span with millisecond resolution.
//!
//! A [`Duration`] is a plain `f64` count of milliseconds. Unit factories are
//! exact multiplications, so fractional, negative and even non-finite inputs
//! flow through unchanged:
//!
//! ```
//! use epochal::Duration;
//!
//! assert_eq!(Duration::seconds(5.0).as_milliseconds(), 5_000.0);
//! assert_eq!(Duration::minutes(1.5), Duration::seconds(90.0));
//! assert_eq!((Duration::hours(1.0) * 2.0).as_minutes(), 120.0);
//! ```

use qtty::{Days, Second, Seconds};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
const MS_PER_WEEK: f64 = 7.0 * MS_PER_DAY;

/// An immutable span of time, stored in milliseconds.
///
/// Equality and ordering compare the millisecond count, with the usual
/// floating-point caveat that a `NaN` duration is unordered.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Duration {
    milliseconds: f64,
}

impl Duration {
    /// The empty span.
    pub const ZERO: Self = Self::milliseconds(0.0);

    // ── constructors ──────────────────────────────────────────────────

    #[inline]
    pub const fn milliseconds(n: f64) -> Self {
        Self { milliseconds: n }
    }

    #[inline]
    pub const fn seconds(n: f64) -> Self {
        Self::milliseconds(n * MS_PER_SECOND)
    }

    #[inline]
    pub const fn minutes(n: f64) -> Self {
        Self::milliseconds(n * MS_PER_MINUTE)
    }

    #[inline]
    pub const fn hours(n: f64) -> Self {
        Self::milliseconds(n * MS_PER_HOUR)
    }

    /// `n` fixed 24-hour days. Calendar-aware day arithmetic lives on
    /// [`Instant::add_date`](crate::Instant::add_date).
    #[inline]
    pub const fn days(n: f64) -> Self {
        Self::milliseconds(n * MS_PER_DAY)
    }

    #[inline]
    pub const fn weeks(n: f64) -> Self {
        Self::milliseconds(n * MS_PER_WEEK)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying millisecond count.
    #[inline]
    pub const fn as_milliseconds(&self) -> f64 {
        self.milliseconds
    }

    #[inline]
    pub fn as_seconds(&self) -> f64 {
        self.milliseconds / MS_PER_SECOND
    }

    #[inline]
    pub fn as_minutes(&self) -> f64 {
        self.milliseconds / MS_PER_MINUTE
    }

    #[inline]
    pub fn as_hours(&self) -> f64 {
        self.milliseconds / MS_PER_HOUR
    }

    #[inline]
    pub fn as_days(&self) -> f64 {
        self.milliseconds / MS_PER_DAY
    }

    #[inline]
    pub fn as_weeks(&self) -> f64 {
        self.milliseconds / MS_PER_WEEK
    }

    /// The span as a typed [`Seconds`] quantity.
    #[inline]
    pub fn to_seconds(&self) -> Seconds {
        Seconds::new(self.as_seconds())
    }

    /// Whole milliseconds, truncated toward zero.
    ///
    /// `NaN` maps to zero and infinities saturate at the `i64` bounds; this
    /// is what [`Instant`](crate::Instant) arithmetic consumes.
    #[inline]
    pub(crate) fn whole_milliseconds(&self) -> i64 {
        self.milliseconds as i64
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.milliseconds)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Duration {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.milliseconds)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = f64::deserialize(deserializer)?;
        Ok(Self::milliseconds(ms))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add for Duration {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::milliseconds(self.milliseconds + rhs.milliseconds)
    }
}

impl AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.milliseconds += rhs.milliseconds;
    }
}

impl Sub for Duration {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::milliseconds(self.milliseconds - rhs.milliseconds)
    }
}

impl SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.milliseconds -= rhs.milliseconds;
    }
}

impl Neg for Duration {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::milliseconds(-self.milliseconds)
    }
}

impl Mul<f64> for Duration {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::milliseconds(self.milliseconds * rhs)
    }
}

impl Mul<Duration> for f64 {
    type Output = Duration;
    #[inline]
    fn mul(self, rhs: Duration) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Duration {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::milliseconds(self.milliseconds / rhs)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<std::time::Duration> for Duration {
    #[inline]
    fn from(value: std::time::Duration) -> Self {
        Self::milliseconds(value.as_nanos() as f64 / 1e6)
    }
}

impl From<chrono::Duration> for Duration {
    #[inline]
    fn from(value: chrono::Duration) -> Self {
        Self::milliseconds(value.num_milliseconds() as f64)
    }
}

impl From<Seconds> for Duration {
    #[inline]
    fn from(value: Seconds) -> Self {
        Self::seconds(value.value())
    }
}

impl From<Days> for Duration {
    #[inline]
    fn from(value: Days) -> Self {
        Self::seconds(value.to::<Second>().value())
    }
}
