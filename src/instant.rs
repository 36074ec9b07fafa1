// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Absolute point in time with millisecond resolution.
//!
//! [`Instant`] stores a single signed count of milliseconds since
//! 1970-01-01T00:00:00.000Z. Every calendar accessor is derived from that
//! count on the proleptic Gregorian calendar in UTC; nothing is cached.
//!
//! Instants combine with [`Duration`]s (`Instant ± Duration → Instant`) and
//! with whole calendar units through [`Instant::add_date`] /
//! [`Instant::sub_date`]. There is deliberately no `Instant - Instant`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::calendar::{iso_week, Civil, TimeFields};
use crate::{Duration, ParseError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable instant on the UTC axis.
///
/// ```
/// use epochal::{Duration, Instant};
///
/// let t = Instant::from_epoch_millis(0);
/// assert_eq!(t.to_string(), "1970-01-01T00:00:00.000Z");
///
/// let later = t + Duration::hours(36.0);
/// assert_eq!((later.day(), later.hour()), (2, 12));
/// assert!(t.before(later));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    epoch_millis: i64,
}

impl Instant {
    /// 1970-01-01T00:00:00.000Z.
    pub const EPOCH: Self = Self::from_epoch_millis(0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from milliseconds since the Unix epoch. Stored verbatim.
    #[inline]
    pub const fn from_epoch_millis(epoch_millis: i64) -> Self {
        Self { epoch_millis }
    }

    /// Create from calendar fields, applying the defaults documented on
    /// [`TimeFields`] and rolling out-of-range fields over.
    ///
    /// ```
    /// use epochal::{Instant, TimeFields};
    ///
    /// let t = Instant::from_fields(TimeFields::new().year(2023).month(2).day(31));
    /// assert_eq!(t.to_string(), "2023-03-03T00:00:00.000Z");
    /// ```
    pub fn from_fields(fields: TimeFields) -> Self {
        Self::from_epoch_millis(Civil::from(fields).to_epoch_millis())
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Create from seconds since the Unix epoch.
    ///
    /// Fractional seconds are kept down to the whole millisecond, with the
    /// same truncation as `Instant + Duration`.
    #[inline]
    pub fn from_unix(seconds: f64) -> Self {
        Self::EPOCH + Duration::seconds(seconds)
    }

    /// Parse an ISO-8601 date or date-time.
    ///
    /// Accepted shapes:
    ///
    /// - RFC 3339 with `Z` or a numeric offset: `2021-01-04T10:20:30.456+02:00`
    /// - date-time without offset, read as UTC: `2021-01-04T10:20`,
    ///   `2021-01-04T10:20:30`, `2021-01-04T10:20:30.456`
    /// - calendar dates at UTC midnight: `2021-01-04`, `2021-01`, `2021`
    /// - expanded years as written by `Display`, RFC 3339 otherwise:
    ///   `+010000-01-01T00:00:00.000Z`, `-000001-06-15T12:00:00+01:00`
    ///
    /// ```
    /// use epochal::Instant;
    ///
    /// let t = Instant::from_iso_string("2021-01-04T10:20:30.456Z").unwrap();
    /// assert_eq!(t.millisecond(), 456);
    /// assert!(Instant::from_iso_string("not-a-date").is_err());
    /// ```
    pub fn from_iso_string(s: &str) -> Result<Self, ParseError> {
        parse_iso(s).map(Self::from).ok_or_else(|| {
            debug!("rejected ISO-8601 input {s:?}");
            ParseError::new(s)
        })
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Shift by whole calendar units, keeping the time of day.
    ///
    /// The shifted fields are re-composed with the same rollover rules as
    /// [`Instant::from_fields`], so one month after January 31st 2023 is
    /// March 3rd.
    pub fn add_date(&self, years: i64, months: i64, days: i64) -> Self {
        let mut civil = Civil::from(self.to_utc());
        civil.year = civil.year.saturating_add(years);
        civil.month0 = civil.month0.saturating_add(months);
        civil.day = civil.day.saturating_add(days);
        Self::from_epoch_millis(civil.to_epoch_millis())
    }

    /// The mirror of [`Instant::add_date`].
    pub fn sub_date(&self, years: i64, months: i64, days: i64) -> Self {
        let mut civil = Civil::from(self.to_utc());
        civil.year = civil.year.saturating_sub(years);
        civil.month0 = civil.month0.saturating_sub(months);
        civil.day = civil.day.saturating_sub(days);
        Self::from_epoch_millis(civil.to_epoch_millis())
    }

    // ── comparison ────────────────────────────────────────────────────

    #[inline]
    pub fn before(&self, other: Self) -> bool {
        self.epoch_millis < other.epoch_millis
    }

    #[inline]
    pub fn before_or_equal(&self, other: Self) -> bool {
        self.epoch_millis <= other.epoch_millis
    }

    #[inline]
    pub fn after(&self, other: Self) -> bool {
        self.epoch_millis > other.epoch_millis
    }

    #[inline]
    pub fn after_or_equal(&self, other: Self) -> bool {
        self.epoch_millis >= other.epoch_millis
    }

    #[inline]
    pub fn equal(&self, other: Self) -> bool {
        self.epoch_millis == other.epoch_millis
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    /// Whole seconds since the Unix epoch, floored so that the value never
    /// decreases as the instant moves forward.
    #[inline]
    pub const fn unix(&self) -> i64 {
        self.epoch_millis.div_euclid(1_000)
    }

    /// Millisecond of the second, `0..=999`.
    pub fn millisecond(&self) -> u32 {
        self.to_utc().timestamp_subsec_millis()
    }

    pub fn second(&self) -> u32 {
        self.to_utc().second()
    }

    pub fn minute(&self) -> u32 {
        self.to_utc().minute()
    }

    pub fn hour(&self) -> u32 {
        self.to_utc().hour()
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.to_utc().day()
    }

    /// ISO-8601 week number, `1..=53`.
    pub fn week(&self) -> u32 {
        iso_week(self.to_utc().date_naive())
    }

    /// Month of the year, starting at 1.
    pub fn month(&self) -> u32 {
        self.to_utc().month()
    }

    pub fn year(&self) -> i32 {
        self.to_utc().year()
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Instants outside chrono's range (roughly ±262 000 years) are clamped
    /// to the nearest representable datetime; the instant itself is left
    /// untouched.
    pub fn to_utc(&self) -> DateTime<Utc> {
        let min = DateTime::<Utc>::MIN_UTC.timestamp_millis();
        let max = DateTime::<Utc>::MAX_UTC.timestamp_millis();
        DateTime::<Utc>::from_timestamp_millis(self.epoch_millis.clamp(min, max))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    if let Some(datetime) = parse_expanded_year(s) {
        return Some(datetime);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Some(datetime.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
        .ok()
        .or_else(|| {
            if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1)
        })?;
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

/// `±YYYYYY-MM-DDTHH:mm:ss[.sss](Z|±hh:mm)`, the form `Display` uses for
/// years outside `0..=9999`. `-000000` is not a valid year.
fn parse_expanded_year(s: &str) -> Option<DateTime<Utc>> {
    let bytes = s.as_bytes();
    let sign_ok = matches!(bytes.first(), Some(b'+' | b'-'));
    let digits_ok = bytes.get(1..7)?.iter().all(u8::is_ascii_digit);
    if !sign_ok || !digits_ok || bytes.get(7) != Some(&b'-') || s.starts_with("-000000") {
        return None;
    }
    let year: i32 = s[..7].parse().ok()?;

    // Parse the rest against a leap year, then move to the real year so
    // February 29th is only accepted where it exists.
    let parsed = DateTime::parse_from_rfc3339(&format!("2000{}", &s[7..])).ok()?;
    let local = parsed.naive_local().with_year(year)?;
    let offset = TimeDelta::seconds(i64::from(parsed.offset().local_minus_utc()));
    local.checked_sub_signed(offset).map(|naive| naive.and_utc())
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display / FromStr ─────────────────────────────────────────────────────

/// `YYYY-MM-DDTHH:mm:ss.sssZ`; years outside `0..=9999` use the expanded
/// `±YYYYYY` form.
impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.to_utc();
        let year = dt.year();
        if (0..=9999).contains(&year) {
            write!(f, "{year:04}")?;
        } else {
            write!(f, "{year:+07}")?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.timestamp_subsec_millis()
        )
    }
}

impl FromStr for Instant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso_string(s)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Instant {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_i64(self.epoch_millis)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = i64::deserialize(deserializer)?;
        Ok(Self::from_epoch_millis(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

// Only the whole-millisecond part of a duration moves an instant. Wrapping
// keeps `(t + d) - d == t` exact for every `t` and `d`.

impl Add<Duration> for Instant {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        Self::from_epoch_millis(self.epoch_millis.wrapping_add(rhs.whole_milliseconds()))
    }
}

impl AddAssign<Duration> for Instant {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        Self::from_epoch_millis(self.epoch_millis.wrapping_sub(rhs.whole_milliseconds()))
    }
}

impl SubAssign<Duration> for Instant {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

// ── chrono bridge ─────────────────────────────────────────────────────────

impl From<DateTime<Utc>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(datetime.timestamp_millis())
    }
}

impl From<Instant> for DateTime<Utc> {
    #[inline]
    fn from(instant: Instant) -> Self {
        instant.to_utc()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
