// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar arithmetic on the UTC axis.
//!
//! Two directions are covered here:
//!
//! - **Composition**: calendar fields → epoch milliseconds. Out-of-range
//!   components roll over into the neighbouring unit instead of failing, so
//!   month 13 of 2023 is January 2024 and day 0 is the last day of the
//!   previous month. A year in `0..=99` is read as `1900 + year`.
//! - **ISO week numbering**: the week of the year that contains a given date,
//!   anchored on Thursdays.
//!
//! Decomposition itself (epoch milliseconds → fields) is delegated to
//! `chrono`.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// `NaiveDate::num_days_from_ce()` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

// ═══════════════════════════════════════════════════════════════════════════
// TimeFields — the public field set
// ═══════════════════════════════════════════════════════════════════════════

/// A partially specified calendar date and time of day.
///
/// Omitted fields take these defaults when passed to
/// [`Instant::from_fields`](crate::Instant::from_fields):
///
/// | Field | Default |
/// |-------|---------|
/// | `year` | `0` (read as 1900) |
/// | `month` | `1` (one-indexed) |
/// | `day` | `0` (the day before the 1st) |
/// | `hour`, `minute`, `second`, `millisecond` | `0` |
///
/// No field is range-checked; see the module docs for the rollover rules.
///
/// ```
/// use epochal::{Instant, TimeFields};
///
/// let a = Instant::from_fields(TimeFields::new().year(2023).month(13).day(1));
/// let b = Instant::from_fields(TimeFields::new().year(2024).month(1).day(1));
/// assert!(a.equal(b));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct TimeFields {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
    pub millisecond: Option<i64>,
}

impl TimeFields {
    /// An empty field set; every field takes its default.
    pub const fn new() -> Self {
        Self {
            year: None,
            month: None,
            day: None,
            hour: None,
            minute: None,
            second: None,
            millisecond: None,
        }
    }

    pub const fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    /// One-indexed: January is `1`.
    pub const fn month(mut self, month: i64) -> Self {
        self.month = Some(month);
        self
    }

    pub const fn day(mut self, day: i64) -> Self {
        self.day = Some(day);
        self
    }

    pub const fn hour(mut self, hour: i64) -> Self {
        self.hour = Some(hour);
        self
    }

    pub const fn minute(mut self, minute: i64) -> Self {
        self.minute = Some(minute);
        self
    }

    pub const fn second(mut self, second: i64) -> Self {
        self.second = Some(second);
        self
    }

    pub const fn millisecond(mut self, millisecond: i64) -> Self {
        self.millisecond = Some(millisecond);
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Civil — fully resolved, unnormalised fields
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar fields with a zero-indexed month, ready for composition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Civil {
    pub year: i64,
    pub month0: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub millisecond: i64,
}

impl From<TimeFields> for Civil {
    fn from(fields: TimeFields) -> Self {
        Self {
            year: fields.year.unwrap_or(0),
            month0: fields.month.unwrap_or(1) - 1,
            day: fields.day.unwrap_or(0),
            hour: fields.hour.unwrap_or(0),
            minute: fields.minute.unwrap_or(0),
            second: fields.second.unwrap_or(0),
            millisecond: fields.millisecond.unwrap_or(0),
        }
    }
}

impl From<DateTime<Utc>> for Civil {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: i64::from(dt.year()),
            month0: i64::from(dt.month0()),
            day: i64::from(dt.day()),
            hour: i64::from(dt.hour()),
            minute: i64::from(dt.minute()),
            second: i64::from(dt.second()),
            millisecond: i64::from(dt.timestamp_subsec_millis()),
        }
    }
}

impl Civil {
    /// Milliseconds since the Unix epoch, rolling every out-of-range field
    /// into the next larger unit.
    ///
    /// Results beyond the calendar range saturate at the `i64` bounds.
    pub fn to_epoch_millis(self) -> i64 {
        let year = if (0..=99).contains(&self.year) {
            1900 + self.year
        } else {
            self.year
        };
        let year = year.saturating_add(self.month0.div_euclid(12));
        let month0 = self.month0.rem_euclid(12) as u32;

        let Some(month_start) = first_of_month(year, month0) else {
            trace!("calendar composition saturated for year {year}");
            return if year < 0 { i64::MIN } else { i64::MAX };
        };

        let time_of_day = self
            .hour
            .saturating_mul(MS_PER_HOUR)
            .saturating_add(self.minute.saturating_mul(MS_PER_MINUTE))
            .saturating_add(self.second.saturating_mul(MS_PER_SECOND))
            .saturating_add(self.millisecond);

        month_start
            .saturating_add(self.day.saturating_sub(1))
            .saturating_mul(MS_PER_DAY)
            .saturating_add(time_of_day)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Day numbers
// ═══════════════════════════════════════════════════════════════════════════

/// Days between 1970-01-01 and `date`.
#[inline]
pub(crate) fn days_since_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

fn date_from_epoch_days(days: i64) -> Option<NaiveDate> {
    let days_from_ce = i32::try_from(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days_from_ce)
}

/// Day number of the first day of `month0` in `year`, if chrono can
/// represent it.
fn first_of_month(year: i64, month0: u32) -> Option<i64> {
    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).map(days_since_epoch)
}

// ═══════════════════════════════════════════════════════════════════════════
// ISO week
// ═══════════════════════════════════════════════════════════════════════════

/// ISO-8601 week number of `date`.
///
/// The date is moved to the Thursday of its Monday-based week; that
/// Thursday's calendar year owns the week. Weeks are then counted from the
/// Thursday of the week containing January 4th of that year.
pub(crate) fn iso_week(date: NaiveDate) -> u32 {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    let thursday = days_since_epoch(date) + 3 - weekday;

    let Some(jan4) = date_from_epoch_days(thursday)
        .and_then(|thursday| NaiveDate::from_ymd_opt(thursday.year(), 1, 4))
    else {
        // Only reachable at the very edge of chrono's range.
        return date.iso_week().week();
    };
    let jan4_weekday = i64::from(jan4.weekday().num_days_from_monday());

    // Thursday to Thursday: always a whole, non-negative number of weeks.
    let weeks = (thursday - days_since_epoch(jan4) - 3 + jan4_weekday) / 7;
    (1 + weeks) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn compose(fields: TimeFields) -> i64 {
        Civil::from(fields).to_epoch_millis()
    }

    #[test]
    fn epoch_day_numbers() {
        assert_eq!(days_since_epoch(date(1970, 1, 1)), 0);
        assert_eq!(days_since_epoch(date(1969, 12, 31)), -1);
        assert_eq!(days_since_epoch(date(2000, 1, 1)), 10_957);
        assert_eq!(date_from_epoch_days(10_957), Some(date(2000, 1, 1)));
    }

    #[test]
    fn defaults_follow_the_documented_table() {
        // year 0 → 1900, month 1, day 0 → 1899-12-31
        assert_eq!(compose(TimeFields::new()), -2_209_075_200_000);
        assert_eq!(
            Civil::from(TimeFields::new()),
            Civil {
                year: 0,
                month0: 0,
                day: 0,
                hour: 0,
                minute: 0,
                second: 0,
                millisecond: 0,
            }
        );
    }

    #[test]
    fn two_digit_years_land_in_the_1900s() {
        let short = compose(TimeFields::new().year(70).month(1).day(1));
        assert_eq!(short, 0);
        let long = compose(TimeFields::new().year(100).month(1).day(1));
        assert_eq!(long, -59_011_459_200_000);
    }

    #[test]
    fn months_roll_into_years() {
        let rolled = compose(TimeFields::new().year(2023).month(13).day(1));
        let direct = compose(TimeFields::new().year(2024).month(1).day(1));
        assert_eq!(rolled, direct);
        assert_eq!(direct, 1_704_067_200_000);

        let backwards = compose(TimeFields::new().year(2024).month(0).day(1));
        assert_eq!(backwards, compose(TimeFields::new().year(2023).month(12).day(1)));

        let far_back = compose(TimeFields::new().year(2024).month(-12).day(1));
        assert_eq!(far_back, compose(TimeFields::new().year(2022).month(12).day(1)));
    }

    #[test]
    fn days_and_times_roll_forward() {
        // 2023-02-31 → 2023-03-03
        let feb31 = compose(TimeFields::new().year(2023).month(2).day(31));
        assert_eq!(feb31, compose(TimeFields::new().year(2023).month(3).day(3)));

        let hour25 = compose(TimeFields::new().year(2023).month(1).day(1).hour(25));
        assert_eq!(
            hour25,
            compose(TimeFields::new().year(2023).month(1).day(2).hour(1))
        );

        let negative_ms = compose(TimeFields::new().year(1970).month(1).day(1).millisecond(-1));
        assert_eq!(negative_ms, -1);
    }

    #[test]
    fn composition_saturates_beyond_the_calendar() {
        assert_eq!(compose(TimeFields::new().year(i64::MAX).day(1)), i64::MAX);
        assert_eq!(compose(TimeFields::new().year(-1_000_000_000).day(1)), i64::MIN);
    }

    #[test]
    fn iso_week_year_boundaries() {
        assert_eq!(iso_week(date(2021, 1, 1)), 53);
        assert_eq!(iso_week(date(2021, 1, 3)), 53);
        assert_eq!(iso_week(date(2021, 1, 4)), 1);
        assert_eq!(iso_week(date(2020, 12, 31)), 53);
        assert_eq!(iso_week(date(2024, 12, 30)), 1);
        assert_eq!(iso_week(date(2026, 1, 1)), 1);
        assert_eq!(iso_week(date(2027, 1, 1)), 53);
        assert_eq!(iso_week(date(2026, 10, 16)), 42);
    }

    #[test]
    fn iso_week_agrees_with_chrono() {
        let mut day = date(1995, 12, 1);
        let end = date(2031, 2, 1);
        while day < end {
            assert_eq!(iso_week(day), day.iso_week().week(), "{day}");
            day = day.succ_opt().unwrap();
        }
    }
}
