//! Calendar boundary anchors and week-number lookups.
//!
//! Everything "relative to now" takes a clock closure returning the current
//! instant instead of reading the system clock — the caller provides the
//! anchor, which keeps these functions deterministic and testable.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use civiltime::boundary::first_day_of_this_year;
//!
//! let now = || Utc.with_ymd_and_hms(2000, 7, 1, 9, 30, 0).unwrap();
//! let got = first_day_of_this_year(now).unwrap();
//! assert_eq!(got, Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
//! ```

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone};

use crate::error::{Error, Result};
use crate::stepper::{StepVector, TimeStepper};
use crate::zone;

// ── Year anchors ────────────────────────────────────────────────────────────

/// Midnight of January 1 of the previous calendar year.
pub fn first_day_of_last_year<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    zone::at_midnight(zone::ymd(dt.year() - 1, 1, 1)?, &dt.timezone())
}

/// Midnight of January 1 of the current calendar year.
pub fn first_day_of_this_year<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    zone::at_midnight(zone::ymd(dt.year(), 1, 1)?, &dt.timezone())
}

/// Midnight of January 1 of the next calendar year.
pub fn first_day_of_next_year<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    zone::at_midnight(zone::ymd(dt.year() + 1, 1, 1)?, &dt.timezone())
}

// ── Month anchors ───────────────────────────────────────────────────────────

/// Midnight of the first day of the previous month.
pub fn first_day_of_last_month<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    let (y, m) = if dt.month() == 1 {
        (dt.year() - 1, 12)
    } else {
        (dt.year(), dt.month() - 1)
    };
    zone::at_midnight(zone::ymd(y, m, 1)?, &dt.timezone())
}

/// Midnight of the first day of the current month.
pub fn first_day_of_this_month<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    zone::at_midnight(zone::ymd(dt.year(), dt.month(), 1)?, &dt.timezone())
}

/// Midnight of the first day of the next month.
pub fn first_day_of_next_month<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    let (y, m) = zone::next_month(dt.year(), dt.month());
    zone::at_midnight(zone::ymd(y, m, 1)?, &dt.timezone())
}

// ── Day anchors ─────────────────────────────────────────────────────────────

/// Midnight of yesterday.
pub fn midnight_yesterday<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    let date = dt
        .date_naive()
        .pred_opt()
        .ok_or_else(|| Error::InvalidArgument("date out of range".to_string()))?;
    zone::at_midnight(date, &dt.timezone())
}

/// Midnight (00:00) of the current day.
pub fn midnight<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    zone::at_midnight(dt.date_naive(), &dt.timezone())
}

/// Midnight of tomorrow.
pub fn midnight_tomorrow<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    let date = dt
        .date_naive()
        .succ_opt()
        .ok_or_else(|| Error::InvalidArgument("date out of range".to_string()))?;
    zone::at_midnight(date, &dt.timezone())
}

/// Noon (12:00) of the current day.
pub fn noon<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    let naive = dt.date_naive().and_time(NaiveTime::MIN) + Duration::hours(12);
    zone::from_local(naive, &dt.timezone())
}

// ── ISO week anchors ────────────────────────────────────────────────────────
//
// Weeks run Monday through Sunday per ISO 8601, not Sunday through Saturday.

/// Midnight of the Monday of the previous ISO week.
pub fn first_day_of_last_iso_week<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    let back = i64::from(dt.weekday().num_days_from_monday());
    zone::at_midnight(dt.date_naive() - Duration::days(back + 7), &dt.timezone())
}

/// Midnight of the Monday of the current ISO week.
pub fn first_day_of_this_iso_week<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    let back = i64::from(dt.weekday().num_days_from_monday());
    zone::at_midnight(dt.date_naive() - Duration::days(back), &dt.timezone())
}

/// Midnight of the Sunday of the current ISO week.
pub fn last_day_of_this_iso_week<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    let forward = 6 - i64::from(dt.weekday().num_days_from_monday());
    zone::at_midnight(dt.date_naive() + Duration::days(forward), &dt.timezone())
}

/// Midnight of the Monday of the next ISO week.
pub fn first_day_of_next_iso_week<Tz, Now>(now: Now) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    let dt = now();
    let back = i64::from(dt.weekday().num_days_from_monday());
    zone::at_midnight(dt.date_naive() - Duration::days(back) + Duration::days(7), &dt.timezone())
}

// ── Lookups ─────────────────────────────────────────────────────────────────

/// Whether the date falls on January 1.
pub fn is_first_day_of_year<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    dt.day() == 1 && dt.month() == 1
}

/// ISO-8601 week number of the date (the week containing the year's first
/// Thursday is week 1).
pub fn week_number<Tz: TimeZone>(dt: &DateTime<Tz>) -> u32 {
    dt.iso_week().week()
}

/// First date within `year` carrying the given ISO week number.
///
/// Drives a day stepper from January 1 through January 1 of the next year
/// (the extra day catches week 52/53 numbers that spill into January) and
/// returns the first visited date whose week number matches.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when no date in the window carries
/// the requested week number.
pub fn first_date_of_iso_week<Tz: TimeZone>(week: u32, year: i32, tz: &Tz) -> Result<DateTime<Tz>> {
    let at_one = |y: i32| -> Result<DateTime<Tz>> {
        zone::from_local(zone::ymd(y, 1, 1)?.and_time(NaiveTime::MIN) + Duration::hours(1), tz)
    };
    let stepper = TimeStepper::new(at_one(year)?, at_one(year + 1)?, StepVector::by_days(1))?;
    for dt in stepper {
        if dt.iso_week().week() == week {
            return Ok(dt);
        }
    }
    Err(Error::InvalidArgument(format!(
        "no date in {year} has ISO week number {week}"
    )))
}

/// First day of the given month and year, at 01:00.
///
/// The 01:00 time of day is kept for parity with
/// [`first_date_of_iso_week`], whose results it is compared against.
pub fn first_date_of_month<Tz: TimeZone>(month: u32, year: i32, tz: &Tz) -> Result<DateTime<Tz>> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidArgument(format!(
            "month {month} is out of range (1 = January .. 12 = December)"
        )));
    }
    zone::from_local(zone::ymd(year, month, 1)?.and_time(NaiveTime::MIN) + Duration::hours(1), tz)
}

/// Week number reached after the given total count of elapsed days, where
/// days 1 through 7 are week 1. Zero days is week 0.
pub fn week_count_from_days(days: u64) -> u64 {
    if days == 0 {
        0
    } else {
        1 + (days - 1) / 7
    }
}

/// Day of the week for a civil date via Sakamoto's method.
///
/// Returns 0 = Sunday .. 6 = Saturday.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for a month outside 1..=12 or year 0.
pub fn day_of_week(day: u32, month: u32, year: u32) -> Result<u32> {
    const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidArgument(format!(
            "month {month} is out of range (1 = January .. 12 = December)"
        )));
    }
    if year == 0 {
        return Err(Error::InvalidArgument("year must be positive".to_string()));
    }
    let y = if month < 3 { year - 1 } else { year };
    Ok((y + y / 4 - y / 100 + y / 400 + OFFSETS[(month - 1) as usize] + day) % 7)
}

/// The timestamp moved forward (or back) by whole calendar weeks, keeping
/// the wall-clock time of day.
pub fn add_weeks<Tz: TimeZone>(dt: &DateTime<Tz>, weeks: i64) -> Result<DateTime<Tz>> {
    zone::from_local(zone::add_calendar(dt.naive_local(), 0, 0, 7 * weeks), &dt.timezone())
}

// ── Tests ───────────────────────────────────────────────────────────────────
