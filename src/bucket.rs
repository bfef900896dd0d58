//! Covering calendar buckets: the hour, day, week, month, or year holding
//! an instant, and contiguous runs of those buckets over a span.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Timelike};
use serde::Serialize;

use crate::boundary;
use crate::error::Result;
use crate::stepper::{step_range, StepVector};
use crate::zone;

/// A span between two instants in the same time zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct TimeRange<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

// ── Single buckets ──────────────────────────────────────────────────────────

/// The clock hour containing `dt`: from the top of its hour to the top of
/// the next.
pub fn hour_range<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<TimeRange<Tz>> {
    let naive = dt.date_naive().and_time(NaiveTime::MIN) + Duration::hours(i64::from(dt.hour()));
    let start = zone::from_local(naive, &dt.timezone())?;
    let end = start.clone() + Duration::hours(1);
    Ok(TimeRange { start, end })
}

/// The calendar day containing `dt`: from its midnight to 24 hours later.
pub fn day_range<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<TimeRange<Tz>> {
    let start = zone::at_midnight(dt.date_naive(), &dt.timezone())?;
    let end = start.clone() + Duration::hours(24);
    Ok(TimeRange { start, end })
}

/// The ISO week containing `dt`: from Monday's midnight to Sunday's
/// midnight.
pub fn iso_week_range<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<TimeRange<Tz>> {
    Ok(TimeRange {
        start: boundary::first_day_of_this_iso_week(|| dt.clone())?,
        end: boundary::last_day_of_this_iso_week(|| dt.clone())?,
    })
}

/// The calendar month containing `dt`: from the first's midnight to the
/// next month's first midnight.
pub fn month_range<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<TimeRange<Tz>> {
    Ok(TimeRange {
        start: boundary::first_day_of_this_month(|| dt.clone())?,
        end: boundary::first_day_of_next_month(|| dt.clone())?,
    })
}

/// The calendar year containing `dt`: from January 1's midnight to the next
/// January 1's midnight.
pub fn year_range<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<TimeRange<Tz>> {
    Ok(TimeRange {
        start: boundary::first_day_of_this_year(|| dt.clone())?,
        end: boundary::first_day_of_next_year(|| dt.clone())?,
    })
}

// ── Buckets around the injected clock ───────────────────────────────────────

pub fn hour_range_now<Tz, Now>(now: Now) -> Result<TimeRange<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    hour_range(&now())
}

pub fn day_range_now<Tz, Now>(now: Now) -> Result<TimeRange<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    day_range(&now())
}

pub fn iso_week_range_now<Tz, Now>(now: Now) -> Result<TimeRange<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    iso_week_range(&now())
}

pub fn month_range_now<Tz, Now>(now: Now) -> Result<TimeRange<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    month_range(&now())
}

pub fn year_range_now<Tz, Now>(now: Now) -> Result<TimeRange<Tz>>
where
    Tz: TimeZone,
    Now: FnOnce() -> DateTime<Tz>,
{
    year_range(&now())
}

// ── Bucket runs over a span ─────────────────────────────────────────────────

/// One hour bucket per clock hour visited between `start` and `end`,
/// inclusive of both endpoints' hours.
pub fn hourly_ranges_between<Tz: TimeZone>(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
) -> Result<Vec<TimeRange<Tz>>> {
    step_range(start, end, StepVector::by_hours(1))?
        .iter()
        .map(hour_range)
        .collect()
}

/// One day bucket per calendar day visited between `start` and `end`.
pub fn daily_ranges_between<Tz: TimeZone>(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
) -> Result<Vec<TimeRange<Tz>>> {
    step_range(start, end, StepVector::by_days(1))?
        .iter()
        .map(day_range)
        .collect()
}

/// One ISO week bucket per week visited between `start` and `end`.
pub fn iso_weekly_ranges_between<Tz: TimeZone>(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
) -> Result<Vec<TimeRange<Tz>>> {
    step_range(start, end, StepVector::by_days(7))?
        .iter()
        .map(iso_week_range)
        .collect()
}

/// One month bucket per calendar month visited between `start` and `end`.
pub fn monthly_ranges_between<Tz: TimeZone>(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
) -> Result<Vec<TimeRange<Tz>>> {
    step_range(start, end, StepVector::by_months(1))?
        .iter()
        .map(month_range)
        .collect()
}

/// One year bucket per calendar year visited between `start` and `end`.
pub fn yearly_ranges_between<Tz: TimeZone>(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
) -> Result<Vec<TimeRange<Tz>>> {
    step_range(start, end, StepVector::by_years(1))?
        .iter()
        .map(year_range)
        .collect()
}
