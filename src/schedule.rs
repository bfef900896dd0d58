//! Recurring-occurrence generators built on the day stepper.
//!
//! Each generator walks the covering span one day at a time and keeps the
//! days matching its rule. Every emitted timestamp carries the start's
//! wall-clock time of day, including across daylight-saving transitions.
//! Weekday codes are 0 = Sunday .. 6 = Saturday.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};

use crate::error::{Error, Result};
use crate::stepper::{StepVector, TimeStepper};
use crate::zone;

fn at_least_one(value: u32, what: &str) -> Result<()> {
    if value < 1 {
        return Err(Error::InvalidArgument(format!("{what} must be at least 1, got {value}")));
    }
    Ok(())
}

/// The local calendar days of `[start, start + months + days]`, one instant
/// per day at `start`'s wall-clock time of day.
///
/// The window end lives in the same UTC frame the day cursor steps in, so
/// the walk covers the window's last day even when the zone's offset shifts
/// inside it. Each visited day is then re-anchored to the start's local
/// time, which is what keeps the emitted time of day stable across
/// daylight-saving transitions. A re-anchored time falling in a
/// daylight-saving gap is an error.
fn daily_at_start_time<Tz: TimeZone>(
    start: &DateTime<Tz>,
    months: i32,
    days: i64,
) -> Result<Vec<DateTime<Tz>>> {
    let tz = start.timezone();
    let time = start.time();
    let end_utc = zone::add_calendar(start.naive_utc(), 0, months, days);
    let end = Utc.from_utc_datetime(&end_utc).with_timezone(&tz);

    let mut out = vec![start.clone()];
    for dt in TimeStepper::new(start.clone(), end, StepVector::by_days(1))?.skip(1) {
        let date = dt.date_naive();
        // An offset shift near midnight can leave the cursor on the same
        // local date twice; keep one instant per day.
        if out.last().is_some_and(|prev| prev.date_naive() >= date) {
            continue;
        }
        out.push(zone::from_local(date.and_time(time), &tz)?);
    }
    Ok(out)
}

/// Occurrences on the given weekdays, every `week_frequency`-th week, for
/// `total_weeks` weeks starting at `start`.
///
/// Weeks are counted in blocks of seven days from `start` (not calendar
/// weeks), and the block containing `start` is always an active block.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for a weekday code above 6 or a zero
/// week count or frequency.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, TimeZone, Utc};
/// use civiltime::schedule::weekly_schedule;
///
/// // Sundays and Mondays, every other week, over four weeks.
/// let start = Utc.with_ymd_and_hms(2023, 1, 4, 9, 0, 0).unwrap();
/// let got = weekly_schedule(start, &[0, 1], 4, 2).unwrap();
/// let days: Vec<u32> = got.iter().map(|d| d.day()).collect();
/// assert_eq!(days, vec![8, 9, 22, 23]);
/// ```
pub fn weekly_schedule<Tz: TimeZone>(
    start: DateTime<Tz>,
    weekdays: &[u8],
    total_weeks: u32,
    week_frequency: u32,
) -> Result<Vec<DateTime<Tz>>> {
    zone::validate_weekday_codes(weekdays)?;
    at_least_one(total_weeks, "total_weeks")?;
    at_least_one(week_frequency, "week_frequency")?;

    let days = daily_at_start_time(&start, 0, 7 * (i64::from(total_weeks) - 1))?;
    let mut out = Vec::new();
    for (idx, dt) in days.into_iter().enumerate() {
        let week = (idx / 7) as u32;
        if week % week_frequency == 0 && weekdays.contains(&zone::weekday_code(&dt)) {
            out.push(dt);
        }
    }
    Ok(out)
}

/// One occurrence per month on the given day of the month, for
/// `total_months` months starting at `start`'s month.
///
/// Months without the requested day are skipped, so asking for day 31
/// yields nothing in February.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for a day outside 1..=31 or a zero
/// month count.
pub fn monthly_schedule_on_day<Tz: TimeZone>(
    start: DateTime<Tz>,
    total_months: u32,
    day_of_month: u32,
) -> Result<Vec<DateTime<Tz>>> {
    at_least_one(total_months, "total_months")?;
    if !(1..=31).contains(&day_of_month) {
        return Err(Error::InvalidArgument(format!(
            "day_of_month {day_of_month} is out of range (1 .. 31)"
        )));
    }

    let days = daily_at_start_time(&start, total_months as i32 - 1, 0)?;
    Ok(days.into_iter().filter(|dt| dt.day() == day_of_month).collect())
}

/// One occurrence per month on the first given weekday of the month, for
/// `total_months` months starting at `start`'s month.
///
/// An occurrence before `start` within the starting month is not emitted;
/// the month still counts toward the total.
pub fn monthly_schedule_on_first_weekday<Tz: TimeZone>(
    start: DateTime<Tz>,
    total_months: u32,
    weekday: u8,
) -> Result<Vec<DateTime<Tz>>> {
    at_least_one(total_months, "total_months")?;
    zone::validate_weekday_codes(&[weekday])?;

    // Seven spare days so the last month's first weekday is inside the span.
    let days = daily_at_start_time(&start, total_months as i32 - 1, 7)?;

    let mut expected = (start.year(), start.month());
    let mut out = Vec::new();
    for dt in days {
        if (dt.year(), dt.month()) == expected && zone::weekday_code(&dt) == weekday {
            expected = zone::next_month(dt.year(), dt.month());
            out.push(dt);
        }
    }
    Ok(out)
}

/// One occurrence per month on the last given weekday of the month, for
/// `total_months` months starting at `start`'s month.
pub fn monthly_schedule_on_last_weekday<Tz: TimeZone>(
    start: DateTime<Tz>,
    total_months: u32,
    weekday: u8,
) -> Result<Vec<DateTime<Tz>>> {
    at_least_one(total_months, "total_months")?;
    zone::validate_weekday_codes(&[weekday])?;

    let days = daily_at_start_time(&start, total_months as i32, 0)?;

    let mut expected = (start.year(), start.month());
    let mut out = Vec::new();
    for dt in days {
        if (dt.year(), dt.month()) == expected
            && zone::weekday_code(&dt) == weekday
            && is_on_last_week_of_month(&dt)
        {
            expected = zone::next_month(dt.year(), dt.month());
            out.push(dt);
        }
    }
    Ok(out)
}

/// Whether the date falls within the first week of its month, where the
/// first week runs from day 1 through the month's first Saturday.
pub fn is_on_first_week_of_month<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    let Some(mut date) = NaiveDate::from_ymd_opt(dt.year(), dt.month(), 1) else {
        return false;
    };
    loop {
        if date.day() == dt.day() {
            return true;
        }
        if date.weekday() == Weekday::Sat {
            return false;
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => return false,
        }
    }
}

/// Whether the date falls within the last week of its month, where the
/// last week runs from the month's last Sunday through its final day.
pub fn is_on_last_week_of_month<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    let Ok(mut date) = zone::last_day_of_month(dt.year(), dt.month()) else {
        return false;
    };
    loop {
        if date.day() == dt.day() {
            return true;
        }
        if date.weekday() == Weekday::Sun {
            return false;
        }
        match date.pred_opt() {
            Some(prev) => date = prev,
            None => return false,
        }
    }
}
