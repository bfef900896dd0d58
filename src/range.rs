//! Enumeration of the calendar components covered by a span.

use chrono::{DateTime, Datelike, TimeZone};

use crate::error::Result;
use crate::stepper::{step_range, StepVector};
use crate::zone;

/// Every calendar year touched by the span, inclusive of both endpoints.
pub fn years_range<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Vec<i32>> {
    Ok(step_range(start, end, StepVector::by_years(1))?
        .iter()
        .map(Datelike::year)
        .collect())
}

/// Every month number (1 = January .. 12 = December) touched by the span,
/// in visit order. Months repeat when the span crosses a year boundary.
pub fn months_range<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Vec<u32>> {
    Ok(step_range(start, end, StepVector::by_months(1))?
        .iter()
        .map(Datelike::month)
        .collect())
}

/// Every day-of-month number touched by the span, in visit order.
pub fn days_range<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Vec<u32>> {
    Ok(step_range(start, end, StepVector::by_days(1))?
        .iter()
        .map(Datelike::day)
        .collect())
}

/// The timestamps within the span, one per day, that fall on any of the
/// given weekdays (0 = Sunday .. 6 = Saturday). Each result keeps the
/// wall-clock time of `start`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] for a weekday code above 6.
pub fn weekdays_between<Tz: TimeZone>(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    weekdays: &[u8],
) -> Result<Vec<DateTime<Tz>>> {
    zone::validate_weekday_codes(weekdays)?;
    Ok(step_range(start, end, StepVector::by_days(1))?
        .into_iter()
        .filter(|dt| weekdays.contains(&zone::weekday_code(dt)))
        .collect())
}
