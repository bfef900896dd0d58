//! Crate-internal wall-clock helpers shared by the public modules.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};

use crate::error::{Error, Result};

/// Resolve a wall-clock time in `tz`.
///
/// Fall-back ambiguity resolves to the earliest offset (the one a wall clock
/// shows first); a time inside a spring-forward gap is an error rather than
/// a guess.
pub(crate) fn from_local<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(Error::NonexistentLocalTime(naive.to_string())),
    }
}

pub(crate) fn at_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>> {
    from_local(date.and_time(NaiveTime::MIN), tz)
}

pub(crate) fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::InvalidArgument(format!("no such date: {year:04}-{month:02}-{day:02}"))
    })
}

/// Last calendar day of the given month.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let (ny, nm) = next_month(year, month);
    ymd(ny, nm, 1)?
        .pred_opt()
        .ok_or_else(|| Error::InvalidArgument(format!("date out of range: {year:04}-{month:02}")))
}

pub(crate) fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Weekday code of a date: 0 = Sunday .. 6 = Saturday.
pub(crate) fn weekday_code<D: Datelike>(d: &D) -> u8 {
    d.weekday().num_days_from_sunday() as u8
}

pub(crate) fn validate_weekday_codes(weekdays: &[u8]) -> Result<()> {
    match weekdays.iter().find(|&&code| code > 6) {
        Some(code) => Err(Error::InvalidArgument(format!(
            "weekday code {code} is out of range (0 = Sunday .. 6 = Saturday)"
        ))),
        None => Ok(()),
    }
}

/// Civil-calendar addition on a naive timestamp.
///
/// Month overflow carries into the year and day overflow rolls into the
/// following months (Jan 31 + 1 month = Feb 31 = Mar 2/3), the standard
/// civil rollover rule. Saturates at the representable date range.
pub(crate) fn add_calendar(dt: NaiveDateTime, years: i32, months: i32, days: i64) -> NaiveDateTime {
    let total = i64::from(dt.year()) * 12 + i64::from(dt.month()) - 1
        + i64::from(years) * 12
        + i64::from(months);
    let year = total.div_euclid(12).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    let month = total.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or(if total >= 0 { NaiveDate::MAX } else { NaiveDate::MIN });
    let date = first
        .checked_add_signed(Duration::days(i64::from(dt.day()) - 1 + days))
        .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN });
    date.and_time(dt.time())
}
