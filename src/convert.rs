//! Conversion between timestamps, epoch values, and text formats.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::zone;

/// Format of [`parse_am_pm_in_zone`] and [`to_am_pm_string`], for example
/// `Jan  5, 2023 3:04 pm`.
pub const AM_PM_FORMAT: &str = "%b %e, %Y %-I:%M %P";

// ── Epoch values ────────────────────────────────────────────────────────────

/// UTC timestamp for a count of milliseconds since the Unix epoch, the
/// value JavaScript's `Date.now()` produces.
pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| Error::InvalidArgument(format!("epoch milliseconds out of range: {millis}")))
}

/// [`from_epoch_millis`] on a decimal string.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] when the string is not an integer.
pub fn parse_epoch_millis(s: &str) -> Result<DateTime<Utc>> {
    let millis: i64 = s
        .trim()
        .parse()
        .map_err(|_| Error::InvalidFormat(format!("not an epoch millisecond value: {s:?}")))?;
    from_epoch_millis(millis)
}

/// UTC timestamp for a count of seconds since the Unix epoch.
pub fn from_unix_seconds(secs: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| Error::InvalidArgument(format!("epoch seconds out of range: {secs}")))
}

/// Seconds since the Unix epoch.
pub fn to_unix_seconds<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    dt.timestamp()
}

// ── ISO 8601 ────────────────────────────────────────────────────────────────

/// Parse an ISO 8601 timestamp into UTC.
///
/// Accepts an RFC 3339 string with an offset, or a bare
/// `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds, which is taken
/// to already be UTC.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] when neither form matches.
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::InvalidFormat(format!("not an ISO 8601 timestamp: {s:?}")))
}

/// RFC 3339 rendering with millisecond precision, `Z` for UTC.
pub fn to_iso8601<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ── Human-readable formats ──────────────────────────────────────────────────

/// Parse a wall-clock string like `Jan  5, 2023 3:04 pm` in the given zone.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] when the string does not match
/// [`AM_PM_FORMAT`], or [`Error::NonexistentLocalTime`] when the wall time
/// falls in a daylight-saving gap.
pub fn parse_am_pm_in_zone<Tz: TimeZone>(s: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(s, AM_PM_FORMAT)
        .map_err(|_| Error::InvalidFormat(format!("expected {AM_PM_FORMAT:?}, got {s:?}")))?;
    zone::from_local(naive, tz)
}

/// Render as [`AM_PM_FORMAT`], for example `Jan  5, 2023 3:04 pm`.
pub fn to_am_pm_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(AM_PM_FORMAT).to_string()
}

/// Render like `January 5, 2023 3:04:05 PM`.
pub fn to_american_datetime_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%B %-d, %Y %-I:%M:%S %p").to_string()
}

/// Render like `January 5, 2023`.
pub fn to_american_date_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%B %-d, %Y").to_string()
}
