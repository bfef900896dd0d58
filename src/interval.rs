//! Rounding up to the next wall-clock minute mark.
//!
//! Marks are fixed points within the hour (every 5, 10, 15, or 30
//! minutes). A timestamp already on a mark snaps to that mark with its
//! seconds dropped; anything past the hour's last mark snaps to the top
//! of the next hour.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Timelike};

use crate::error::Result;
use crate::zone;

const FIVE: [u32; 12] = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55];
const TEN: [u32; 6] = [0, 10, 20, 30, 40, 50];
const FIFTEEN: [u32; 4] = [0, 15, 30, 45];
const THIRTY: [u32; 2] = [0, 30];

fn snap<Tz: TimeZone>(dt: &DateTime<Tz>, marks: &[u32]) -> Result<DateTime<Tz>> {
    let minute = dt.minute();
    let (hours, mark) = match marks.iter().find(|&&m| m >= minute) {
        Some(&m) => (i64::from(dt.hour()), m),
        None => (i64::from(dt.hour()) + 1, 0),
    };
    let naive = dt.date_naive().and_time(NaiveTime::MIN)
        + Duration::hours(hours)
        + Duration::minutes(i64::from(mark));
    zone::from_local(naive, &dt.timezone())
}

/// The next mark on the five-minute grid (`:00`, `:05`, .., `:55`).
pub fn next_five_minute_mark<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    snap(dt, &FIVE)
}

/// The next mark on the ten-minute grid.
pub fn next_ten_minute_mark<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    snap(dt, &TEN)
}

/// The next mark on the fifteen-minute grid.
pub fn next_fifteen_minute_mark<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    snap(dt, &FIFTEEN)
}

/// The next mark on the half-hour grid.
pub fn next_thirty_minute_mark<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    snap(dt, &THIRTY)
}

/// The next top of the hour. A timestamp already at minute zero is
/// returned unchanged, seconds included.
pub fn next_hour_mark<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    if dt.minute() == 0 {
        return Ok(dt.clone());
    }
    let naive = dt.date_naive().and_time(NaiveTime::MIN) + Duration::hours(i64::from(dt.hour()) + 1);
    zone::from_local(naive, &dt.timezone())
}
