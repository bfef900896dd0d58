//! Random instants and random interval partitions of a span.
//!
//! Randomness comes from a caller-supplied [`Rng`], so seeded generators
//! give reproducible output.

use chrono::{DateTime, Duration, TimeZone};
use rand::Rng;
use serde::Serialize;

use crate::convert::from_unix_seconds;
use crate::error::{Error, Result};

/// A pair of instants bounding an interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct DateInterval<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub finish: DateTime<Tz>,
}

/// A [`DateInterval`] tagged with a segment id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct SegmentedDateInterval<Tz: TimeZone> {
    pub id: i64,
    pub interval: DateInterval<Tz>,
}

/// A uniformly random instant in `[start, end)`, at second granularity,
/// in `start`'s time zone.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] unless `end` is at least one second
/// after `start`.
pub fn random_date<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    rng: &mut impl Rng,
) -> Result<DateTime<Tz>> {
    let min = start.timestamp();
    let max = end.timestamp();
    if max <= min {
        return Err(Error::InvalidArgument(
            "end must be at least one second after start".to_string(),
        ));
    }
    Ok(from_unix_seconds(rng.gen_range(min..max))?.with_timezone(&start.timezone()))
}

/// Consecutive intervals of random length (1 to `max_seconds` seconds each)
/// covering `[start, end]`.
///
/// Each interval starts where the previous one ended. The final interval is
/// the exception: it restarts at the previous interval's start and runs to
/// `end`, so it overlaps its predecessor and the run always closes exactly
/// on `end`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `max_seconds` is below 1 or
/// `end` is not after `start`.
pub fn random_date_intervals<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    max_seconds: i64,
    rng: &mut impl Rng,
) -> Result<Vec<DateInterval<Tz>>> {
    if max_seconds < 1 {
        return Err(Error::InvalidArgument(format!(
            "max_seconds must be at least 1, got {max_seconds}"
        )));
    }
    if *end <= *start {
        return Err(Error::InvalidArgument("end must be after start".to_string()));
    }

    let mut out = Vec::new();
    let mut prev = start.clone();
    let mut curr = start.clone();
    loop {
        let next = curr.clone() + Duration::seconds(rng.gen_range(1..=max_seconds));
        if next >= *end {
            out.push(DateInterval { start: prev, finish: end.clone() });
            return Ok(out);
        }
        out.push(DateInterval { start: curr.clone(), finish: next.clone() });
        prev = curr;
        curr = next;
    }
}

/// [`random_date_intervals`] with each interval tagged by a uniformly
/// random segment id in `[0, total_segments)`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `total_segments` is below 1, or
/// any error of [`random_date_intervals`].
pub fn random_segmented_date_intervals<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    max_seconds: i64,
    total_segments: i64,
    rng: &mut impl Rng,
) -> Result<Vec<SegmentedDateInterval<Tz>>> {
    if total_segments < 1 {
        return Err(Error::InvalidArgument(format!(
            "total_segments must be at least 1, got {total_segments}"
        )));
    }
    Ok(random_date_intervals(start, end, max_seconds, rng)?
        .into_iter()
        .map(|interval| SegmentedDateInterval { id: rng.gen_range(0..total_segments), interval })
        .collect())
}
