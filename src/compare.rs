//! Instant comparison with tolerance.

use chrono::{DateTime, Duration, TimeZone};

/// Whether two instants are within `drift` of each other, in either
/// direction. The operands may carry different time zones; comparison is
/// on the instants they name.
pub fn equal_with_drift<Tz1, Tz2>(a: &DateTime<Tz1>, b: &DateTime<Tz2>, drift: Duration) -> bool
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let diff = a.clone().signed_duration_since(b.clone());
    diff <= drift && diff >= -drift
}
