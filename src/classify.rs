//! Coarse time-of-day predicates on the local wall clock.
//!
//! The buckets partition the day: morning is before 12:00, afternoon
//! 12:00 to 16:59, evening 17:00 to 19:59, and night 20:00 to 23:59.

use chrono::{DateTime, TimeZone, Timelike};

pub fn is_morning<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    dt.hour() < 12
}

pub fn is_afternoon<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    (12..17).contains(&dt.hour())
}

pub fn is_evening<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    (17..20).contains(&dt.hour())
}

pub fn is_night<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    (20..24).contains(&dt.hour())
}

/// Whether the local time is 18:00 or later.
pub fn is_after_6pm<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    dt.hour() >= 18
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use chrono_tz::America::Toronto;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 4, hour, 30, 0).unwrap()
    }

    #[test]
    fn test_buckets_partition_the_day() {
        for hour in 0..24 {
            let dt = at(hour);
            let hits = [is_morning(&dt), is_afternoon(&dt), is_evening(&dt), is_night(&dt)];
            assert_eq!(hits.iter().filter(|&&h| h).count(), 1, "hour {hour}");
        }
    }

    #[test]
    fn test_bucket_edges() {
        assert!(is_morning(&at(0)));
        assert!(is_morning(&at(11)));
        assert!(is_afternoon(&at(12)));
        assert!(is_afternoon(&at(16)));
        assert!(is_evening(&at(17)));
        assert!(is_evening(&at(19)));
        assert!(is_night(&at(20)));
        assert!(is_night(&at(23)));
    }

    #[test]
    fn test_is_after_6pm() {
        assert!(!is_after_6pm(&at(17)));
        assert!(is_after_6pm(&at(18)));
        assert!(is_after_6pm(&at(23)));
    }

    #[test]
    fn test_uses_local_wall_clock() {
        // 23:00 UTC is 18:00 in Toronto (EST).
        let utc = Utc.with_ymd_and_hms(2023, 1, 4, 23, 0, 0).unwrap();
        let local = utc.with_timezone(&Toronto);
        assert!(is_night(&utc));
        assert!(is_evening(&local));
    }
}
