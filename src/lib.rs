//! # civiltime
//!
//! Calendar date and time utilities on top of [`chrono`].
//!
//! The core is [`TimeStepper`], an inclusive iterator that walks from one
//! instant to another by a calendar-aware step (years and months roll over
//! the way civil calendars do, smaller units are absolute durations), and
//! stays correct across daylight-saving transitions by stepping in UTC and
//! re-projecting into the target zone. Range enumeration, recurring
//! schedules, and calendar buckets are all built on it.
//!
//! Nothing here reads the system clock. Operations relative to "now" take a
//! closure returning the current instant, and randomness comes from a
//! caller-supplied [`rand::Rng`], so everything is deterministic under test.
//!
//! ## Modules
//!
//! - [`stepper`] — calendar-aware stepped iteration between two instants
//! - [`boundary`] — year/month/week/day anchors and week-number lookups
//! - [`range`] — years, months, days, and weekdays covered by a span
//! - [`schedule`] — weekly and monthly recurring-occurrence generators
//! - [`bucket`] — the hour/day/week/month/year bucket holding an instant
//! - [`classify`] — time-of-day predicates (morning, evening, after 6 pm)
//! - [`convert`] — epoch values, ISO 8601, and human-readable formats
//! - [`compare`] — instant comparison with tolerance
//! - [`interval`] — rounding up to the next 5/10/15/30/60-minute mark
//! - [`random`] — random instants and random interval partitions
//! - [`error`] — error types

pub mod boundary;
pub mod bucket;
pub mod classify;
pub mod compare;
pub mod convert;
pub mod error;
pub mod interval;
pub mod random;
pub mod range;
pub mod schedule;
pub mod stepper;

mod zone;

pub use boundary::{
    add_weeks, day_of_week, first_date_of_iso_week, first_date_of_month, first_day_of_last_iso_week,
    first_day_of_last_month, first_day_of_last_year, first_day_of_next_iso_week,
    first_day_of_next_month, first_day_of_next_year, first_day_of_this_iso_week,
    first_day_of_this_month, first_day_of_this_year, is_first_day_of_year,
    last_day_of_this_iso_week, midnight, midnight_tomorrow, midnight_yesterday, noon,
    week_count_from_days, week_number,
};
pub use bucket::{
    daily_ranges_between, day_range, day_range_now, hour_range, hour_range_now,
    hourly_ranges_between, iso_week_range, iso_week_range_now, iso_weekly_ranges_between,
    month_range, month_range_now, monthly_ranges_between, year_range, year_range_now,
    yearly_ranges_between, TimeRange,
};
pub use classify::{is_after_6pm, is_afternoon, is_evening, is_morning, is_night};
pub use compare::equal_with_drift;
pub use convert::{
    from_epoch_millis, from_unix_seconds, parse_am_pm_in_zone, parse_epoch_millis, parse_iso8601,
    to_am_pm_string, to_american_date_string, to_american_datetime_string, to_iso8601,
    to_unix_seconds, AM_PM_FORMAT,
};
pub use error::{Error, Result};
pub use interval::{
    next_fifteen_minute_mark, next_five_minute_mark, next_hour_mark, next_ten_minute_mark,
    next_thirty_minute_mark,
};
pub use random::{
    random_date, random_date_intervals, random_segmented_date_intervals, DateInterval,
    SegmentedDateInterval,
};
pub use range::{days_range, months_range, weekdays_between, years_range};
pub use schedule::{
    is_on_first_week_of_month, is_on_last_week_of_month, monthly_schedule_on_day,
    monthly_schedule_on_first_weekday, monthly_schedule_on_last_weekday, weekly_schedule,
};
pub use stepper::{step_range, StepVector, TimeStepper};
