//! Stepped iteration over a bounded datetime range.
//!
//! [`TimeStepper`] advances a timezone-aware cursor by a compound
//! [`StepVector`] from a start instant up to and including an end instant.
//! The arithmetic happens in the DST-free UTC frame and the result is
//! re-projected into the start instant's zone afterwards: adding a duration
//! directly to a wall clock that observes daylight saving can fail to move
//! the clock across a transition (a 5-minute step at the fall-back boundary
//! lands on the same wall-clock minute), which stalls any loop driven by
//! the cursor. Stepping in UTC guarantees monotonic progress.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use civiltime::{StepVector, TimeStepper};
//!
//! let start = Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap();
//!
//! let visited: Vec<_> = TimeStepper::new(start, end, StepVector::by_days(1))
//!     .unwrap()
//!     .collect();
//! assert_eq!(visited.len(), 4); // Jan 7, 8, 9 and 10
//! ```

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::zone;

/// A compound calendar step: how far [`TimeStepper::advance`] moves per call.
///
/// Components are not normalized — `days: 400` is legal and means
/// "add 400 days". Years and months are applied with civil-calendar
/// normalization; days, hours, minutes and seconds are absolute offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepVector {
    pub years: i32,
    pub months: i32,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl StepVector {
    pub const fn by_years(years: i32) -> Self {
        Self { years, months: 0, days: 0, hours: 0, minutes: 0, seconds: 0 }
    }

    pub const fn by_months(months: i32) -> Self {
        Self { years: 0, months, days: 0, hours: 0, minutes: 0, seconds: 0 }
    }

    pub const fn by_days(days: i64) -> Self {
        Self { years: 0, months: 0, days, hours: 0, minutes: 0, seconds: 0 }
    }

    pub const fn by_hours(hours: i64) -> Self {
        Self { years: 0, months: 0, days: 0, hours, minutes: 0, seconds: 0 }
    }

    pub const fn by_minutes(minutes: i64) -> Self {
        Self { years: 0, months: 0, days: 0, hours: 0, minutes, seconds: 0 }
    }

    pub const fn by_seconds(seconds: i64) -> Self {
        Self { years: 0, months: 0, days: 0, hours: 0, minutes: 0, seconds }
    }

    /// One application of this step to a naive UTC instant.
    fn applied_to(&self, utc: NaiveDateTime) -> NaiveDateTime {
        let shifted = zone::add_calendar(utc, self.years, self.months, self.days);
        let clock = Duration::hours(self.hours)
            + Duration::minutes(self.minutes)
            + Duration::seconds(self.seconds);
        shifted.checked_add_signed(clock).unwrap_or(shifted)
    }
}

/// A cursor over `[start, end]`, advanced by a fixed [`StepVector`].
///
/// The cursor is always expressed in the zone of the start instant. A
/// stepper is owned exclusively by the loop that drives it; all mutation
/// goes through `&mut self`.
#[derive(Debug, Clone)]
pub struct TimeStepper<Tz: TimeZone> {
    tz: Tz,
    curr: DateTime<Tz>,
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    step: StepVector,
    stalled: bool,
    exhausted: bool,
}

impl<Tz: TimeZone> TimeStepper<Tz> {
    /// Create a stepper positioned at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonProgressingStep`] when `end >= start` and one
    /// application of `step` would not land strictly after `start`: such a
    /// vector (zero, backward, or self-cancelling) can never reach the end
    /// of the range. When `end < start` the stepper is done from the
    /// outset, so any vector is accepted. Vectors whose direction depends
    /// on the cursor's position pass this check; [`advance`] ends the
    /// iteration if one later stops moving forward.
    ///
    /// [`advance`]: TimeStepper::advance
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>, step: StepVector) -> Result<Self> {
        if end >= start && step.applied_to(start.naive_utc()) <= start.naive_utc() {
            return Err(Error::NonProgressingStep(format!(
                "step {step:?} does not advance {} toward the end of the range",
                start.naive_utc()
            )));
        }
        Ok(Self {
            tz: start.timezone(),
            curr: start.clone(),
            start,
            end,
            step,
            stalled: false,
            exhausted: false,
        })
    }

    /// The current cursor value. Read-only; always in the start's zone.
    pub fn value(&self) -> DateTime<Tz> {
        self.curr.clone()
    }

    /// The instant the stepper was created at.
    pub fn start(&self) -> DateTime<Tz> {
        self.start.clone()
    }

    /// The inclusive upper bound of the range.
    pub fn end(&self) -> DateTime<Tz> {
        self.end.clone()
    }

    /// Move the cursor forward by one step.
    ///
    /// Returns `true` while the cursor is still on or before the end of the
    /// range, `false` once it has stepped past it. An application that does
    /// not land strictly after the current cursor (a mixed-sign vector can
    /// move forward early in the range and backward later, once calendar
    /// normalization shortens its month hop) leaves the cursor in place and
    /// ends the iteration instead of cycling.
    pub fn advance(&mut self) -> bool {
        let next = self.step.applied_to(self.curr.naive_utc());
        if next <= self.curr.naive_utc() {
            self.stalled = true;
            return false;
        }
        self.curr = Utc.from_utc_datetime(&next).with_timezone(&self.tz);
        self.curr <= self.end
    }

    /// Whether the iteration is over: the cursor has stepped past the end
    /// of the range, or the step stopped moving it forward.
    pub fn done(&self) -> bool {
        self.stalled || self.curr > self.end
    }
}

/// Emits the start instant unconditionally, then every visited value up to
/// and including the end instant.
impl<Tz: TimeZone> Iterator for TimeStepper<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let out = self.curr.clone();
        self.advance();
        self.exhausted = self.done();
        Some(out)
    }
}

/// Every value a stepper visits from `start` to `end`, in order.
///
/// # Errors
///
/// Returns [`Error::NonProgressingStep`] under the same conditions as
/// [`TimeStepper::new`].
pub fn step_range<Tz: TimeZone>(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    step: StepVector,
) -> Result<Vec<DateTime<Tz>>> {
    Ok(TimeStepper::new(start, end, step)?.collect())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};
    use chrono_tz::America::Toronto;
    use proptest::prelude::*;

    // ── construction ────────────────────────────────────────────────────

    #[test]
    fn new_starts_at_start() {
        let start = Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap();
        let ts = TimeStepper::new(start, end, StepVector::by_days(1)).unwrap();
        assert_eq!(ts.value(), start);
        assert_eq!(ts.start(), start);
        assert_eq!(ts.end(), end);
        assert!(!ts.done());
    }

    #[test]
    fn zero_step_is_rejected() {
        let start = Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap();
        let got = TimeStepper::new(start, end, StepVector::default());
        assert!(matches!(got, Err(Error::NonProgressingStep(_))));
    }

    #[test]
    fn backward_step_toward_a_later_end_is_rejected() {
        let start = Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap();
        let got = TimeStepper::new(start, end, StepVector::by_days(-1));
        assert!(matches!(got, Err(Error::NonProgressingStep(_))));
    }

    #[test]
    fn self_cancelling_step_is_rejected() {
        let start = Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap();
        let step = StepVector { days: 1, hours: -24, ..Default::default() };
        let got = TimeStepper::new(start, end, step);
        assert!(matches!(got, Err(Error::NonProgressingStep(_))));
    }

    #[test]
    fn end_before_start_is_done_at_birth() {
        let start = Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap();
        let ts = TimeStepper::new(start, end, StepVector::by_days(1)).unwrap();
        assert!(ts.done());
        // The iterator still emits the start once, like the vector helper.
        let visited: Vec<_> = ts.collect();
        assert_eq!(visited, vec![start]);
    }

    // ── advancement ─────────────────────────────────────────────────────

    #[test]
    fn advance_moves_one_step_at_a_time() {
        let start = Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap();
        let mut ts = TimeStepper::new(start, end, StepVector::by_days(1)).unwrap();

        assert!(ts.advance());
        assert_eq!(ts.value(), Utc.with_ymd_and_hms(2022, 1, 8, 1, 0, 0).unwrap());

        assert!(ts.advance());
        assert_eq!(ts.value(), Utc.with_ymd_and_hms(2022, 1, 9, 1, 0, 0).unwrap());

        assert!(ts.advance());
        assert!(!ts.done());

        assert!(!ts.advance());
        assert!(ts.done());
    }

    #[test]
    fn advance_and_done_always_agree() {
        let start = Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap();
        let mut ts = TimeStepper::new(start, end, StepVector::by_hours(7)).unwrap();
        loop {
            let in_range = ts.advance();
            assert_eq!(in_range, !ts.done());
            if !in_range {
                break;
            }
        }
    }

    #[test]
    fn compound_step_applies_all_components() {
        let start = Utc.with_ymd_and_hms(2020, 1, 31, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let step = StepVector { months: 1, hours: 2, ..Default::default() };
        let mut ts = TimeStepper::new(start, end, step).unwrap();
        ts.advance();
        // Jan 31 + 1 month = Feb 31 = Mar 2 (leap year), plus two hours.
        assert_eq!(ts.value(), Utc.with_ymd_and_hms(2020, 3, 2, 12, 0, 0).unwrap());
    }

    #[test]
    fn mixed_sign_step_that_turns_backward_terminates() {
        // +1 month -30 days moves forward from mid-January, but once the
        // cursor reaches February the normalized month hop shrinks and the
        // vector points backward. The iteration must end, not cycle.
        let start = Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let step = StepVector { months: 1, days: -30, ..Default::default() };

        let visited = step_range(start, end, step).unwrap();
        assert!(visited.len() < 100, "visited {} values", visited.len());
        assert_eq!(visited[0], start);
        for pair in visited.windows(2) {
            assert!(pair[1] > pair[0]);
        }

        let mut ts = TimeStepper::new(start, end, step).unwrap();
        for _ in 0..100 {
            if !ts.advance() {
                break;
            }
        }
        assert!(ts.done());
    }

    #[test]
    fn step_range_is_inclusive_of_both_endpoints() {
        let start = Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap();
        let visited = step_range(start, end, StepVector::by_days(1)).unwrap();
        assert_eq!(
            visited,
            vec![
                Utc.with_ymd_and_hms(2022, 1, 7, 1, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2022, 1, 8, 1, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2022, 1, 9, 1, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2022, 1, 10, 1, 0, 0).unwrap(),
            ]
        );
    }

    // ── daylight saving ─────────────────────────────────────────────────

    #[test]
    fn five_minute_steps_never_stall_across_spring_forward() {
        // Toronto springs forward Mar 13 2022, 02:00 -> 03:00.
        let start = Toronto.with_ymd_and_hms(2022, 3, 13, 1, 40, 0).unwrap();
        let end = Toronto.with_ymd_and_hms(2022, 3, 13, 3, 20, 0).unwrap();
        let visited =
            step_range(start, end, StepVector::by_minutes(5)).unwrap();

        for pair in visited.windows(2) {
            assert!(pair[1] > pair[0], "cursor stalled at {}", pair[0]);
            assert_ne!(pair[0].naive_local(), pair[1].naive_local());
        }
        // The 02:00 hour does not exist on this day.
        assert!(visited.iter().all(|dt| dt.hour() != 2));
    }

    #[test]
    fn five_minute_steps_never_stall_across_fall_back() {
        // Toronto falls back Nov 6 2022, 02:00 -> 01:00.
        let start = Toronto.with_ymd_and_hms(2022, 11, 6, 0, 40, 0).unwrap();
        let end = Toronto.with_ymd_and_hms(2022, 11, 6, 2, 20, 0).unwrap();
        let visited =
            step_range(start, end, StepVector::by_minutes(5)).unwrap();

        for pair in visited.windows(2) {
            assert!(pair[1] > pair[0], "cursor stalled at {}", pair[0]);
        }
    }

    #[test]
    fn full_year_of_five_minute_steps_lands_exactly_on_the_end() {
        // Jan 1 to Jan 1 in Toronto crosses both the Mar 13 spring-forward
        // and the Nov 6 fall-back transitions.
        let start = Toronto.with_ymd_and_hms(2022, 1, 1, 1, 0, 0).unwrap();
        let end = Toronto.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).unwrap();
        let mut ts = TimeStepper::new(start, end, StepVector::by_minutes(5)).unwrap();

        let mut last = ts.value();
        while ts.advance() {
            last = ts.value();
        }
        assert_eq!(last, end);
    }

    // ── properties ──────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn day_stepper_visits_exactly_one_value_per_day(days in 0i64..400) {
            let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
            let end = start + Duration::days(days);
            let visited = step_range(start, end, StepVector::by_days(1)).unwrap();
            prop_assert_eq!(visited.len() as i64, days + 1);
        }

        #[test]
        fn mixed_step_values_strictly_increase(
            days in 0i64..3, hours in 0i64..30, minutes in 0i64..90,
        ) {
            prop_assume!(days + hours + minutes > 0);
            let start = Toronto.with_ymd_and_hms(2022, 11, 4, 12, 0, 0).unwrap();
            let end = Toronto.with_ymd_and_hms(2022, 11, 9, 12, 0, 0).unwrap();
            let step = StepVector { days, hours, minutes, ..Default::default() };
            let visited = step_range(start, end, step).unwrap();
            for pair in visited.windows(2) {
                prop_assert!(pair[1] > pair[0]);
            }
        }
    }
}
