// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date and time-slot availability for lesson bookings.
//!
//! This module decides which calendar dates and which starting hours are
//! selectable, given the configured booking window and the resort's
//! operating hours.
//!
//! ## Invariants
//!
//! - Dates are compared as calendar days; time of day never participates
//! - A timed lesson must finish at or before the resort close hour
//! - A full-day lesson is offered as exactly one slot at the lesson start
//!   hour, regardless of the close hour
//! - An empty slot list means "no availability" and is not an error

use crate::types::{BookingWindow, LessonTier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hours a full-day lesson occupies when rendered as a calendar event.
pub const FULL_DAY_EVENT_HOURS: u8 = 8;

/// A selectable starting hour for a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The starting hour on the 24h clock.
    start_hour: u8,
    /// Whether this slot represents a full-day lesson.
    full_day: bool,
}

impl TimeSlot {
    /// Creates a slot for a timed lesson starting at `start_hour`.
    #[must_use]
    pub const fn hourly(start_hour: u8) -> Self {
        Self {
            start_hour,
            full_day: false,
        }
    }

    /// Creates the single full-day slot starting at `start_hour`.
    #[must_use]
    pub const fn full_day(start_hour: u8) -> Self {
        Self {
            start_hour,
            full_day: true,
        }
    }

    /// Returns the starting hour on the 24h clock.
    #[must_use]
    pub const fn start_hour(&self) -> u8 {
        self.start_hour
    }

    /// Returns whether this slot represents a full-day lesson.
    #[must_use]
    pub const fn is_full_day(&self) -> bool {
        self.full_day
    }

    /// Returns the slot value in "HH:00" form.
    #[must_use]
    pub fn value(&self) -> String {
        format!("{:02}:00", self.start_hour)
    }

    /// Returns the display label, marking the full-day slot.
    #[must_use]
    pub fn label(&self) -> String {
        if self.full_day {
            format!("{} (Full day)", self.value())
        } else {
            self.value()
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Checks whether a date can be selected for a lesson.
///
/// A date is selectable iff it lies inside the booking window (both
/// bounds inclusive) and is not in the past. Today itself is selectable.
///
/// # Arguments
///
/// * `date` - The candidate date
/// * `today` - The current calendar day
/// * `window` - The configured booking window
#[must_use]
pub fn is_date_selectable(date: NaiveDate, today: NaiveDate, window: &BookingWindow) -> bool {
    window.contains(date) && date >= today
}

/// Lists the selectable starting slots for a tier within a window.
///
/// Timed tiers get one slot per starting hour from the lesson start hour
/// up to the last hour that still lets the lesson finish by close, in
/// ascending order. The full-day tier gets exactly one slot at the lesson
/// start hour.
///
/// Returns an empty list when the lesson cannot fit into the operating
/// day at all; callers must treat that as "no availability", not as an
/// error.
///
/// # Arguments
///
/// * `tier` - The lesson duration tier
/// * `window` - The configured booking window
#[must_use]
pub fn selectable_time_slots(tier: LessonTier, window: &BookingWindow) -> Vec<TimeSlot> {
    let Some(hours) = tier.duration_hours() else {
        return vec![TimeSlot::full_day(window.lesson_start_hour())];
    };

    let Some(latest_start) = window.resort_close_hour().checked_sub(hours) else {
        return Vec::new();
    };
    if latest_start < window.lesson_start_hour() {
        return Vec::new();
    }

    (window.lesson_start_hour()..=latest_start)
        .map(TimeSlot::hourly)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn window(start_hour: u8, close_hour: u8) -> BookingWindow {
        BookingWindow::new(
            NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 30).unwrap(),
            start_hour,
            close_hour,
        )
        .unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_three_hour_slots_stop_in_time_for_close() {
        let slots: Vec<String> = selectable_time_slots(LessonTier::ThreeHour, &window(10, 17))
            .iter()
            .map(TimeSlot::value)
            .collect();

        // Last valid start is 14, since a 3-hour lesson ends at 17
        assert_eq!(slots, vec!["10:00", "11:00", "12:00", "13:00", "14:00"]);
    }

    #[test]
    fn test_two_hour_slots_get_one_extra_hour() {
        let slots: Vec<TimeSlot> = selectable_time_slots(LessonTier::TwoHour, &window(10, 17));

        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0].start_hour(), 10);
        assert_eq!(slots[5].start_hour(), 15);
    }

    #[test]
    fn test_full_day_is_a_single_slot_at_start_hour() {
        for close_hour in [12, 17, 22] {
            let slots: Vec<TimeSlot> =
                selectable_time_slots(LessonTier::FullDay, &window(10, close_hour));

            assert_eq!(slots.len(), 1);
            assert_eq!(slots[0].start_hour(), 10);
            assert!(slots[0].is_full_day());
            assert_eq!(slots[0].label(), "10:00 (Full day)");
        }
    }

    #[test]
    fn test_lesson_longer_than_operating_day_has_no_slots() {
        // A 3-hour lesson cannot fit between 10:00 and 12:00
        let slots: Vec<TimeSlot> = selectable_time_slots(LessonTier::ThreeHour, &window(10, 12));

        assert!(slots.is_empty());
    }

    #[test]
    fn test_lesson_exactly_filling_the_day_has_one_slot() {
        let slots: Vec<TimeSlot> = selectable_time_slots(LessonTier::ThreeHour, &window(10, 13));

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].value(), "10:00");
    }

    #[test]
    fn test_dates_inside_window_and_not_past_are_selectable() {
        let window: BookingWindow = window(10, 17);
        let today: NaiveDate = date(2026, 1, 10);

        assert!(is_date_selectable(date(2026, 1, 10), today, &window));
        assert!(is_date_selectable(date(2026, 1, 11), today, &window));
        assert!(is_date_selectable(date(2026, 4, 30), today, &window));
    }

    #[test]
    fn test_past_dates_are_rejected_even_inside_window() {
        let window: BookingWindow = window(10, 17);
        let today: NaiveDate = date(2026, 1, 10);

        assert!(!is_date_selectable(date(2026, 1, 9), today, &window));
    }

    #[test]
    fn test_dates_outside_window_are_rejected() {
        let window: BookingWindow = window(10, 17);
        let today: NaiveDate = date(2025, 11, 1);

        assert!(!is_date_selectable(date(2025, 12, 14), today, &window));
        assert!(!is_date_selectable(date(2026, 5, 1), today, &window));
    }

    #[test]
    fn test_window_boundaries_are_inclusive() {
        let window: BookingWindow = window(10, 17);
        let today: NaiveDate = date(2025, 11, 1);

        assert!(is_date_selectable(date(2025, 12, 15), today, &window));
        assert!(is_date_selectable(date(2026, 4, 30), today, &window));
    }

    #[test]
    fn test_slot_value_is_zero_padded() {
        assert_eq!(TimeSlot::hourly(9).value(), "09:00");
        assert_eq!(TimeSlot::hourly(14).value(), "14:00");
    }
}
