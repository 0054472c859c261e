// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-event URL construction for confirmed bookings.
//!
//! The generated URL opens a pre-filled calendar event: title, UTC
//! start/end timestamps, a plain-text details block, the resort
//! location, and a daily recurrence rule for multi-day bookings.
//!
//! ## Invariants
//!
//! - Timestamps are stored as UTC in compact form (`YYYYMMDDTHHMMSSZ`)
//! - The lesson start is a wall-clock time in the resort timezone
//! - A recurrence rule is present exactly when the booking spans more
//!   than one day, capped at that day count

use crate::encode::form_encode;
use crate::error::NotifyError;
use crate::profile::ResortProfile;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Builds the calendar-event URL for a booking.
///
/// # Arguments
///
/// * `title` - The event title
/// * `details` - The plain-text details block
/// * `start_date` - The first lesson day
/// * `start_hour` - The lesson's wall-clock start hour at the resort
/// * `duration_hours` - The event length in hours
/// * `days` - The booking's day count; above 1 a daily recurrence rule
///   capped at this count is attached
/// * `resort` - The resort profile supplying timezone and location
///
/// # Returns
///
/// The calendar URL with a form-encoded query string.
///
/// # Errors
///
/// Returns an error if:
/// - The resort timezone is not a known IANA timezone
/// - The start hour does not form a valid time of day
/// - The wall-clock start or end cannot be resolved in the resort
///   timezone (ambiguous or non-existent due to DST)
pub fn event_url(
    title: &str,
    details: &str,
    start_date: NaiveDate,
    start_hour: u8,
    duration_hours: u8,
    days: u8,
    resort: &ResortProfile,
) -> Result<String, NotifyError> {
    let tz: Tz = resort
        .timezone()
        .parse()
        .map_err(|_| NotifyError::InvalidTimezone(resort.timezone().to_string()))?;

    let start_time: NaiveTime = NaiveTime::from_hms_opt(u32::from(start_hour), 0, 0)
        .ok_or(NotifyError::InvalidStartHour { hour: start_hour })?;
    let naive_start: NaiveDateTime = start_date.and_time(start_time);
    let naive_end: NaiveDateTime = naive_start + Duration::hours(i64::from(duration_hours));

    let start_stamp: String = utc_stamp(naive_start, tz)?;
    let end_stamp: String = utc_stamp(naive_end, tz)?;

    let mut params: Vec<(&str, String)> = vec![
        ("action", String::from("TEMPLATE")),
        ("text", title.to_string()),
        ("dates", format!("{start_stamp}/{end_stamp}")),
        ("details", details.to_string()),
        ("location", resort.location().to_string()),
    ];
    if days > 1 {
        params.push(("recur", format!("RRULE:FREQ=DAILY;COUNT={days}")));
    }

    let query: String = params
        .iter()
        .map(|(key, value)| format!("{key}={}", form_encode(value)))
        .collect::<Vec<String>>()
        .join("&");

    Ok(format!(
        "https://calendar.google.com/calendar/render?{query}"
    ))
}

/// Resolves a resort wall-clock datetime to a compact UTC timestamp.
fn utc_stamp(naive: NaiveDateTime, tz: Tz) -> Result<String, NotifyError> {
    let resolved = tz
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| NotifyError::UnresolvableLocalTime {
            datetime: naive.to_string(),
            timezone: tz.to_string(),
        })?;
    Ok(resolved
        .with_timezone(&Utc)
        .format("%Y%m%dT%H%M%SZ")
        .to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    #[test]
    fn test_timestamps_are_compact_utc() {
        // Tbilisi is UTC+4 with no DST: 10:00 local is 06:00 UTC
        let url: String = event_url(
            "2 Hours Ski Lesson",
            "details",
            start_date(),
            10,
            2,
            1,
            &ResortProfile::default(),
        )
        .unwrap();

        assert!(url.contains("dates=20260112T060000Z%2F20260112T080000Z"));
    }

    #[test]
    fn test_url_shape_and_encoding() {
        let url: String = event_url(
            "2 Hours Ski Lesson",
            "Full Name: Nino",
            start_date(),
            10,
            2,
            1,
            &ResortProfile::default(),
        )
        .unwrap();

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE&"));
        assert!(url.contains("text=2+Hours+Ski+Lesson"));
        assert!(url.contains("details=Full+Name%3A+Nino"));
        assert!(url.contains("location=Gudauri+Ski+Resort"));
    }

    #[test]
    fn test_single_day_booking_has_no_recurrence() {
        let url: String = event_url(
            "title",
            "details",
            start_date(),
            10,
            2,
            1,
            &ResortProfile::default(),
        )
        .unwrap();

        assert!(!url.contains("recur="));
    }

    #[test]
    fn test_multi_day_booking_recurs_daily_capped_at_day_count() {
        let url: String = event_url(
            "title",
            "details",
            start_date(),
            10,
            2,
            5,
            &ResortProfile::default(),
        )
        .unwrap();

        assert!(url.contains("recur=RRULE%3AFREQ%3DDAILY%3BCOUNT%3D5"));
    }

    #[test]
    fn test_event_can_run_past_local_midnight() {
        // A late start plus a long event must roll into the next UTC day
        let url: String = event_url(
            "title",
            "details",
            start_date(),
            22,
            8,
            1,
            &ResortProfile::default(),
        )
        .unwrap();

        assert!(url.contains("dates=20260112T180000Z%2F20260113T020000Z"));
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let resort: ResortProfile = ResortProfile::new(
            String::from("Nowhere"),
            String::from("Not/AZone"),
            String::from("info@example.com"),
        );

        let result = event_url("title", "details", start_date(), 10, 2, 1, &resort);

        assert_eq!(
            result,
            Err(NotifyError::InvalidTimezone(String::from("Not/AZone")))
        );
    }

    #[test]
    fn test_invalid_start_hour_is_rejected() {
        let result = event_url(
            "title",
            "details",
            start_date(),
            24,
            2,
            1,
            &ResortProfile::default(),
        );

        assert_eq!(result, Err(NotifyError::InvalidStartHour { hour: 24 }));
    }
}
