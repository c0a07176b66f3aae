// SPDX-License-Identifier: Apache-2.0

//! Paired user-local / course-local rendering of an instant.

use campus_tz::{format_in_zone, InvalidTimezone, PATTERN_ZONE_ABBREV};
use chrono::{DateTime, Utc};

/// One instant rendered in both the viewer's and the course's timezone.
///
/// Presentation-only value; recomputed on every render from the instant and
/// the two zone identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualTimeView {
    pub user_time: String,
    pub course_time: String,
    pub user_time_zone: String,
    pub course_time_zone: String,
}

/// Render `instant` for a dashboard showing the viewer's local time next to
/// the course's scheduled time.
///
/// `pattern` is a strftime pattern; dashboards pass
/// [`campus_tz::PATTERN_CLOCK`]. The zone fields carry the abbreviation
/// (e.g. `EDT`, `JST`) for the same instant.
pub fn format_dual_time(
    instant: DateTime<Utc>,
    user_zone: &str,
    course_zone: &str,
    pattern: &str,
) -> Result<DualTimeView, InvalidTimezone> {
    Ok(DualTimeView {
        user_time: format_in_zone(instant, user_zone, pattern)?,
        course_time: format_in_zone(instant, course_zone, pattern)?,
        user_time_zone: format_in_zone(instant, user_zone, PATTERN_ZONE_ABBREV)?,
        course_time_zone: format_in_zone(instant, course_zone, PATTERN_ZONE_ABBREV)?,
    })
}

#[cfg(test)]
mod tests {
    use campus_tz::PATTERN_CLOCK;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_dual_time_for_a_june_session() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let view =
            format_dual_time(instant, "America/New_York", "Asia/Tokyo", PATTERN_CLOCK).unwrap();
        assert_eq!(view.user_time, "8:00 AM");
        assert_eq!(view.user_time_zone, "EDT");
        assert_eq!(view.course_time, "9:00 PM");
        assert_eq!(view.course_time_zone, "JST");
    }

    #[test]
    fn test_same_zone_on_both_sides() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 18, 30, 0).unwrap();
        let view =
            format_dual_time(instant, "Europe/London", "Europe/London", PATTERN_CLOCK).unwrap();
        assert_eq!(view.user_time, view.course_time);
        assert_eq!(view.user_time_zone, view.course_time_zone);
    }

    #[test]
    fn test_invalid_zone_propagates() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let err =
            format_dual_time(instant, "Not/A_Zone", "Asia/Tokyo", PATTERN_CLOCK).unwrap_err();
        assert_eq!(err.name(), "Not/A_Zone");
    }
}
