// SPDX-License-Identifier: Apache-2.0

//! Next occurrence of a weekly class slot.

use campus_tz::{parse_zone, resolve_wall_clock, Clock, InvalidTimezone};
use chrono::{DateTime, Datelike, Days, NaiveTime, Utc, Weekday};

/// Next occurrence of a weekly class, as an absolute instant.
///
/// `weekday` and `time_of_day` describe the slot's wall-clock schedule in
/// `zone`. "Next" is strict: a slot whose start has already passed today, or
/// starts exactly now, rolls to next week; one still ahead today stays today.
///
/// Evaluated fresh from the injected clock on every call; nothing is cached.
pub fn next_class_occurrence(
    weekday: Weekday,
    time_of_day: NaiveTime,
    zone: &str,
    clock: &impl Clock,
) -> Result<DateTime<Utc>, InvalidTimezone> {
    let tz = parse_zone(zone)?;
    let now = clock.now_utc().with_timezone(&tz);

    // Days until the target weekday, normalized into [0, 7).
    let mut days_ahead = (weekday.num_days_from_monday() as i64
        - now.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);
    if days_ahead == 0 && time_of_day <= now.time() {
        days_ahead = 7;
    }

    let date = now.date_naive() + Days::new(days_ahead as u64);
    let start = resolve_wall_clock(tz, date.and_time(time_of_day));
    Ok(start.with_timezone(&Utc))
}
