// SPDX-License-Identifier: Apache-2.0

//! Conversion engine: wall-clock conversion, zone-aware formatting and live
//! offset lookup. All conversions pivot through UTC.

use std::fmt;

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use tracing::warn;

use crate::clock::Clock;

/// Full timestamp with zone abbreviation, e.g. `2025-06-15 08:00:00 EDT`.
pub const PATTERN_FULL: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Short clock time for dashboards, e.g. `8:00 AM`.
pub const PATTERN_CLOCK: &str = "%-I:%M %p";

/// Zone abbreviation alone, e.g. `EDT`.
pub const PATTERN_ZONE_ABBREV: &str = "%Z";

/// Error returned when a timezone identifier is not a recognized IANA name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimezone {
    name: String,
}

impl InvalidTimezone {
    /// The identifier that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for InvalidTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid timezone: {}", self.name)
    }
}

impl std::error::Error for InvalidTimezone {}

/// Parse an IANA identifier into a [`Tz`].
///
/// Every `&str`-zone operation in this crate routes through here, so invalid
/// identifiers fail identically everywhere.
pub fn parse_zone(zone: &str) -> Result<Tz, InvalidTimezone> {
    zone.parse().map_err(|_| InvalidTimezone {
        name: zone.to_string(),
    })
}

/// Map a wall-clock time onto the timeline of `tz`.
///
/// Ambiguous times (clocks rolled back) take the earlier mapping. Times
/// inside a spring-forward gap do not exist on the timeline; they resolve as
/// if the shift had already happened.
pub fn resolve_wall_clock(tz: Tz, wall: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&wall) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => tz
            .from_local_datetime(&(wall + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&wall)),
    }
}

/// Interpret `wall` as wall-clock time in `from` and re-express it in `to`.
pub fn convert(wall: NaiveDateTime, from: &str, to: &str) -> Result<DateTime<Tz>, InvalidTimezone> {
    let from = parse_zone(from)?;
    let to = parse_zone(to)?;
    let pivot = resolve_wall_clock(from, wall).with_timezone(&Utc);
    Ok(pivot.with_timezone(&to))
}

/// Render `instant` in `zone` using a strftime `pattern`.
///
/// See [`PATTERN_FULL`], [`PATTERN_CLOCK`] and [`PATTERN_ZONE_ABBREV`] for
/// the patterns the platform uses.
pub fn format_in_zone(
    instant: DateTime<Utc>,
    zone: &str,
    pattern: &str,
) -> Result<String, InvalidTimezone> {
    let tz = parse_zone(zone)?;
    Ok(instant.with_timezone(&tz).format(pattern).to_string())
}

/// The current time projected into `zone`.
pub fn current_time_in_zone(
    zone: &str,
    clock: &impl Clock,
) -> Result<DateTime<Tz>, InvalidTimezone> {
    let tz = parse_zone(zone)?;
    Ok(clock.now_utc().with_timezone(&tz))
}

/// Live UTC offset of `zone` in whole hours, DST included.
///
/// Recomputed from `now` on every call so DST transitions are reflected
/// immediately, unlike the static `nominal_offset_hours` in the catalog.
/// Rounds to the nearest hour: half-hour zones such as `Asia/Kolkata` read
/// one hour high. Callers needing the exact offset should format with `%z`.
pub fn offset_hours(zone: &str, clock: &impl Clock) -> Result<i32, InvalidTimezone> {
    let now = current_time_in_zone(zone, clock)?;
    let offset_secs = now.offset().fix().local_minus_utc();
    Ok((f64::from(offset_secs) / 3600.0).round() as i32)
}

static SYSTEM_TZ: Lazy<Tz> = Lazy::new(|| match iana_time_zone::get_timezone() {
    Ok(name) => match name.parse() {
        Ok(tz) => tz,
        Err(_) => {
            warn!(zone = %name, "unrecognized system timezone, using UTC");
            Tz::UTC
        },
    },
    Err(err) => {
        warn!(%err, "could not resolve system timezone, using UTC");
        Tz::UTC
    },
});

/// The host's IANA timezone, resolved once and cached.
///
/// Falls back to `UTC` when the environment does not expose a resolvable
/// zone. This is the only place a failure is swallowed; UTC is always a safe
/// default for an unattributed viewer.
pub fn system_timezone() -> Tz {
    *SYSTEM_TZ
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn wall(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_zone() {
        assert_eq!(parse_zone("America/Denver").unwrap().name(), "America/Denver");
        let err = parse_zone("Invalid/Zone").unwrap_err();
        assert_eq!(err.name(), "Invalid/Zone");
        assert_eq!(err.to_string(), "invalid timezone: Invalid/Zone");
    }

    #[test]
    fn test_resolve_ambiguous_takes_earlier_mapping() {
        // US fall-back 2025-11-02: 01:30 happens twice in New York.
        let tz: Tz = "America/New_York".parse().unwrap();
        let resolved = resolve_wall_clock(tz, wall(2025, 11, 2, 1, 30));
        // Earlier mapping is still EDT (UTC-4), so 05:30 UTC.
        assert_eq!(resolved.with_timezone(&Utc), Utc.with_ymd_and_hms(2025, 11, 2, 5, 30, 0).unwrap());
    }

    #[test]
    fn test_resolve_gap_springs_forward() {
        // US spring-forward 2025-03-09: 02:30 does not exist in New York.
        let tz: Tz = "America/New_York".parse().unwrap();
        let resolved = resolve_wall_clock(tz, wall(2025, 3, 9, 2, 30));
        // Resolves as 03:30 EDT = 07:30 UTC.
        assert_eq!(resolved.with_timezone(&Utc), Utc.with_ymd_and_hms(2025, 3, 9, 7, 30, 0).unwrap());
    }

    #[test]
    fn test_convert_pivots_through_utc() {
        let tokyo = convert(wall(2025, 6, 15, 12, 0), "America/New_York", "Asia/Tokyo").unwrap();
        assert_eq!(tokyo.format("%Y-%m-%d %H:%M").to_string(), "2025-06-16 01:00");
    }

    #[test]
    fn test_convert_rejects_invalid_zones() {
        let w = wall(2025, 6, 15, 12, 0);
        assert!(convert(w, "Invalid/Zone", "Asia/Tokyo").is_err());
        assert!(convert(w, "Asia/Tokyo", "Invalid/Zone").is_err());
    }
}
