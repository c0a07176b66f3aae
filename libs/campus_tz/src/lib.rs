// SPDX-License-Identifier: Apache-2.0

//! Timezone utilities for the campus platform.
//!
//! Everything time-related in the platform funnels through this crate: the
//! timezone catalog backing class and account settings, wall-clock conversion
//! between zones, zone-aware formatting, and live UTC-offset lookup.
//!
//! # Design
//!
//! Instants are `chrono::DateTime<Utc>` everywhere. Conversions never go
//! zone-to-zone directly: a wall-clock time is first mapped onto the timeline
//! through its own zone (a UTC pivot), then re-projected into the target
//! zone. This keeps DST rules from compounding across hops.
//!
//! "Now" is never sampled internally. Operations that need the current time
//! take a [`Clock`], with [`SystemClock`] in production and [`FixedClock`] in
//! tests.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use campus_tz::convert;
//!
//! // Sunday noon in New York, seen from Tokyo.
//! let wall = NaiveDate::from_ymd_opt(2025, 6, 15)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let tokyo = convert(wall, "America/New_York", "Asia/Tokyo").unwrap();
//! assert_eq!(tokyo.format("%Y-%m-%d %H:%M").to_string(), "2025-06-16 01:00");
//! ```

pub mod catalog;
pub mod clock;
pub mod convert;

pub use chrono_tz::Tz;

pub use catalog::{Region, TimezoneDescriptor};
pub use clock::{Clock, FixedClock, SystemClock};
pub use convert::{
    convert, current_time_in_zone, format_in_zone, offset_hours, parse_zone, resolve_wall_clock,
    system_timezone, InvalidTimezone, PATTERN_CLOCK, PATTERN_FULL, PATTERN_ZONE_ABBREV,
};
