// SPDX-License-Identifier: Apache-2.0

//! Static catalog of timezones offered in class and account settings.
//!
//! The catalog is constant for the process lifetime and is never written to
//! after definition. It exists to populate selectors and to let callers
//! validate an identifier before handing it to the conversion engine; the
//! conversion engine itself accepts any IANA name `chrono-tz` knows.

use std::fmt;

/// A timezone offered in selectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimezoneDescriptor {
    /// IANA identifier, e.g. `America/New_York`.
    pub identifier: &'static str,
    /// Label shown to users.
    pub label: &'static str,
    /// Standard-time offset from UTC in hours, for display only.
    /// The live offset (DST included) comes from [`crate::offset_hours`].
    pub nominal_offset_hours: f64,
}

/// Region heading used to section the timezone selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Europe,
    Asia,
    AfricaOceania,
}

impl Region {
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Americas => "Americas",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::AfricaOceania => "Africa & Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const fn tz(
    identifier: &'static str,
    label: &'static str,
    nominal_offset_hours: f64,
) -> TimezoneDescriptor {
    TimezoneDescriptor {
        identifier,
        label,
        nominal_offset_hours,
    }
}

pub const AMERICAS: &[TimezoneDescriptor] = &[
    tz("Pacific/Honolulu", "Hawaii", -10.0),
    tz("America/Anchorage", "Alaska", -9.0),
    tz("America/Los_Angeles", "Pacific Time (US & Canada)", -8.0),
    tz("America/Phoenix", "Arizona", -7.0),
    tz("America/Denver", "Mountain Time (US & Canada)", -7.0),
    tz("America/Chicago", "Central Time (US & Canada)", -6.0),
    tz("America/Mexico_City", "Mexico City", -6.0),
    tz("America/New_York", "Eastern Time (US & Canada)", -5.0),
    tz("America/Toronto", "Toronto", -5.0),
    tz("America/Bogota", "Bogota, Lima", -5.0),
    tz("America/Sao_Paulo", "Sao Paulo", -3.0),
    tz("America/Argentina/Buenos_Aires", "Buenos Aires", -3.0),
];

pub const EUROPE: &[TimezoneDescriptor] = &[
    tz("Europe/Lisbon", "Lisbon", 0.0),
    tz("Europe/Dublin", "Dublin", 0.0),
    tz("Europe/London", "London", 0.0),
    tz("Europe/Madrid", "Madrid", 1.0),
    tz("Europe/Paris", "Paris", 1.0),
    tz("Europe/Amsterdam", "Amsterdam", 1.0),
    tz("Europe/Berlin", "Berlin", 1.0),
    tz("Europe/Rome", "Rome", 1.0),
    tz("Europe/Athens", "Athens", 2.0),
    tz("Europe/Istanbul", "Istanbul", 3.0),
    tz("Europe/Moscow", "Moscow", 3.0),
];

pub const ASIA: &[TimezoneDescriptor] = &[
    tz("Asia/Dubai", "Dubai", 4.0),
    tz("Asia/Karachi", "Karachi", 5.0),
    tz("Asia/Kolkata", "Mumbai, New Delhi", 5.5),
    tz("Asia/Dhaka", "Dhaka", 6.0),
    tz("Asia/Bangkok", "Bangkok, Jakarta", 7.0),
    tz("Asia/Singapore", "Singapore", 8.0),
    tz("Asia/Shanghai", "Beijing, Shanghai", 8.0),
    tz("Asia/Hong_Kong", "Hong Kong", 8.0),
    tz("Asia/Seoul", "Seoul", 9.0),
    tz("Asia/Tokyo", "Tokyo", 9.0),
];

pub const AFRICA_OCEANIA: &[TimezoneDescriptor] = &[
    tz("Africa/Lagos", "Lagos", 1.0),
    tz("Africa/Cairo", "Cairo", 2.0),
    tz("Africa/Johannesburg", "Johannesburg", 2.0),
    tz("Africa/Nairobi", "Nairobi", 3.0),
    tz("Australia/Perth", "Perth", 8.0),
    tz("Australia/Sydney", "Sydney", 10.0),
    tz("Pacific/Auckland", "Auckland", 12.0),
];

static REGIONS: &[(Region, &[TimezoneDescriptor])] = &[
    (Region::Americas, AMERICAS),
    (Region::Europe, EUROPE),
    (Region::Asia, ASIA),
    (Region::AfricaOceania, AFRICA_OCEANIA),
];

/// The catalog grouped by region, in selector order.
pub fn regions() -> &'static [(Region, &'static [TimezoneDescriptor])] {
    REGIONS
}

/// Every descriptor in the catalog, flattened in selector order.
pub fn all() -> impl Iterator<Item = &'static TimezoneDescriptor> {
    REGIONS.iter().flat_map(|(_, zones)| zones.iter())
}

/// Look up a catalog entry by IANA identifier.
pub fn lookup(identifier: &str) -> Option<&'static TimezoneDescriptor> {
    all().find(|desc| desc.identifier == identifier)
}
