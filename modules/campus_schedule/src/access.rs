// SPDX-License-Identifier: Apache-2.0

//! Access-window evaluation for student accounts.

use campus_tz::Clock;
use chrono::{DateTime, Utc};

/// Whether a student's access window has closed.
///
/// `None` means unlimited access: the account never expires. This polarity is
/// load-bearing; the login flow denies a session when this returns `true`.
///
/// The comparison is strict: an expiry exactly equal to the current instant
/// has not yet passed. Both sides are absolute UTC instants, so the result is
/// the same no matter which timezone the student observes.
pub fn has_access_expired(expiry: Option<DateTime<Utc>>, clock: &impl Clock) -> bool {
    match expiry {
        None => false,
        Some(expiry) => expiry < clock.now_utc(),
    }
}
