// SPDX-License-Identifier: Apache-2.0

//! Injectable source of "now".

use chrono::{DateTime, Utc};

/// Source of the current instant for every time-dependent operation.
///
/// Production code passes [`SystemClock`]; tests pass [`FixedClock`] so
/// assertions never depend on when they run.
pub trait Clock: Send + Sync {
    /// The current instant as UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
