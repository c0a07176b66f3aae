// SPDX-License-Identifier: Apache-2.0

//! Scheduling rules for classes and student access windows.
//!
//! Built on `campus_tz`: dashboards call [`format_dual_time`] to show a
//! session in both the viewer's and the course's timezone, the login flow
//! calls [`has_access_expired`] to gate a student session, and class pages
//! call [`next_class_occurrence`] to display the upcoming slot of a weekly
//! class.
//!
//! Every operation here is a pure function of its inputs plus an injected
//! [`campus_tz::Clock`]; nothing is cached between calls.

pub mod access;
pub mod dual_time;
pub mod recurrence;

pub use access::has_access_expired;
pub use dual_time::{format_dual_time, DualTimeView};
pub use recurrence::next_class_occurrence;
