//! Reminder trigger computation.
//!
//! Only the arithmetic lives here; scheduling the platform alarm is the
//! surrounding application's job.

use crate::component::Event;

/// Sentinel for "no reminder".
pub const NO_REMINDER: i32 = -1;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Compute the reminder trigger timestamp for an event.
///
/// `None` when the event carries no reminder or the trigger has already
/// elapsed relative to `now`.
pub fn trigger_at(event: &Event, now: i64) -> Option<i64> {
    if event.remind_minutes == NO_REMINDER {
        return None;
    }

    let trigger = event.start_time - i64::from(event.remind_minutes) * MILLIS_PER_MINUTE;
    if trigger < now {
        log::debug!("reminder for {:?} already elapsed, skipping", event.title);
        return None;
    }

    Some(trigger)
}
