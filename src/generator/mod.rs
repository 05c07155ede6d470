//! Generate a complete ICS document from event records.
//!
//! Output uses `\n` line terminators with no folding, matching what the
//! parser consumes. `DTSTAMP` is the wall-clock time at export; all
//! date-times are emitted in the UTC form regardless of the event's
//! all-day flag.

use chrono::Utc;

use crate::component::Event;
use crate::types::{escape, format_utc};

/// Product identifier stamped on every exported calendar.
pub const PROD_ID: &str = "-//icalite//EN";
/// Domain suffix for UIDs derived from record identity.
pub const UID_DOMAIN: &str = "icalite";

/// Anything that can emit itself as ICS text.
pub trait Emitter {
    fn generate(&self) -> String;
}

impl Emitter for Event {
    /// One VEVENT block, fields in fixed order: UID, DTSTAMP, DTSTART,
    /// DTEND, SUMMARY, then DESCRIPTION and LOCATION only when non-empty.
    fn generate(&self) -> String {
        let mut text = String::from("BEGIN:VEVENT\n");
        text += &format!("UID:{}@{UID_DOMAIN}\n", self.id.unwrap_or(0));
        text += &format!("DTSTAMP:{}\n", format_utc(Utc::now().timestamp_millis()));
        text += &format!("DTSTART:{}\n", format_utc(self.start_time));
        text += &format!("DTEND:{}\n", format_utc(self.end_time));
        text += &format!("SUMMARY:{}\n", escape(&self.title));
        if !self.description.is_empty() {
            text += &format!("DESCRIPTION:{}\n", escape(&self.description));
        }
        if !self.location.is_empty() {
            text += &format!("LOCATION:{}\n", escape(&self.location));
        }
        text + "END:VEVENT\n"
    }
}

/// Serialize events into one complete VCALENDAR document.
///
/// Pure transformation: no I/O, no trailing newline after the closing
/// marker. Reminder state is local-only and never emitted.
pub fn export_events(events: &[Event]) -> String {
    let mut text = format!("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:{PROD_ID}\n");
    for event in events {
        text += &event.generate();
    }
    text + "END:VCALENDAR"
}
