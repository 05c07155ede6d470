use crate::reminder::NO_REMINDER;
use crate::types::MILLIS_PER_HOUR;

/// Placeholder title for imported events that carry no SUMMARY.
pub const DEFAULT_TITLE: &str = "Untitled";

/// A calendar event record.
///
/// The unit exchanged with the surrounding application: a plain value with
/// no back-references, constructed once per import/export pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Identity assigned by the store; `None` until first inserted.
    pub id: Option<i64>,
    pub title: String,
    pub location: String,
    pub description: String,
    /// Epoch milliseconds.
    pub start_time: i64,
    /// Epoch milliseconds. Always resolved, never absent.
    pub end_time: i64,
    /// Present in the record shape; this parser subset never sets it from
    /// a date-only DTSTART.
    pub is_all_day: bool,
    /// Minutes before start, `-1` for no reminder. Local-only state, never
    /// serialized to ICS.
    pub remind_minutes: i32,
}

impl Event {
    pub fn new(title: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Event {
            id: None,
            title: title.into(),
            location: String::new(),
            description: String::new(),
            start_time,
            end_time,
            is_all_day: false,
            remind_minutes: NO_REMINDER,
        }
    }
}

/// Accumulator for one VEVENT block.
///
/// One builder exists per block and is consumed on `END:VEVENT`, so no
/// parser state outlives a single parse call.
#[derive(Debug, Clone, Default)]
pub struct EventBuilder {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub dtstart: Option<i64>,
    pub dtend: Option<i64>,
}

impl EventBuilder {
    /// Materialize the accumulated fields into an event record.
    ///
    /// Returns `None` when no start time was recovered: such a block is
    /// discarded rather than emitted half-formed. A missing or unparsable
    /// DTEND defaults to one hour after the start.
    pub fn build(self) -> Option<Event> {
        let start_time = self.dtstart?;
        let end_time = self.dtend.unwrap_or(start_time + MILLIS_PER_HOUR);

        Some(Event {
            id: None,
            title: self.summary.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            description: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            start_time,
            end_time,
            is_all_day: false,
            remind_minutes: NO_REMINDER,
        })
    }
}
