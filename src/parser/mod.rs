//! Parse an ICS document into event records.
//!
//! A line-driven state machine over the whole document. Properties are
//! matched by prefix rather than exact key so parameterised forms from
//! third-party producers (`SUMMARY;LANGUAGE=zh-CN:...`,
//! `DTSTART;VALUE=DATE:...`) stay in play, and everything unrecognised is
//! skipped. Malformed content degrades to fewer recovered events, never to
//! an error.
//!
//! # Examples
//!
//! ```rust
//! let ics = "BEGIN:VCALENDAR\n\
//!            BEGIN:VEVENT\n\
//!            DTSTART:20250101T090000Z\n\
//!            SUMMARY:Standup\n\
//!            END:VEVENT\n\
//!            END:VCALENDAR";
//!
//! let events = icalite::parse_ics(ics);
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].title, "Standup");
//! ```

use crate::VALUE_DELIMITER;
use crate::component::{Event, EventBuilder};
use crate::types::{parse_date, unescape};

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

/// Parse ICS text into the ordered sequence of recoverable event records.
///
/// Calendar-level lines, unknown properties and undecodable values are
/// ignored; a block without a parseable DTSTART is discarded. An empty
/// result is a successful parse of length zero.
pub fn parse_ics(input: &str) -> Vec<Event> {
    let mut events = Vec::new();
    // Accumulator for the block currently open, if any.
    let mut current: Option<EventBuilder> = None;

    for raw_line in input.lines() {
        let line = raw_line.trim();

        if line == BEGIN_EVENT {
            current = Some(EventBuilder::default());
        } else if line == END_EVENT {
            if let Some(builder) = current.take()
                && let Some(event) = builder.build()
            {
                events.push(event);
            }
        } else if let Some(builder) = current.as_mut() {
            feed_line(builder, line);
        }
    }

    events
}

/// Dispatch one in-event line onto the accumulator.
///
/// Ordered prefix checks, first match wins; the order is load-bearing for
/// tie-breaks.
fn feed_line(builder: &mut EventBuilder, line: &str) {
    if let Some(value) = prefixed_value(line, "SUMMARY") {
        builder.summary = Some(unescape(value));
    } else if let Some(value) = prefixed_value(line, "DESCRIPTION") {
        builder.description = Some(unescape(value));
    } else if let Some(value) = prefixed_value(line, "LOCATION") {
        builder.location = Some(unescape(value));
    } else if let Some(value) = prefixed_value(line, "DTSTART") {
        builder.dtstart = decoded(value, line);
    } else if let Some(value) = prefixed_value(line, "DTEND") {
        builder.dtend = decoded(value, line);
    }
    // Anything else (UID, RRULE, X- properties, ...) is ignored.
}

/// Match a property by prefix and return the text after the first `:`.
///
/// Prefix matching keeps parameterised lines (`NAME;PARAM=..:value`)
/// recognisable; the parameters themselves are not interpreted.
fn prefixed_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    if !line.starts_with(name) {
        return None;
    }
    line.split_once(VALUE_DELIMITER).map(|(_, value)| value)
}

/// Decode a date value, trading a failure for an unset field.
fn decoded(value: &str, line: &str) -> Option<i64> {
    match parse_date(value) {
        Ok(timestamp) => Some(timestamp),
        Err(err) => {
            log::warn!("skipping undecodable date on line {line:?}: {err}");
            None
        }
    }
}
