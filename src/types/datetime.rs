//! Conversion between epoch-millisecond timestamps and the ICS date/time
//! text forms.
//!
//! Three shapes are recognised, dispatched purely on length and trailing
//! character:
//!
//! - `YYYYMMDD` — date only, local midnight
//! - `YYYYMMDD'T'HHMMSS` — local date-time
//! - `YYYYMMDD'T'HHMMSS'Z'` — UTC date-time
//!
//! UTC offset syntax (`+HHMM`) is not part of the subset and fails to
//! decode.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Offset applied when a VEVENT carries no usable DTEND.
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

const DATE_FORMAT: &str = "%Y%m%d";
const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Error arising when decoding an ICS date or date-time value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("unrecognised date-time shape: {0:?}")]
    UnrecognisedShape(String),
    #[error("invalid date-time value: {0:?}")]
    InvalidValue(String),
}

/// Decode an ICS date or date-time value into epoch milliseconds.
///
/// The input is trimmed first; anything that matches none of the three
/// shapes is an error. Never panics.
pub fn parse_date(value: &str) -> Result<i64, DateTimeError> {
    let value = value.trim();

    if value.len() == 8 {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| DateTimeError::InvalidValue(value.to_owned()))?;
        return local_millis(date.and_time(NaiveTime::MIN), value);
    }

    if value.len() == 15 && value.contains('T') {
        let datetime = NaiveDateTime::parse_from_str(value, LOCAL_FORMAT)
            .map_err(|_| DateTimeError::InvalidValue(value.to_owned()))?;
        return local_millis(datetime, value);
    }

    if value.ends_with('Z') {
        let datetime = NaiveDateTime::parse_from_str(value, UTC_FORMAT)
            .map_err(|_| DateTimeError::InvalidValue(value.to_owned()))?;
        return Ok(Utc.from_utc_datetime(&datetime).timestamp_millis());
    }

    Err(DateTimeError::UnrecognisedShape(value.to_owned()))
}

/// Encode a timestamp as the UTC date-time form.
///
/// Used uniformly for DTSTAMP, DTSTART and DTEND, all-day events included.
pub fn format_utc(timestamp: i64) -> String {
    // Timestamps outside chrono's representable range fall back to the epoch.
    DateTime::<Utc>::from_timestamp_millis(timestamp)
        .unwrap_or_default()
        .format(UTC_FORMAT)
        .to_string()
}

fn local_millis(datetime: NaiveDateTime, value: &str) -> Result<i64, DateTimeError> {
    // An ambiguous local time (DST fold) resolves to the earlier mapping; a
    // nonexistent one is a decode failure.
    Local
        .from_local_datetime(&datetime)
        .earliest()
        .map(|mapped| mapped.timestamp_millis())
        .ok_or_else(|| DateTimeError::InvalidValue(value.to_owned()))
}
