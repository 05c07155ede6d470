mod datetime;
pub use datetime::{DateTimeError, MILLIS_PER_HOUR, format_utc, parse_date};

mod text;
pub use text::{escape, unescape};
