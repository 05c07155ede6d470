mod event;
pub use event::{DEFAULT_TITLE, Event, EventBuilder};
