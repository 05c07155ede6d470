const VALUE_DELIMITER: char = ':';

pub mod component;
pub use component::{Event, EventBuilder};

pub mod types;

pub mod parser;
pub use parser::parse_ics;

pub mod generator;
pub use generator::{Emitter, export_events};

pub mod store;
pub use store::{EventId, EventStore, MemoryStore};

pub mod reminder;
