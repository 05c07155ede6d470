//! Keyed record store for events.
//!
//! The engine itself is I/O-free; the surrounding application persists
//! parser output and supplies serializer input through this interface.
//! [`MemoryStore`] backs tests and in-process use; durable engines live
//! behind the same trait.

use std::collections::BTreeMap;

use derive_more::{Display, From};

use crate::component::Event;

/// Identity assigned by a store on first insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
pub struct EventId(pub i64);

pub trait EventStore {
    /// Insert a record, assigning an id when it has none. A record that
    /// already carries an id replaces the stored one.
    fn insert(&mut self, event: Event) -> EventId;

    /// Replace the stored record with the same id. Returns `false` when the
    /// record has no id or the id is unknown to the store.
    fn update(&mut self, event: &Event) -> bool;

    fn delete(&mut self, id: EventId) -> bool;

    fn get(&self, id: EventId) -> Option<&Event>;

    /// All records, in id order.
    fn all(&self) -> Vec<Event>;

    /// Records starting within `[start, end]`, ascending by start time.
    fn in_range(&self, start: i64, end: i64) -> Vec<Event>;
}

/// BTreeMap-backed store with auto-increment ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: i64,
    events: BTreeMap<EventId, Event>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for MemoryStore {
    fn insert(&mut self, mut event: Event) -> EventId {
        let id = match event.id {
            Some(id) => EventId(id),
            None => {
                self.next_id += 1;
                event.id = Some(self.next_id);
                EventId(self.next_id)
            }
        };
        // Keep the counter ahead of externally supplied ids.
        self.next_id = self.next_id.max(id.0);
        self.events.insert(id, event);
        id
    }

    fn update(&mut self, event: &Event) -> bool {
        let Some(id) = event.id.map(EventId) else {
            return false;
        };
        if !self.events.contains_key(&id) {
            return false;
        }
        self.events.insert(id, event.clone());
        true
    }

    fn delete(&mut self, id: EventId) -> bool {
        self.events.remove(&id).is_some()
    }

    fn get(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    fn all(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }

    fn in_range(&self, start: i64, end: i64) -> Vec<Event> {
        let mut hits: Vec<Event> = self
            .events
            .values()
            .filter(|event| event.start_time >= start && event.start_time <= end)
            .cloned()
            .collect();
        hits.sort_by_key(|event| event.start_time);
        hits
    }
}
