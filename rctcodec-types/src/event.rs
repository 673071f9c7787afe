//! Event table structures
//!
//! Each event table slot starts with a one-character discriminator. Value
//! change records (`'s'`, `'w'`) carry the old and new value of a message id;
//! every other type describes a span that ended at `timestamp_end`.

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::timed_map::TimedMap;

/// Entry types that carry an old/new value pair
pub const VALUE_CHANGE_TYPES: [char; 2] = ['s', 'w'];

/// Payload of an event entry, selected by its entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A register changed from `value_old` to `value_new`
    ValueChange { value_old: u32, value_new: u32 },

    /// An event that lasted until `timestamp_end`
    Span { timestamp_end: NaiveDateTime },
}

/// Single row of an event table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventEntry {
    pub timestamp: NaiveDateTime,
    pub message_id: u32,
    entry_type: char,
    kind: EventKind,
}

impl EventEntry {
    pub fn value_change(
        timestamp: NaiveDateTime,
        message_id: u32,
        entry_type: char,
        value_old: u32,
        value_new: u32,
    ) -> Self {
        Self {
            timestamp,
            message_id,
            entry_type,
            kind: EventKind::ValueChange { value_old, value_new },
        }
    }

    pub fn span(
        timestamp: NaiveDateTime,
        message_id: u32,
        entry_type: char,
        timestamp_end: NaiveDateTime,
    ) -> Self {
        Self {
            timestamp,
            message_id,
            entry_type,
            kind: EventKind::Span { timestamp_end },
        }
    }

    /// Whether entries of this type carry old/new values
    pub fn is_value_change_type(entry_type: char) -> bool {
        VALUE_CHANGE_TYPES.contains(&entry_type)
    }

    /// Interpret a 32-bit discriminator word as an ASCII entry type
    pub fn entry_type_from_word(word: u32) -> Result<char> {
        u8::try_from(word)
            .ok()
            .filter(u8::is_ascii)
            .map(char::from)
            .ok_or(Error::InvalidEntryType(word))
    }

    pub fn entry_type(&self) -> char {
        self.entry_type
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn value_old(&self) -> Option<u32> {
        match self.kind {
            EventKind::ValueChange { value_old, .. } => Some(value_old),
            EventKind::Span { .. } => None,
        }
    }

    pub fn value_new(&self) -> Option<u32> {
        match self.kind {
            EventKind::ValueChange { value_new, .. } => Some(value_new),
            EventKind::Span { .. } => None,
        }
    }

    pub fn timestamp_end(&self) -> Option<NaiveDateTime> {
        match self.kind {
            EventKind::Span { timestamp_end } => Some(timestamp_end),
            EventKind::ValueChange { .. } => None,
        }
    }
}

impl fmt::Display for EventEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::ValueChange { value_old, value_new } => write!(
                f,
                "Event[{}]({}, id=0x{:08X}, {} -> {})",
                self.entry_type, self.timestamp, self.message_id, value_old, value_new
            ),
            EventKind::Span { timestamp_end } => write!(
                f,
                "Event[{}]({} .. {}, id=0x{:08X})",
                self.entry_type, self.timestamp, timestamp_end, self.message_id
            ),
        }
    }
}

/// Event table: an anchor timestamp plus entries keyed by their timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct EventTable {
    pub anchor: NaiveDateTime,
    pub entries: TimedMap<EventEntry>,
}

impl EventTable {
    pub fn new(anchor: NaiveDateTime) -> Self {
        Self {
            anchor,
            entries: TimedMap::new(),
        }
    }

    /// Empty table with room for `entries` rows
    pub fn with_capacity(anchor: NaiveDateTime, entries: usize) -> Self {
        Self {
            anchor,
            entries: TimedMap::with_capacity(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, timestamp: &NaiveDateTime) -> Option<&EventEntry> {
        self.entries.get(timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp_from_unix;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_change_entry() {
        let entry = EventEntry::value_change(timestamp_from_unix(1000), 5, 's', 10, 20);
        assert_eq!(entry.entry_type(), 's');
        assert_eq!(entry.value_old(), Some(10));
        assert_eq!(entry.value_new(), Some(20));
        assert_eq!(entry.timestamp_end(), None);
    }

    #[test]
    fn test_span_entry() {
        let entry = EventEntry::span(timestamp_from_unix(1000), 7, 'c', timestamp_from_unix(1060));
        assert_eq!(entry.kind(), EventKind::Span { timestamp_end: timestamp_from_unix(1060) });
        assert_eq!(entry.value_old(), None);
        assert_eq!(entry.value_new(), None);
    }

    #[test]
    fn test_value_change_types() {
        assert!(EventEntry::is_value_change_type('s'));
        assert!(EventEntry::is_value_change_type('w'));
        assert!(!EventEntry::is_value_change_type('c'));
        assert!(!EventEntry::is_value_change_type('S'));
    }

    #[test]
    fn test_entry_type_from_word() {
        assert_eq!(EventEntry::entry_type_from_word(0x73).unwrap(), 's');
        assert!(matches!(
            EventEntry::entry_type_from_word(0x80),
            Err(Error::InvalidEntryType(0x80))
        ));
        assert!(matches!(
            EventEntry::entry_type_from_word(0x0100_0073),
            Err(Error::InvalidEntryType(_))
        ));
    }

    #[test]
    fn test_event_table_with_capacity() {
        let mut table = EventTable::with_capacity(timestamp_from_unix(0), 2);
        assert!(table.is_empty());

        let entry = EventEntry::value_change(timestamp_from_unix(5), 1, 's', 0, 1);
        table.entries.insert(entry.timestamp, entry);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&timestamp_from_unix(5)), Some(&entry));
    }

    #[test]
    fn test_display() {
        let entry = EventEntry::value_change(timestamp_from_unix(0), 0x10, 'w', 1, 2);
        assert_eq!(entry.to_string(), "Event[w](1970-01-01 00:00:00, id=0x00000010, 1 -> 2)");
    }
}
