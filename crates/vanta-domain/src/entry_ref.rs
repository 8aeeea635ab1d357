//! Id-or-index reference into an ordered collection.

use std::str::FromStr;

use uuid::Uuid;

/// Reference to an entry of an ordered collection (links, media).
///
/// Entries created by current clients carry a UUID, but legacy entries were
/// addressed purely by array position, and delete endpoints still accept
/// both. Parsing prefers the UUID form; a plain non-negative integer is a
/// positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef {
    ById(Uuid),
    ByIndex(usize),
}

/// The path segment was neither a UUID nor a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEntryRef;

impl std::fmt::Display for InvalidEntryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("expected an entry id or a positional index")
    }
}

impl std::error::Error for InvalidEntryRef {}

impl FromStr for EntryRef {
    type Err = InvalidEntryRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<Uuid>() {
            return Ok(Self::ById(id));
        }
        if let Ok(index) = s.parse::<usize>() {
            return Ok(Self::ByIndex(index));
        }
        Err(InvalidEntryRef)
    }
}
