//! Shared type aliases and small value types for the notetaker application.
use std::fmt;

use crate::NotesError;

/// A specialized Result type for notetaker operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Identifier of a note inside a collection. Never reused once assigned.
pub type NoteId = u64;

/// What a search is looking for: a note id or a label.
///
/// The two domains are disjoint, so id `0` and label `"0"` are different lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchField {
    Id(NoteId),
    Label(String),
}

impl SearchField {
    pub fn as_id(&self) -> Option<NoteId> {
        match self {
            SearchField::Id(id) => Some(*id),
            SearchField::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            SearchField::Id(_) => None,
            SearchField::Label(label) => Some(label),
        }
    }
}

impl From<NoteId> for SearchField {
    fn from(id: NoteId) -> Self {
        SearchField::Id(id)
    }
}

impl From<&str> for SearchField {
    fn from(label: &str) -> Self {
        SearchField::Label(label.to_string())
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Id(id) => write!(f, "id {}", id),
            SearchField::Label(label) => write!(f, "label '{}'", label),
        }
    }
}
