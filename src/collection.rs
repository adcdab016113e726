//! In-memory note collection.
//!
//! Notes are indexed twice: by id, and by label through a secondary
//! label → ids map. The label index may hold ids of notes that no longer exist;
//! every read filters those out instead of trusting the index.
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde_yaml::{Mapping, Value};

use crate::{
    from_document, to_document, Note, NoteId, NotesError, Result, SearchField, Tagged,
    DEFAULT_LABEL,
};

/// A collection of notes with stable ids and a label index.
#[derive(Debug, Clone, Default)]
pub struct NoteCollection {
    /// Next id to hand out; only ever grows
    next_id: NoteId,

    /// Primary map, id → note
    notes: BTreeMap<NoteId, Note>,

    /// Secondary map, label → ids in insertion order
    label_index: HashMap<String, Vec<NoteId>>,
}

impl NoteCollection {
    /// Creates an empty collection whose first note gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note stamped with the current local time and returns its id.
    ///
    /// Labels are lowercased and kept in the given order, duplicates included.
    /// A note added without labels is labelled `undefined`. Fails with
    /// [`NotesError::IdsExhausted`] once the largest id has been handed out.
    pub fn add_note<S: AsRef<str>>(
        &mut self,
        message: impl Into<String>,
        labels: &[S],
    ) -> Result<NoteId> {
        self.add_note_at(message, labels, Local::now().naive_local())
    }

    /// Same as [`add_note`](Self::add_note) with an explicit timestamp, truncated to seconds.
    pub fn add_note_at<S: AsRef<str>>(
        &mut self,
        message: impl Into<String>,
        labels: &[S],
        timestamp: NaiveDateTime,
    ) -> Result<NoteId> {
        let labels = if labels.is_empty() {
            vec![DEFAULT_LABEL.to_string()]
        } else {
            labels.iter().map(|l| l.as_ref().to_lowercase()).collect()
        };

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(NotesError::IdsExhausted)?;

        let note = Note::new(message, labels, timestamp.trunc_subsecs(0));
        self.index_note(id, &note);
        self.notes.insert(id, note);
        Ok(id)
    }

    /// Removes a note and its label index entries, returning the removed note.
    ///
    /// The id is never handed out again. Fails with [`NotesError::NoteNotFound`]
    /// and leaves the collection untouched when `id` is absent.
    pub fn delete_note(&mut self, id: NoteId) -> Result<Note> {
        let note = self
            .notes
            .remove(&id)
            .ok_or(NotesError::NoteNotFound { id })?;

        for label in note.labels() {
            // A missing entry is index drift, not a failure.
            if let Some(ids) = self.label_index.get_mut(label) {
                if let Some(pos) = ids.iter().position(|other| *other == id) {
                    ids.remove(pos);
                }
            }
        }
        Ok(note)
    }

    /// Ids of the live notes carrying `label`, in the order they were labelled.
    ///
    /// The query is lowercased like stored labels. Unknown labels give an empty list.
    pub fn find_by_label(&self, label: &str) -> Vec<NoteId> {
        self.label_index
            .get(&label.to_lowercase())
            .map(|ids| {
                ids.iter()
                    .copied()
                    .filter(|id| self.notes.contains_key(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Looks a field up both as an id and as a label and merges the hits.
    ///
    /// An id field only matches the id space and a label field only the label
    /// index. No match is an empty map, not an error.
    pub fn find(&self, field: &SearchField) -> BTreeMap<NoteId, &Note> {
        let mut found = BTreeMap::new();

        if let Some(id) = field.as_id() {
            if let Some(note) = self.notes.get(&id) {
                found.insert(id, note);
            }
        }

        if let Some(label) = field.as_label() {
            for id in self.find_by_label(label) {
                if let Some(note) = self.notes.get(&id) {
                    found.insert(id, note);
                }
            }
        }

        found
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Id the next added note will receive.
    pub fn next_id(&self) -> NoteId {
        self.next_id
    }

    /// Notes in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (NoteId, &Note)> {
        self.notes.iter().map(|(id, note)| (*id, note))
    }

    /// Labels carried by at least one live note, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .label_index
            .iter()
            .filter(|(_, ids)| ids.iter().any(|id| self.notes.contains_key(id)))
            .map(|(label, _)| label.as_str())
            .collect();
        labels.sort_unstable();
        labels
    }

    /// One `<id> -> <note>` line per note, ascending id.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Encodes the collection as a `!notetaker` document.
    pub fn serialize(&self) -> Result<String> {
        to_document(self)
    }

    /// Rebuilds a collection from a `!notetaker` document.
    ///
    /// Ids are kept as persisted, gaps included; the next id follows the largest one
    /// and the label index is rebuilt in id order.
    pub fn deserialize(text: &str) -> Result<Self> {
        from_document(text)
    }

    fn index_note(&mut self, id: NoteId, note: &Note) {
        for label in note.labels() {
            self.label_index.entry(label.clone()).or_default().push(id);
        }
    }
}

impl fmt::Display for NoteCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, note) in &self.notes {
            writeln!(f, "{} -> {}", id, note)?;
        }
        Ok(())
    }
}

impl Tagged for Note {
    const TAG: &'static str = "!note";

    fn to_value(&self) -> Value {
        Value::String(self.render())
    }

    fn from_value(value: &Value) -> Result<Self> {
        let text = value
            .as_str()
            .ok_or_else(|| NotesError::format("a note must be a text value"))?;
        Note::parse(text)
    }
}

impl Tagged for NoteCollection {
    const TAG: &'static str = "!notetaker";

    fn to_value(&self) -> Value {
        let mut mapping = Mapping::new();
        for (id, note) in &self.notes {
            mapping.insert(Value::Number((*id).into()), note.to_node());
        }
        Value::Mapping(mapping)
    }

    fn from_value(value: &Value) -> Result<Self> {
        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            // `!notetaker` with nothing after it
            Value::Null => return Ok(NoteCollection::new()),
            _ => return Err(NotesError::format("expected a mapping of notes")),
        };

        let mut parsed = BTreeMap::new();
        for (key, node) in mapping {
            let id = note_id(key)?;
            let note = Note::from_node(node)?;
            if parsed.insert(id, note).is_some() {
                return Err(NotesError::format(format!("note id {} appears twice", id)));
            }
        }

        let next_id = match parsed.keys().next_back() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                NotesError::format(format!("note id {} leaves no next id", max))
            })?,
            None => 0,
        };

        let mut collection = NoteCollection {
            next_id,
            ..Default::default()
        };
        for (id, note) in parsed {
            collection.index_note(id, &note);
            collection.notes.insert(id, note);
        }
        Ok(collection)
    }
}

fn note_id(key: &Value) -> Result<NoteId> {
    key.as_u64()
        .or_else(|| key.as_str().and_then(|s| s.parse().ok()))
        .ok_or_else(|| NotesError::format(format!("{:?} is not a note id", key)))
}
