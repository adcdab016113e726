//! Core note value for the notetaker application.
//!
//! A note is a message, an ordered list of labels and a creation timestamp. Its
//! canonical text form is `@lab1, @lab2 [yy/mm/dd HH:MM:SS] : message`, which is
//! both what gets displayed and what gets persisted.
use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Serialize;

use crate::{NotesError, Result};

/// Date layout used inside the brackets of the canonical form.
pub const DATE_FORMAT: &str = "%y/%m/%d %H:%M:%S";

/// Label given to notes created without any label.
pub const DEFAULT_LABEL: &str = "undefined";

// Labels block, bracketed date, message. The labels block stops at the first
// ` [...] : ` so the message may itself contain that sequence.
static NOTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(@.*?) \[([^\]]*)\] : (.*)$").unwrap());

/// Represents a single note in our system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    message: String,
    labels: Vec<String>,
    timestamp: NaiveDateTime,
}

impl Note {
    /// Creates a note from its parts, stored as given.
    ///
    /// Label policy (lowercasing, the `undefined` default) belongs to
    /// [`NoteCollection`](crate::NoteCollection), not to the note.
    pub fn new(message: impl Into<String>, labels: Vec<String>, timestamp: NaiveDateTime) -> Self {
        Note {
            message: message.into(),
            labels,
            timestamp,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Produces the canonical text form of the note.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Recovers a note from its canonical text form.
    ///
    /// Fails with [`NotesError::InvalidFormat`] when the text is not made of a labels
    /// block, a bracketed date and a message, and with [`NotesError::InvalidDate`]
    /// when the bracketed part is not a `yy/mm/dd HH:MM:SS` date.
    pub fn parse(text: &str) -> Result<Note> {
        let captures = NOTE_PATTERN.captures(text).ok_or_else(|| {
            NotesError::format(format!(
                "expected '@label [yy/mm/dd HH:MM:SS] : message', got '{}'",
                text
            ))
        })?;

        let labels = captures[1]
            .split(", ")
            .map(|token| {
                token
                    .strip_prefix('@')
                    .map(str::to_string)
                    .ok_or_else(|| NotesError::format(format!("label '{}' lacks '@'", token)))
            })
            .collect::<Result<Vec<_>>>()?;

        let date = &captures[2];
        let timestamp = NaiveDateTime::parse_from_str(date, DATE_FORMAT).map_err(|source| {
            NotesError::InvalidDate {
                value: date.to_string(),
                source,
            }
        })?;

        Ok(Note::new(&captures[3], labels, timestamp))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self
            .labels
            .iter()
            .map(|label| format!("@{}", label))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} [{}] : {}",
            labels,
            self.timestamp.format(DATE_FORMAT),
            self.message
        )
    }
}

impl FromStr for Note {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self> {
        Note::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap()
    }

    #[test]
    fn test_render_single_label() {
        let note = Note::new(
            "My first note ever",
            vec!["todo".to_string()],
            at(1981, 7, 13, 0, 0, 0),
        );
        assert_eq!(note.render(), "@todo [81/07/13 00:00:00] : My first note ever");
    }

    #[test]
    fn test_render_keeps_label_order() {
        let note = Note::new(
            "Solve bug 42",
            vec!["todo".to_string(), "job".to_string()],
            at(2018, 12, 31, 12, 36, 11),
        );
        assert_eq!(note.to_string(), "@todo, @job [18/12/31 12:36:11] : Solve bug 42");
    }

    #[test]
    fn test_parse_canonical_form() {
        let note = Note::parse("@todo, @job [18/12/31 12:36:11] : Solve bug 42").unwrap();
        assert_eq!(note.message(), "Solve bug 42");
        assert_eq!(note.labels(), ["todo", "job"]);
        assert_eq!(note.timestamp(), at(2018, 12, 31, 12, 36, 11));
    }

    #[test]
    fn test_parse_inverts_render() {
        let note = Note::new(
            "Meet [Bob] : at noon",
            vec!["perso".to_string(), "urgent".to_string()],
            at(2024, 2, 29, 8, 5, 59),
        );
        let parsed: Note = note.render().parse().unwrap();
        assert_eq!(parsed, note);
    }

    #[test]
    fn test_parse_empty_message() {
        let note = Note::parse("@undefined [20/01/01 00:00:00] : ").unwrap();
        assert_eq!(note.message(), "");
    }

    #[test]
    fn test_parse_rejects_bad_shape() {
        for text in [
            "",
            "just a message",
            "todo [18/12/31 12:36:11] : no arobase",
            "@todo 18/12/31 12:36:11 : no brackets",
            "@todo [18/12/31 12:36:11] no separator",
        ] {
            let err = Note::parse(text).unwrap_err();
            assert!(
                matches!(err, NotesError::InvalidFormat { .. }),
                "unexpected error for {:?}: {}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_parse_rejects_label_without_arobase() {
        let err = Note::parse("@todo, job [18/12/31 12:36:11] : x").unwrap_err();
        assert!(matches!(err, NotesError::InvalidFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let err = Note::parse("@todo [yesterday] : Solve bug").unwrap_err();
        assert!(matches!(err, NotesError::InvalidDate { ref value, .. } if value == "yesterday"));

        let err = Note::parse("@todo [18/13/31 12:36:11] : Solve bug").unwrap_err();
        assert!(matches!(err, NotesError::InvalidDate { .. }));
    }
}
