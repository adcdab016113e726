//! Error types for the notetaker application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur while parsing, storing and mutating notes.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::NoteId;

/// The main error type for the notetaker application.
#[derive(Error, Debug)]
pub enum NotesError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to the JSON configuration file or JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The persisted document is not valid YAML.
    #[error("Invalid notes document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Note was not found when performing an operation.
    #[error("Note not found: {id}")]
    NoteNotFound { id: NoteId },

    /// Every note id has been handed out.
    #[error("No note ids left")]
    IdsExhausted,

    /// Note text or persisted document does not have the expected shape.
    #[error("Invalid note format: {message}")]
    InvalidFormat { message: String },

    /// The bracketed date of a note could not be parsed.
    #[error("Invalid note date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },
}

impl NotesError {
    /// Shorthand for an [`NotesError::InvalidFormat`] error.
    pub fn format(message: impl Into<String>) -> Self {
        NotesError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Whether the error comes from malformed note text or a malformed document.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            NotesError::InvalidFormat { .. }
                | NotesError::InvalidDate { .. }
                | NotesError::Yaml(_)
        )
    }
}
