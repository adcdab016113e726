use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info, trace};
use tempfile::NamedTempFile;

use crate::{NoteCollection, NotesError, Result};

/// Loads and saves a [`NoteCollection`] as a single text file.
pub struct NoteStore {
    /// File holding the serialized collection
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the collection from disk.
    ///
    /// A missing or blank file is an empty collection; a malformed one is an error.
    pub fn load(&self) -> Result<NoteCollection> {
        if !self.path.exists() {
            debug!(
                "Notes file {} does not exist, starting empty",
                self.path.display()
            );
            return Ok(NoteCollection::new());
        }

        debug!("Loading notes from {}", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|e| {
            error!("Failed to read notes file {}: {}", self.path.display(), e);
            NotesError::Io(e)
        })?;

        if content.trim().is_empty() {
            debug!("Notes file {} is blank, starting empty", self.path.display());
            return Ok(NoteCollection::new());
        }

        let notes = NoteCollection::deserialize(&content).map_err(|e| {
            error!("Failed to parse notes file {}: {}", self.path.display(), e);
            e
        })?;
        info!("Loaded {} notes from {}", notes.len(), self.path.display());
        Ok(notes)
    }

    /// Writes the collection atomically: temp file in the same directory, then rename.
    pub fn save(&self, notes: &NoteCollection) -> Result<()> {
        debug!("Saving {} notes to {}", notes.len(), self.path.display());

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            debug!("Creating parent directory: {}", dir.display());
            fs::create_dir_all(&dir).map_err(|e| {
                error!("Failed to create directory {}: {}", dir.display(), e);
                NotesError::DirectoryError { path: dir.clone() }
            })?;
        }

        let mut temp_file = NamedTempFile::new_in(&dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            NotesError::Io(e)
        })?;

        trace!("Writing serialized notes to temporary file");
        temp_file.write_all(notes.serialize()?.as_bytes())?;
        temp_file.flush()?;

        temp_file.persist(&self.path).map_err(|e| {
            error!(
                "Failed to persist file {}: {}",
                self.path.display(),
                e.error
            );
            NotesError::Io(e.error)
        })?;

        info!("Notes saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("notes.yaml"));
        let notes = store.load().unwrap();
        assert!(notes.is_empty());
        assert_eq!(notes.next_id(), 0);
    }

    #[test]
    fn test_load_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.yaml");
        fs::write(&path, "\n  \n").unwrap();
        assert!(NoteStore::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("notes.yaml");
        let store = NoteStore::new(&path);

        let mut notes = NoteCollection::new();
        notes.add_note("Call John", &["todo"]).unwrap();
        store.save(&notes).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("!notetaker"));
        assert!(written.contains("0: !note "));
        assert_eq!(store.load().unwrap().find_by_label("todo"), [0]);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.yaml");
        fs::write(&path, "!notetaker\n0: !note \"garbage\"\n").unwrap();

        let err = NoteStore::new(path).load().unwrap_err();
        assert!(err.is_format_error());
    }
}
