//! CLI module for the notetaker application
//!
//! Runs one load → mutate → save cycle against the note store.
use std::{collections::BTreeMap, io::Write};

use log::{debug, info};

use crate::{Action, Note, NoteId, NoteStore, Result};

/// CLI Application handler - applies one action to the stored collection
pub struct App {
    /// The note storage backend
    store: NoteStore,

    /// Whether to print notes as JSON
    json: bool,
}

impl App {
    pub fn new(store: NoteStore, json: bool) -> Self {
        Self { store, json }
    }

    /// Run the action, writing user-facing output to `out`
    pub fn run(&self, action: Action, out: &mut impl Write) -> Result<()> {
        let mut notes = self.store.load()?;

        match action {
            Action::Add { message, labels } => {
                let id = notes.add_note(message, &labels[..])?;
                self.store.save(&notes)?;
                info!("Added note {}", id);
                writeln!(out, "Note added")?;
            }
            Action::Delete(id) => {
                notes.delete_note(id)?;
                self.store.save(&notes)?;
                info!("Deleted note {}", id);
                writeln!(out, "Note deleted")?;
            }
            Action::Search(field) => {
                let found = notes.find(&field);
                debug!("Search for {} matched {} notes", field, found.len());
                if self.json {
                    self.print_json(&found, out)?;
                } else {
                    for (id, note) in &found {
                        writeln!(out, "{} : {}", id, note)?;
                    }
                }
            }
            Action::List => {
                if self.json {
                    let all: BTreeMap<NoteId, &Note> = notes.iter().collect();
                    self.print_json(&all, out)?;
                } else {
                    write!(out, "{}", notes)?;
                }
            }
        }

        Ok(())
    }

    fn print_json(&self, notes: &BTreeMap<NoteId, &Note>, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, notes)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchField;

    fn run(app: &App, action: Action) -> String {
        let mut out = Vec::new();
        app.run(action, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn add(message: &str, labels: &[&str]) -> Action {
        Action::Add {
            message: message.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_search_delete_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(NoteStore::new(dir.path().join("notes.yaml")), false);

        assert_eq!(run(&app, add("Call John", &["todo", "perso"])), "Note added\n");
        assert_eq!(run(&app, add("Solve bug", &["TODO"])), "Note added\n");

        let found = run(&app, Action::Search(SearchField::from("todo")));
        let lines: Vec<_> = found.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0 : @todo, @perso ["));
        assert!(lines[1].starts_with("1 : @todo ["));

        assert_eq!(run(&app, Action::Delete(0)), "Note deleted\n");
        let listed = run(&app, Action::List);
        assert_eq!(listed.lines().count(), 1);
        assert!(listed.starts_with("1 -> @todo ["));
    }

    #[test]
    fn test_delete_missing_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.yaml");
        let app = App::new(NoteStore::new(&path), false);
        run(&app, add("keep me", &[]));
        let before = std::fs::read_to_string(&path).unwrap();

        let mut out = Vec::new();
        let err = app.run(Action::Delete(9), &mut out).unwrap_err();
        assert!(matches!(err, crate::NotesError::NoteNotFound { id: 9 }));
        assert!(out.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_json_listing() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(NoteStore::new(dir.path().join("notes.yaml")), true);
        run(&app, add("Call John", &["todo"]));

        let listed: serde_json::Value = serde_json::from_str(&run(&app, Action::List)).unwrap();
        assert_eq!(listed["0"]["message"], "Call John");
        assert_eq!(listed["0"]["labels"][0], "todo");
    }

    #[test]
    fn test_empty_search_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(NoteStore::new(dir.path().join("notes.yaml")), false);
        assert_eq!(run(&app, Action::Search(SearchField::Id(0))), "");
    }
}
