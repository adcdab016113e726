use std::path::PathBuf;

use clap::Parser;

use crate::{parse_note_argument, parse_search_field, NoteId, SearchField};

/// Command-line arguments for `n`
#[derive(Parser, Debug)]
#[clap(
    name = "n",
    version,
    about = "A very simple notetaker for the command line"
)]
pub struct Cli {
    /// Note to add; words after the first '@' are its labels
    #[clap(value_name = "NOTE")]
    pub note: Option<String>,

    /// Delete a note by its id
    #[clap(short, long, value_name = "ID")]
    pub delete: Option<NoteId>,

    /// Search notes by id or by one of their labels
    #[clap(short, long, value_name = "FIELD")]
    pub search: Option<String>,

    /// Path to the notes file
    #[clap(short = 'f', long, value_parser)]
    pub file: Option<PathBuf>,

    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Print notes as JSON
    #[clap(short, long)]
    pub json: bool,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,
}

/// What a single invocation does to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add {
        message: String,
        labels: Vec<String>,
    },
    Delete(NoteId),
    Search(SearchField),
    List,
}

impl Cli {
    /// A NOTE argument wins over `--delete`, which wins over `--search`.
    pub fn action(&self) -> Action {
        if let Some(note) = &self.note {
            let (message, labels) = parse_note_argument(note);
            return Action::Add { message, labels };
        }
        if let Some(id) = self.delete {
            return Action::Delete(id);
        }
        if let Some(field) = &self.search {
            return Action::Search(parse_search_field(field));
        }
        Action::List
    }
}
