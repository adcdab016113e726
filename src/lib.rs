//! Personal note-taking library
//!
//! This library provides a note collection indexed by id and by label, the
//! canonical text form of a note, and the tagged document format used to
//! persist a collection to a single file.

mod cli;
mod collection;
mod config;
mod document;
mod errors;
mod helper;
mod note;
mod storage;
mod types;

// Re-export key components
pub use cli::*;
pub use collection::*;
pub use config::*;
pub use document::*;
pub use errors::*;
pub use helper::*;
pub use note::*;
pub use storage::*;
pub use types::*;
