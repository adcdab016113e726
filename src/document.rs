//! Tagged YAML documents used to persist notes.
//!
//! A collection is stored as a `!notetaker` mapping from note id to a `!note`
//! scalar holding the note's canonical text:
//!
//! ```text
//! !notetaker
//! 0: !note '@todo, @perso [18/12/22 12:36:11] : Call John'
//! 5: !note '@job [18/12/31 12:36:11] : Solve bug 121'
//! ```
//!
//! Types that persist themselves implement [`Tagged`] against `serde_yaml` values.
use serde_yaml::{
    value::{Tag, TaggedValue},
    Value,
};

use crate::{NotesError, Result};

/// A value that encodes itself as a tagged YAML node.
pub trait Tagged: Sized {
    /// Tag distinguishing this type in a document, e.g. `!note`.
    const TAG: &'static str;

    /// Untagged content of the node.
    fn to_value(&self) -> Value;

    fn from_value(value: &Value) -> Result<Self>;

    fn to_node(&self) -> Value {
        Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(Self::TAG),
            value: self.to_value(),
        }))
    }

    fn from_node(node: &Value) -> Result<Self> {
        Self::from_value(untag(node, Self::TAG)?)
    }
}

/// Content of `node`, which must carry exactly the `expected` tag.
pub fn untag<'a>(node: &'a Value, expected: &str) -> Result<&'a Value> {
    match node {
        Value::Tagged(tagged) if tagged.tag == expected => Ok(&tagged.value),
        Value::Tagged(tagged) => Err(NotesError::format(format!(
            "expected tag '{}', found '{}'",
            expected, tagged.tag
        ))),
        _ => Err(NotesError::format(format!("missing tag '{}'", expected))),
    }
}

/// Renders `value` as a YAML document.
pub fn to_document<T: Tagged>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(&value.to_node())?)
}

/// Parses a YAML document into a tagged value.
pub fn from_document<T: Tagged>(text: &str) -> Result<T> {
    let node: Value = serde_yaml::from_str(text)?;
    T::from_node(&node)
}
