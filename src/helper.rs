use crate::SearchField;

/// Splits a raw NOTE argument into its message and labels.
///
/// Everything before the first `@` is the message; the rest is split on
/// whitespace into labels. Later tokens may repeat the `@` prefix
/// (`"Call John @todo @perso"`), which is stripped.
pub fn parse_note_argument(note: &str) -> (String, Vec<String>) {
    match note.split_once('@') {
        Some((message, labels)) => (
            message.trim().to_string(),
            labels
                .split_whitespace()
                .map(|label| label.trim_start_matches('@'))
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        None => (note.trim().to_string(), Vec::new()),
    }
}

/// Reads a search value as an id when it is a number, as a label otherwise.
pub fn parse_search_field(field: &str) -> SearchField {
    match field.trim().parse() {
        Ok(id) => SearchField::Id(id),
        Err(_) => SearchField::Label(field.to_string()),
    }
}
