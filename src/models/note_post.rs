use serde::{Deserialize, Serialize};

/// A single user-authored note post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotePost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Form payload for the add and edit submissions.
///
/// Every field defaults to an empty string when the key is absent, so a bare
/// or partial form submission is accepted rather than rejected. Empty values
/// are stored as-is; there is no presence validation.
#[derive(Debug, Clone, Deserialize)]
pub struct NotePostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}
