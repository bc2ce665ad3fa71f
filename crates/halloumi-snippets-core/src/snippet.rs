//! Snippet file entries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Snippet identifier to entry, in emission order.
pub type SnippetSet = IndexMap<String, SnippetEntry>;

/// One triggerable template in the editor's snippet file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetEntry {
    /// Text that triggers the snippet.
    pub prefix: String,
    /// Template lines.
    pub body: Vec<String>,
    /// Human-readable description shown by the editor.
    pub description: String,
}

impl SnippetEntry {
    /// Create an entry from borrowed parts.
    pub fn new(
        prefix: impl Into<String>,
        body: impl IntoIterator<Item = impl Into<String>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            body: body.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }
}
