//! Snippet file output.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{SnippetError, SnippetResult};
use crate::snippet::SnippetSet;

/// Write `snippets` as pretty-printed JSON to `path`, replacing any existing
/// file. Returns the number of snippets written.
pub fn write_snippets(path: &Path, snippets: &SnippetSet) -> SnippetResult<usize> {
    let json = serde_json::to_string_pretty(snippets).map_err(SnippetError::Serialize)?;

    ensure_parent_dir(path)?;
    fs::write(path, json).map_err(|source| SnippetError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), snippets = snippets.len(), "wrote snippets");
    Ok(snippets.len())
}

/// Ensure the parent directory of a path exists.
fn ensure_parent_dir(path: &Path) -> SnippetResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SnippetError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
