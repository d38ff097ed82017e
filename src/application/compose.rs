//! Compose post bodies in an external editor
//!
//! Stands in for the content textarea of a form-based UI: the body is
//! drafted in the user's editor, read back, and the draft file removed.

use crate::error::Result;
use crate::infrastructure::{data_dir, BlogRepository, EditorSession};
use std::fs;

/// Compose a post body by editing a draft file seeded with `initial`.
///
/// The draft lives under `.blogr/` so it never shows up next to the
/// user's own files. Trailing newlines left by editors are stripped.
pub fn compose_body(repo: &BlogRepository, editor_cmd: &str, initial: &str) -> Result<String> {
    let draft_path = data_dir(&repo.root).join("draft.md");

    fs::write(&draft_path, initial)?;

    let editor = EditorSession::new(editor_cmd.to_string());
    let edited = editor.edit(&draft_path);

    let content = fs::read_to_string(&draft_path)?;
    let _ = fs::remove_file(&draft_path);
    edited?;

    Ok(content.trim_end().to_string())
}
