//! Idempotent file writes and the root-README splice.

use std::path::Path;

use crate::errors::Result;
use crate::fs_util::is_regular_file;

/// Marker heading that opens the featured-collections block in the root
/// README.
pub const FEATURED_START_MARKER: &str = "## 🌟 Featured Collections";

/// Marker heading that closes the featured-collections block.
pub const FEATURED_END_MARKER: &str = "## MCP Server";

/// What a `write_if_changed` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File did not exist and was created.
    Created,
    /// File existed with different content and was rewritten.
    Updated,
    /// File already held exactly this content; nothing was written.
    Unchanged,
}

/// Write `content` to `path` only when it differs from what is on disk.
///
/// Unchanged files are never touched, so repeated generation leaves
/// mtimes alone and downstream watchers quiet.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome> {
    if is_regular_file(path) {
        let existing = std::fs::read_to_string(path)?;
        if existing == content {
            return Ok(WriteOutcome::Unchanged);
        }
        std::fs::write(path, content)?;
        return Ok(WriteOutcome::Updated);
    }
    std::fs::write(path, content)?;
    Ok(WriteOutcome::Created)
}

/// Splice the featured-collections block into root README content.
///
/// When the start marker is present, everything from it up to (but not
/// including) the end marker is replaced. When only the end marker is
/// present, the block is inserted before it. Returns `None` when the
/// splice point cannot be found; callers warn and leave the README
/// untouched.
#[must_use]
pub fn splice_featured_section(readme: &str, featured: &str) -> Option<String> {
    if let Some(start) = readme.find(FEATURED_START_MARKER) {
        let end = readme[start..].find(FEATURED_END_MARKER)? + start;
        let before = &readme[..start];
        let after = &readme[end..];
        return Some(format!("{before}{featured}\n\n{after}"));
    }
    let end = readme.find(FEATURED_END_MARKER)?;
    let before = &readme[..end];
    let after = &readme[end..];
    Some(format!("{before}{featured}\n\n{after}"))
}
