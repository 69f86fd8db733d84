//! Symlink-safe filesystem helpers.
//!
//! These helpers use `symlink_metadata()` instead of `metadata()` to avoid
//! following symlinks when scanning catalogue directories.

use std::path::Path;

/// Returns `true` if the path is a regular file (not a symlink).
#[must_use]
pub(crate) fn is_regular_file(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

/// Returns `true` if the path is a regular directory (not a symlink).
#[must_use]
pub(crate) fn is_regular_dir(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_regular_file_true_for_regular_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("x.prompt.md");
        fs::write(&file, "hello").unwrap();
        assert!(is_regular_file(&file));
    }

    #[test]
    fn is_regular_file_false_for_directory() {
        let dir = tempdir().unwrap();
        assert!(!is_regular_file(dir.path()));
    }

    #[test]
    fn is_regular_file_false_for_nonexistent() {
        assert!(!is_regular_file(Path::new("/nonexistent/path/file.md")));
    }

    #[cfg(unix)]
    #[test]
    fn is_regular_file_false_for_symlink_to_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.md");
        fs::write(&target, "hello").unwrap();
        let link = dir.path().join("link.md");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(!is_regular_file(&link));
    }

    #[test]
    fn is_regular_dir_true_for_regular_dir() {
        let dir = tempdir().unwrap();
        let subdir = dir.path().join("collections");
        fs::create_dir(&subdir).unwrap();
        assert!(is_regular_dir(&subdir));
    }

    #[test]
    fn is_regular_dir_false_for_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("x.md");
        fs::write(&file, "hello").unwrap();
        assert!(!is_regular_dir(&file));
    }
}
