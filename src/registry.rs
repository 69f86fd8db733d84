//! Catalogue of parsed collection manifests used by generation.
//!
//! Unlike the validator, loading is lenient: a manifest that fails to
//! parse is skipped with a warning so a single corrupt file never blocks
//! regeneration of the rest of the catalogue.

use std::path::{Path, PathBuf};

use crate::diagnostics::{Diagnostic, Severity, W001};
use crate::models::{CollectionManifest, COLLECTION_SUFFIX};
use crate::parser;
use crate::validator;

/// A loaded collection manifest with its resolved identity.
#[derive(Debug, Clone)]
pub struct CollectionEntry {
    /// Path to the manifest file.
    pub file: PathBuf,
    /// Parsed manifest (lenient; fields may be defaulted).
    pub manifest: CollectionManifest,
    /// Collection id, falling back to the manifest filename stem.
    pub id: String,
    /// Display name, falling back to the id.
    pub name: String,
    /// Whether the collection is marked featured.
    pub featured: bool,
}

impl CollectionEntry {
    fn from_file(file: PathBuf, manifest: CollectionManifest) -> Self {
        let id = manifest
            .id
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| file_stem(&file));
        let name = manifest
            .name
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| id.clone());
        let featured = manifest.display.featured;
        Self {
            file,
            manifest,
            id,
            name,
            featured,
        }
    }
}

fn file_stem(file: &Path) -> String {
    let name = file.file_name().and_then(|n| n.to_str()).unwrap_or("");
    name.strip_suffix(COLLECTION_SUFFIX)
        .unwrap_or(name)
        .to_string()
}

/// Load every collection manifest under `<root>/collections`.
///
/// Returns entries sorted featured-first, each group alphabetically by
/// lowercased name, plus warnings for manifests that were skipped. A
/// missing collections directory yields no entries.
#[must_use]
pub fn load_collections(root: &Path) -> (Vec<CollectionEntry>, Vec<Diagnostic>) {
    let dir = root.join("collections");
    let mut files = validator::manifest_files(&dir);
    files.sort();

    let mut entries = Vec::new();
    let mut warnings = Vec::new();
    for file in files {
        match parser::parse_collection_yaml(&file) {
            Some(manifest) => entries.push(CollectionEntry::from_file(file, manifest)),
            None => {
                let name = file.file_name().and_then(|n| n.to_str()).unwrap_or("");
                warnings.push(Diagnostic::new(
                    Severity::Warning,
                    W001,
                    format!("failed to parse {name}, skipping"),
                ));
            }
        }
    }

    entries.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    (entries, warnings)
}
