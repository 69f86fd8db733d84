pub mod badges;
pub mod diagnostics;
pub mod errors;
mod fs_util;
pub mod models;
pub mod parser;
pub mod registry;
pub mod renderer;
pub mod validator;
pub mod writer;

// Re-export key types at crate root for convenience.
pub use badges::McpRegistry;
pub use diagnostics::{Diagnostic, Severity};
pub use errors::{AicatError, Result};
pub use models::{CollectionItem, CollectionManifest, DisplaySettings, ItemKind};
pub use parser::{extract_description, extract_title, parse_frontmatter};
pub use registry::{load_collections, CollectionEntry};
pub use validator::{validate_collections, validate_manifest};
pub use writer::{splice_featured_section, write_if_changed, WriteOutcome};
