use std::path::{Path, PathBuf};

use aicat::badges::McpRegistry;
use aicat::models::ItemKind;
use aicat::renderer::{self, templates};
use aicat::writer::{self, WriteOutcome};
use aicat::{registry, Result};

pub(crate) fn run(root: PathBuf, registry_path: Option<PathBuf>) {
    let registry_path =
        registry_path.unwrap_or_else(|| root.join("github-mcp-registry.json"));
    let mcp_registry = McpRegistry::load(&registry_path);

    if let Err(e) = generate(&root, &mcp_registry) {
        eprintln!("aicat generate: {e}");
        std::process::exit(1);
    }
}

fn generate(root: &Path, mcp_registry: &McpRegistry) -> Result<()> {
    eprintln!("Generating category README files...");

    let docs_dir = root.join("docs");
    std::fs::create_dir_all(&docs_dir)?;
    std::fs::create_dir_all(root.join("collections"))?;

    for kind in ItemKind::ALL {
        let config = renderer::category_config(kind);
        let section = renderer::render_category_section(root, kind, mcp_registry);
        let readme = renderer::build_category_readme(&section, config.section, config.usage);
        let file = docs_dir.join(format!("README.{}.md", kind.folder()));
        report(&file, writer::write_if_changed(&file, &readme)?);
    }

    let (entries, warnings) = registry::load_collections(root);
    for w in &warnings {
        eprintln!("{w}");
    }

    let collections_section = renderer::render_collections_section(&entries);
    let collections_readme = renderer::build_category_readme(
        &collections_section,
        templates::COLLECTIONS_SECTION,
        templates::COLLECTIONS_USAGE,
    );
    let file = docs_dir.join("README.collections.md");
    report(&file, writer::write_if_changed(&file, &collections_readme)?);

    if !entries.is_empty() {
        eprintln!("Generating individual collection README files...");
    }
    for entry in &entries {
        let content = renderer::render_collection_readme(root, entry, mcp_registry);
        let file = root.join("collections").join(format!("{}.md", entry.id));
        report(&file, writer::write_if_changed(&file, &content)?);
    }

    splice_root_readme(root, &entries)?;
    Ok(())
}

/// Update the featured-collections block in the root README, warning and
/// skipping when the README or its markers are missing.
fn splice_root_readme(root: &Path, entries: &[registry::CollectionEntry]) -> Result<()> {
    let featured = renderer::render_featured_section(entries);
    if featured.is_empty() {
        eprintln!("No featured collections found to add to README.md");
        return Ok(());
    }

    let readme_path = root.join("README.md");
    if !readme_path.is_file() {
        eprintln!("warning: README.md not found, skipping featured collections update");
        return Ok(());
    }

    let content = std::fs::read_to_string(&readme_path)?;
    match writer::splice_featured_section(&content, &featured) {
        Some(updated) => {
            report(&readme_path, writer::write_if_changed(&readme_path, &updated)?);
        }
        None => {
            eprintln!(
                "warning: featured collections markers not found in README.md, skipping"
            );
        }
    }
    Ok(())
}

fn report(path: &Path, outcome: WriteOutcome) {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    match outcome {
        WriteOutcome::Created => eprintln!("{name} created successfully!"),
        WriteOutcome::Updated => eprintln!("{name} updated successfully!"),
        WriteOutcome::Unchanged => {
            eprintln!("{name} is already up to date. No changes needed.");
        }
    }
}
