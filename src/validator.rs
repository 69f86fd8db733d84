//! Collection-manifest schema validation.
//!
//! Field validators mirror the catalogue schema: id/name/description
//! lengths and patterns, tag limits, item referential integrity, display
//! flags, and agent front-matter rules. Each field validator reports at
//! most its first violation; `validate_manifest` aggregates across fields
//! so one pass surfaces every failing category at once. `validate_items`
//! is deliberately fail-fast across items: the first failing item stops
//! the batch.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml_ng::Value;

use crate::diagnostics::{
    Diagnostic, C001, E000, E001, E002, E003, E011, E012, E021, E022, E031, E032, E033, E034,
    E035, E041, E042, E043, E044, E045, E046, E047, E048, E049, E051, E052, E053, E061, E062,
    E063, E064, E065, E066, E067, E068, E069, E070, E071, E072, E073,
};
use crate::fs_util::is_regular_file;
use crate::models::{ItemKind, COLLECTION_SUFFIX, MAX_COLLECTION_ITEMS};
use crate::parser;

/// Lowercase kebab-case pattern shared by collection ids and tags.
static KEBAB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9-]+$").expect("kebab-case regex must compile"));

fn field<'a>(manifest: &'a Value, key: &str) -> Option<&'a Value> {
    manifest
        .as_mapping()
        .and_then(|m| m.get(Value::String(key.to_string())))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Validate the collection `id` field.
#[must_use]
pub fn validate_id(value: Option<&Value>) -> Vec<Diagnostic> {
    let Some(id) = non_empty_str(value) else {
        return vec![
            Diagnostic::error(E001, "ID is required and must be a string").with_field("id"),
        ];
    };
    if !KEBAB_RE.is_match(id) {
        return vec![Diagnostic::error(
            E002,
            "ID must contain only lowercase letters, numbers, and hyphens",
        )
        .with_field("id")];
    }
    if id.chars().count() > 50 {
        return vec![
            Diagnostic::error(E003, "ID must be between 1 and 50 characters").with_field("id"),
        ];
    }
    vec![]
}

/// Validate the collection `name` field.
#[must_use]
pub fn validate_name(value: Option<&Value>) -> Vec<Diagnostic> {
    let Some(name) = non_empty_str(value) else {
        return vec![
            Diagnostic::error(E011, "Name is required and must be a string").with_field("name"),
        ];
    };
    if name.chars().count() > 100 {
        return vec![
            Diagnostic::error(E012, "Name must be between 1 and 100 characters")
                .with_field("name"),
        ];
    }
    vec![]
}

/// Validate the collection `description` field.
#[must_use]
pub fn validate_description(value: Option<&Value>) -> Vec<Diagnostic> {
    let Some(description) = non_empty_str(value) else {
        return vec![Diagnostic::error(
            E021,
            "Description is required and must be a string",
        )
        .with_field("description")];
    };
    if description.chars().count() > 500 {
        return vec![Diagnostic::error(
            E022,
            "Description must be between 1 and 500 characters",
        )
        .with_field("description")];
    }
    vec![]
}

/// Validate the optional `tags` field.
#[must_use]
pub fn validate_tags(value: Option<&Value>) -> Vec<Diagnostic> {
    let tags = match value {
        None | Some(Value::Null) => return vec![],
        Some(Value::Sequence(seq)) => seq,
        Some(_) => {
            return vec![Diagnostic::error(E031, "Tags must be an array").with_field("tags")]
        }
    };
    if tags.len() > 10 {
        return vec![Diagnostic::error(E032, "Maximum 10 tags allowed").with_field("tags")];
    }
    for tag in tags {
        let Value::String(tag) = tag else {
            return vec![Diagnostic::error(E033, "All tags must be strings").with_field("tags")];
        };
        if !KEBAB_RE.is_match(tag) {
            return vec![Diagnostic::error(
                E034,
                format!("Tag \"{tag}\" must contain only lowercase letters, numbers, and hyphens"),
            )
            .with_field("tags")];
        }
        if tag.is_empty() || tag.chars().count() > 30 {
            return vec![Diagnostic::error(
                E035,
                format!("Tag \"{tag}\" must be between 1 and 30 characters"),
            )
            .with_field("tags")];
        }
    }
    vec![]
}

/// Validate the `items` field, fail-fast across items.
///
/// Each referenced file must exist under `root` and carry the suffix
/// required by its kind; agent items additionally get their front matter
/// validated.
#[must_use]
pub fn validate_items(value: Option<&Value>, root: &Path) -> Vec<Diagnostic> {
    let items = match value {
        Some(Value::Sequence(seq)) => seq,
        _ => {
            return vec![
                Diagnostic::error(E041, "Items is required and must be an array")
                    .with_field("items"),
            ]
        }
    };
    if items.is_empty() {
        return vec![Diagnostic::error(E042, "At least one item is required").with_field("items")];
    }
    if items.len() > MAX_COLLECTION_ITEMS {
        return vec![Diagnostic::error(
            E043,
            format!("Maximum {MAX_COLLECTION_ITEMS} items allowed"),
        )
        .with_field("items")];
    }

    for (index, item) in items.iter().enumerate() {
        let n = index + 1;
        let Some(item) = item.as_mapping() else {
            return vec![
                Diagnostic::error(E044, format!("Item {n} must be an object")).with_field("items"),
            ];
        };
        let path = item
            .get(Value::String("path".to_string()))
            .and_then(Value::as_str)
            .filter(|p| !p.is_empty());
        let Some(path) = path else {
            return vec![Diagnostic::error(E045, format!("Item {n} must have a path string"))
                .with_field("items")];
        };
        let kind = item
            .get(Value::String("kind".to_string()))
            .and_then(Value::as_str)
            .filter(|k| !k.is_empty());
        let Some(kind) = kind else {
            return vec![Diagnostic::error(E046, format!("Item {n} must have a kind string"))
                .with_field("items")];
        };
        let Some(kind) = ItemKind::parse(kind) else {
            return vec![Diagnostic::error(
                E047,
                format!("Item {n} kind must be one of: prompt, instruction, chat-mode, agent"),
            )
            .with_field("items")];
        };

        let file = root.join(path);
        if !is_regular_file(&file) {
            return vec![Diagnostic::error(
                E048,
                format!("Item {n} file does not exist: {path}"),
            )
            .with_field("items")];
        }
        if !path.ends_with(kind.suffix()) {
            return vec![Diagnostic::error(
                E049,
                format!(
                    "Item {n} kind is \"{}\" but path doesn't end with {}",
                    kind.as_str(),
                    kind.suffix()
                ),
            )
            .with_field("items")];
        }
        if kind == ItemKind::Agent {
            if let Some(diag) = validate_agent_file(&file, path) {
                return vec![diag];
            }
        }
    }
    vec![]
}

/// Validate the optional `display` block.
#[must_use]
pub fn validate_display(value: Option<&Value>) -> Vec<Diagnostic> {
    let display = match value {
        None | Some(Value::Null) => return vec![],
        Some(Value::Mapping(m)) => m,
        Some(_) => {
            return vec![Diagnostic::error(E051, "Display must be an object").with_field("display")]
        }
    };

    match display.get(Value::String("ordering".to_string())) {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) if s == "manual" || s == "alpha" => {}
        Some(_) => {
            return vec![Diagnostic::error(
                E052,
                "Display ordering must be 'manual' or 'alpha'",
            )
            .with_field("display")]
        }
    }

    match display.get(Value::String("show_badge".to_string())) {
        None | Some(Value::Null) | Some(Value::Bool(_)) => {}
        Some(Value::String(s))
            if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") => {}
        Some(_) => {
            return vec![
                Diagnostic::error(E053, "Display show_badge must be boolean").with_field("display"),
            ]
        }
    }
    vec![]
}

/// Validate an agent artifact file referenced by a collection item.
///
/// `item_path` is the repo-relative path used in messages. Returns the
/// first violation, or `None` when the agent file is valid.
#[must_use]
pub fn validate_agent_file(file: &Path, item_path: &str) -> Option<Diagnostic> {
    let Some(agent) = parser::frontmatter_of(file) else {
        return Some(
            Diagnostic::error(E061, format!("Item {item_path} agent file could not be parsed"))
                .with_field("items"),
        );
    };

    let name = match agent.get("name") {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => {
            return Some(
                Diagnostic::error(E062, format!("Item {item_path} agent must have a 'name' field"))
                    .with_field("items"),
            )
        }
    };
    if name.chars().count() > 50 {
        return Some(
            Diagnostic::error(
                E063,
                format!("Item {item_path} agent name must be between 1 and 50 characters"),
            )
            .with_field("items"),
        );
    }

    let description = match agent.get("description") {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => {
            return Some(
                Diagnostic::error(
                    E064,
                    format!("Item {item_path} agent must have a 'description' field"),
                )
                .with_field("items"),
            )
        }
    };
    if description.chars().count() > 500 {
        return Some(
            Diagnostic::error(
                E065,
                format!("Item {item_path} agent description must be between 1 and 500 characters"),
            )
            .with_field("items"),
        );
    }

    match agent.get("tools") {
        None | Some(Value::Null) | Some(Value::Sequence(_)) => {}
        Some(_) => {
            return Some(
                Diagnostic::error(E066, format!("Item {item_path} agent 'tools' must be an array"))
                    .with_field("items"),
            )
        }
    }

    let servers = match agent.get("mcp-servers") {
        None | Some(Value::Null) => return None,
        Some(Value::Mapping(m)) => m,
        Some(_) => {
            return Some(
                Diagnostic::error(
                    E067,
                    format!("Item {item_path} agent 'mcp-servers' must be an object"),
                )
                .with_field("items"),
            )
        }
    };

    for (server_name, config) in servers {
        let server_name = server_name.as_str().unwrap_or_default();
        let Some(config) = config.as_mapping() else {
            return Some(
                Diagnostic::error(
                    E068,
                    format!("Item {item_path} agent MCP server '{server_name}' must be an object"),
                )
                .with_field("items"),
            );
        };
        let server_type = match config.get(Value::String("type".to_string())) {
            Some(Value::String(t)) if !t.is_empty() => t,
            _ => {
                return Some(
                    Diagnostic::error(
                        E069,
                        format!(
                            "Item {item_path} agent MCP server '{server_name}' must have a 'type' field"
                        ),
                    )
                    .with_field("items"),
                )
            }
        };
        if server_type == "local" {
            match config.get(Value::String("command".to_string())) {
                Some(Value::String(c)) if !c.is_empty() => {}
                _ => {
                    return Some(
                        Diagnostic::error(
                            E070,
                            format!(
                                "Item {item_path} agent MCP server '{server_name}' with type 'local' must have a 'command' field"
                            ),
                        )
                        .with_field("items"),
                    )
                }
            }
        }
        match config.get(Value::String("args".to_string())) {
            None | Some(Value::Null) | Some(Value::Sequence(_)) => {}
            Some(_) => {
                return Some(
                    Diagnostic::error(
                        E071,
                        format!(
                            "Item {item_path} agent MCP server '{server_name}' 'args' must be an array"
                        ),
                    )
                    .with_field("items"),
                )
            }
        }
        match config.get(Value::String("tools".to_string())) {
            None | Some(Value::Null) | Some(Value::Sequence(_)) => {}
            Some(_) => {
                return Some(
                    Diagnostic::error(
                        E072,
                        format!(
                            "Item {item_path} agent MCP server '{server_name}' 'tools' must be an array"
                        ),
                    )
                    .with_field("items"),
                )
            }
        }
        match config.get(Value::String("env".to_string())) {
            None | Some(Value::Null) | Some(Value::Mapping(_)) => {}
            Some(_) => {
                return Some(
                    Diagnostic::error(
                        E073,
                        format!(
                            "Item {item_path} agent MCP server '{server_name}' 'env' must be an object"
                        ),
                    )
                    .with_field("items"),
                )
            }
        }
    }
    None
}

/// Validate a parsed collection manifest against the full schema.
///
/// Aggregates across field categories; a single call surfaces every
/// failing category at once. Returns an empty list for valid manifests.
#[must_use]
pub fn validate_manifest(manifest: &Value, root: &Path) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    diags.extend(validate_id(field(manifest, "id")));
    diags.extend(validate_name(field(manifest, "name")));
    diags.extend(validate_description(field(manifest, "description")));
    diags.extend(validate_tags(field(manifest, "tags")));
    diags.extend(validate_items(field(manifest, "items"), root));
    diags.extend(validate_display(field(manifest, "display")));
    diags
}

/// Validate every manifest under `<root>/collections`.
///
/// Returns one `(file, diagnostics)` pair per manifest file (empty
/// diagnostics = valid), including a `C001` entry on the second and later
/// occurrences of a duplicate id. A missing collections directory yields
/// an empty result — nothing to validate is not a failure.
#[must_use]
pub fn validate_collections(root: &Path) -> Vec<(PathBuf, Vec<Diagnostic>)> {
    let dir = root.join("collections");
    let mut files = manifest_files(&dir);
    files.sort();

    let mut results = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for file in files {
        let manifest = match parser::collection_value(&file) {
            Ok(v) => v,
            Err(e) => {
                results.push((
                    file,
                    vec![Diagnostic::error(E000, format!("failed to parse manifest: {e}"))],
                ));
                continue;
            }
        };

        let mut diags = validate_manifest(&manifest, root);

        if let Some(id) = field(&manifest, "id").and_then(Value::as_str) {
            if !id.is_empty() && !seen_ids.insert(id.to_string()) {
                let file_name = file
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default();
                diags.push(Diagnostic::error(
                    C001,
                    format!("Duplicate collection ID \"{id}\" found in {file_name}"),
                ));
            }
        }

        results.push((file, diags));
    }
    results
}

/// List `*.collection.yml` files directly under `dir`.
pub(crate) fn manifest_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            is_regular_file(p)
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(COLLECTION_SUFFIX))
        })
        .collect()
}
