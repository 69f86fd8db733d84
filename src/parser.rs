//! Front-matter and collection-manifest parsing, plus title/description
//! derivation for artifact files.

use std::collections::HashMap;
use std::path::Path;

use serde_yaml_ng::Value;

use crate::errors::{AicatError, Result};
use crate::models::{CollectionManifest, ItemKind, McpServerConfig};

/// Extract YAML front matter between `---` delimiters.
///
/// Returns `(metadata_map, body_text)`. Fails when the content has no
/// front-matter block, the block is not valid YAML, or it is not a mapping.
pub fn parse_frontmatter(content: &str) -> Result<(HashMap<String, Value>, String)> {
    let mut lines = content.lines();
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => {
            return Err(AicatError::Parse {
                message: "missing front matter block".to_string(),
            })
        }
    }

    let mut yaml_lines = Vec::new();
    let mut body_lines = Vec::new();
    let mut closed = false;
    for line in lines {
        if !closed && line.trim_end() == "---" {
            closed = true;
            continue;
        }
        if closed {
            body_lines.push(line);
        } else {
            yaml_lines.push(line);
        }
    }
    if !closed {
        return Err(AicatError::Parse {
            message: "unterminated front matter block".to_string(),
        });
    }

    let metadata: HashMap<String, Value> = serde_yaml_ng::from_str(&yaml_lines.join("\n"))?;
    Ok((metadata, body_lines.join("\n")))
}

/// Lenient file-level front-matter parse: `None` on any read or parse failure.
#[must_use]
pub fn frontmatter_of(path: &Path) -> Option<HashMap<String, Value>> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_frontmatter(&content).ok().map(|(m, _)| m)
}

/// Parse a collection manifest file into the raw YAML mapping.
///
/// Used by the validator, which needs the untyped shape to report precise
/// type errors for each field.
pub fn collection_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_yaml_ng::from_str(&content)?;
    if value.is_mapping() {
        Ok(value)
    } else {
        Err(AicatError::Parse {
            message: format!("{} is not a YAML mapping", path.display()),
        })
    }
}

/// Lenient typed manifest parse: `None` on any read or parse failure.
///
/// Callers log and skip the file; generation never hard-fails on a single
/// malformed manifest.
#[must_use]
pub fn parse_collection_yaml(path: &Path) -> Option<CollectionManifest> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_yaml_ng::from_str(&content).ok()
}

/// Suffixes whose files take their title from the first heading after the
/// front-matter block. Agent files instead fall back to a whole-file scan.
const HEADING_TITLE_SUFFIXES: [&str; 3] = [".prompt.md", ".chatmode.md", ".instructions.md"];

/// Derive a display title for an artifact file.
///
/// Precedence: front-matter `title` → front-matter `name` (title-cased on
/// hyphens) → first level-1 heading (outside fenced code blocks; for
/// prompt/chat-mode/instruction files only headings after the front matter
/// count) → filename with the category suffix stripped and words capitalized.
#[must_use]
pub fn extract_title(path: &Path) -> String {
    let Ok(content) = std::fs::read_to_string(path) else {
        return filename_title(path);
    };

    if let Ok((metadata, _)) = parse_frontmatter(&content) {
        if let Some(Value::String(title)) = metadata.get("title") {
            return title.clone();
        }
        if let Some(Value::String(name)) = metadata.get("name") {
            return title_case_hyphenated(name);
        }
    }

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if HEADING_TITLE_SUFFIXES.iter().any(|s| file_name.ends_with(s)) {
        if let Some(heading) = first_heading_after_frontmatter(&content) {
            return heading;
        }
    } else if let Some(heading) = first_heading(&content) {
        return heading;
    }

    filename_title(path)
}

/// Derive a description from front matter, if any.
#[must_use]
pub fn extract_description(path: &Path) -> Option<String> {
    match frontmatter_of(path)?.get("description") {
        Some(Value::String(desc)) => Some(desc.clone()),
        _ => None,
    }
}

/// First `# ` heading after the front-matter block, skipping fenced code.
fn first_heading_after_frontmatter(content: &str) -> Option<String> {
    let mut in_frontmatter = false;
    let mut frontmatter_ended = false;
    let mut in_code_block = false;

    for line in content.lines() {
        if line.trim() == "---" {
            if !in_frontmatter {
                in_frontmatter = true;
            } else if !frontmatter_ended {
                frontmatter_ended = true;
            }
            continue;
        }
        if frontmatter_ended || !in_frontmatter {
            if line.trim_start().starts_with("```") {
                in_code_block = !in_code_block;
                continue;
            }
            if !in_code_block {
                if let Some(rest) = line.strip_prefix("# ") {
                    return Some(rest.trim().to_string());
                }
            }
        }
    }
    None
}

/// First `# ` heading anywhere in the content, skipping fenced code.
fn first_heading(content: &str) -> Option<String> {
    let mut in_code_block = false;
    for line in content.lines() {
        if line.trim_start().starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if !in_code_block {
            if let Some(rest) = line.strip_prefix("# ") {
                return Some(rest.trim().to_string());
            }
        }
    }
    None
}

/// Title-case a kebab-case identifier: `code-review` → `Code Review`.
#[must_use]
pub fn title_case_hyphenated(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fallback title from the filename: category suffix stripped,
/// hyphens/underscores replaced by spaces, each word capitalized.
fn filename_title(path: &Path) -> String {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let stem = ItemKind::ALL
        .iter()
        .find_map(|k| file_name.strip_suffix(k.suffix()))
        .unwrap_or_else(|| {
            file_name
                .rsplit_once('.')
                .map(|(stem, _)| stem)
                .unwrap_or(file_name)
        });
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Extract MCP server configurations from an agent file's front matter.
///
/// Returns an empty list when the file is unreadable, has no front matter,
/// or declares no `mcp-servers` mapping. Entry order follows the manifest.
#[must_use]
pub fn extract_mcp_servers(path: &Path) -> Vec<McpServerConfig> {
    let Some(metadata) = frontmatter_of(path) else {
        return Vec::new();
    };
    let Some(Value::Mapping(servers)) = metadata.get("mcp-servers") else {
        return Vec::new();
    };

    servers
        .iter()
        .filter_map(|(name, config)| {
            let name = name.as_str()?.trim().to_string();
            let Value::Mapping(config) = config else {
                return Some(McpServerConfig {
                    name,
                    ..Default::default()
                });
            };
            Some(McpServerConfig {
                name,
                server_type: mapping_str(config, "type"),
                command: mapping_str(config, "command"),
                args: mapping_string_seq(config, "args"),
                env: mapping_string_map(config, "env"),
                url: mapping_str(config, "url"),
                headers: mapping_string_map(config, "headers"),
            })
        })
        .collect()
}

fn mapping_str(map: &serde_yaml_ng::Mapping, key: &str) -> Option<String> {
    map.get(Value::String(key.to_string()))
        .and_then(scalar_to_string)
}

fn mapping_string_seq(map: &serde_yaml_ng::Mapping, key: &str) -> Vec<String> {
    match map.get(Value::String(key.to_string())) {
        Some(Value::Sequence(seq)) => seq.iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    }
}

fn mapping_string_map(
    map: &serde_yaml_ng::Mapping,
    key: &str,
) -> std::collections::BTreeMap<String, String> {
    match map.get(Value::String(key.to_string())) {
        Some(Value::Mapping(inner)) => inner
            .iter()
            .filter_map(|(k, v)| Some((k.as_str()?.to_string(), scalar_to_string(v)?)))
            .collect(),
        _ => Default::default(),
    }
}

/// Coerce a YAML scalar to its string form; `None` for non-scalars.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
