//! Markdown rendering for category tables, collection READMEs, and the
//! featured-collections block.
//!
//! All output is deterministic: rows are sorted by lowercased title or
//! name so regeneration is stable across filesystems.

use std::path::Path;

use crate::badges::{self, McpRegistry};
use crate::fs_util::{is_regular_dir, is_regular_file};
use crate::models::{CollectionItem, ItemKind, Ordering};
use crate::parser;
use crate::registry::CollectionEntry;

pub mod templates {
    //! Fixed prose blocks surrounding the generated tables.

    pub const INSTRUCTIONS_SECTION: &str = "## 📋 Custom Instructions\n\nTeam and project-specific instructions to enhance GitHub Copilot's behavior for specific technologies and coding practices.";

    pub const INSTRUCTIONS_USAGE: &str = "### How to Use Custom Instructions\n\n**To Install:**\n- Click the **VS Code** or **VS Code Insiders** install button for the instruction you want to use\n- Download the `*.instructions.md` file and manually add it to your project's instruction collection\n\n**To Use/Apply:**\n- Copy these instructions to your `.github/copilot-instructions.md` file in your workspace\n- Create task-specific `.github/.instructions.md` files in your workspace's `.github/instructions` folder\n- Instructions automatically apply to Copilot behavior once installed in your workspace";

    pub const PROMPTS_SECTION: &str = "## 🎯 Reusable Prompts\n\nReady-to-use prompt templates for specific development scenarios and tasks, defining prompt text with a specific mode, model, and available set of tools.";

    pub const PROMPTS_USAGE: &str = "### How to Use Reusable Prompts\n\n**To Install:**\n- Click the **VS Code** or **VS Code Insiders** install button for the prompt you want to use\n- Download the `*.prompt.md` file and manually add it to your prompt collection\n\n**To Run/Execute:**\n- Use `/prompt-name` in VS Code chat after installation\n- Run the `Chat: Run Prompt` command from the Command Palette\n- Hit the run button while you have a prompt file open in VS Code";

    pub const CHATMODES_SECTION: &str = "## 💭 Custom Chat Modes\n\nCustom chat modes define specific behaviors and tools for GitHub Copilot Chat, enabling enhanced context-aware assistance for particular tasks or workflows.";

    pub const CHATMODES_USAGE: &str = "### How to Use Custom Chat Modes\n\n**To Install:**\n- Click the **VS Code** or **VS Code Insiders** install button for the chat mode you want to use\n- Download the `*.chatmode.md` file and manually install it in VS Code using the Command Palette\n\n**To Activate/Use:**\n- Import the chat mode configuration into your VS Code settings\n- Access the installed chat modes through the VS Code Chat interface\n- Select the desired chat mode from the available options in VS Code Chat";

    pub const AGENTS_SECTION: &str = "## 🤖 Custom Agents\n\nCustom agents for GitHub Copilot, making it easy for users and organizations to \"specialize\" their Copilot coding agent (CCA) through simple file-based configuration.";

    pub const AGENTS_USAGE: &str = "### How to Use Custom Agents\n\n**To Install:**\n- Click the **VS Code** or **VS Code Insiders** install button for the agent you want to use\n- Download the `*.agent.md` file and add it to your repository\n\n**MCP Server Setup:**\n- Each agent may require one or more MCP servers to function\n- Click the MCP server to view it on the GitHub MCP registry\n- Follow the guide on how to add the MCP server to your repository\n\n**To Activate/Use:**\n- Access installed agents through the VS Code Chat interface, assign them in CCA, or through Copilot CLI (coming soon)\n- Agents will have access to tools from configured MCP servers\n- Follow agent-specific instructions for optimal usage";

    pub const COLLECTIONS_SECTION: &str = "## 📦 Collections\n\nCurated collections of related prompts, instructions, and chat modes organized around specific themes, workflows, or use cases.";

    pub const COLLECTIONS_USAGE: &str = "### How to Use Collections\n\n**Browse Collections:**\n- ⭐ Featured collections are highlighted and appear at the top of the list\n- Explore themed collections that group related customizations\n- Each collection includes prompts, instructions, and chat modes for specific workflows\n- Collections make it easy to adopt comprehensive toolkits for particular scenarios\n\n**Install Items:**\n- Click install buttons for individual items within collections\n- Or browse to the individual files to copy content manually\n- Collections help you discover related customizations you might have missed";

    pub const FEATURED_COLLECTIONS_SECTION: &str = "## 🌟 Featured Collections\n\nDiscover our curated collections of prompts, instructions, and chat modes organized around specific themes and workflows.";
}

/// Rendering configuration for one artifact category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryConfig {
    pub kind: ItemKind,
    /// Section heading template (`## …` + intro paragraph).
    pub section: &'static str,
    /// Usage subheading template.
    pub usage: &'static str,
    /// Whether the table carries an MCP Servers column.
    pub include_mcp: bool,
}

/// The fixed rendering configuration for a kind.
#[must_use]
pub fn category_config(kind: ItemKind) -> CategoryConfig {
    match kind {
        ItemKind::Prompt => CategoryConfig {
            kind,
            section: templates::PROMPTS_SECTION,
            usage: templates::PROMPTS_USAGE,
            include_mcp: false,
        },
        ItemKind::Instruction => CategoryConfig {
            kind,
            section: templates::INSTRUCTIONS_SECTION,
            usage: templates::INSTRUCTIONS_USAGE,
            include_mcp: false,
        },
        ItemKind::ChatMode => CategoryConfig {
            kind,
            section: templates::CHATMODES_SECTION,
            usage: templates::CHATMODES_USAGE,
            include_mcp: false,
        },
        ItemKind::Agent => CategoryConfig {
            kind,
            section: templates::AGENTS_SECTION,
            usage: templates::AGENTS_USAGE,
            include_mcp: true,
        },
    }
}

/// Description fallback for instruction files without front matter: the
/// last word of the title, singularized, becomes the topic.
fn instructions_fallback_description(title: &str) -> String {
    let topic = title
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches('s');
    format!("{topic} specific coding standards and best practices")
}

struct CategoryRow {
    file_name: String,
    title: String,
}

fn category_rows(dir: &Path, suffix: &str) -> Vec<CategoryRow> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut rows: Vec<CategoryRow> = entries
        .flatten()
        .filter(|e| is_regular_file(&e.path()))
        .filter_map(|e| {
            let file_name = e.file_name().to_str()?.to_string();
            if !file_name.ends_with(suffix) {
                return None;
            }
            let title = parser::extract_title(&e.path());
            Some(CategoryRow { file_name, title })
        })
        .collect();
    rows.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    rows
}

/// Render the section for one artifact category: template prose followed
/// by a table of every artifact in the category folder. Returns an empty
/// string when the folder is missing or empty.
#[must_use]
pub fn render_category_section(root: &Path, kind: ItemKind, registry: &McpRegistry) -> String {
    let config = category_config(kind);
    let dir = root.join(kind.folder());
    if !is_regular_dir(&dir) {
        return String::new();
    }

    let rows = category_rows(&dir, kind.suffix());
    if rows.is_empty() {
        return String::new();
    }

    let mut table = if config.include_mcp {
        "| Title | Description | MCP Servers |\n| ----- | ----------- | ----------- |\n"
            .to_string()
    } else {
        "| Title | Description |\n| ----- | ----------- |\n".to_string()
    };

    for row in &rows {
        let path = dir.join(&row.file_name);
        let link = badges::encode_uri(&format!("{}/{}", kind.folder(), row.file_name));
        let install = badges::install_badges(&link, kind);
        let description = match parser::extract_description(&path) {
            Some(d) if d != "null" => d,
            _ if kind == ItemKind::Instruction => {
                instructions_fallback_description(&row.title)
            }
            _ => String::new(),
        };
        if config.include_mcp {
            let servers = parser::extract_mcp_servers(&path);
            let mcp_cell = badges::mcp_server_links(&servers, registry);
            table.push_str(&format!(
                "| [{}](../{link})<br />{install} | {description} | {mcp_cell} |\n",
                row.title
            ));
        } else {
            table.push_str(&format!(
                "| [{}](../{link})<br />{install} | {description} |\n",
                row.title
            ));
        }
    }

    format!("{}\n{}\n\n{table}", config.section, config.usage)
}

/// Render the Collections section: featured collections first (starred),
/// then the rest, each group alphabetical. `entries` must come from
/// `registry::load_collections`, which establishes that order.
#[must_use]
pub fn render_collections_section(entries: &[CollectionEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut table =
        "| Name | Description | Items | Tags |\n| ---- | ----------- | ----- | ---- |\n"
            .to_string();
    for entry in entries {
        let description = entry
            .manifest
            .description
            .as_deref()
            .unwrap_or("No description");
        let item_count = entry.manifest.items.len();
        let tags = entry.manifest.tags.join(", ");
        let display_name = if entry.featured {
            format!("⭐ {}", entry.name)
        } else {
            entry.name.clone()
        };
        table.push_str(&format!(
            "| [{display_name}](../collections/{}.md) | {description} | {item_count} items | {tags} |\n",
            entry.id
        ));
    }

    format!(
        "{}\n{}\n\n{table}",
        templates::COLLECTIONS_SECTION,
        templates::COLLECTIONS_USAGE
    )
}

/// Render the featured-collections block spliced into the root README.
/// Returns an empty string when nothing is featured.
#[must_use]
pub fn render_featured_section(entries: &[CollectionEntry]) -> String {
    let featured: Vec<&CollectionEntry> = entries.iter().filter(|e| e.featured).collect();
    if featured.is_empty() {
        return String::new();
    }

    let mut table =
        "| Name | Description | Items | Tags |\n| ---- | ----------- | ----- | ---- |\n"
            .to_string();
    for entry in featured {
        let description = entry
            .manifest
            .description
            .as_deref()
            .unwrap_or("No description");
        let tags = entry.manifest.tags.join(", ");
        table.push_str(&format!(
            "| [{}](collections/{}.md) | {description} | {} items | {tags} |\n",
            entry.name,
            entry.id,
            entry.manifest.items.len()
        ));
    }

    format!("{}\n\n{table}", templates::FEATURED_COLLECTIONS_SECTION)
}

/// Anchor for a `[see usage]` link: whitespace runs become hyphens,
/// lowercased.
fn usage_anchor(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Render the standalone README for one collection.
#[must_use]
pub fn render_collection_readme(
    root: &Path,
    entry: &CollectionEntry,
    registry: &McpRegistry,
) -> String {
    let manifest = &entry.manifest;
    let description = manifest
        .description
        .as_deref()
        .unwrap_or("No description provided.");

    let mut content = format!("# {}\n\n{description}\n\n", entry.name);
    if !manifest.tags.is_empty() {
        content.push_str(&format!("**Tags:** {}\n\n", manifest.tags.join(", ")));
    }
    content.push_str("## Items in this Collection\n\n");

    let has_agents = manifest.has_agents();
    if has_agents {
        content.push_str(
            "| Title | Type | Description | MCP Servers |\n| ----- | ---- | ----------- | ----------- |\n",
        );
    } else {
        content.push_str("| Title | Type | Description |\n| ----- | ---- | ----------- |\n");
    }

    let mut items: Vec<&CollectionItem> = manifest.items.iter().collect();
    if manifest.display.ordering == Ordering::Alpha {
        items.sort_by_key(|item| parser::extract_title(&root.join(&item.path)).to_lowercase());
    }

    let mut usage_sections: Vec<String> = Vec::new();
    for item in &items {
        let path = root.join(&item.path);
        let title = parser::extract_title(&path);
        let description =
            parser::extract_description(&path).unwrap_or_else(|| "No description".to_string());
        let install = badges::install_badges(&item.path, item.kind);
        let link = format!("../{}", item.path);

        let usage_description = if item.usage.is_some() {
            format!("{description} [see usage](#{})", usage_anchor(&title))
        } else {
            description
        };

        if has_agents {
            let mcp_cell = if item.kind == ItemKind::Agent {
                badges::mcp_server_links(&parser::extract_mcp_servers(&path), registry)
            } else {
                String::new()
            };
            content.push_str(&format!(
                "| [{title}]({link})<br />{install} | {} | {usage_description} | {mcp_cell} |\n",
                item.kind.label()
            ));
        } else {
            content.push_str(&format!(
                "| [{title}]({link})<br />{install} | {} | {usage_description} |\n",
                item.kind.label()
            ));
        }

        if let Some(usage) = item.usage.as_deref() {
            let usage = usage.trim();
            if !usage.is_empty() {
                usage_sections.push(format!("### {title}\n\n{usage}\n\n---\n\n"));
            }
        }
    }

    let show_badge = manifest.display.show_badge.enabled();
    if !usage_sections.is_empty() {
        content.push_str("\n## Collection Usage\n\n");
        for section in &usage_sections {
            content.push_str(section);
        }
    } else if show_badge {
        content.push_str("\n---\n");
    }
    if show_badge {
        content.push_str(&format!(
            "*This collection includes {} curated items for **{}**.*",
            items.len(),
            entry.name
        ));
    }

    content
}

/// Build a standalone category README from its section content, upgrading
/// the leading `##` heading to `#`. Falls back to a placeholder body when
/// the category has no entries.
#[must_use]
pub fn build_category_readme(section: &str, header_template: &str, usage: &str) -> String {
    if !section.trim().is_empty() {
        return section.replacen("## ", "# ", 1);
    }
    let header = header_template.replacen("## ", "# ", 1);
    format!("{header}\n\n{usage}\n\n_No entries found yet._")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::load_collections;
    use std::fs;
    use tempfile::tempdir;

    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    // ── category sections ────────────────────────────────────────────

    #[test]
    fn missing_category_dir_renders_empty() {
        let root = tempdir().unwrap();
        let out = render_category_section(root.path(), ItemKind::Prompt, &McpRegistry::default());
        assert_eq!(out, "");
    }

    #[test]
    fn prompt_section_has_table_and_badges() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "prompts/code-review.prompt.md",
            "---\ntitle: Code Review\ndescription: Review code\n---\nBody\n",
        );
        let out = render_category_section(root.path(), ItemKind::Prompt, &McpRegistry::default());
        assert!(out.starts_with(templates::PROMPTS_SECTION));
        assert!(out.contains("| Title | Description |"));
        assert!(out.contains("| [Code Review](../prompts/code-review.prompt.md)<br />"));
        assert!(out.contains("| Review code |"));
        assert!(out.contains("[![Install in VS Code]("));
    }

    #[test]
    fn category_rows_sorted_by_title_case_insensitive() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "prompts/b.prompt.md",
            "---\ntitle: zebra\n---\nBody\n",
        );
        write_file(
            root.path(),
            "prompts/a.prompt.md",
            "---\ntitle: Apple\n---\nBody\n",
        );
        let out = render_category_section(root.path(), ItemKind::Prompt, &McpRegistry::default());
        let apple = out.find("[Apple]").unwrap();
        let zebra = out.find("[zebra]").unwrap();
        assert!(apple < zebra);
    }

    #[test]
    fn instructions_fallback_description_from_title() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "instructions/rust-guidelines.instructions.md",
            "# Rust Guidelines\n\nBody\n",
        );
        let out =
            render_category_section(root.path(), ItemKind::Instruction, &McpRegistry::default());
        assert!(out.contains("| Guideline specific coding standards and best practices |"));
    }

    #[test]
    fn agent_section_carries_mcp_column() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "agents/deploy.agent.md",
            concat!(
                "---\n",
                "name: deploy-bot\n",
                "description: Deploys things\n",
                "mcp-servers:\n",
                "  github:\n",
                "    type: http\n",
                "    url: https://example.com/mcp\n",
                "---\n",
                "Body\n",
            ),
        );
        let out = render_category_section(root.path(), ItemKind::Agent, &McpRegistry::default());
        assert!(out.contains("| Title | Description | MCP Servers |"));
        assert!(out.contains("github<br />[![Install MCP]("));
    }

    #[test]
    fn spaces_in_filenames_are_uri_encoded() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "prompts/my prompt.prompt.md",
            "---\ntitle: My Prompt\n---\nBody\n",
        );
        let out = render_category_section(root.path(), ItemKind::Prompt, &McpRegistry::default());
        assert!(out.contains("(../prompts/my%20prompt.prompt.md)"));
    }

    // ── collections and featured sections ────────────────────────────

    fn seeded_collections(root: &Path) -> Vec<CollectionEntry> {
        write_file(root, "prompts/x.prompt.md", "---\ntitle: X\n---\nBody\n");
        write_file(
            root,
            "collections/zeta.collection.yml",
            concat!(
                "id: zeta\n",
                "name: Zeta\n",
                "description: Featured one\n",
                "tags: [a-b]\n",
                "items:\n",
                "  - path: prompts/x.prompt.md\n",
                "    kind: prompt\n",
                "display:\n",
                "  featured: true\n",
            ),
        );
        write_file(
            root,
            "collections/alpha.collection.yml",
            concat!(
                "id: alpha\n",
                "name: Alpha\n",
                "description: Regular one\n",
                "items:\n",
                "  - path: prompts/x.prompt.md\n",
                "    kind: prompt\n",
            ),
        );
        load_collections(root).0
    }

    #[test]
    fn collections_section_stars_featured_first() {
        let root = tempdir().unwrap();
        let entries = seeded_collections(root.path());
        let out = render_collections_section(&entries);
        assert!(out.contains("| [⭐ Zeta](../collections/zeta.md) | Featured one | 1 items | a-b |"));
        assert!(out.contains("| [Alpha](../collections/alpha.md) | Regular one | 1 items |  |"));
        assert!(out.find("Zeta").unwrap() < out.find("Alpha").unwrap());
    }

    #[test]
    fn featured_section_only_lists_featured() {
        let root = tempdir().unwrap();
        let entries = seeded_collections(root.path());
        let out = render_featured_section(&entries);
        assert!(out.starts_with(templates::FEATURED_COLLECTIONS_SECTION));
        assert!(out.contains("| [Zeta](collections/zeta.md) | Featured one | 1 items | a-b |"));
        assert!(!out.contains("Alpha"));
    }

    #[test]
    fn featured_section_empty_without_featured() {
        let root = tempdir().unwrap();
        write_file(root.path(), "prompts/x.prompt.md", "Body\n");
        write_file(
            root.path(),
            "collections/plain.collection.yml",
            "id: plain\nname: Plain\nitems:\n  - path: prompts/x.prompt.md\n    kind: prompt\n",
        );
        let entries = load_collections(root.path()).0;
        assert_eq!(render_featured_section(&entries), "");
    }

    // ── collection readme ────────────────────────────────────────────

    fn entry_for(root: &Path, id: &str) -> CollectionEntry {
        load_collections(root)
            .0
            .into_iter()
            .find(|e| e.id == id)
            .unwrap()
    }

    #[test]
    fn collection_readme_basic_shape() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "prompts/x.prompt.md",
            "---\ntitle: X Prompt\ndescription: Does X\n---\nBody\n",
        );
        write_file(
            root.path(),
            "collections/test-one.collection.yml",
            concat!(
                "id: test-one\n",
                "name: Test One\n",
                "description: d\n",
                "tags: [a-b]\n",
                "items:\n",
                "  - path: prompts/x.prompt.md\n",
                "    kind: prompt\n",
            ),
        );
        let entry = entry_for(root.path(), "test-one");
        let readme = render_collection_readme(root.path(), &entry, &McpRegistry::default());
        assert!(readme.starts_with("# Test One\n\nd\n\n**Tags:** a-b\n\n"));
        assert!(readme.contains("## Items in this Collection"));
        assert!(readme.contains("| Title | Type | Description |"));
        assert!(readme.contains("| [X Prompt](../prompts/x.prompt.md)<br />"));
        assert!(readme.contains("| Prompt | Does X |"));
        assert!(!readme.contains("MCP Servers"));
    }

    #[test]
    fn collection_readme_usage_sections_and_anchor() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "prompts/x.prompt.md",
            "---\ntitle: X Prompt\ndescription: Does X\n---\nBody\n",
        );
        write_file(
            root.path(),
            "collections/with-usage.collection.yml",
            concat!(
                "id: with-usage\n",
                "name: With Usage\n",
                "description: d\n",
                "items:\n",
                "  - path: prompts/x.prompt.md\n",
                "    kind: prompt\n",
                "    usage: |\n",
                "      Run it after lunch.\n",
            ),
        );
        let entry = entry_for(root.path(), "with-usage");
        let readme = render_collection_readme(root.path(), &entry, &McpRegistry::default());
        assert!(readme.contains("Does X [see usage](#x-prompt)"));
        assert!(readme.contains("## Collection Usage"));
        assert!(readme.contains("### X Prompt\n\nRun it after lunch.\n\n---\n"));
    }

    #[test]
    fn collection_readme_show_badge_note() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "prompts/x.prompt.md",
            "---\ntitle: X\ndescription: d\n---\nBody\n",
        );
        write_file(
            root.path(),
            "collections/badged.collection.yml",
            concat!(
                "id: badged\n",
                "name: Badged\n",
                "description: d\n",
                "items:\n",
                "  - path: prompts/x.prompt.md\n",
                "    kind: prompt\n",
                "display:\n",
                "  show_badge: true\n",
            ),
        );
        let entry = entry_for(root.path(), "badged");
        let readme = render_collection_readme(root.path(), &entry, &McpRegistry::default());
        assert!(readme.ends_with(
            "\n---\n*This collection includes 1 curated items for **Badged**.*"
        ));
    }

    #[test]
    fn collection_readme_agents_add_mcp_column() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "agents/bot.agent.md",
            concat!(
                "---\n",
                "name: bot\n",
                "description: A bot\n",
                "mcp-servers:\n",
                "  fs:\n",
                "    type: local\n",
                "    command: npx\n",
                "---\n",
                "Body\n",
            ),
        );
        write_file(
            root.path(),
            "prompts/x.prompt.md",
            "---\ntitle: X\ndescription: d\n---\nBody\n",
        );
        write_file(
            root.path(),
            "collections/agentic.collection.yml",
            concat!(
                "id: agentic\n",
                "name: Agentic\n",
                "description: d\n",
                "items:\n",
                "  - path: agents/bot.agent.md\n",
                "    kind: agent\n",
                "  - path: prompts/x.prompt.md\n",
                "    kind: prompt\n",
            ),
        );
        let entry = entry_for(root.path(), "agentic");
        let readme = render_collection_readme(root.path(), &entry, &McpRegistry::default());
        assert!(readme.contains("| Title | Type | Description | MCP Servers |"));
        assert!(readme.contains("fs<br />[![Install MCP]("));
        // Non-agent rows in a mixed table get an empty MCP cell.
        assert!(readme.contains("| Prompt | d |  |"));
    }

    #[test]
    fn collection_readme_alpha_ordering() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "prompts/z.prompt.md",
            "---\ntitle: Alpha Titled\n---\nBody\n",
        );
        write_file(
            root.path(),
            "prompts/a.prompt.md",
            "---\ntitle: Zulu Titled\n---\nBody\n",
        );
        write_file(
            root.path(),
            "collections/sorted.collection.yml",
            concat!(
                "id: sorted\n",
                "name: Sorted\n",
                "description: d\n",
                "items:\n",
                "  - path: prompts/a.prompt.md\n",
                "    kind: prompt\n",
                "  - path: prompts/z.prompt.md\n",
                "    kind: prompt\n",
                "display:\n",
                "  ordering: alpha\n",
            ),
        );
        let entry = entry_for(root.path(), "sorted");
        let readme = render_collection_readme(root.path(), &entry, &McpRegistry::default());
        assert!(readme.find("Alpha Titled").unwrap() < readme.find("Zulu Titled").unwrap());
    }

    #[test]
    fn manual_ordering_preserves_manifest_order() {
        let root = tempdir().unwrap();
        write_file(
            root.path(),
            "prompts/z.prompt.md",
            "---\ntitle: Alpha Titled\n---\nBody\n",
        );
        write_file(
            root.path(),
            "prompts/a.prompt.md",
            "---\ntitle: Zulu Titled\n---\nBody\n",
        );
        write_file(
            root.path(),
            "collections/manual.collection.yml",
            concat!(
                "id: manual\n",
                "name: Manual\n",
                "description: d\n",
                "items:\n",
                "  - path: prompts/a.prompt.md\n",
                "    kind: prompt\n",
                "  - path: prompts/z.prompt.md\n",
                "    kind: prompt\n",
            ),
        );
        let entry = entry_for(root.path(), "manual");
        let readme = render_collection_readme(root.path(), &entry, &McpRegistry::default());
        assert!(readme.find("Zulu Titled").unwrap() < readme.find("Alpha Titled").unwrap());
    }

    // ── category readme assembly ─────────────────────────────────────

    #[test]
    fn category_readme_upgrades_heading() {
        let section = format!("{}\nusage\n\n| table |\n", templates::PROMPTS_SECTION);
        let readme =
            build_category_readme(&section, templates::PROMPTS_SECTION, templates::PROMPTS_USAGE);
        assert!(readme.starts_with("# 🎯 Reusable Prompts"));
    }

    #[test]
    fn category_readme_fallback_when_empty() {
        let readme =
            build_category_readme("", templates::PROMPTS_SECTION, templates::PROMPTS_USAGE);
        assert!(readme.starts_with("# 🎯 Reusable Prompts"));
        assert!(readme.ends_with("_No entries found yet._"));
    }
}
