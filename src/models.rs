use std::collections::BTreeMap;

use serde::Deserialize;

/// Maximum number of items a collection manifest may reference.
pub const MAX_COLLECTION_ITEMS: usize = 50;

/// Manifest filename suffix for collection files.
pub const COLLECTION_SUFFIX: &str = ".collection.yml";

/// The closed set of artifact kinds a collection item may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Prompt,
    Instruction,
    ChatMode,
    Agent,
}

impl ItemKind {
    /// All kinds, in the order they are documented.
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Prompt,
        ItemKind::Instruction,
        ItemKind::ChatMode,
        ItemKind::Agent,
    ];

    /// The manifest spelling of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Prompt => "prompt",
            ItemKind::Instruction => "instruction",
            ItemKind::ChatMode => "chat-mode",
            ItemKind::Agent => "agent",
        }
    }

    /// Parse the manifest spelling of a kind.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// Required filename suffix for artifact files of this kind.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            ItemKind::Prompt => ".prompt.md",
            ItemKind::Instruction => ".instructions.md",
            ItemKind::ChatMode => ".chatmode.md",
            ItemKind::Agent => ".agent.md",
        }
    }

    /// Repository folder that holds artifacts of this kind.
    #[must_use]
    pub fn folder(self) -> &'static str {
        match self {
            ItemKind::Prompt => "prompts",
            ItemKind::Instruction => "instructions",
            ItemKind::ChatMode => "chatmodes",
            ItemKind::Agent => "agents",
        }
    }

    /// Key used in the fixed install-badge URL templates.
    #[must_use]
    pub fn badge_kind(self) -> &'static str {
        match self {
            ItemKind::Prompt => "prompt",
            ItemKind::Instruction => "instructions",
            ItemKind::ChatMode => "mode",
            ItemKind::Agent => "agent",
        }
    }

    /// Human-readable label used in table Type columns.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Prompt => "Prompt",
            ItemKind::Instruction => "Instruction",
            ItemKind::ChatMode => "Chat Mode",
            ItemKind::Agent => "Agent",
        }
    }
}

/// A single artifact reference inside a collection manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionItem {
    /// Repo-relative path to the artifact file.
    pub path: String,
    /// Artifact kind; must match the path suffix.
    pub kind: ItemKind,
    /// Optional free-text usage notes rendered in the collection README.
    #[serde(default)]
    pub usage: Option<String>,
}

/// Item ordering policy for a collection README.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    /// Items appear in the order they are listed in the manifest.
    #[default]
    Manual,
    /// Items are sorted alphabetically by derived title.
    Alpha,
}

/// Boolean display flag that also accepts the YAML strings `"true"`/`"false"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShowBadge {
    Flag(bool),
    Text(String),
}

impl ShowBadge {
    /// Resolve the flag to a plain boolean.
    #[must_use]
    pub fn enabled(&self) -> bool {
        match self {
            ShowBadge::Flag(b) => *b,
            ShowBadge::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }
}

impl Default for ShowBadge {
    fn default() -> Self {
        ShowBadge::Flag(false)
    }
}

/// The `display` block of a collection manifest.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub ordering: Ordering,
    #[serde(default)]
    pub show_badge: ShowBadge,
    #[serde(default)]
    pub featured: bool,
}

/// A parsed collection manifest.
///
/// All fields are lenient: the renderer substitutes defaults for missing
/// values, and the validator reports precise schema errors from the raw
/// YAML mapping instead.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CollectionManifest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub items: Vec<CollectionItem>,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl CollectionManifest {
    /// Returns `true` if any item references an agent artifact.
    #[must_use]
    pub fn has_agents(&self) -> bool {
        self.items.iter().any(|i| i.kind == ItemKind::Agent)
    }
}

/// An MCP server configuration extracted from an agent file's front matter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct McpServerConfig {
    /// Server display name (the `mcp-servers` mapping key).
    pub name: String,
    /// Transport type; `"http"` selects the url/headers payload,
    /// anything else (including absent) is treated as local/stdio.
    pub server_type: Option<String>,
    pub command: Option<String>,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub url: Option<String>,
    pub headers: BTreeMap<String, String>,
}

impl McpServerConfig {
    /// Returns `true` if this server uses the HTTP transport.
    #[must_use]
    pub fn is_http(&self) -> bool {
        self.server_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("http"))
    }
}
