//! Install badge and MCP server link construction.
//!
//! The badge URL shapes are fixed by the hosted install redirectors, so
//! the templates here are load-bearing: changing them breaks published
//! READMEs.

use std::collections::BTreeMap;
use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::models::{ItemKind, McpServerConfig};

/// Raw-content base used inside install deep links.
pub const REPO_BASE_URL: &str = "https://raw.githubusercontent.com/github/awesome-copilot/main";

const VSCODE_INSTALL_IMAGE: &str =
    "https://img.shields.io/badge/VS_Code-Install-0098FF?style=flat-square&logo=visualstudiocode&logoColor=white";
const VSCODE_INSIDERS_INSTALL_IMAGE: &str =
    "https://img.shields.io/badge/VS_Code_Insiders-Install-24bfa5?style=flat-square&logo=visualstudiocode&logoColor=white";

const MCP_VSCODE_IMAGE: &str =
    "https://img.shields.io/badge/Install-VS_Code-0098FF?style=flat-square";
const MCP_INSIDERS_IMAGE: &str =
    "https://img.shields.io/badge/Install-VS_Code_Insiders-24bfa5?style=flat-square";
const MCP_VISUALSTUDIO_IMAGE: &str =
    "https://img.shields.io/badge/Install-Visual_Studio-C16FDE?style=flat-square";

/// Characters kept verbatim by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters kept verbatim by `encodeURI` (the component set plus URI
/// reserved characters).
const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// Percent-encode with `encodeURIComponent` semantics.
#[must_use]
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Percent-encode with `encodeURI` semantics (reserved characters kept).
#[must_use]
pub fn encode_uri(s: &str) -> String {
    utf8_percent_encode(s, URI).to_string()
}

fn aka_install_url(badge_kind: &str) -> &'static str {
    match badge_kind {
        "prompt" => "https://aka.ms/awesome-copilot/install/prompt",
        "mode" => "https://aka.ms/awesome-copilot/install/chatmode",
        "agent" => "https://aka.ms/awesome-copilot/install/agent",
        _ => "https://aka.ms/awesome-copilot/install/instructions",
    }
}

/// Build the VS Code / Insiders install badge pair for an artifact link.
///
/// `link` is the repo-relative URI-encoded path (e.g. `prompts/x.prompt.md`).
#[must_use]
pub fn install_badges(link: &str, kind: ItemKind) -> String {
    let badge_kind = kind.badge_kind();
    let aka = aka_install_url(badge_kind);
    let vscode_url = format!(
        "{aka}?url={}",
        encode_component(&format!(
            "vscode:chat-{badge_kind}/install?url={REPO_BASE_URL}/{link}"
        ))
    );
    let insiders_url = format!(
        "{aka}?url={}",
        encode_component(&format!(
            "vscode-insiders:chat-{badge_kind}/install?url={REPO_BASE_URL}/{link}"
        ))
    );
    format!(
        "[![Install in VS Code]({VSCODE_INSTALL_IMAGE})]({vscode_url})<br />[![Install in VS Code Insiders]({VSCODE_INSIDERS_INSTALL_IMAGE})]({insiders_url})"
    )
}

/// Snapshot of the GitHub MCP registry used to link server names.
///
/// Loaded from a JSON capture of the registry route; absent or malformed
/// snapshots degrade to an empty registry and server labels render as
/// plain text.
#[derive(Debug, Default)]
pub struct McpRegistry {
    entries: Vec<RegistryServer>,
}

#[derive(Debug)]
struct RegistryServer {
    name: String,
    display_name_lower: String,
}

impl McpRegistry {
    /// Load a registry snapshot from `path`, degrading to empty on any
    /// read or parse failure.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(raw) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        let Ok(json) = serde_json::from_str::<serde_json::Value>(&raw) else {
            return Self::default();
        };
        let entries = json
            .pointer("/payload/mcpRegistryRoute/serversData/servers")
            .and_then(serde_json::Value::as_array)
            .map(|servers| {
                servers
                    .iter()
                    .filter_map(|s| {
                        Some(RegistryServer {
                            name: s.get("name")?.as_str()?.to_string(),
                            display_name_lower: s
                                .get("display_name")?
                                .as_str()?
                                .to_lowercase(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { entries }
    }

    /// Resolve a server's registry name by case-insensitive display name.
    #[must_use]
    pub fn lookup(&self, display_name: &str) -> Option<&str> {
        let wanted = display_name.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.display_name_lower == wanted)
            .map(|e| e.name.as_str())
    }

    /// Number of servers in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no snapshot could be loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Install payloads are config-only. Field order is part of the wire
// format the redirectors parse, so these structs keep declaration order.

#[derive(Serialize)]
struct HttpPayload<'a> {
    url: &'a str,
    headers: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
struct LocalPayload<'a> {
    command: &'a str,
    args: Vec<String>,
    env: &'a BTreeMap<String, String>,
}

fn config_payload_json(server: &McpServerConfig) -> String {
    if server.is_http() {
        serde_json::to_string(&HttpPayload {
            url: server.url.as_deref().unwrap_or(""),
            headers: &server.headers,
        })
    } else {
        serde_json::to_string(&LocalPayload {
            command: server.command.as_deref().unwrap_or(""),
            args: server.args.iter().map(|a| encode_component(a)).collect(),
            env: &server.env,
        })
    }
    .unwrap_or_default()
}

/// Render the MCP Servers cell for an agent: one labelled entry per
/// server with VS Code, Insiders, and Visual Studio install badges.
///
/// Server names found in the registry snapshot link to their GitHub MCP
/// page; unknown names render as plain text.
#[must_use]
pub fn mcp_server_links(servers: &[McpServerConfig], registry: &McpRegistry) -> String {
    servers
        .iter()
        .map(|server| {
            let name = server.name.trim();
            let config = encode_component(&config_payload_json(server));
            let badges = [
                format!(
                    "[![Install MCP]({MCP_VSCODE_IMAGE})](https://aka.ms/awesome-copilot/install/mcp-vscode?name={name}&config={config})"
                ),
                format!(
                    "[![Install MCP]({MCP_INSIDERS_IMAGE})](https://aka.ms/awesome-copilot/install/mcp-vscodeinsiders?name={name}&config={config})"
                ),
                format!(
                    "[![Install MCP]({MCP_VISUALSTUDIO_IMAGE})](https://aka.ms/awesome-copilot/install/mcp-visualstudio/mcp-install?{config})"
                ),
            ]
            .join("<br />");
            let label = match registry.lookup(name) {
                Some(registry_name) => {
                    format!("[{name}](https://github.com/mcp/{registry_name})")
                }
                None => name.to_string(),
            };
            format!("{label}<br />{badges}")
        })
        .collect::<Vec<_>>()
        .join("<br />")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn encode_component_matches_javascript() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a/b?c=d"), "a%2Fb%3Fc%3Dd");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(
            encode_component("vscode:chat-prompt/install"),
            "vscode%3Achat-prompt%2Finstall"
        );
    }

    #[test]
    fn encode_uri_keeps_reserved_characters() {
        assert_eq!(encode_uri("prompts/my file.prompt.md"), "prompts/my%20file.prompt.md");
        assert_eq!(encode_uri("a?b=c&d#e"), "a?b=c&d#e");
    }

    #[test]
    fn install_badges_prompt_shape() {
        let badges = install_badges("prompts/x.prompt.md", ItemKind::Prompt);
        assert!(badges.starts_with("[![Install in VS Code]("));
        assert!(badges.contains("<br />[![Install in VS Code Insiders]("));
        assert!(badges.contains(
            "https://aka.ms/awesome-copilot/install/prompt?url=vscode%3Achat-prompt%2Finstall%3Furl%3D"
        ));
        assert!(badges.contains("vscode-insiders%3Achat-prompt%2Finstall"));
        assert!(badges.contains(&encode_component(REPO_BASE_URL)));
    }

    #[test]
    fn install_badges_chatmode_uses_mode_kind() {
        let badges = install_badges("chatmodes/x.chatmode.md", ItemKind::ChatMode);
        assert!(badges.contains("https://aka.ms/awesome-copilot/install/chatmode?url="));
        assert!(badges.contains("chat-mode%2Finstall"));
    }

    #[test]
    fn local_payload_key_order_and_arg_encoding() {
        let server = McpServerConfig {
            name: "fs".into(),
            server_type: Some("local".into()),
            command: Some("npx".into()),
            args: vec!["-y".into(), "a b".into()],
            ..Default::default()
        };
        assert_eq!(
            config_payload_json(&server),
            r#"{"command":"npx","args":["-y","a%20b"],"env":{}}"#
        );
    }

    #[test]
    fn http_payload_key_order() {
        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), "Bearer x".to_string());
        let server = McpServerConfig {
            name: "github".into(),
            server_type: Some("http".into()),
            url: Some("https://example.com/mcp".into()),
            headers,
            ..Default::default()
        };
        assert_eq!(
            config_payload_json(&server),
            r#"{"url":"https://example.com/mcp","headers":{"Authorization":"Bearer x"}}"#
        );
    }

    #[test]
    fn registry_load_missing_file_is_empty() {
        let registry = McpRegistry::load(Path::new("/nonexistent/registry.json"));
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_load_malformed_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(McpRegistry::load(&path).is_empty());
    }

    fn snapshot_with_github() -> String {
        serde_json::json!({
            "payload": {
                "mcpRegistryRoute": {
                    "serversData": {
                        "servers": [
                            {"name": "github-mcp-server", "display_name": "GitHub"}
                        ]
                    }
                }
            }
        })
        .to_string()
    }

    #[test]
    fn registry_lookup_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(&path, snapshot_with_github()).unwrap();
        let registry = McpRegistry::load(&path);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("github"), Some("github-mcp-server"));
        assert_eq!(registry.lookup("GITHUB"), Some("github-mcp-server"));
        assert_eq!(registry.lookup("unknown"), None);
    }

    #[test]
    fn mcp_server_links_full_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(&path, snapshot_with_github()).unwrap();
        let registry = McpRegistry::load(&path);

        let server = McpServerConfig {
            name: "GitHub".into(),
            server_type: Some("http".into()),
            url: Some("https://example.com/mcp".into()),
            ..Default::default()
        };
        let cell = mcp_server_links(&[server], &registry);
        assert!(cell.starts_with("[GitHub](https://github.com/mcp/github-mcp-server)<br />"));
        assert!(cell.contains("mcp-vscode?name=GitHub&config="));
        assert!(cell.contains("mcp-vscodeinsiders?name=GitHub&config="));
        assert!(cell.contains("mcp-visualstudio/mcp-install?%7B%22url%22"));
    }

    #[test]
    fn mcp_server_links_empty_for_no_servers() {
        assert_eq!(mcp_server_links(&[], &McpRegistry::default()), "");
    }
}
