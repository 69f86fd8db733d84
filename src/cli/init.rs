use std::path::PathBuf;

use aicat::parser::title_case_hyphenated;

/// Commented item examples and default display block for new manifests.
const TEMPLATE_TAIL: &str = concat!(
    "items:\n",
    "  # Add your collection items here\n",
    "  # Example:\n",
    "  # - path: prompts/example.prompt.md\n",
    "  #   kind: prompt\n",
    "  # - path: instructions/example.instructions.md\n",
    "  #   kind: instruction\n",
    "  # - path: chatmodes/example.chatmode.md\n",
    "  #   kind: chat-mode\n",
    "  # - path: agents/example.agent.md\n",
    "  #   kind: agent\n",
    "  #   usage: |\n",
    "  #     This agent requires the example MCP server to be installed.\n",
    "  #     Configure any required environment variables (e.g., EXAMPLE_API_KEY).\n",
    "display:\n",
    "  ordering: alpha # or \"manual\" to preserve the order above\n",
    "  show_badge: false # set to true to show collection badge on items\n",
);

pub(crate) fn run(
    id: String,
    root: PathBuf,
    name: Option<String>,
    description: Option<String>,
    tags: Option<String>,
) {
    if id.is_empty()
        || !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        eprintln!("Collection ID must contain only lowercase letters, numbers, and hyphens");
        std::process::exit(1);
    }

    let collections_dir = root.join("collections");
    let file = collections_dir.join(format!("{id}.collection.yml"));
    if file.exists() {
        eprintln!("Collection {id} already exists at {}", file.display());
        eprintln!("Edit that file instead or choose a different ID.");
        std::process::exit(1);
    }

    let name = name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| title_case_hyphenated(&id));
    let description = description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "A collection of related prompts, instructions, and chat modes for {}.",
                name.to_lowercase()
            )
        });
    let tags: Vec<String> = match tags {
        Some(input) if !input.trim().is_empty() => input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        _ => id.split('-').take(3).map(String::from).collect(),
    };

    let template = format!(
        "id: {id}\nname: {name}\ndescription: {description}\ntags: [{}]\n{TEMPLATE_TAIL}",
        tags.join(", ")
    );

    if let Err(e) = std::fs::create_dir_all(&collections_dir)
        .and_then(|()| std::fs::write(&file, &template))
    {
        eprintln!("aicat init: {e}");
        std::process::exit(1);
    }

    println!("Created collection template: {}", file.display());
    println!("\nNext steps:");
    println!("1. Edit the collection manifest to add your items");
    println!("2. Update the name, description, and tags as needed");
    println!("3. Run 'aicat validate' to check the manifest");
    println!("4. Run 'aicat generate' to regenerate documentation");
}
