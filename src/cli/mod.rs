use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

mod generate;
mod init;
mod validate;

#[derive(Parser)]
#[command(
    name = "aicat",
    version,
    about = "Catalogue validator and README generator for Copilot customizations"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON array of diagnostic objects
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate collection manifests against the catalogue schema
    Validate {
        /// Catalogue root directory [default: .]
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Generate category READMEs, collection READMEs, and the featured block
    #[command(alias = "gen")]
    Generate {
        /// Catalogue root directory [default: .]
        #[arg(default_value = ".")]
        root: PathBuf,
        /// GitHub MCP registry snapshot [default: <root>/github-mcp-registry.json]
        #[arg(long)]
        registry: Option<PathBuf>,
    },
    /// Create a new collection manifest from a template
    #[command(alias = "new")]
    Init {
        /// Collection id (lowercase letters, numbers, and hyphens)
        id: String,
        /// Catalogue root directory [default: .]
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Collection display name [default: derived from the id]
        #[arg(long)]
        name: Option<String>,
        /// Collection description
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated tags [default: first words of the id]
        #[arg(long)]
        tags: Option<String>,
    },
}

pub fn run(cli: Cli) {
    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Validate { root, format }) => validate::run(root, format),
        Some(Commands::Generate { root, registry }) => generate::run(root, registry),
        Some(Commands::Init {
            id,
            root,
            name,
            description,
            tags,
        }) => init::run(id, root, name, description, tags),
        None => {
            let _ = Cli::command().print_help();
        }
    }
}

fn print_about() {
    println!(
        "aicat: AI customization catalogue tool\n\
         ├─ version:    {}\n\
         ├─ source:     {}\n\
         └─ licence:    {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_LICENSE"),
    );
}
