//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Menagerie - animal fact pages from a dataset or a remote API.
#[derive(Debug, Parser)]
#[command(name = "menagerie")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the animals page (default if no command specified)
    Generate(GenerateArgs),

    /// Fetch animal records from the remote API and render them
    Fetch(FetchArgs),

    /// List the distinct skin types in a dataset
    SkinTypes(SkinTypesArgs),

    /// Write a starter template and sample dataset
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GenerateArgs {
    /// Animal dataset (JSON array of records)
    #[arg(long, default_value = "animals_data.json")]
    pub data: PathBuf,

    /// HTML template containing the __REPLACE_ANIMALS_INFO__ token
    #[arg(long, default_value = "animals_template.html")]
    pub template: PathBuf,

    /// Output page path (overwritten if present)
    #[arg(short, long, default_value = "animals.html")]
    pub out: PathBuf,

    /// Skin type to filter by (blank for no filter); skips the prompt
    #[arg(short, long)]
    pub skin_type: Option<String>,

    /// Never prompt; render unfiltered unless a skin type is given
    #[arg(long)]
    pub non_interactive: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            data: PathBuf::from("animals_data.json"),
            template: PathBuf::from("animals_template.html"),
            out: PathBuf::from("animals.html"),
            skin_type: None,
            non_interactive: false,
        }
    }
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FetchArgs {
    /// Animal name to look up
    pub name: String,

    /// API key for api-ninjas.com
    #[arg(long, env = "MENAGERIE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the animals API endpoint
    #[arg(long, env = "MENAGERIE_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Print fetched records as JSON instead of rendering a page
    #[arg(long)]
    pub json: bool,

    /// HTML template containing the __REPLACE_ANIMALS_INFO__ token
    #[arg(long, default_value = "animals_template.html")]
    pub template: PathBuf,

    /// Output page path (overwritten if present)
    #[arg(short, long, default_value = "animals.html")]
    pub out: PathBuf,
}

/// Arguments for the `skin-types` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SkinTypesArgs {
    /// Animal dataset (JSON array of records)
    #[arg(long, default_value = "animals_data.json")]
    pub data: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
