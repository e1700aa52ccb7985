// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the cards API (overrides the config file)
    #[arg(short = 'u', long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (upload, list, delete or config)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Upload a business card image with its contact details
    Upload {
        /// Card image file
        #[arg(value_name = "IMAGE")]
        image: Option<PathBuf>,

        /// Contact name (required)
        #[arg(short, long)]
        name: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Comma-separated tags, e.g. "vip, conference"
        #[arg(short, long)]
        tags: Option<String>,

        /// Print the created card as JSON
        #[arg(long)]
        json: bool,
    },

    /// List uploaded cards, optionally filtered by name, company, title or tag
    List {
        /// Case-insensitive search term
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output cards as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Open the list as a page in the browser
        #[arg(long)]
        html: bool,
    },

    /// Delete a card by ID
    Delete {
        /// Card ID to delete
        #[arg(value_name = "CARD_ID")]
        id: String,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}
