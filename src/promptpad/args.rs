use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptpad", version)]
#[command(about = "Keep, search and copy your prompts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the prompt store and config.json
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List prompts, newest first
    #[command(alias = "ls")]
    List {
        /// Only show prompts whose title contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print the HTML list fragment instead
        #[arg(long)]
        html: bool,
    },

    /// Show a prompt
    #[command(alias = "v")]
    Show {
        /// Display index (e.g. 1) or id of the prompt
        prompt: String,
    },

    /// Create a new prompt
    #[command(alias = "n")]
    Create {
        /// Title of the prompt
        title: String,

        /// Content of the prompt (inline markup allowed)
        content: String,
    },

    /// Change a prompt's title and/or content
    #[command(alias = "e")]
    Edit {
        /// Display index (e.g. 1) or id of the prompt
        prompt: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a prompt
    #[command(alias = "rm")]
    Remove {
        /// Display index (e.g. 1) or id of the prompt
        prompt: String,
    },

    /// Copy a prompt's content text to the clipboard
    #[command(alias = "cp")]
    Copy {
        /// Display index (e.g. 1) or id of the prompt
        prompt: String,
    },

    /// Show where prompts are stored and how many there are
    Info,
}
