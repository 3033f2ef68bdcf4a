//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotcal")]
#[command(about = "Terminal journal with a month calendar", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who is using the journal; must match the configured owner
    #[arg(long, global = true, env = "JOTCAL_USER")]
    pub user: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Owner of the journal (default: login name)
        #[arg(short, long)]
        owner: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show a month calendar marking days with entries
    Calendar {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Only entries created in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry
    Show {
        /// Entry id
        id: u64,
    },

    /// Write a new entry
    New {
        /// Entry title
        #[arg(short, long)]
        title: Option<String>,

        /// Entry text
        #[arg(short, long, default_value = "")]
        content: String,

        /// Day the entry is about (YYYY-MM-DD); pre-fills the title
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Change the title or text of an entry
    Edit {
        /// Entry id
        id: u64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New text
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: u64,
    },
}
