use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pocket_catalog::{AgeGroup, Category};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "pocket")]
#[command(about = "Family activity ideas, conversation prompts and a memory journal", long_about = None)]
pub struct Cli {
    /// Show debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize pocket configuration (optional, defaults apply without it)")]
    Init {
        /// Initialize in local directory (./.pocket) instead of global (~/.pocket)
        #[arg(short, long)]
        local: bool,
    },

    #[command(about = "Save a new memory")]
    Add {
        /// What happened (prompted for when omitted)
        text: Option<String>,

        /// Photo to attach (stored as-is)
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Use local store (./.pocket/data)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.pocket/data)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "List memories, newest first")]
    List {
        /// Only memories from this month (format: YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Only liked memories
        #[arg(long)]
        liked: bool,

        /// Maximum number of memories to show (default from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Use local store (./.pocket/data)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.pocket/data)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "Show a single memory")]
    Show {
        id: Uuid,

        /// Write the attached photo to this path
        #[arg(short, long)]
        export_image: Option<PathBuf>,

        /// Use local store (./.pocket/data)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.pocket/data)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "Like or unlike a memory")]
    Like {
        id: Uuid,

        /// Use local store (./.pocket/data)
        #[arg(short, long)]
        local: bool,

        /// Use global store (~/.pocket/data)
        #[arg(short, long)]
        global: bool,
    },

    #[command(about = "Suggest a random activity")]
    Activity {
        /// Age group: all, toddler, preschool, kids, teens
        #[arg(short, long, default_value = "all")]
        age: AgeGroup,

        /// Category: all, indoors, outdoors, creative, active, quiet
        #[arg(short, long, default_value = "all")]
        category: Category,
    },

    #[command(about = "Show the conversation prompt of the day")]
    Question {
        /// Pick a random prompt instead of today's
        #[arg(short, long)]
        random: bool,
    },
}
