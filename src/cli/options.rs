use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end for the local filesystem backend
#[derive(Parser)]
#[command(name = "localfs")]
#[command(about = "Inspect and manipulate local paths through the localfs interface")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct LocalFsCli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML or JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a directory
    Mkdir {
        /// Path or file:// URI
        path: String,
    },

    /// Recursively delete a directory or file
    Rmdir {
        /// Path or file:// URI
        path: String,
    },

    /// Show type and size of a path
    Stat {
        /// Path or file:// URI
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List directory entries
    Ls {
        /// Path or file:// URI
        path: String,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a file to standard output
    Cat {
        /// Path or file:// URI
        path: String,
    },

    /// Write standard input to a file
    Put {
        /// Path or file:// URI
        path: String,
        /// Append instead of truncating
        #[arg(short, long)]
        append: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable columns
    Text,
    /// Pretty-printed JSON
    Json,
}
