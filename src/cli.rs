//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration loader for a static documentation site
#[derive(Parser)]
#[command(
    name = "site-config",
    version,
    about = "Configuration loader for a static documentation site",
    long_about = "Loads and validates the site declaration (metadata, markdown extensions, \
                  navigation and sidebar) and answers the queries the renderer makes against it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a declaration file (default: the embedded declaration)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory for debug log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate the declaration
    Check,
    /// Print the sidebar groups for a page path as JSON
    Sidebar {
        /// Page path, e.g. /spring/java/juc
        path: String,
    },
    /// Print the navigation tree as JSON
    Nav {
        /// Only print entries active for this page path
        #[arg(long, short = 'a')]
        active: Option<String>,
    },
    /// Print the layout context for a page path as JSON
    Page {
        /// Page path, e.g. /db/mysql/indexes
        path: String,
    },
    /// List markdown extensions in registration order
    Extensions,
    /// Write the embedded declaration to a file
    Init {
        /// Path where to create the declaration
        #[arg(long, short = 'p', default_value = "site.toml")]
        path: PathBuf,
    },
    /// Display version information
    Version,
}
