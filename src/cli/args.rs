//! CLI argument definitions using clap derive

use crate::report::Manager;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pkgsnap - Installed package snapshots
///
/// Inventories packages installed through winget, the Microsoft Store,
/// Scoop, and Chocolatey into per-manager CSV files for reinstall planning.
#[derive(Parser, Debug)]
#[command(name = "pkgsnap")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PKGSNAP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export installed packages to per-manager CSV files
    Export(ExportArgs),

    /// Report which package managers are usable on this host
    Status,

    /// Inspect or clear the display-name cache
    Cache(CacheArgs),

    /// Show configuration
    Config(ConfigArgs),
}

const REINSTALL_HELP: &str = "\
Reinstall command samples:

  Microsoft Store / Winget:
    winget install --id <PackageId>

  Scoop:
    scoop install <Name>
    scoop install <Source>/<Name>   # when the bucket differs

  Chocolatey:
    choco install <PackageId>
    choco install <PackageId> --version <Version>";

/// Arguments for the export command
#[derive(Parser, Debug)]
#[command(after_help = REINSTALL_HELP)]
pub struct ExportArgs {
    /// Output directory for CSV files and the name cache
    /// (default: from config, ./output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Restrict the export to a subset of managers (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub manager: Vec<ManagerArg>,
}

/// Manager names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManagerArg {
    Msstore,
    Winget,
    Scoop,
    Choco,
}

impl From<ManagerArg> for Manager {
    fn from(arg: ManagerArg) -> Self {
        match arg {
            ManagerArg::Msstore => Manager::Msstore,
            ManagerArg::Winget => Manager::Winget,
            ManagerArg::Scoop => Manager::Scoop,
            ManagerArg::Choco => Manager::Choco,
        }
    }
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Subcommand for cache
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// List cached display names
    Show {
        /// Output directory holding the cache (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Delete the cache file, forcing re-resolution on the next export
    Clear {
        /// Output directory holding the cache (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the cache file path
    Path {
        /// Output directory holding the cache (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format for cache show
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one identifier per line)
    Plain,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}
