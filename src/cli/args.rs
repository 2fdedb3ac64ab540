use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// dotsweep CLI definition
#[derive(Parser, Debug)]
#[command(
    name = "dotsweep",
    version,
    about = "Remove macOS metadata litter from folders and removable drives",
    long_about = "dotsweep removes the hidden files macOS scatters over non-Mac volumes:\n\
                   .DS_Store, ._* resource forks, .Spotlight-V100, .Trashes and friends.\n\
                   Only exactly-named markers are ever touched.",
    after_help = "EXAMPLES:\n  \
        dotsweep quick                         Sweep configured folder + eligible volumes\n  \
        dotsweep quick --dry-run               Preview the batch without deleting\n  \
        dotsweep clean /media/usb --yes        Sweep one directory, no questions\n  \
        dotsweep check ~/shared                Probe a directory for Mac markers\n  \
        dotsweep volumes --format json         Show volume classification as JSON\n  \
        dotsweep config set ~/shared           Persist the folder quick sweeps\n  \
        dotsweep config show                   Show the configured folder"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Config file to use instead of the one beside the executable
    #[arg(long, global = true, value_name = "FILE", env = "DOTSWEEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output — one line per delete attempt
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode — minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep the configured folder plus every removable or marked volume
    Quick {
        /// Show what would be removed without deleting
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Sweep one directory (nothing is persisted)
    Clean {
        /// Directory to sweep
        path: PathBuf,

        /// Show what would be removed without deleting
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Probe a directory's top level for Mac markers
    Check {
        /// Directory to probe
        path: PathBuf,
    },

    /// List mounted volumes and how they classify
    Volumes,

    /// Manage the configured quick-sweep folder
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the configured folder and where it is stored
    Show,

    /// Set and persist the quick-sweep folder
    Set {
        /// Directory to persist
        path: PathBuf,
    },

    /// Forget the configured folder
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
