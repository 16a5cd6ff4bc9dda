use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "auglint",
    version,
    about = "Default-argument convention checker for augmentation transforms"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print a scan summary to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Scan a library tree for defaulted apply-method parameters
    Check {
        /// Root of the Python source tree to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Marker base class naming the transform family
        #[arg(long)]
        base: Option<String>,

        /// Method-name prefix to inspect
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Write a starter .auglint.json into the scan root
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
