//! auglint CLI — default-argument convention checker for augmentation
//! transforms.
//!
//! `auglint check` scans a Python library tree and reports every `apply*`
//! method parameter of a transform class that declares a default value.
//! See `auglint --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod output;

use cli_args::{Cli, Commands};
use output::{HumanFormatter, JsonFormatter, OutputFormatter};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn OutputFormatter> = if cli.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { path, base, prefix } => {
            commands::check::run(&*formatter, cli.verbose, &path, base, prefix)
        }
        Commands::Init { path, force } => commands::init::run(cli.verbose, force, &path),
    };

    std::process::exit(exit_code);
}
