//! clasp - a mini hook / rebuild configuration
//!
//! Regenerates a single target file from the fragments in a hook directory,
//! only when the fragments changed.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod hash;
mod logging;
mod reconcile;

use cli::Cli;
use error::ClaspError;

/// Print a core error; `--verbose` gets the full diagnostic report
fn report(err: ClaspError, verbose: bool) {
    if verbose {
        eprintln!("{:?}", miette::Report::new(err));
    } else {
        eprintln!("Error: {err}");
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.version {
        commands::version::run(&commands::version::BUILD_INFO);
        return;
    }

    let (check, verbose) = (cli.check, cli.verbose);
    let (config_file, hook_dir) = cli.into_paths().unwrap_or_else(|e| e.exit());

    if let Err(e) = commands::rebuild::run(config_file, hook_dir, check) {
        report(e, verbose);
        std::process::exit(1);
    }
}
