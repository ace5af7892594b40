//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// clasp - a mini hook / rebuild configuration
///
/// Rebuild CONFIG_FILE from the files in HOOK_DIR, only when they changed.
#[derive(Parser, Debug)]
#[command(
    name = "clasp",
    disable_version_flag = true,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "a mini hook / rebuild configuration",
    long_about = "Rebuilds CONFIG_FILE by concatenating every regular file directly inside \
                  HOOK_DIR in byte-wise name order. The file is only rewritten, atomically, \
                  when the fragments changed.",
    after_help = "EXAMPLES:\n  \
                  Rebuild a git hook from its fragments:\n    clasp .git/hooks/pre-commit hooks/pre-commit.d\n\n\
                  Fail if the hook is out of date (CI):\n    clasp --check .git/hooks/pre-commit hooks/pre-commit.d"
)]
pub struct Cli {
    /// Generated file to (re)build
    #[arg(value_name = "CONFIG_FILE", required_unless_present = "version")]
    pub config_file: Option<PathBuf>,

    /// Directory whose files are concatenated into CONFIG_FILE
    #[arg(value_name = "HOOK_DIR", required_unless_present = "version")]
    pub hook_dir: Option<PathBuf>,

    /// Anything past HOOK_DIR; only tolerated alongside --version
    #[arg(hide = true)]
    pub extra: Vec<PathBuf>,

    /// Print version and exit
    #[arg(long)]
    pub version: bool,

    /// Only report whether CONFIG_FILE is out of date; never write it
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// CONFIG_FILE and HOOK_DIR, once `--version` has been ruled out
    ///
    /// # Errors
    ///
    /// Returns a usage error unless exactly two positionals were given.
    pub fn into_paths(self) -> Result<(PathBuf, PathBuf), clap::Error> {
        match (self.config_file, self.hook_dir) {
            (Some(config_file), Some(hook_dir)) if self.extra.is_empty() => {
                Ok((config_file, hook_dir))
            }
            _ => Err(Cli::command().error(
                ErrorKind::WrongNumberOfValues,
                "clasp requires exactly 2 arguments: CONFIG_FILE HOOK_DIR",
            )),
        }
    }
}
