//! Rebuild command implementation
//!
//! Builds the reconciliation unit from the two positional arguments, runs
//! the core and prints a one-line status on stdout.

use console::Style;
use std::path::PathBuf;

use crate::error::{self, Result};
use crate::reconcile::{self, Freshness, Outcome, ReconciliationUnit};

/// Run the rebuild, or only the staleness check when `check` is set
pub fn run(config_file: PathBuf, hook_dir: PathBuf, check: bool) -> Result<()> {
    let unit = ReconciliationUnit::new(config_file, hook_dir);

    if check {
        return run_check(&unit);
    }

    let outcome = reconcile::rebuild(&unit)?;
    tracing::debug!(fingerprint = %outcome.fingerprint(), "rebuild finished");
    println!("{}", status_line(&unit, &outcome));
    Ok(())
}

fn run_check(unit: &ReconciliationUnit) -> Result<()> {
    match reconcile::status(unit)? {
        Freshness::Current => {
            println!(
                "{}: {}",
                unit.target().display(),
                Style::new().green().apply_to("up to date")
            );
            Ok(())
        }
        Freshness::Stale => Err(error::target::stale(unit.target().display().to_string())),
    }
}

fn status_line(unit: &ReconciliationUnit, outcome: &Outcome) -> String {
    let target = unit.target().display();
    match outcome {
        Outcome::UpToDate { .. } => {
            format!("{target}: {}", Style::new().green().apply_to("up to date"))
        }
        Outcome::Rebuilt { fragments, .. } => {
            let noun = if *fragments == 1 { "fragment" } else { "fragments" };
            format!(
                "{target}: {}",
                Style::new()
                    .cyan()
                    .apply_to(format!("rebuilt from {fragments} {noun}"))
            )
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ClaspError;
    use crate::hash::Fingerprint;
    use tempfile::TempDir;

    #[test]
    fn test_status_line_up_to_date() {
        console::set_colors_enabled(false);
        let unit = ReconciliationUnit::new("hooks.conf", "hooks.d");
        let outcome = Outcome::UpToDate {
            fingerprint: Fingerprint::of(b""),
        };
        assert_eq!(status_line(&unit, &outcome), "hooks.conf: up to date");
    }

    #[test]
    fn test_status_line_rebuilt() {
        console::set_colors_enabled(false);
        let unit = ReconciliationUnit::new("hooks.conf", "hooks.d");
        let one = Outcome::Rebuilt {
            fingerprint: Fingerprint::of(b"a\n"),
            fragments: 1,
        };
        let many = Outcome::Rebuilt {
            fingerprint: Fingerprint::of(b"a\nb\n"),
            fragments: 2,
        };
        assert_eq!(
            status_line(&unit, &one),
            "hooks.conf: rebuilt from 1 fragment"
        );
        assert_eq!(
            status_line(&unit, &many),
            "hooks.conf: rebuilt from 2 fragments"
        );
    }

    #[test]
    fn test_check_reports_stale_without_writing() {
        let temp = TempDir::new().unwrap();
        let hooks = temp.path().join("hooks.d");
        std::fs::create_dir(&hooks).unwrap();
        std::fs::write(hooks.join("a"), "alpha").unwrap();
        let target = temp.path().join("hooks.conf");

        let err = run(target.clone(), hooks, true).unwrap_err();

        assert!(matches!(err, ClaspError::TargetStale { .. }));
        assert!(!target.exists());
    }
}
