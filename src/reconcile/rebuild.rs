//! Stale-check and conditional rewrite of the target artifact

use std::fs;
use std::io::ErrorKind;

use tracing::debug;

use super::{ReconciliationUnit, assemble, collect_fragments, validate, write_atomic};
use crate::error::{self, Result};
use crate::hash::{Fingerprint, is_stale};

/// What a successful rebuild did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target already matched the fragments; nothing was written
    UpToDate { fingerprint: Fingerprint },
    /// The target was (re)written from `fragments` fragment files
    Rebuilt {
        fingerprint: Fingerprint,
        fragments: usize,
    },
}

impl Outcome {
    pub fn fingerprint(&self) -> &Fingerprint {
        match self {
            Outcome::UpToDate { fingerprint } | Outcome::Rebuilt { fingerprint, .. } => fingerprint,
        }
    }
}

/// Whether the target matches the current fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Current,
    Stale,
}

/// Candidate artifact computed from the hook directory, plus the staleness verdict
struct Plan {
    body: Vec<u8>,
    fingerprint: Fingerprint,
    fragments: usize,
    stale: bool,
}

fn plan(unit: &ReconciliationUnit) -> Result<Plan> {
    validate(unit)?;

    let fragments = collect_fragments(unit.source_dir(), unit.target_name_in_source_dir())?;
    debug!(
        count = fragments.len(),
        names = ?fragments.iter().map(|f| f.name()).collect::<Vec<_>>(),
        "collected fragments"
    );

    let body = assemble(&fragments);
    let fingerprint = Fingerprint::of(&body);
    let current = current_fingerprint(unit)?;
    debug!(
        candidate = %fingerprint,
        current = %current.map_or_else(|| "none".to_string(), |fp| fp.to_string()),
        "compared fingerprints"
    );

    Ok(Plan {
        stale: is_stale(current.as_ref(), &fingerprint),
        body,
        fingerprint,
        fragments: fragments.len(),
    })
}

/// Fingerprint of the target on disk, `None` when it does not exist yet
fn current_fingerprint(unit: &ReconciliationUnit) -> Result<Option<Fingerprint>> {
    match fs::read(unit.target()) {
        Ok(body) => Ok(Some(Fingerprint::of(&body))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(error::fs::target_read_failed(
            unit.target().display().to_string(),
            e.to_string(),
        )),
    }
}

/// Rebuild the target from the hook directory if it is stale
///
/// Validation runs first and its error is returned unchanged. When the
/// target already matches the fragments the filesystem is not touched at
/// all, so its modification time is preserved.
///
/// # Errors
///
/// Returns the validation error, `FragmentReadFailed`, `TargetReadFailed`
/// or `WriteFailed`. On any error the previous target is left as it was.
pub fn rebuild(unit: &ReconciliationUnit) -> Result<Outcome> {
    let plan = plan(unit)?;

    if !plan.stale {
        debug!(artifact = %unit.target().display(), "target is up to date");
        return Ok(Outcome::UpToDate {
            fingerprint: plan.fingerprint,
        });
    }

    write_atomic(unit.target(), unit.target_parent(), &plan.body)?;
    debug!(
        artifact = %unit.target().display(),
        fingerprint = %plan.fingerprint,
        "target rewritten"
    );

    Ok(Outcome::Rebuilt {
        fingerprint: plan.fingerprint,
        fragments: plan.fragments,
    })
}

/// Report whether `rebuild` would write, without writing
///
/// # Errors
///
/// Same as [`rebuild`], minus `WriteFailed`.
pub fn status(unit: &ReconciliationUnit) -> Result<Freshness> {
    let plan = plan(unit)?;
    Ok(if plan.stale {
        Freshness::Stale
    } else {
        Freshness::Current
    })
}
