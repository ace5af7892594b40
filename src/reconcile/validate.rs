//! Filesystem-state checks run before any rebuild
//!
//! Only `stat`-class calls are made here. The target is inspected with
//! `symlink_metadata` so a symlink is rejected even when it resolves to a
//! regular file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::ReconciliationUnit;
use crate::error::{self, Result};

/// Check that a rebuild of `unit` can structurally succeed
///
/// # Errors
///
/// Returns `TargetInvalid` when the target's parent directory is missing or
/// the target exists as anything but a plain regular file, and
/// `SourceInvalid` when the hook directory is missing or not a directory.
pub fn validate(unit: &ReconciliationUnit) -> Result<()> {
    validate_target(unit)?;
    validate_source(unit.source_dir())?;

    debug!(
        artifact = %unit.target().display(),
        source_dir = %unit.source_dir().display(),
        "validated reconciliation unit"
    );
    Ok(())
}

fn validate_target(unit: &ReconciliationUnit) -> Result<()> {
    let target = unit.target();
    let path = target.display().to_string();

    match fs::symlink_metadata(target) {
        Ok(meta) => {
            let file_type = meta.file_type();
            if file_type.is_symlink() {
                Err(error::target::invalid(path, "is a symbolic link"))
            } else if file_type.is_dir() {
                Err(error::target::invalid(path, "is a directory"))
            } else if !file_type.is_file() {
                Err(error::target::invalid(path, "is not a regular file"))
            } else {
                Ok(())
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => validate_target_parent(unit),
        Err(e) => Err(error::target::invalid(path, e.to_string())),
    }
}

/// A missing target is a first-time build, as long as its directory exists
fn validate_target_parent(unit: &ReconciliationUnit) -> Result<()> {
    let path = unit.target().display().to_string();
    let parent = unit.target_parent();

    match fs::metadata(parent) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(error::target::invalid(
            path,
            format!("parent '{}' is not a directory", parent.display()),
        )),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(error::target::invalid(
            path,
            format!("parent directory '{}' does not exist", parent.display()),
        )),
        Err(e) => Err(error::target::invalid(path, e.to_string())),
    }
}

fn validate_source(source_dir: &Path) -> Result<()> {
    let path = source_dir.display().to_string();

    match fs::metadata(source_dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(meta) if meta.is_file() => Err(error::source::invalid(path, "is a regular file")),
        Ok(_) => Err(error::source::invalid(path, "is not a directory")),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(error::source::invalid(path, "does not exist"))
        }
        Err(e) => Err(error::source::invalid(path, e.to_string())),
    }
}
