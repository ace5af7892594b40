//! All-or-nothing replacement of the target artifact
//!
//! The body goes to a `NamedTempFile` in the target's own directory, is synced,
//! given its final permissions and then persisted over the target with a
//! single rename. Any failure drops the temporary file, which deletes it, so
//! the previous target stays untouched.

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{self, Result, WriteStep};

/// Mode given to a target created for the first time: a runnable script
pub const DEFAULT_MODE: u32 = 0o755;

/// Atomically replace `target` (inside `dir`) with `body`
///
/// An existing target's permissions are carried over; a new target gets
/// [`DEFAULT_MODE`] on unix.
///
/// # Errors
///
/// Returns `WriteFailed` naming the stage that failed.
pub fn write_atomic(target: &Path, dir: &Path, body: &[u8]) -> Result<()> {
    let path = target.display().to_string();
    let fail = |step: WriteStep, e: &dyn std::fmt::Display| {
        error::fs::write_failed(path.clone(), step, e.to_string())
    };

    let permissions = target_permissions(target).map_err(|e| fail(WriteStep::Permissions, &e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| fail(WriteStep::Create, &e))?;
    tmp.write_all(body).map_err(|e| fail(WriteStep::Write, &e))?;
    tmp.flush().map_err(|e| fail(WriteStep::Write, &e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| fail(WriteStep::Sync, &e))?;

    if let Some(permissions) = permissions {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| fail(WriteStep::Permissions, &e))?;
    }

    // On failure the PersistError hands the file back; dropping it removes it.
    tmp.persist(target)
        .map_err(|e| fail(WriteStep::Rename, &e.error))?;

    Ok(())
}

/// Permissions the rewritten target should end up with, if any need setting
fn target_permissions(target: &Path) -> std::io::Result<Option<Permissions>> {
    match fs::metadata(target) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(default_permissions()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(DEFAULT_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
