//! Reconciliation of one target artifact against a directory of fragments
//!
//! A [`ReconciliationUnit`] pairs the target path with the hook directory it
//! is built from. [`validate`] inspects both locations without mutating
//! anything; [`rebuild`] validates, assembles the fragments in byte-wise name
//! order and atomically replaces the target only when its fingerprint differs.
//!
//! # Artifact format
//!
//! The body is every fragment's content, in byte-wise filename order, each
//! followed by exactly one `\n`. Nothing else is embedded: the fingerprint of
//! the existing target is derived from its bytes. An empty hook directory
//! yields a zero-byte target.
//!
//! Invocations against the same target are not serialized; callers running
//! several `clasp` processes at once must lock externally.

mod fragment;
mod rebuild;
mod validate;
mod write;

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

pub use fragment::{assemble, collect_fragments};
pub use rebuild::{Freshness, Outcome, rebuild, status};
pub use validate::validate;
pub use write::write_atomic;

/// One rebuild task: a target artifact and the hook directory it is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationUnit {
    target: PathBuf,
    source_dir: PathBuf,
}

impl ReconciliationUnit {
    pub fn new(target: impl Into<PathBuf>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            source_dir: source_dir.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Directory the target lives in, `.` for a bare file name
    pub(crate) fn target_parent(&self) -> &Path {
        match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// File name of the target when it sits directly inside the hook directory
    ///
    /// Such a target must not be read back in as one of its own fragments.
    pub(crate) fn target_name_in_source_dir(&self) -> Option<&OsStr> {
        let name = self.target.file_name()?;
        let parent = fs::canonicalize(self.target_parent()).ok()?;
        let source_dir = fs::canonicalize(&self.source_dir).ok()?;
        (parent == source_dir).then_some(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_accessors() {
        let unit = ReconciliationUnit::new("/etc/hooks.conf", "/etc/hooks.d");
        assert_eq!(unit.target(), Path::new("/etc/hooks.conf"));
        assert_eq!(unit.source_dir(), Path::new("/etc/hooks.d"));
    }

    #[test]
    fn test_target_parent_of_nested_path() {
        let unit = ReconciliationUnit::new("/etc/hooks.conf", "/etc/hooks.d");
        assert_eq!(unit.target_parent(), Path::new("/etc"));
    }

    #[test]
    fn test_target_inside_hook_dir_is_detected() {
        let temp = tempfile::TempDir::new().unwrap();
        let hooks = temp.path().join("hooks.d");
        fs::create_dir(&hooks).unwrap();

        // Spelled differently, same directory
        let unit =
            ReconciliationUnit::new(hooks.join("zz-out"), temp.path().join("hooks.d/."));
        assert_eq!(unit.target_name_in_source_dir(), Some(OsStr::new("zz-out")));

        let outside = ReconciliationUnit::new(temp.path().join("zz-out"), &hooks);
        assert_eq!(outside.target_name_in_source_dir(), None);
    }

    #[test]
    fn test_target_parent_of_bare_file_name() {
        let unit = ReconciliationUnit::new("hooks.conf", "hooks.d");
        assert_eq!(unit.target_parent(), Path::new("."));
    }
}
