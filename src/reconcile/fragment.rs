//! Fragment discovery and artifact assembly

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{self, Result};

/// Terminator appended after every fragment in the assembled artifact
pub const FRAGMENT_TERMINATOR: u8 = b'\n';

/// One regular file found directly inside the hook directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    name: OsString,
    content: Vec<u8>,
}

impl Fragment {
    pub fn name(&self) -> &std::ffi::OsStr {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// Read every fragment under `source_dir`, sorted byte-wise by file name
///
/// Only direct children that are regular files count. Subdirectories are not
/// descended into, and symlinks or other special entries are skipped. An entry
/// named `skip` (the target itself, when it lives in the hook directory) is
/// never a fragment.
///
/// # Errors
///
/// Returns `FragmentReadFailed` naming the entry that could not be listed or
/// read, including a fragment that vanished between listing and reading.
pub fn collect_fragments(source_dir: &Path, skip: Option<&OsStr>) -> Result<Vec<Fragment>> {
    let mut fragments = Vec::new();

    let entries = WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .unwrap_or(source_dir)
                .display()
                .to_string();
            error::fs::fragment_read_failed(path, e.to_string())
        })?;

        if !entry.file_type().is_file() {
            tracing::trace!(entry = %entry.path().display(), "skipping non-regular entry");
            continue;
        }

        if skip == Some(entry.file_name()) {
            tracing::trace!(entry = %entry.path().display(), "skipping the target itself");
            continue;
        }

        fragments.push(Fragment {
            name: entry.file_name().to_os_string(),
            content: read_fragment(entry.path())?,
        });
    }

    Ok(fragments)
}

/// Read one listed fragment in full
///
/// # Errors
///
/// Returns `FragmentReadFailed` naming `path`, e.g. when it was removed after
/// the directory was listed.
pub fn read_fragment(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .map_err(|e| error::fs::fragment_read_failed(path.display().to_string(), e.to_string()))
}

/// Concatenate fragments, in the order given, into the artifact body
pub fn assemble(fragments: &[Fragment]) -> Vec<u8> {
    let len = fragments.iter().map(|f| f.content().len() + 1).sum();
    let mut body = Vec::with_capacity(len);
    for fragment in fragments {
        body.extend_from_slice(fragment.content());
        body.push(FRAGMENT_TERMINATOR);
    }
    body
}
