//! Error types and handling for clasp
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped into sub-modules by error domain:
//! - [`target`]: the artifact path handed to `clasp`
//! - [`source`]: the hook directory fragments are read from
//! - [`fs`]: reading fragments and writing the artifact

pub mod fs;
mod macros;
pub mod source;
pub mod target;

use macros::impl_error_constructors;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for clasp operations
#[derive(Error, Diagnostic, Debug)]
pub enum ClaspError {
    // Validation errors
    #[error("Invalid target '{path}': {reason}")]
    #[diagnostic(
        code(clasp::target::invalid),
        help("The target must be a regular file (not a symlink) or a new file in an existing directory")
    )]
    TargetInvalid { path: String, reason: String },

    #[error("Invalid hook directory '{path}': {reason}")]
    #[diagnostic(
        code(clasp::source::invalid),
        help("Point HOOK_DIR at an existing directory containing the fragment files")
    )]
    SourceInvalid { path: String, reason: String },

    // Rebuild errors
    #[error("Failed to read fragment '{path}': {reason}")]
    #[diagnostic(code(clasp::fs::fragment_read_failed))]
    FragmentReadFailed { path: String, reason: String },

    #[error("Failed to read current target '{path}': {reason}")]
    #[diagnostic(code(clasp::fs::target_read_failed))]
    TargetReadFailed { path: String, reason: String },

    #[error("Failed to write '{path}' ({step}): {reason}")]
    #[diagnostic(
        code(clasp::fs::write_failed),
        help("The previous target, if any, was left untouched")
    )]
    WriteFailed {
        path: String,
        step: WriteStep,
        reason: String,
    },

    #[error("Target '{path}' is out of date")]
    #[diagnostic(
        code(clasp::check::stale),
        help("Run clasp without --check to rebuild it")
    )]
    TargetStale { path: String },
}

/// Stage of the atomic write sequence that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStep {
    Create,
    Write,
    Sync,
    Permissions,
    Rename,
}

impl std::fmt::Display for WriteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let step = match self {
            WriteStep::Create => "create",
            WriteStep::Write => "write",
            WriteStep::Sync => "sync",
            WriteStep::Permissions => "permissions",
            WriteStep::Rename => "rename",
        };
        f.write_str(step)
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ClaspError>;
