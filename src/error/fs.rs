//! File system errors

use super::{ClaspError, WriteStep, impl_error_constructors};

impl_error_constructors!(FsModule, {
    FragmentReadFailed(path, reason),
    TargetReadFailed(path, reason),
});

pub use self::{FragmentReadFailed as fragment_read_failed, TargetReadFailed as target_read_failed};

/// Creates a write failed error for the given stage of the atomic write
pub fn write_failed(
    path: impl Into<String>,
    step: WriteStep,
    reason: impl Into<String>,
) -> ClaspError {
    ClaspError::WriteFailed {
        path: path.into(),
        step,
        reason: reason.into(),
    }
}
