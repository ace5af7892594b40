//! Target path errors

use super::impl_error_constructors;

impl_error_constructors!(TargetModule, {
    TargetInvalid(path, reason),
    TargetStale(path),
});

pub use self::{TargetInvalid as invalid, TargetStale as stale};
