//! Hook directory errors

use super::impl_error_constructors;

impl_error_constructors!(SourceModule, {
    SourceInvalid(path, reason),
});

pub use self::SourceInvalid as invalid;
