//! Constructor generation for error variants whose fields are all strings

/// Generate one constructor function per `ClaspError` variant
///
/// Each function takes `impl Into<String>` for every listed field and is
/// named after its variant; modules re-export them under snake-case aliases.
///
/// ```rust,ignore
/// impl_error_constructors!(SourceModule, {
///     SourceInvalid(path, reason),
/// });
/// pub use self::SourceInvalid as invalid;
/// ```
macro_rules! impl_error_constructors {
    ($module:ident, { $($variant:ident($($field:ident),* $(,)?)),* $(,)? }) => {
        $(
            #[doc = concat!(
                "Creates a `", stringify!($variant), "` error (", stringify!($module), ")"
            )]
            #[allow(non_snake_case)]
            pub fn $variant($($field: impl Into<String>),*) -> $crate::error::ClaspError {
                $crate::error::ClaspError::$variant {
                    $($field: $field.into()),*
                }
            }
        )*
    };
}

pub(crate) use impl_error_constructors;
