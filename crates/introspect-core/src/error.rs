//! # Error Types
//!
//! General error handling for the introspection helpers.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Most of this crate never fails: the caller resolver answers with an unknown
//! sentinel and the type namer has a rendering for every descriptor. The only
//! user-visible failure is a rejected duplicate in strict set conversion.

use thiserror::Error;

/// Main error type for introspection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrospectError
{
    /// Strict set conversion found the same element twice
    ///
    /// The string is the `Debug` rendering of the first duplicate encountered.
    /// Callers can retry in lenient mode to deduplicate silently instead.
    #[error("duplicate element: {0}")]
    DuplicateElement(String),
}

/// Convenience type alias for `Result<T, IntrospectError>`
///
/// ```rust
/// use introspect_core::error::IntrospectResult;
/// fn foo() -> IntrospectResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type IntrospectResult<T> = std::result::Result<T, IntrospectError>;
