//! Caller identity types.

use std::fmt;

/// Module placeholder used when a frame cannot be resolved.
pub const UNKNOWN_MODULE: &str = "<unknown-package>";

/// Function placeholder used when a frame cannot be resolved.
pub const UNKNOWN_FUNCTION: &str = "<unknown-function>";

/// A resolved stack frame split into its originating module and function.
///
/// `function` keeps everything after the module boundary verbatim, including
/// receiver annotations such as `(*Type).Method`, generic arguments and
/// closure suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CallerInfo
{
    /// Module, crate path or package that owns the function.
    pub module: String,
    /// Function, method or closure name relative to `module`.
    pub function: String,
}

impl CallerInfo
{
    /// Build from already-split parts.
    pub fn new(module: impl Into<String>, function: impl Into<String>) -> Self
    {
        Self {
            module: module.into(),
            function: function.into(),
        }
    }

    /// The canonical sentinel for a frame that could not be resolved.
    pub fn unknown() -> Self
    {
        Self::new(UNKNOWN_MODULE, UNKNOWN_FUNCTION)
    }

    /// Returns `true` when either field holds its unknown placeholder.
    ///
    /// The two checks are combined with OR: a known module paired with the
    /// function placeholder still counts as unknown. Empty strings are not
    /// placeholders, so `CallerInfo::default()` is *not* unknown.
    pub fn is_unknown(&self) -> bool
    {
        self.module == UNKNOWN_MODULE || self.function == UNKNOWN_FUNCTION
    }
}

impl fmt::Display for CallerInfo
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}.{}", self.module, self.function)
    }
}
