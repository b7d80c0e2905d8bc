//! Small generic helpers: sequence-to-set conversion and zero values.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::error::{IntrospectError, IntrospectResult};

/// Collect `items` into a set.
///
/// With `strict` set, the first repeated element aborts the conversion with
/// [`IntrospectError::DuplicateElement`] naming that element; otherwise
/// duplicates are dropped silently.
///
/// ```rust
/// use introspect_core::collections::slice_to_set;
///
/// let set = slice_to_set([1, 2, 2, 3], false).unwrap();
/// assert_eq!(set.len(), 3);
///
/// let err = slice_to_set([1, 2, 2, 3], true).unwrap_err();
/// assert_eq!(err.to_string(), "duplicate element: 2");
/// ```
///
/// ## Errors
///
/// Returns [`IntrospectError::DuplicateElement`] in strict mode when an element
/// occurs more than once.
pub fn slice_to_set<T, I>(items: I, strict: bool) -> IntrospectResult<HashSet<T>>
where
    T: Eq + Hash + Debug,
    I: IntoIterator<Item = T>,
{
    let items = items.into_iter();
    let mut set = HashSet::with_capacity(items.size_hint().0);
    for item in items {
        if set.contains(&item) {
            if strict {
                debug!(element = ?item, "rejecting duplicate in strict set conversion");
                return Err(IntrospectError::DuplicateElement(format!("{item:?}")));
            }
            continue;
        }
        set.insert(item);
    }
    Ok(set)
}

/// The default ("zero") value of `T`.
///
/// ```rust
/// use introspect_core::collections::zero_value;
///
/// assert_eq!(zero_value::<i32>(), 0);
/// assert_eq!(zero_value::<String>(), "");
/// ```
#[must_use]
pub fn zero_value<T: Default>() -> T
{
    T::default()
}
