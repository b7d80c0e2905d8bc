//! # Type names
//!
//! Render a [`TypeDescriptor`] as a fully-qualified, human-readable string.
//!
//! Unlike the descriptor's own `Display` (which names a module by its leaf
//! segment), [`type_name`] writes the full module path of every struct and
//! interface it meets, including those nested inside composite types and
//! generic arguments:
//!
//! | Descriptor | `Display` | `type_name` |
//! |---|---|---|
//! | slice of pointer to `User` in `example.com/accounts` | `[]*accounts.User` | `[]*example.com/accounts.User` |
//! | map from `string` to `int` | `map[string]int` | `map[string]int` |
//!
//! Recursion is bounded by [`MAX_TYPE_DEPTH`]: levels beyond the budget are
//! written as `<...>`, so output length does not grow with nesting past the
//! limit.

use crate::types::{FuncSignature, NamedType, TypeDescriptor};

/// Depth budget used by [`type_name`].
pub const MAX_TYPE_DEPTH: usize = 8;

/// Placeholder written for a type left unexpanded by the depth budget.
pub const ELIDED: &str = "<...>";

/// Rendering of an absent descriptor.
pub const NIL: &str = "<nil>";

/// Fully-qualified name of `t`, or `<nil>` for `None`.
///
/// ```rust
/// use introspect_core::typename::type_name;
/// use introspect_core::types::{NamedType, TypeDescriptor};
///
/// let users = TypeDescriptor::slice(TypeDescriptor::pointer(TypeDescriptor::structure(NamedType::new(
///     "example.com/accounts",
///     "User",
/// ))));
/// assert_eq!(type_name(Some(&users)), "[]*example.com/accounts.User");
/// assert_eq!(type_name(None), "<nil>");
/// ```
pub fn type_name(t: Option<&TypeDescriptor>) -> String
{
    match t {
        Some(t) => type_name_with_depth(t, MAX_TYPE_DEPTH),
        None => NIL.to_string(),
    }
}

/// Fully-qualified name of `t` with an explicit depth budget.
///
/// Each descent into a contained type costs one level; a budget of `0` yields
/// `<...>` immediately.
pub fn type_name_with_depth(t: &TypeDescriptor, max_depth: usize) -> String
{
    if max_depth == 0 {
        return ELIDED.to_string();
    }
    let inner = max_depth - 1;

    match t {
        TypeDescriptor::Array { len, elem } => format!("[{len}]{}", type_name_with_depth(elem, inner)),
        TypeDescriptor::Slice(elem) => format!("[]{}", type_name_with_depth(elem, inner)),
        TypeDescriptor::Map { key, value } => format!(
            "map[{}]{}",
            type_name_with_depth(key, inner),
            type_name_with_depth(value, inner)
        ),
        TypeDescriptor::Chan { dir, elem } => format!("{}{}", dir.prefix(), type_name_with_depth(elem, inner)),
        TypeDescriptor::Pointer(elem) => format!("*{}", type_name_with_depth(elem, inner)),
        TypeDescriptor::Struct(named) | TypeDescriptor::Interface(named) => named_type_name(named, inner),
        TypeDescriptor::Func(signature) => func_type_name(signature, inner),
        TypeDescriptor::Primitive(_) => t.to_string(),
    }
}

/// `module/path.Name[Args]`, or the default display string when the type has
/// no module path.
fn named_type_name(named: &NamedType, inner: usize) -> String
{
    let Some(module_path) = named.module_path() else {
        return named.to_string();
    };

    let mut name = format!("{module_path}.{}", named.name);
    if !named.type_args.is_empty() {
        let args: Vec<String> = named
            .type_args
            .iter()
            .map(|arg| type_name_with_depth(arg, inner))
            .collect();
        name.push('[');
        name.push_str(&args.join(","));
        name.push(']');
    }
    name
}

fn func_type_name(signature: &FuncSignature, inner: usize) -> String
{
    let params: Vec<String> = signature
        .params
        .iter()
        .enumerate()
        .map(|(i, param)| {
            if signature.is_variadic_param(i) {
                format!("...{}", type_name_with_depth(param.variadic_elem(), inner))
            } else {
                type_name_with_depth(param, inner)
            }
        })
        .collect();
    let params = params.join(", ");

    let results: Vec<String> = signature
        .results
        .iter()
        .map(|result| type_name_with_depth(result, inner))
        .collect();
    match results.as_slice() {
        [] => format!("func({params})"),
        [single] => format!("func({params}) {single}"),
        many => format!("func({params}) ({})", many.join(", ")),
    }
}
