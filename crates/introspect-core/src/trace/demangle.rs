//! Symbol demangling and module qualification.
//!
//! Frames come back from the stack walker as raw linkage names. This module
//! demangles them and rewrites the resulting Rust path into the
//! `<module>.<function>` shape that [`parse_symbol`](super::parse_symbol)
//! splits.
//!
//! ## Module boundary
//!
//! Rust uses `::` both between modules and between a type and its methods, so
//! the boundary is inferred from naming conventions:
//!
//! - The module is the leading run of snake_case segments
//!   (`my_crate::net::server`).
//! - The function keeps everything after it, verbatim (`Server::run`,
//!   `handle::{{closure}}`, `spawn::<u32>`).
//! - A path made only of snake_case segments gives its last segment to the
//!   function. So does a run that stops on a closure (`{{closure}}`,
//!   `{closure#0}`) or turbofish segment, since those belong to the function
//!   before them.
//! - Qualified-self paths (`<my_crate::Foo as core::fmt::Display>::fmt`) take
//!   the module from the self type; the function keeps the rest
//!   (`<Foo as core::fmt::Display>::fmt`).
//! - Inherent impls under v0 mangling (`<my_crate::Foo>::run`) lose their
//!   brackets (`Foo::run`), matching the legacy form.

use rustc_demangle::try_demangle;
use smallvec::SmallVec;

type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Demangle a raw linkage name without its trailing hash.
///
/// Names that are not Rust-mangled (C symbols, or platforms that already
/// hand out demangled names) are returned unchanged.
pub(crate) fn demangle_symbol(raw: &str) -> String
{
    match try_demangle(raw) {
        Ok(demangled) => format!("{demangled:#}"),
        Err(_) => raw.to_string(),
    }
}

/// Rewrite a demangled Rust path as `<module>.<function>`.
///
/// Returns `None` when no module segment can be identified, which is the case
/// for C symbols such as `main` or `__libc_start_main`.
pub(crate) fn qualify_symbol(path: &str) -> Option<String>
{
    if path.starts_with('<') {
        return qualify_self_path(path);
    }

    let segments = split_path(path);
    let mut boundary = segments.iter().take_while(|segment| is_module_segment(segment)).count();
    if boundary == segments.len() {
        boundary -= 1;
    } else if boundary > 0 && segments[boundary].starts_with(['{', '<']) {
        boundary -= 1;
    }
    if boundary == 0 {
        return None;
    }

    Some(format!("{}.{}", segments[..boundary].join("::"), segments[boundary..].join("::")))
}

fn qualify_self_path(path: &str) -> Option<String>
{
    let close = matching_angle(path)?;
    let self_ty = &path[1..close];
    let self_path = self_ty.split(" as ").next().unwrap_or(self_ty);

    let segments = split_path(self_path);
    let boundary = segments.iter().take_while(|segment| is_module_segment(segment)).count();
    if boundary == 0 || boundary == segments.len() {
        return None;
    }

    let module = segments[..boundary].join("::");
    let Some(rest) = path[1..].strip_prefix(module.as_str()).and_then(|rest| rest.strip_prefix("::")) else {
        return Some(format!("{module}.{path}"));
    };

    // Inherent impls (`<my_crate::Foo>::m`) read as `Foo::m`.
    if self_path.len() == self_ty.len() {
        let self_name = &self_path[module.len() + 2..];
        return Some(format!("{module}.{self_name}{}", &path[close + 1..]));
    }
    Some(format!("{module}.<{rest}"))
}

/// Split on `::` separators that are not nested inside brackets.
fn split_path(path: &str) -> Segments<'_>
{
    let bytes = path.as_bytes();
    let mut segments = Segments::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'(' | b'[' | b'{' => depth += 1,
            // `->` inside fn-pointer generics
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' | b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments
}

/// Index of the `>` closing the `<` at position 0.
fn matching_angle(path: &str) -> Option<usize>
{
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    for (i, byte) in bytes.iter().enumerate() {
        match byte {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_module_segment(segment: &str) -> bool
{
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '_' => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        _ => false,
    }
}
