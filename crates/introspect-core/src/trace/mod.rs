//! # Caller resolution
//!
//! Identify the function at a given depth of the live call stack.
//!
//! [`resolve_frame`] walks the current thread's stack with the `backtrace`
//! crate, demangles the symbol of the requested frame and splits it into a
//! [`CallerInfo`]. [`parse_symbol`] is the splitter on its own, usable on any
//! `<module>.<function>` string.
//!
//! Neither function fails: anything that cannot be resolved comes back as
//! [`CallerInfo::unknown`].
//!
//! ## Example
//!
//! ```rust
//! use introspect_core::trace::{parse_symbol, resolve_frame, CURRENT_CALLER};
//!
//! let me = resolve_frame(CURRENT_CALLER);
//! println!("called from {me}");
//!
//! let parsed = parse_symbol("example.com/org/pkg.(*Server).Run");
//! assert_eq!(parsed.module, "example.com/org/pkg");
//! assert_eq!(parsed.function, "(*Server).Run");
//! ```

mod demangle;

use backtrace::Frame;
use once_cell::sync::Lazy;
use tracing::{debug, trace};

pub use crate::types::CallerInfo;

use self::demangle::{demangle_symbol, qualify_symbol};

/// The function that called [`resolve_frame`].
pub const CURRENT_CALLER: isize = 0;
/// The caller of [`CURRENT_CALLER`].
pub const PARENT_CALLER: isize = 1;
/// The caller of [`PARENT_CALLER`].
pub const GRANDPARENT_CALLER: isize = 2;

/// Demangled name of [`resolve_frame`], used to find our own frame in a walk.
static RESOLVER_SYMBOL: Lazy<String> = Lazy::new(|| format!("{}::resolve_frame", module_path!()));

/// Split a raw symbol string into module and function.
///
/// The boundary is the first `.` after the last `/`, so slash-separated module
/// paths (`example.com/org/pkg`) may themselves contain dots. Everything after
/// the boundary is kept verbatim, including receiver markers, generic
/// arguments and nested-function suffixes. Malformed-looking input is accepted
/// as long as a boundary exists.
///
/// Returns [`CallerInfo::unknown`] when there is no boundary.
pub fn parse_symbol(raw: &str) -> CallerInfo
{
    let start = raw.rfind('/').map_or(0, |slash| slash + 1);
    match raw[start..].find('.') {
        Some(offset) => {
            let dot = start + offset;
            CallerInfo::new(&raw[..dot], &raw[dot + 1..])
        }
        None => CallerInfo::unknown(),
    }
}

/// Resolve the function `depth` frames above the caller.
///
/// `depth = 0` ([`CURRENT_CALLER`]) is the function that called
/// `resolve_frame`, `1` its caller, and so on. Inlined functions count as
/// frames of their own.
///
/// Returns [`CallerInfo::unknown`] when `depth` is negative, exceeds the stack
/// height, or the frame has no usable symbol (stripped binaries, foreign code).
#[inline(never)]
pub fn resolve_frame(depth: isize) -> CallerInfo
{
    let Ok(depth) = usize::try_from(depth) else {
        trace!(depth, "negative caller depth");
        return CallerInfo::unknown();
    };

    let Some(symbol) = symbol_above_resolver(depth) else {
        return CallerInfo::unknown();
    };

    match qualify_symbol(&symbol) {
        Some(raw) => parse_symbol(&raw),
        None => {
            debug!(depth, symbol = %symbol, "frame symbol has no module path");
            CallerInfo::unknown()
        }
    }
}

/// Demangled symbol of the logical frame `depth + 1` above [`resolve_frame`].
fn symbol_above_resolver(depth: usize) -> Option<String>
{
    let mut frames = Vec::new();
    backtrace::trace(|frame| {
        frames.push(frame.clone());
        true
    });

    let mut symbols: Vec<Option<String>> = Vec::new();
    let mut anchor = None;
    for frame in &frames {
        let first = symbols.len();
        push_frame_symbols(frame, &mut symbols);

        if anchor.is_none() {
            anchor = symbols[first..]
                .iter()
                .position(|symbol| symbol.as_deref() == Some(RESOLVER_SYMBOL.as_str()))
                .map(|offset| first + offset);
        }
        if let Some(anchor) = anchor {
            if symbols.len() > anchor + 1 + depth {
                break;
            }
        }
    }

    let Some(anchor) = anchor else {
        debug!(frames = frames.len(), "resolver frame not symbolized, binary may be stripped");
        return None;
    };

    match symbols.get(anchor + 1 + depth) {
        Some(Some(symbol)) => Some(symbol.clone()),
        Some(None) => {
            debug!(depth, "frame has no symbol name");
            None
        }
        None => {
            trace!(depth, height = symbols.len() - anchor - 1, "depth exceeds stack height");
            None
        }
    }
}

/// Append the logical frames of one physical frame, innermost first.
///
/// A frame that resolves to nothing still occupies one slot so depth counting
/// stays aligned with the physical stack.
fn push_frame_symbols(frame: &Frame, symbols: &mut Vec<Option<String>>)
{
    let before = symbols.len();
    backtrace::resolve_frame(frame, |symbol| {
        let name = symbol.name().and_then(|name| name.as_str()).map(demangle_symbol);
        symbols.push(name);
    });
    if symbols.len() == before {
        symbols.push(None);
    }
}
