//! # introspect-core
//!
//! Runtime introspection helpers for diagnostics and logging.
//!
//! This crate provides:
//! - Caller resolution: which function sits at a given depth of the call stack
//! - Type names: fully-qualified rendering of structural type descriptors
//! - Set conversion with optional duplicate rejection, and zero values
//!
//! ## Quick Start
//!
//! ```rust
//! use introspect_core::prelude::*;
//!
//! let caller = resolve_frame(CURRENT_CALLER);
//! if !caller.is_unknown() {
//!     println!("running inside {}", caller.function);
//! }
//!
//! let ids = TypeDescriptor::of::<Vec<u64>>();
//! assert_eq!(type_name(Some(&ids)), "[]u64");
//! ```
//!
//! ## Symbol availability
//!
//! Caller resolution reads the symbol table of the running binary. Builds with
//! `strip = true` or without symbols resolve every frame to
//! [`CallerInfo::unknown`](types::CallerInfo::unknown).

pub mod collections;
pub mod error;
pub mod prelude;
pub mod trace;
pub mod typename;
pub mod types;

pub use collections::{slice_to_set, zero_value};
// Re-export commonly used types
pub use error::{IntrospectError, IntrospectResult};
pub use trace::{parse_symbol, resolve_frame};
pub use typename::{type_name, type_name_with_depth};
pub use types::{CallerInfo, TypeDescriptor};
