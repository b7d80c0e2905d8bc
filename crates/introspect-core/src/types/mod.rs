//! # Types
//!
//! Value types shared by the resolver and the namer.
//!
//! [`CallerInfo`] is what the caller resolver hands back. [`TypeDescriptor`]
//! is the structural model the type namer reads; Rust has no runtime
//! reflection, so descriptors are assembled explicitly or through
//! [`Describe`].

pub mod caller;
pub mod describe;
pub mod descriptor;

// Re-export all public types
pub use caller::{CallerInfo, UNKNOWN_FUNCTION, UNKNOWN_MODULE};
pub use describe::Describe;
pub use descriptor::{ChanDir, FuncSignature, NamedType, TypeDescriptor};
