//! Common module for library exports

pub use crate::collections::{slice_to_set, zero_value};
pub use crate::error::{IntrospectError, IntrospectResult};
pub use crate::trace::{parse_symbol, resolve_frame, CURRENT_CALLER, GRANDPARENT_CALLER, PARENT_CALLER};
pub use crate::typename::{type_name, type_name_with_depth, MAX_TYPE_DEPTH};
pub use crate::types::{CallerInfo, ChanDir, Describe, FuncSignature, NamedType, TypeDescriptor};
