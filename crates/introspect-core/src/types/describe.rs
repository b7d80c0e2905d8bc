//! Compile-time descriptors for common Rust types.
//!
//! Standard containers map onto the closest structural kind: sequences become
//! slices, owning handles and references become pointers, and `mpsc` endpoints
//! become directional channels. Types declared by callers implement
//! [`Describe`] themselves:
//!
//! ```rust
//! use introspect_core::types::{Describe, NamedType, TypeDescriptor};
//!
//! struct User;
//!
//! impl Describe for User
//! {
//!     fn describe() -> TypeDescriptor
//!     {
//!         TypeDescriptor::structure(NamedType::new("example.com/accounts", "User"))
//!     }
//! }
//!
//! let users = TypeDescriptor::of::<Vec<Box<User>>>();
//! assert_eq!(users.to_string(), "[]*accounts.User");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

use super::descriptor::{ChanDir, FuncSignature, TypeDescriptor};

const UNIT: &str = "()";

/// Types that can produce their own [`TypeDescriptor`].
pub trait Describe
{
    /// The structural descriptor of `Self`.
    fn describe() -> TypeDescriptor;
}

macro_rules! describe_primitive {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Describe for $ty
            {
                fn describe() -> TypeDescriptor
                {
                    TypeDescriptor::primitive($name)
                }
            }
        )*
    };
}

describe_primitive! {
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    String => "String",
    str => "str",
    () => "()",
}

impl<T: Describe> Describe for Vec<T>
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::slice(T::describe())
    }
}

impl<T: Describe> Describe for [T]
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::slice(T::describe())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N]
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::array(N, T::describe())
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S>
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::map(K::describe(), V::describe())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V>
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::map(K::describe(), V::describe())
    }
}

macro_rules! describe_pointer {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ptr
            {
                fn describe() -> TypeDescriptor
                {
                    TypeDescriptor::pointer(T::describe())
                }
            }
        )*
    };
}

describe_pointer!(Box<T>, Arc<T>, Rc<T>);

impl<T: Describe + ?Sized> Describe for &T
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::pointer(T::describe())
    }
}

impl<T: Describe + ?Sized> Describe for &mut T
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::pointer(T::describe())
    }
}

impl<T: Describe> Describe for Sender<T>
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::chan(ChanDir::Send, T::describe())
    }
}

impl<T: Describe> Describe for SyncSender<T>
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::chan(ChanDir::Send, T::describe())
    }
}

impl<T: Describe> Describe for Receiver<T>
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::chan(ChanDir::Recv, T::describe())
    }
}

/// A unit return type contributes no results.
fn results_of<R: Describe>() -> Vec<TypeDescriptor>
{
    match R::describe() {
        TypeDescriptor::Primitive(name) if name == UNIT => Vec::new(),
        other => vec![other],
    }
}

macro_rules! describe_fn {
    ($($arg:ident),*) => {
        impl<R: Describe, $($arg: Describe),*> Describe for fn($($arg),*) -> R
        {
            fn describe() -> TypeDescriptor
            {
                TypeDescriptor::func(FuncSignature::new([$($arg::describe()),*], results_of::<R>()))
            }
        }
    };
}

describe_fn!();
describe_fn!(A);
describe_fn!(A, B);
describe_fn!(A, B, C);
describe_fn!(A, B, C, D);

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_unit_return_has_no_results()
    {
        assert!(results_of::<()>().is_empty());
        assert_eq!(results_of::<i32>(), vec![TypeDescriptor::primitive("i32")]);
    }

    #[test]
    fn test_fn_pointer_arity()
    {
        let TypeDescriptor::Func(signature) = <fn(u8, bool) -> String as Describe>::describe() else {
            panic!("expected a function descriptor");
        };
        assert_eq!(signature.params.len(), 2);
        assert_eq!(signature.results, vec![TypeDescriptor::primitive("String")]);
        assert!(!signature.variadic);
    }
}
