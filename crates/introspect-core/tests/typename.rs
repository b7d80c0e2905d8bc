//! Tests for fully-qualified type names

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender};

use introspect_core::typename::{type_name, type_name_with_depth, ELIDED, MAX_TYPE_DEPTH};
use introspect_core::types::{ChanDir, Describe, FuncSignature, NamedType, TypeDescriptor};

const MODULE: &str = "github.com/acme/widgets_test";

fn int() -> TypeDescriptor
{
    TypeDescriptor::primitive("int")
}

fn string() -> TypeDescriptor
{
    TypeDescriptor::primitive("string")
}

fn error() -> TypeDescriptor
{
    TypeDescriptor::primitive("error")
}

fn widget() -> TypeDescriptor
{
    TypeDescriptor::structure(NamedType::new(MODULE, "Struct"))
}

fn shape() -> TypeDescriptor
{
    TypeDescriptor::interface(NamedType::new(MODULE, "Interface"))
}

fn name(t: &TypeDescriptor) -> String
{
    type_name(Some(t))
}

#[test]
fn test_type_name_nil()
{
    assert_eq!(type_name(None), "<nil>");
}

#[test]
fn test_type_name_primitives()
{
    assert_eq!(name(&TypeDescriptor::primitive("bool")), "bool");
    assert_eq!(name(&int()), "int");
    assert_eq!(name(&string()), "string");
}

#[test]
fn test_type_name_composites()
{
    assert_eq!(name(&TypeDescriptor::array(3, int())), "[3]int");
    assert_eq!(name(&TypeDescriptor::slice(int())), "[]int");
    assert_eq!(name(&TypeDescriptor::slice(string())), "[]string");
    assert_eq!(name(&TypeDescriptor::map(string(), int())), "map[string]int");
    assert_eq!(name(&TypeDescriptor::pointer(int())), "*int");
    assert_eq!(name(&TypeDescriptor::slice(error())), "[]error");
}

#[test]
fn test_type_name_channels()
{
    assert_eq!(name(&TypeDescriptor::chan(ChanDir::Both, int())), "chan int");
    assert_eq!(name(&TypeDescriptor::chan(ChanDir::Recv, int())), "<-chan int");
    assert_eq!(name(&TypeDescriptor::chan(ChanDir::Send, int())), "chan<- int");
    assert_eq!(
        name(&TypeDescriptor::chan(ChanDir::Both, widget())),
        "chan github.com/acme/widgets_test.Struct"
    );
}

#[test]
fn test_type_name_qualifies_named_types()
{
    assert_eq!(name(&widget()), "github.com/acme/widgets_test.Struct");
    assert_eq!(name(&TypeDescriptor::slice(widget())), "[]github.com/acme/widgets_test.Struct");
    assert_eq!(name(&TypeDescriptor::slice(shape())), "[]github.com/acme/widgets_test.Interface");
    assert_eq!(name(&TypeDescriptor::pointer(widget())), "*github.com/acme/widgets_test.Struct");
    assert_eq!(
        name(&TypeDescriptor::map(widget(), widget())),
        "map[github.com/acme/widgets_test.Struct]github.com/acme/widgets_test.Struct"
    );
    assert_eq!(name(&TypeDescriptor::structure(NamedType::new("m", "Struct"))), "m.Struct");
}

#[test]
fn test_type_name_unqualified_named_types_use_default_display()
{
    let any = TypeDescriptor::interface(NamedType::local("interface {}"));
    assert_eq!(name(&TypeDescriptor::slice(any)), "[]interface {}");

    let anonymous = TypeDescriptor::structure(NamedType::local("struct { Field int }"));
    assert_eq!(name(&anonymous), "struct { Field int }");
}

#[test]
fn test_type_name_empty_module_path_is_unqualified()
{
    let local = TypeDescriptor::structure(NamedType::new("", "Local"));
    assert_eq!(name(&local), "Local");
    assert_eq!(local.to_string(), "Local");
    assert_eq!(name(&TypeDescriptor::slice(local)), "[]Local");

    let generic = TypeDescriptor::interface(NamedType::new("", "Pair").with_type_args([widget()]));
    assert_eq!(name(&generic), "Pair[widgets_test.Struct]");
}

#[test]
fn test_type_name_generic_arguments_are_qualified()
{
    let generic = TypeDescriptor::structure(NamedType::new(MODULE, "StructWithGenericArg").with_type_args([widget()]));
    assert_eq!(
        name(&TypeDescriptor::slice(generic.clone())),
        "[]github.com/acme/widgets_test.StructWithGenericArg[github.com/acme/widgets_test.Struct]"
    );
    assert_eq!(
        name(&TypeDescriptor::map(generic.clone(), generic)),
        "map[github.com/acme/widgets_test.StructWithGenericArg[github.com/acme/widgets_test.Struct]]\
         github.com/acme/widgets_test.StructWithGenericArg[github.com/acme/widgets_test.Struct]"
    );

    let pair = TypeDescriptor::interface(NamedType::new(MODULE, "Pair").with_type_args([int(), shape()]));
    assert_eq!(
        name(&pair),
        "github.com/acme/widgets_test.Pair[int,github.com/acme/widgets_test.Interface]"
    );
}

#[test]
fn test_type_name_functions()
{
    let no_results = TypeDescriptor::func(FuncSignature::new([int(), int()], []));
    assert_eq!(name(&no_results), "func(int, int)");

    let variadic = TypeDescriptor::func(FuncSignature::new([int(), TypeDescriptor::slice(int())], []).variadic());
    assert_eq!(name(&variadic), "func(int, ...int)");

    let two_results = TypeDescriptor::func(FuncSignature::new([int(), int()], [int(), error()]));
    assert_eq!(name(&two_results), "func(int, int) (int, error)");

    let one_result = TypeDescriptor::func(FuncSignature::new([int(), string()], [error()]));
    assert_eq!(name(&one_result), "func(int, string) error");

    let with_structs = TypeDescriptor::func(
        FuncSignature::new([widget(), TypeDescriptor::slice(widget())], [widget()]).variadic(),
    );
    assert_eq!(
        name(&with_structs),
        "func(github.com/acme/widgets_test.Struct, ...github.com/acme/widgets_test.Struct) \
         github.com/acme/widgets_test.Struct"
    );

    let nullary = TypeDescriptor::func(FuncSignature::default());
    assert_eq!(name(&nullary), "func()");
}

#[test]
fn test_type_name_nested_overflow()
{
    let nested = TypeDescriptor::map(
        int(),
        TypeDescriptor::map(string(), TypeDescriptor::map(int(), TypeDescriptor::map(string(), int()))),
    );
    assert_eq!(
        type_name_with_depth(&nested, 4),
        "map[int]map[string]map[int]map[<...>]<...>"
    );
}

#[test]
fn test_type_name_depth_bound()
{
    let mut deep = int();
    for _ in 0..MAX_TYPE_DEPTH {
        deep = TypeDescriptor::pointer(deep);
    }
    // Eight pointers exhaust the budget before reaching `int`.
    assert_eq!(name(&deep), format!("{}{ELIDED}", "*".repeat(MAX_TYPE_DEPTH)));

    let mut deeper = deep.clone();
    for _ in 0..100 {
        deeper = TypeDescriptor::pointer(deeper);
    }
    assert_eq!(name(&deeper).len(), name(&deep).len());
}

#[test]
fn test_type_name_within_budget_is_complete()
{
    let mut nested = int();
    for _ in 0..MAX_TYPE_DEPTH - 1 {
        nested = TypeDescriptor::slice(nested);
    }
    assert_eq!(name(&nested), format!("{}int", "[]".repeat(MAX_TYPE_DEPTH - 1)));
}

struct User;

impl Describe for User
{
    fn describe() -> TypeDescriptor
    {
        TypeDescriptor::structure(NamedType::new("example.com/accounts", "User"))
    }
}

#[test]
fn test_type_name_of_described_types()
{
    assert_eq!(name(&TypeDescriptor::of::<Vec<Box<User>>>()), "[]*example.com/accounts.User");
    assert_eq!(
        name(&TypeDescriptor::of::<HashMap<String, Box<User>>>()),
        "map[String]*example.com/accounts.User"
    );
    assert_eq!(name(&TypeDescriptor::of::<Sender<Box<User>>>()), "chan<- *example.com/accounts.User");
    assert_eq!(name(&TypeDescriptor::of::<Receiver<u8>>()), "<-chan u8");
    assert_eq!(name(&TypeDescriptor::of::<[i32; 3]>()), "[3]i32");
    assert_eq!(name(&TypeDescriptor::of::<fn(i32, &'static str) -> bool>()), "func(i32, *str) bool");
    assert_eq!(name(&TypeDescriptor::of::<fn(User)>()), "func(example.com/accounts.User)");
}

#[test]
fn test_default_display_uses_module_leaf()
{
    let users = TypeDescriptor::of::<Vec<Box<User>>>();
    assert_eq!(users.to_string(), "[]*accounts.User");
    assert_eq!(name(&users), "[]*example.com/accounts.User");

    let rust_path = TypeDescriptor::structure(NamedType::new("my_crate::net", "Server"));
    assert_eq!(rust_path.to_string(), "net.Server");
    assert_eq!(name(&rust_path), "my_crate::net.Server");
}
