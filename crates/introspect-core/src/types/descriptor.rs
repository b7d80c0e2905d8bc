//! Structural type descriptors.
//!
//! Rust erases most type structure at runtime, so descriptors are built
//! explicitly: either by hand through the constructors below, or at compile
//! time through the [`Describe`](super::Describe) trait.
//!
//! The `Display` implementation is the *default display string* of a type. It
//! names a module by its leaf segment only (`[]*users.User`), whereas
//! [`type_name`](crate::typename::type_name) qualifies named types with their
//! full module path.

use std::fmt;
use std::sync::Arc;

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChanDir
{
    /// Bidirectional channel (`chan T`).
    Both,
    /// Receive-only channel (`<-chan T`).
    Recv,
    /// Send-only channel (`chan<- T`).
    Send,
}

impl ChanDir
{
    /// Prefix written before the element type, including the trailing space.
    pub const fn prefix(self) -> &'static str
    {
        match self {
            ChanDir::Both => "chan ",
            ChanDir::Recv => "<-chan ",
            ChanDir::Send => "chan<- ",
        }
    }
}

/// A declared struct or interface type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedType
{
    /// Full path of the declaring module, if the type has one.
    pub module_path: Option<String>,
    /// Declared name without generic arguments.
    pub name: String,
    /// Generic arguments of this instantiation, in declaration order.
    pub type_args: Vec<TypeDescriptor>,
}

impl NamedType
{
    /// A type declared in `module_path`.
    ///
    /// An empty `module_path` means the type has none, as with [`NamedType::local`].
    pub fn new(module_path: impl Into<String>, name: impl Into<String>) -> Self
    {
        let module_path = module_path.into();
        Self {
            module_path: (!module_path.is_empty()).then_some(module_path),
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    /// A type with no module path (anonymous or predeclared, e.g. `interface {}`).
    pub fn local(name: impl Into<String>) -> Self
    {
        Self {
            module_path: None,
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    /// Attach generic arguments.
    #[must_use]
    pub fn with_type_args(mut self, type_args: impl IntoIterator<Item = TypeDescriptor>) -> Self
    {
        self.type_args = type_args.into_iter().collect();
        self
    }

    /// The module path, or `None` when it is absent or empty.
    pub fn module_path(&self) -> Option<&str>
    {
        self.module_path.as_deref().filter(|path| !path.is_empty())
    }

    /// Last segment of the module path, split on `/` or `::`.
    pub fn module_leaf(&self) -> Option<&str>
    {
        self.module_path().map(|path| {
            let after_slash = path.rsplit('/').next().unwrap_or(path);
            after_slash.rsplit("::").next().unwrap_or(after_slash)
        })
    }
}

impl fmt::Display for NamedType
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        if let Some(leaf) = self.module_leaf() {
            write!(f, "{leaf}.")?;
        }
        f.write_str(&self.name)?;
        if !self.type_args.is_empty() {
            f.write_str("[")?;
            for (i, arg) in self.type_args.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// Parameter and result lists of a function type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FuncSignature
{
    /// Parameter types in order. For a variadic function the last entry is
    /// the slice type that collects the trailing arguments.
    pub params: Vec<TypeDescriptor>,
    /// Result types in order; empty for functions that return nothing.
    pub results: Vec<TypeDescriptor>,
    /// Whether the last parameter is variadic.
    pub variadic: bool,
}

impl FuncSignature
{
    /// Non-variadic signature; see [`FuncSignature::variadic`].
    pub fn new(
        params: impl IntoIterator<Item = TypeDescriptor>,
        results: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Self
    {
        Self {
            params: params.into_iter().collect(),
            results: results.into_iter().collect(),
            variadic: false,
        }
    }

    /// Mark the last parameter as variadic.
    #[must_use]
    pub fn variadic(mut self) -> Self
    {
        self.variadic = true;
        self
    }

    /// Whether parameter `index` is the variadic tail.
    pub fn is_variadic_param(&self, index: usize) -> bool
    {
        self.variadic && index + 1 == self.params.len()
    }
}

/// Structural shape of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor
{
    /// Terminal type that is rendered by name (`int`, `bool`, `error`, `i32`).
    Primitive(String),
    /// Fixed-length array.
    Array
    {
        /// Number of elements.
        len: usize,
        /// Element type.
        elem: Arc<TypeDescriptor>,
    },
    /// Growable sequence.
    Slice(Arc<TypeDescriptor>),
    /// Associative map.
    Map
    {
        /// Key type.
        key: Arc<TypeDescriptor>,
        /// Value type.
        value: Arc<TypeDescriptor>,
    },
    /// Channel carrying `elem`.
    Chan
    {
        /// Permitted direction.
        dir: ChanDir,
        /// Element type.
        elem: Arc<TypeDescriptor>,
    },
    /// Pointer to (or owning handle of) `elem`.
    Pointer(Arc<TypeDescriptor>),
    /// Function type.
    Func(Arc<FuncSignature>),
    /// Declared struct.
    Struct(NamedType),
    /// Declared interface or trait object.
    Interface(NamedType),
}

impl TypeDescriptor
{
    /// A terminal type rendered as `name`.
    pub fn primitive(name: impl Into<String>) -> Self
    {
        TypeDescriptor::Primitive(name.into())
    }

    /// `[len]elem`
    pub fn array(len: usize, elem: TypeDescriptor) -> Self
    {
        TypeDescriptor::Array {
            len,
            elem: Arc::new(elem),
        }
    }

    /// `[]elem`
    pub fn slice(elem: TypeDescriptor) -> Self
    {
        TypeDescriptor::Slice(Arc::new(elem))
    }

    /// `map[key]value`
    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self
    {
        TypeDescriptor::Map {
            key: Arc::new(key),
            value: Arc::new(value),
        }
    }

    /// A channel of `elem` with direction `dir`.
    pub fn chan(dir: ChanDir, elem: TypeDescriptor) -> Self
    {
        TypeDescriptor::Chan {
            dir,
            elem: Arc::new(elem),
        }
    }

    /// `*elem`
    pub fn pointer(elem: TypeDescriptor) -> Self
    {
        TypeDescriptor::Pointer(Arc::new(elem))
    }

    /// A function type with the given signature.
    pub fn func(signature: FuncSignature) -> Self
    {
        TypeDescriptor::Func(Arc::new(signature))
    }

    /// A declared struct.
    pub fn structure(named: NamedType) -> Self
    {
        TypeDescriptor::Struct(named)
    }

    /// A declared interface or trait object.
    pub fn interface(named: NamedType) -> Self
    {
        TypeDescriptor::Interface(named)
    }

    /// Descriptor for `T`, via its [`Describe`](super::Describe) impl.
    pub fn of<T: super::Describe + ?Sized>() -> Self
    {
        T::describe()
    }

    /// Element type of arrays, slices, channels and pointers, or the value
    /// type of a map.
    pub fn elem(&self) -> Option<&TypeDescriptor>
    {
        match self {
            TypeDescriptor::Array { elem, .. }
            | TypeDescriptor::Slice(elem)
            | TypeDescriptor::Chan { elem, .. }
            | TypeDescriptor::Pointer(elem) => Some(&**elem),
            TypeDescriptor::Map { value, .. } => Some(&**value),
            _ => None,
        }
    }

    /// The type a variadic tail parameter collects: the slice element, or the
    /// parameter itself when it is not a slice.
    pub(crate) fn variadic_elem(&self) -> &TypeDescriptor
    {
        match self {
            TypeDescriptor::Slice(elem) => &**elem,
            other => other,
        }
    }
}

impl fmt::Display for TypeDescriptor
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            TypeDescriptor::Primitive(name) => f.write_str(name),
            TypeDescriptor::Array { len, elem } => write!(f, "[{len}]{elem}"),
            TypeDescriptor::Slice(elem) => write!(f, "[]{elem}"),
            TypeDescriptor::Map { key, value } => write!(f, "map[{key}]{value}"),
            TypeDescriptor::Chan { dir, elem } => write!(f, "{}{elem}", dir.prefix()),
            TypeDescriptor::Pointer(elem) => write!(f, "*{elem}"),
            TypeDescriptor::Func(signature) => {
                f.write_str("func(")?;
                for (i, param) in signature.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if signature.is_variadic_param(i) {
                        write!(f, "...{}", param.variadic_elem())?;
                    } else {
                        write!(f, "{param}")?;
                    }
                }
                f.write_str(")")?;
                match signature.results.as_slice() {
                    [] => Ok(()),
                    [single] => write!(f, " {single}"),
                    many => {
                        f.write_str(" (")?;
                        for (i, result) in many.iter().enumerate() {
                            if i > 0 {
                                f.write_str(", ")?;
                            }
                            write!(f, "{result}")?;
                        }
                        f.write_str(")")
                    }
                }
            }
            TypeDescriptor::Struct(named) | TypeDescriptor::Interface(named) => write!(f, "{named}"),
        }
    }
}
