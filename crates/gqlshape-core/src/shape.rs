//! Static shape descriptors.
//!
//! A shape is any Rust type that a GraphQL response can be decoded into.
//! Instead of inspecting types at runtime, every shape hands out a
//! [`TypeDescriptor`]: a small tree of wrappers, records and leaf scalars.
//! Nested descriptors are reached through function pointers, so a
//! self-referencing record is described finitely and only expanded as far
//! as a walker asks for.

use std::any::TypeId;
use std::borrow::Cow;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A type that describes the GraphQL selection it is decoded from.
///
/// Usually derived with `#[derive(Shape)]`. Leaf types that decode
/// themselves from a single JSON scalar return [`TypeDescriptor::Scalar`].
pub trait Shape: 'static {
    fn descriptor() -> TypeDescriptor;
}

/// Structural description of a shape.
#[derive(Clone, Debug)]
pub enum TypeDescriptor {
    /// Self-decoding leaf. Has no sub-selection.
    Scalar,
    /// Nullable wrapper around the inner descriptor.
    Optional(fn() -> TypeDescriptor),
    /// List wrapper around the element descriptor.
    List(fn() -> TypeDescriptor),
    /// Record with ordered fields.
    Record(RecordDescriptor),
}

impl TypeDescriptor {
    /// Descriptor for `T`.
    pub fn of<T: Shape + ?Sized>() -> Self {
        T::descriptor()
    }

    /// Whether this is a self-decoding leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar)
    }

    /// Whether this is an optional or list wrapper.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::Optional(_) | Self::List(_))
    }

    /// The record behind any number of optional and list wrappers.
    pub fn record(&self) -> Option<RecordDescriptor> {
        match self {
            Self::Scalar => None,
            Self::Optional(inner) | Self::List(inner) => inner().record(),
            Self::Record(record) => Some(record.clone()),
        }
    }
}

/// An ordered list of fields belonging to one Rust type.
#[derive(Clone, Debug)]
pub struct RecordDescriptor {
    /// Identity of the owning type. Together with a field position it forms
    /// the edge that bounds recursive traversal.
    pub id: TypeId,
    /// Display name, used in diagnostics.
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    /// Start an empty record owned by `T`.
    pub fn new<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// One field of a record.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    /// Source identifier. Tuple fields use their position (`"0"`, `"1"`, ...).
    pub ident: &'static str,
    pub config: FieldConfig,
    pub ty: fn() -> TypeDescriptor,
}

impl FieldDescriptor {
    /// A named field of shape `T` with the default configuration.
    pub fn new<T: Shape + ?Sized>(ident: &'static str) -> Self {
        Self {
            ident,
            config: FieldConfig::default(),
            ty: T::descriptor,
        }
    }

    /// An anonymous field of shape `T`. Anonymous fields are embedded.
    pub fn anonymous<T: Shape + ?Sized>(ident: &'static str) -> Self {
        Self::new::<T>(ident).with_config(FieldConfig::new().embed(true))
    }

    /// Replace the field configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Descriptor of the field's type.
    pub fn descriptor(&self) -> TypeDescriptor {
        (self.ty)()
    }

    /// Whether the field's children splice into the parent selection set.
    ///
    /// An explicit selection override always names the field, so it wins
    /// over the embed flag.
    pub fn is_embedded(&self) -> bool {
        self.config.embed && self.config.selection.is_none()
    }
}

/// Per-field selection configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldConfig {
    /// Literal selection token emitted instead of the derived name,
    /// e.g. `user(login:$login)` or `me:viewer`.
    pub selection: Option<&'static str>,
    /// How many nested occurrences of this field are allowed. `None` means
    /// one; a second occurrence is a cycle. Values below 2 are rejected by
    /// the compiler.
    pub recursion_limit: Option<u32>,
    /// Splice the field's own fields into the parent selection set.
    pub embed: bool,
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection override.
    pub fn selection(mut self, value: &'static str) -> Self {
        self.selection = Some(value);
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, value: u32) -> Self {
        self.recursion_limit = Some(value);
        self
    }

    /// Set whether the field is embedded.
    pub fn embed(mut self, value: bool) -> Self {
        self.embed = value;
        self
    }
}

/// Declare types as self-decoding leaf scalars.
///
/// ```
/// struct DateTime(String);
/// gqlshape_core::scalar_shape!(DateTime);
///
/// use gqlshape_core::Shape;
/// assert!(DateTime::descriptor().is_scalar());
/// ```
#[macro_export]
macro_rules! scalar_shape {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Shape for $ty {
                fn descriptor() -> $crate::TypeDescriptor {
                    $crate::TypeDescriptor::Scalar
                }
            }
        )+
    };
}

scalar_shape!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    str,
    &'static str,
    Cow<'static, str>,
    serde_json::Value,
    ()
);

impl<T: Shape> Shape for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Optional(T::descriptor)
    }
}

impl<T: Shape> Shape for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::List(T::descriptor)
    }
}

impl<T: Shape> Shape for VecDeque<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::List(T::descriptor)
    }
}

impl<T: Shape> Shape for BTreeSet<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::List(T::descriptor)
    }
}

impl<T: Shape> Shape for [T] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::List(T::descriptor)
    }
}

impl<T: Shape, const N: usize> Shape for [T; N] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::List(T::descriptor)
    }
}

impl<T: Shape + ?Sized> Shape for Box<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

impl<T: Shape + ?Sized> Shape for Rc<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

impl<T: Shape + ?Sized> Shape for Arc<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

