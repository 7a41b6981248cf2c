//! GraphQL argument type signatures for operation variables.

use std::borrow::Cow;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Declared GraphQL type of a variable, before minification.
///
/// Nullability is modelled the way Rust models it: a value is required
/// unless wrapped in [`ArgumentType::Optional`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    /// Named input type or scalar (`Int`, `Boolean`, `ReviewInput`, ...).
    Named(Cow<'static, str>),
    /// Native string. Its GraphQL name is chosen when encoding.
    String,
    /// `[T]`.
    List(Box<ArgumentType>),
    /// Nullable `T`.
    Optional(Box<ArgumentType>),
}

impl ArgumentType {
    /// Named type from a static name.
    pub const fn named(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }

    /// Wrap in a list.
    pub fn list(inner: ArgumentType) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap as nullable.
    pub fn optional(inner: ArgumentType) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Whether the outermost level is non-null.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Optional(_))
    }
}

/// A Rust type usable as an operation variable.
pub trait InputType {
    fn argument_type() -> ArgumentType;
}

macro_rules! named_input {
    ($name:literal => $($ty:ty),+) => {
        $(
            impl InputType for $ty {
                fn argument_type() -> ArgumentType {
                    ArgumentType::named($name)
                }
            }
        )+
    };
}

named_input!("Boolean" => bool);
// GraphQL `Int` is a signed 32-bit integer.
named_input!("Int" => i8, i16, i32, u8, u16);
named_input!("Float" => f32, f64);

impl InputType for String {
    fn argument_type() -> ArgumentType {
        ArgumentType::String
    }
}

impl InputType for str {
    fn argument_type() -> ArgumentType {
        ArgumentType::String
    }
}

impl InputType for Cow<'_, str> {
    fn argument_type() -> ArgumentType {
        ArgumentType::String
    }
}

impl<T: InputType> InputType for Option<T> {
    fn argument_type() -> ArgumentType {
        ArgumentType::optional(T::argument_type())
    }
}

impl<T: InputType> InputType for Vec<T> {
    fn argument_type() -> ArgumentType {
        ArgumentType::list(T::argument_type())
    }
}

impl<T: InputType> InputType for VecDeque<T> {
    fn argument_type() -> ArgumentType {
        ArgumentType::list(T::argument_type())
    }
}

impl<T: InputType> InputType for BTreeSet<T> {
    fn argument_type() -> ArgumentType {
        ArgumentType::list(T::argument_type())
    }
}

impl<T: InputType> InputType for [T] {
    fn argument_type() -> ArgumentType {
        ArgumentType::list(T::argument_type())
    }
}

impl<T: InputType, const N: usize> InputType for [T; N] {
    fn argument_type() -> ArgumentType {
        ArgumentType::list(T::argument_type())
    }
}

impl<T: InputType + ?Sized> InputType for &T {
    fn argument_type() -> ArgumentType {
        T::argument_type()
    }
}

impl<T: InputType + ?Sized> InputType for Box<T> {
    fn argument_type() -> ArgumentType {
        T::argument_type()
    }
}

impl<T: InputType + ?Sized> InputType for Rc<T> {
    fn argument_type() -> ArgumentType {
        T::argument_type()
    }
}

impl<T: InputType + ?Sized> InputType for Arc<T> {
    fn argument_type() -> ArgumentType {
        T::argument_type()
    }
}
