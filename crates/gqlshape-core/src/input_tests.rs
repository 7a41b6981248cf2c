use std::borrow::Cow;

use crate::{ArgumentType, Id, InputType};

#[test]
fn builtin_scalars() {
    assert_eq!(i32::argument_type(), ArgumentType::named("Int"));
    assert_eq!(u8::argument_type(), ArgumentType::named("Int"));
    assert_eq!(f64::argument_type(), ArgumentType::named("Float"));
    assert_eq!(bool::argument_type(), ArgumentType::named("Boolean"));
    assert_eq!(Id::argument_type(), ArgumentType::named("ID"));
}

#[test]
fn strings_defer_naming() {
    assert_eq!(String::argument_type(), ArgumentType::String);
    assert_eq!(<&str>::argument_type(), ArgumentType::String);
    assert_eq!(Cow::<str>::argument_type(), ArgumentType::String);
}

#[test]
fn wrappers() {
    assert_eq!(
        Option::<i32>::argument_type(),
        ArgumentType::optional(ArgumentType::named("Int"))
    );
    assert_eq!(
        Vec::<Option<i32>>::argument_type(),
        ArgumentType::list(ArgumentType::optional(ArgumentType::named("Int")))
    );
    assert_eq!(
        <[bool; 3]>::argument_type(),
        ArgumentType::list(ArgumentType::named("Boolean"))
    );
    assert_eq!(
        <&[String]>::argument_type(),
        ArgumentType::list(ArgumentType::String)
    );
}

#[test]
fn required() {
    assert!(i32::argument_type().is_required());
    assert!(Vec::<Option<i32>>::argument_type().is_required());
    assert!(!Option::<Vec<i32>>::argument_type().is_required());
}
