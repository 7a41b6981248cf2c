#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for gqlshape.
//!
//! Two halves:
//! - **Shapes** (`Shape`, `TypeDescriptor`): static descriptions of the Rust
//!   types a GraphQL response is decoded into. The compiler walks them to
//!   derive a selection set.
//! - **Inputs** (`InputType`, `ArgumentType`, `Variables`): typed operation
//!   variables and the GraphQL type signature each one declares.

pub mod input;
mod scalar;
pub mod shape;
pub mod utils;
mod variables;

#[cfg(test)]
mod input_tests;
#[cfg(test)]
mod variables_tests;

pub use input::{ArgumentType, InputType};
pub use scalar::Id;
pub use shape::{FieldConfig, FieldDescriptor, RecordDescriptor, Shape, TypeDescriptor};
pub use variables::{Variable, Variables};
