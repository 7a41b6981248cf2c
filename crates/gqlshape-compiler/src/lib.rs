//! gqlshape compiler: derives minified GraphQL operations from shapes.
//!
//! - `selection` - selection-set compiler (shape descriptor walk)
//! - `arguments` - variable-argument type encoder
//! - `operation` - query and mutation assembly
//! - `config` - encoding policy
//!
//! Compilation is a pure function of the shape and the variables. Nothing is
//! cached between calls, so a compiler can be shared freely across threads.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Derived shapes in tests refer to the facade crate by name.
#[cfg(test)]
extern crate gqlshape_core as gqlshape;

mod arguments;
mod config;
mod error;
mod operation;
mod selection;

#[cfg(test)]
mod arguments_tests;
#[cfg(test)]
mod operation_tests;

pub use arguments::{compile_arguments, write_argument_type};
pub use config::{Config, StringType};
pub use error::{CompileError, CompileResult, VisitPath};
pub use operation::{OperationKind, QueryCompiler, build_mutation, build_query};
pub use selection::{SelectionCompiler, compile_selection};
