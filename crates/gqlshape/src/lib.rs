//! Derive GraphQL queries and mutations from Rust types.
//!
//! A shape is a Rust type whose structure mirrors the data you want back.
//! The operation text is derived from the shape and the response is decoded
//! into it, so the two cannot drift apart.
//!
//! ```
//! use gqlshape::{Shape, Variables, build_query};
//!
//! #[derive(Shape)]
//! struct Repository {
//!     name_with_owner: String,
//!     stargazer_count: i32,
//! }
//!
//! #[derive(Shape)]
//! struct RepositoryQuery {
//!     #[graphql(selection = "repository(owner:$owner,name:$name)")]
//!     repository: Option<Repository>,
//! }
//!
//! let variables = Variables::new()
//!     .with("owner", "octocat")?
//!     .with("name", "Hello-World")?;
//! let query = build_query::<RepositoryQuery>(&variables)?;
//! assert_eq!(
//!     query,
//!     "query($name:ID!$owner:ID!){repository(owner:$owner,name:$name){nameWithOwner,stargazerCount}}",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use gqlshape_core::{
    ArgumentType, FieldConfig, FieldDescriptor, Id, InputType, RecordDescriptor, Shape,
    TypeDescriptor, Variable, Variables, scalar_shape, utils,
};
pub use gqlshape_macros::{InputType, Shape};

pub use gqlshape_compiler::{
    CompileError, CompileResult, Config, OperationKind, QueryCompiler, SelectionCompiler,
    StringType, VisitPath, build_mutation, build_query, compile_arguments, compile_selection,
};

pub use gqlshape_client::{
    Client, Error, Location, Outcome, Request, Response, Result, ServerError, ServerErrors,
    Transport, TransportError, populate,
};
#[cfg(feature = "http")]
pub use gqlshape_client::{HttpTransport, HttpTransportBuilder};
