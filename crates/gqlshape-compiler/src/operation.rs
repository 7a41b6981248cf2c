//! Query and mutation assembly.

use std::fmt;

use gqlshape_core::{Shape, TypeDescriptor, Variables};

use crate::arguments::encode_arguments;
use crate::config::Config;
use crate::error::CompileResult;
use crate::selection::SelectionCompiler;

/// GraphQL operation type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub fn keyword(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Derive the query for shape `S` with the default configuration.
pub fn build_query<S: Shape + ?Sized>(variables: &Variables) -> CompileResult<String> {
    QueryCompiler::default().query::<S>(variables)
}

/// Derive the mutation for shape `S` with the default configuration.
pub fn build_mutation<S: Shape + ?Sized>(variables: &Variables) -> CompileResult<String> {
    QueryCompiler::default().mutation::<S>(variables)
}

/// Derives operations under a fixed [`Config`].
///
/// Holds no per-call state; every method starts a fresh walk.
#[derive(Clone, Debug, Default)]
pub struct QueryCompiler {
    config: Config,
}

impl QueryCompiler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Selection set for shape `S`.
    pub fn selection<S: Shape + ?Sized>(&self) -> CompileResult<String> {
        self.selection_for(&S::descriptor())
    }

    /// Selection set for an explicit descriptor.
    pub fn selection_for(&self, ty: &TypeDescriptor) -> CompileResult<String> {
        SelectionCompiler::new().compile(ty)
    }

    /// Argument list for `variables`, without parens.
    pub fn arguments(&self, variables: &Variables) -> String {
        encode_arguments(variables, self.config.string_type)
    }

    /// `query($..)` header and selection. Without variables this is the
    /// bare selection set (query shorthand).
    pub fn query<S: Shape + ?Sized>(&self, variables: &Variables) -> CompileResult<String> {
        self.operation::<S>(OperationKind::Query, variables)
    }

    /// `mutation($..)` header and selection. The keyword is always present.
    pub fn mutation<S: Shape + ?Sized>(&self, variables: &Variables) -> CompileResult<String> {
        self.operation::<S>(OperationKind::Mutation, variables)
    }

    pub fn operation<S: Shape + ?Sized>(
        &self,
        kind: OperationKind,
        variables: &Variables,
    ) -> CompileResult<String> {
        self.operation_for(kind, &S::descriptor(), variables)
    }

    pub fn operation_for(
        &self,
        kind: OperationKind,
        ty: &TypeDescriptor,
        variables: &Variables,
    ) -> CompileResult<String> {
        let selection = self.selection_for(ty)?;

        let mut out = String::new();
        if !variables.is_empty() {
            out.push_str(kind.keyword());
            out.push('(');
            out.push_str(&self.arguments(variables));
            out.push(')');
        } else if kind != OperationKind::Query {
            out.push_str(kind.keyword());
        }
        out.push_str(&selection);

        tracing::debug!(
            operation = %kind,
            variables = variables.len(),
            length = out.len(),
            "compiled operation"
        );
        Ok(out)
    }
}
