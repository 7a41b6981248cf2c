//! Selection-set compiler.
//!
//! Walks a shape descriptor depth-first and writes the minified selection
//! set it implies: `{fieldA,fieldB{nested}}`.
//!
//! Recursive shapes are bounded per edge, an edge being a field position
//! within its owning record. Each edge carries a counter that is bumped on
//! the way down and restored on the way back up, so only ancestors count
//! against a field, never siblings.

use std::any::TypeId;
use std::collections::HashMap;

use gqlshape_core::utils::to_lower_camel_case;
use gqlshape_core::{FieldDescriptor, RecordDescriptor, Shape, TypeDescriptor};

use crate::error::{CompileError, CompileResult, VisitPath};

/// Compile the selection set for shape `S`.
///
/// The result can be prefixed with arguments, aliases or an operation
/// header to build custom operations.
pub fn compile_selection<S: Shape + ?Sized>() -> CompileResult<String> {
    SelectionCompiler::new().compile(&S::descriptor())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Edge {
    record: TypeId,
    field: usize,
}

/// State of a single selection-set compilation.
#[derive(Debug, Default)]
pub struct SelectionCompiler {
    visits: HashMap<Edge, u32>,
    path: VisitPath,
}

impl SelectionCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the selection set for `ty`.
    ///
    /// Scalars yield an empty string.
    pub fn compile(mut self, ty: &TypeDescriptor) -> CompileResult<String> {
        let mut out = String::new();
        self.write_type(&mut out, ty)?;
        Ok(out)
    }

    fn write_type(&mut self, out: &mut String, ty: &TypeDescriptor) -> CompileResult<()> {
        match ty {
            TypeDescriptor::Scalar => Ok(()),
            TypeDescriptor::Optional(inner) | TypeDescriptor::List(inner) => {
                self.write_type(out, &inner())
            }
            TypeDescriptor::Record(record) => {
                let mut items = Vec::with_capacity(record.fields.len());
                self.collect_fields(record, &mut items)?;
                out.push('{');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(item);
                }
                out.push('}');
                Ok(())
            }
        }
    }

    /// Append one selection item per emitted field of `record`.
    ///
    /// Embedded fields append their own items to the same list, which keeps
    /// separators between emitted items only.
    fn collect_fields(
        &mut self,
        record: &RecordDescriptor,
        items: &mut Vec<String>,
    ) -> CompileResult<()> {
        for (index, field) in record.fields.iter().enumerate() {
            let limit = match field.config.recursion_limit {
                Some(limit) if limit < 2 => {
                    return Err(CompileError::InvalidRecursionLimit {
                        record: record.name,
                        field: field.ident,
                        limit,
                    });
                }
                limit => limit,
            };

            let edge = Edge {
                record: record.id,
                field: index,
            };
            let depth = self.enter(edge);

            match limit {
                None if depth > 1 => {
                    self.path.push(record.name.to_owned());
                    return Err(CompileError::Cycle {
                        trail: std::mem::take(&mut self.path),
                    });
                }
                Some(limit) if depth > limit => {
                    tracing::trace!(
                        record = record.name,
                        field = field.ident,
                        limit,
                        "recursion limit reached, dropping field"
                    );
                    self.leave(edge);
                    continue;
                }
                _ => {}
            }

            self.path.push(format!("{}.{}", record.name, field.ident));
            let result = self.write_field(field, items);
            self.path.pop();
            self.leave(edge);
            result?;
        }
        Ok(())
    }

    fn write_field(&mut self, field: &FieldDescriptor, items: &mut Vec<String>) -> CompileResult<()> {
        let ty = field.descriptor();
        if field.is_embedded() {
            return self.embed(&ty, items);
        }

        let mut item = match field.config.selection {
            Some(selection) => selection.to_owned(),
            None => to_lower_camel_case(field.ident),
        };
        self.write_type(&mut item, &ty)?;
        items.push(item);
        Ok(())
    }

    /// Splice the fields of `ty` into the enclosing selection set.
    fn embed(&mut self, ty: &TypeDescriptor, items: &mut Vec<String>) -> CompileResult<()> {
        match ty {
            TypeDescriptor::Scalar => Ok(()),
            TypeDescriptor::Optional(inner) | TypeDescriptor::List(inner) => {
                self.embed(&inner(), items)
            }
            TypeDescriptor::Record(record) => self.collect_fields(record, items),
        }
    }

    fn enter(&mut self, edge: Edge) -> u32 {
        let depth = self.visits.entry(edge).or_insert(0);
        *depth += 1;
        *depth
    }

    fn leave(&mut self, edge: Edge) {
        if let Some(depth) = self.visits.get_mut(&edge) {
            *depth -= 1;
        }
    }
}
