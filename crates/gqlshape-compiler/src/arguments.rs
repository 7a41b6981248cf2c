//! Variable-argument encoder.
//!
//! `{"a": 123, "b": true}` encodes to `$a:Int!$b:Boolean!`. Commas are
//! insignificant in GraphQL and are left out to keep the output minimal.

use gqlshape_core::{ArgumentType, Variables};

use crate::config::StringType;

/// Encode the argument list for `variables`, without surrounding parens.
///
/// Native strings encode as `ID`; use a [`crate::QueryCompiler`] with a
/// different [`StringType`] to change that.
pub fn compile_arguments(variables: &Variables) -> String {
    encode_arguments(variables, StringType::default())
}

pub(crate) fn encode_arguments(variables: &Variables, string_type: StringType) -> String {
    let mut out = String::new();
    // `Variables` iterates in name order.
    for (name, variable) in variables {
        out.push('$');
        out.push_str(name);
        out.push(':');
        write_argument_type(&mut out, &variable.ty, string_type);
    }
    out
}

/// Write the minified GraphQL type for `ty`, e.g. `[Int]!`.
pub fn write_argument_type(out: &mut String, ty: &ArgumentType, string_type: StringType) {
    write_level(out, ty, true, string_type);
}

fn write_level(out: &mut String, ty: &ArgumentType, required: bool, string_type: StringType) {
    match ty {
        // Nullable: the wrapped level drops its `!`.
        ArgumentType::Optional(inner) => return write_level(out, inner, false, string_type),
        ArgumentType::List(inner) => {
            out.push('[');
            write_level(out, inner, true, string_type);
            out.push(']');
        }
        ArgumentType::Named(name) => out.push_str(name),
        ArgumentType::String => out.push_str(string_type.name()),
    }

    if required {
        out.push('!');
    }
}
