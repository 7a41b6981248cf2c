//! Decoding response data into shapes.
//!
//! The operation names fields the way the selection compiler does:
//! lowerCamelCase, a selection override, or nothing at all for embedded
//! fields. Before serde sees the data, keys are mapped back to the Rust
//! field names through the shape's descriptor, and embedded fields are
//! nested again under their own field. A shape therefore needs no serde
//! renames to decode the response of the operation derived from it.

use std::borrow::Cow;

use gqlshape_core::utils::to_lower_camel_case;
use gqlshape_core::{FieldDescriptor, RecordDescriptor, Shape, TypeDescriptor};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use serde_json::{Map, Value};

/// Decode a response's raw `data` into the shape the operation was
/// derived from.
///
/// Self-decoding leaves (including `serde_json::Value`) receive their JSON
/// untouched.
pub fn populate<S>(data: &RawValue) -> Result<S, serde_json::Error>
where
    S: Shape + DeserializeOwned,
{
    let value: Value = serde_json::from_str(data.get())?;
    serde_json::from_value(to_field_names(value, &S::descriptor()))
}

/// Rewrite `value`, shaped like the response, into the layout serde expects
/// for `ty`.
pub(crate) fn to_field_names(value: Value, ty: &TypeDescriptor) -> Value {
    match (ty, value) {
        (TypeDescriptor::Optional(inner), value) if !value.is_null() => {
            to_field_names(value, &inner())
        }
        (TypeDescriptor::List(inner), Value::Array(items)) => {
            let inner = inner();
            Value::Array(
                items
                    .into_iter()
                    .map(|item| to_field_names(item, &inner))
                    .collect(),
            )
        }
        (TypeDescriptor::Record(record), Value::Object(mut map)) => {
            let mut shaped = take_record(&mut map, record);
            // Keys outside the shape (`__typename`, ...) pass through.
            if let Value::Object(out) = &mut shaped {
                for (key, value) in map {
                    out.entry(key).or_insert(value);
                }
            }
            shaped
        }
        (_, value) => value,
    }
}

/// Remove the keys `record` selected from `map` and rebuild them under the
/// Rust field names.
fn take_record(map: &mut Map<String, Value>, record: &RecordDescriptor) -> Value {
    let mut fields = Vec::with_capacity(record.fields.len());
    for field in &record.fields {
        let ty = field.descriptor();
        let value = if field.is_embedded() {
            take_embedded(map, &ty)
        } else {
            let key = response_key(field);
            map.remove(&*key).map(|value| to_field_names(value, &ty))
        };
        fields.push((field.ident, value));
    }

    if !is_tuple(record) {
        return Value::Object(
            fields
                .into_iter()
                .filter_map(|(ident, value)| Some((ident.to_owned(), value?)))
                .collect(),
        );
    }

    // Newtypes decode from their single field, wider tuples from an array.
    let mut values: Vec<Value> = fields
        .into_iter()
        .map(|(_, value)| value.unwrap_or(Value::Null))
        .collect();
    if values.len() == 1 {
        return values.swap_remove(0);
    }
    Value::Array(values)
}

fn take_embedded(map: &mut Map<String, Value>, ty: &TypeDescriptor) -> Option<Value> {
    match ty {
        TypeDescriptor::Scalar => None,
        TypeDescriptor::Optional(inner) => take_embedded(map, &inner()),
        TypeDescriptor::List(inner) => {
            take_embedded(map, &inner()).map(|value| Value::Array(vec![value]))
        }
        TypeDescriptor::Record(record) => Some(take_record(map, record)),
    }
}

fn is_tuple(record: &RecordDescriptor) -> bool {
    !record.fields.is_empty()
        && record
            .fields
            .iter()
            .all(|field| field.ident.parse::<usize>().is_ok())
}

/// Key the server answers `field` under.
fn response_key(field: &FieldDescriptor) -> Cow<'static, str> {
    match field.config.selection {
        Some(selection) => Cow::Borrowed(selection_key(selection)),
        None => Cow::Owned(to_lower_camel_case(field.ident)),
    }
}

/// The alias of a selection token if it has one, otherwise its field name:
/// `me:viewer` -> `me`, `user(login:$login)` -> `user`.
pub(crate) fn selection_key(selection: &str) -> &str {
    let head = match (selection.find(':'), selection.find('(')) {
        (Some(colon), Some(paren)) if colon < paren => &selection[..colon],
        (_, Some(paren)) => &selection[..paren],
        (Some(colon), None) => &selection[..colon],
        (None, None) => selection,
    };
    let head = head.trim();
    let end = head
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(head.len());
    &head[..end]
}
