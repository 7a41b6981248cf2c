use serde_json::json;

use crate::{ArgumentType, Id, Variables};

#[test]
fn sorted_by_name() {
    let variables = Variables::new()
        .with("zeta", 1)
        .unwrap()
        .with("alpha", true)
        .unwrap()
        .with("Beta", "x")
        .unwrap();

    let names: Vec<&str> = variables.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["Beta", "alpha", "zeta"]);
}

#[test]
fn insert_records_type_and_value() {
    let mut variables = Variables::new();
    variables.insert("ids", vec![Id::new("a"), Id::new("b")]).unwrap();
    variables.insert("first", Some(10)).unwrap();

    let ids = variables.get("ids").unwrap();
    assert_eq!(ids.ty, ArgumentType::list(ArgumentType::named("ID")));
    assert_eq!(ids.value, json!(["a", "b"]));

    let first = variables.get("first").unwrap();
    assert_eq!(first.ty, ArgumentType::optional(ArgumentType::named("Int")));
    assert_eq!(first.value, json!(10));
}

#[test]
fn insert_replaces() {
    let mut variables = Variables::new();
    assert!(variables.insert("a", 1).unwrap().is_none());
    let previous = variables.insert("a", 2).unwrap().unwrap();
    assert_eq!(previous.value, json!(1));
    assert_eq!(variables.len(), 1);
}

#[test]
fn serializes_values_only() {
    let variables = Variables::new()
        .with("b", true)
        .unwrap()
        .with("a", Option::<i32>::None)
        .unwrap();

    let encoded = serde_json::to_string(&variables).unwrap();
    assert_eq!(encoded, r#"{"a":null,"b":true}"#);
    assert_eq!(
        serde_json::Value::Object(variables.to_json()),
        json!({"a": null, "b": true})
    );
}

#[test]
fn empty() {
    let variables = Variables::new();
    assert!(variables.is_empty());
    assert!(variables.into_json().is_empty());
}
