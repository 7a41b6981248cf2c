use gqlshape::{Location, ServerError};
use serde_json::json;

use super::exec::{describe, render};

#[test]
fn render_pretty_and_compact() {
    let data = json!({"viewer": {"login": "octocat"}});

    assert_eq!(render(&data, false).unwrap(), r#"{"viewer":{"login":"octocat"}}"#);
    assert_eq!(
        render(&data, true).unwrap(),
        "{\n  \"viewer\": {\n    \"login\": \"octocat\"\n  }\n}"
    );
}

#[test]
fn describe_plain_message() {
    let error = ServerError {
        message: "Bad credentials".into(),
        locations: Vec::new(),
        path: None,
        extensions: None,
    };
    assert_eq!(describe(&error), "Bad credentials");
}

#[test]
fn describe_with_locations_and_path() {
    let error = ServerError {
        message: "Could not resolve to a User".into(),
        locations: vec![Location { line: 1, column: 3 }],
        path: Some(vec![json!("search"), json!("nodes"), json!(0)]),
        extensions: None,
    };
    assert_eq!(
        describe(&error),
        "Could not resolve to a User (at 1:3) [path: search.nodes.0]"
    );
}
