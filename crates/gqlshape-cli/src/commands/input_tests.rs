use std::io::Write;
use std::path::Path;

use serde_json::json;

use super::input::{InputError, as_mutation, load_query, load_variables};

#[test]
fn inline_query_wins() {
    let query = load_query(Some(Path::new("ignored.graphql")), Some("{viewer{login}}")).unwrap();
    assert_eq!(query, "{viewer{login}}");
}

#[test]
fn query_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "query {{ viewer {{ login }} }}").unwrap();

    let query = load_query(Some(file.path()), None).unwrap();

    assert_eq!(query, "query { viewer { login } }");
}

#[test]
fn missing_query() {
    assert!(matches!(load_query(None, None), Err(InputError::MissingQuery)));
}

#[test]
fn unreadable_query_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.graphql");

    let err = load_query(Some(&path), None).unwrap_err();

    assert!(matches!(err, InputError::File { .. }));
    assert!(err.to_string().contains("missing.graphql"));
}

#[test]
fn mutation_keyword_is_added_once() {
    assert_eq!(as_mutation("{addStar{id}}"), "mutation{addStar{id}}");
    assert_eq!(as_mutation("  mutation{addStar{id}}"), "mutation{addStar{id}}");
    assert_eq!(
        as_mutation("mutation($input:AddStarInput!){addStar(input:$input){id}}"),
        "mutation($input:AddStarInput!){addStar(input:$input){id}}"
    );
    assert_eq!(
        as_mutation("mutation Star {addStar{id}}"),
        "mutation Star {addStar{id}}"
    );
    assert_eq!(as_mutation("mutationCount"), "mutationmutationCount");
}

#[test]
fn mutation_keyword_followed_by_any_whitespace() {
    assert_eq!(
        as_mutation("mutation\r\n{addStar{id}}"),
        "mutation\r\n{addStar{id}}"
    );
    assert_eq!(as_mutation("mutation\u{a0}{a}"), "mutation\u{a0}{a}");
}

#[test]
fn variables_default_to_empty() {
    assert!(load_variables(None, None).unwrap().is_empty());
    assert!(load_variables(Some("null"), None).unwrap().is_empty());
}

#[test]
fn inline_variables() {
    let variables = load_variables(Some(r#"{"login":"octocat","first":10}"#), None).unwrap();
    assert_eq!(variables["login"], json!("octocat"));
    assert_eq!(variables["first"], json!(10));
}

#[test]
fn variables_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"input": {{"starrableId": "R_1"}}}}"#).unwrap();

    let variables = load_variables(None, Some(file.path())).unwrap();

    assert_eq!(variables["input"], json!({"starrableId": "R_1"}));
}

#[test]
fn variables_must_be_an_object() {
    assert!(matches!(
        load_variables(Some("[1, 2]"), None),
        Err(InputError::VariablesNotObject)
    ));
    assert!(matches!(
        load_variables(Some("{"), None),
        Err(InputError::Variables(_))
    ));
}
