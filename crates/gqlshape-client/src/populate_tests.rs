#![allow(dead_code)]

use gqlshape_core::Id;
use gqlshape_macros::Shape;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use serde_json::{Value, json};

use crate::populate::{populate, selection_key};

fn decode<S: gqlshape_core::Shape + DeserializeOwned>(json: &str) -> Result<S, serde_json::Error> {
    let raw = RawValue::from_string(json.to_owned()).unwrap();
    populate::<S>(&raw)
}

#[test]
fn selection_keys() {
    assert_eq!(selection_key("me:viewer"), "me");
    assert_eq!(selection_key("me : viewer"), "me");
    assert_eq!(selection_key("user(login:$login)"), "user");
    assert_eq!(selection_key("first:user(login:$login)"), "first");
    assert_eq!(selection_key("repositoryCount: totalCount"), "repositoryCount");
    assert_eq!(selection_key("viewer @include(if:$me)"), "viewer");
    assert_eq!(selection_key("viewer"), "viewer");
}

#[derive(Debug, PartialEq, Shape, Deserialize)]
struct Label {
    name: String,
    html_url: String,
}

#[derive(Debug, PartialEq, Shape, Deserialize)]
struct Labels {
    total_count: i32,
    nodes: Vec<Option<Label>>,
}

#[test]
fn lists_and_optionals_are_walked() {
    let labels: Labels = decode(
        r#"{"totalCount":2,"nodes":[{"name":"bug","htmlUrl":"https://x/bug"},null]}"#,
    )
    .unwrap();

    assert_eq!(labels.total_count, 2);
    assert_eq!(
        labels.nodes,
        vec![
            Some(Label {
                name: "bug".into(),
                html_url: "https://x/bug".into(),
            }),
            None,
        ]
    );
}

#[derive(Debug, PartialEq, Shape, Deserialize)]
struct Timestamps {
    created_at: String,
}

#[derive(Debug, PartialEq, Shape, Deserialize)]
struct Node(Timestamps);

#[derive(Debug, PartialEq, Shape, Deserialize)]
struct Pair(Timestamps, Label);

#[derive(Debug, PartialEq, Shape, Deserialize)]
struct Holder {
    id: Id,
    node: Node,
    pair: Pair,
}

#[test]
fn tuple_structs_decode_from_spliced_keys() {
    let holder: Holder = decode(
        r#"{"id":"H_1","node":{"createdAt":"t0"},"pair":{"createdAt":"t1","name":"x","htmlUrl":"u"}}"#,
    )
    .unwrap();

    assert_eq!(holder.id, Id::new("H_1"));
    assert_eq!(
        holder.node,
        Node(Timestamps {
            created_at: "t0".into()
        })
    );
    assert_eq!(holder.pair.0.created_at, "t1");
    assert_eq!(holder.pair.1.html_url, "u");
}

#[derive(Debug, PartialEq, Shape, Deserialize)]
struct Repository {
    r#type: String,
    #[graphql(selection = "owner{login}")]
    owner: Value,
    #[serde(rename = "__typename")]
    typename: Option<String>,
}

#[test]
fn leaves_and_unknown_keys_pass_through() {
    let repository: Repository = decode(
        r#"{"type":"PUBLIC","owner":{"login":"octocat"},"__typename":"Repository"}"#,
    )
    .unwrap();

    assert_eq!(repository.r#type, "PUBLIC");
    assert_eq!(repository.owner, json!({"login": "octocat"}));
    assert_eq!(repository.typename.as_deref(), Some("Repository"));
}

#[test]
fn value_target_is_untouched() {
    let data: Value = decode(r#"{"fooBar":{"x_y":1}}"#).unwrap();
    assert_eq!(data, json!({"fooBar": {"x_y": 1}}));
}

#[test]
fn mismatched_data_is_an_error() {
    assert!(decode::<Labels>(r#"{"totalCount":"two","nodes":[]}"#).is_err());
}
