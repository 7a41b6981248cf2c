#![allow(dead_code)]

use gqlshape_core::{Id, Variables};
use gqlshape_macros::{InputType, Shape};
use serde::Serialize;

use crate::{Config, OperationKind, QueryCompiler, StringType, build_mutation, build_query};

#[derive(Shape)]
struct Viewer {
    login: String,
}

#[derive(Shape)]
struct ViewerQuery {
    viewer: Viewer,
}

#[derive(Shape)]
struct Repository {
    name_with_owner: String,
    stargazer_count: i32,
}

#[derive(Shape)]
struct RepositoryQuery {
    #[graphql(selection = "repository(owner:$owner,name:$name)")]
    repository: Option<Repository>,
}

#[derive(Shape)]
struct Reaction {
    content: String,
}

#[derive(Shape)]
struct AddReactionPayload {
    reaction: Reaction,
}

#[derive(Shape)]
struct AddReaction {
    #[graphql(selection = "addReaction(input:$input)")]
    add_reaction: AddReactionPayload,
}

#[derive(Serialize, InputType)]
struct AddReactionInput {
    subject_id: Id,
    content: String,
}

#[derive(Shape)]
struct Loop {
    again: Option<Box<Loop>>,
}

#[test]
fn query_without_variables_is_bare_selection() {
    let query = build_query::<ViewerQuery>(&Variables::new()).unwrap();
    insta::assert_snapshot!(query, @"{viewer{login}}");
}

#[test]
fn query_with_variables() {
    let variables = Variables::new()
        .with("owner", "octocat")
        .unwrap()
        .with("name", "Hello-World")
        .unwrap();
    let query = build_query::<RepositoryQuery>(&variables).unwrap();
    insta::assert_snapshot!(
        query,
        @"query($name:ID!$owner:ID!){repository(owner:$owner,name:$name){nameWithOwner,stargazerCount}}"
    );
}

#[test]
fn mutation_without_variables_keeps_keyword() {
    let mutation = build_mutation::<ViewerQuery>(&Variables::new()).unwrap();
    insta::assert_snapshot!(mutation, @"mutation{viewer{login}}");
}

#[test]
fn mutation_with_variables() {
    let input = AddReactionInput {
        subject_id: Id::new("MDU6SXNzdWUyMzE5MTQ0Nzk="),
        content: "HOORAY".to_string(),
    };
    let variables = Variables::new().with("input", input).unwrap();
    let mutation = build_mutation::<AddReaction>(&variables).unwrap();
    insta::assert_snapshot!(
        mutation,
        @"mutation($input:AddReactionInput!){addReaction(input:$input){reaction{content}}}"
    );
}

#[test]
fn compiler_config_applies_to_operations() {
    let compiler = QueryCompiler::new(Config::new().string_type(StringType::String));
    let variables = Variables::new().with("owner", "octocat").unwrap();
    let query = compiler.query::<RepositoryQuery>(&variables).unwrap();
    assert!(query.starts_with("query($owner:String!){"));
}

#[test]
fn cycles_fail_the_operation() {
    let err = build_query::<Loop>(&Variables::new()).unwrap_err();
    assert_eq!(err.to_string(), "cycle found: Loop.again->Loop");
    assert!(build_mutation::<Loop>(&Variables::new()).is_err());
}

#[test]
fn idempotent() {
    let variables = Variables::new()
        .with("owner", "octocat")
        .unwrap()
        .with("name", "Hello-World")
        .unwrap();
    let compiler = QueryCompiler::default();
    assert_eq!(
        compiler.query::<RepositoryQuery>(&variables).unwrap(),
        compiler.query::<RepositoryQuery>(&variables).unwrap()
    );
}

#[test]
fn operation_kind_keyword() {
    assert_eq!(OperationKind::Query.to_string(), "query");
    assert_eq!(OperationKind::Mutation.keyword(), "mutation");
}
