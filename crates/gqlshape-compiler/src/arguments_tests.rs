#![allow(dead_code)]

use gqlshape_core::{ArgumentType, Id, Variables};
use gqlshape_macros::InputType;
use serde::Serialize;

use crate::{Config, QueryCompiler, StringType, compile_arguments, write_argument_type};

#[test]
fn sorted_without_separators() {
    let variables = Variables::new()
        .with("b", true)
        .unwrap()
        .with("a", 123)
        .unwrap();
    assert_eq!(compile_arguments(&variables), "$a:Int!$b:Boolean!");
}

#[test]
fn empty() {
    assert_eq!(compile_arguments(&Variables::new()), "");
}

#[test]
fn strings_encode_as_id() {
    let required = Variables::new().with("login", "octocat").unwrap();
    assert_eq!(compile_arguments(&required), "$login:ID!");

    let optional = Variables::new()
        .with("after", Option::<String>::None)
        .unwrap();
    assert_eq!(compile_arguments(&optional), "$after:ID");
}

#[test]
fn lists() {
    let variables = Variables::new()
        .with("ids", vec![Some(1), None])
        .unwrap()
        .with("labels", Some(vec!["bug".to_string()]))
        .unwrap()
        .with("matrix", vec![vec![1.5f64]])
        .unwrap();
    assert_eq!(
        compile_arguments(&variables),
        "$ids:[Int]!$labels:[ID!]$matrix:[[Float!]!]!"
    );
}

#[derive(Serialize, InputType)]
struct ReviewInput {
    stars: i32,
    commentary: Option<String>,
}

#[derive(Serialize, InputType)]
#[graphql(name = "Episode")]
enum Ep {
    Empire,
    Jedi,
}

#[test]
fn named_input_types() {
    let variables = Variables::new()
        .with("review", ReviewInput {
            stars: 5,
            commentary: None,
        })
        .unwrap()
        .with("ep", Ep::Jedi)
        .unwrap()
        .with("eps", vec![Ep::Empire])
        .unwrap();
    assert_eq!(
        compile_arguments(&variables),
        "$ep:Episode!$eps:[Episode!]!$review:ReviewInput!"
    );
}

#[test]
fn string_policy() {
    let variables = Variables::new()
        .with("query", "rust")
        .unwrap()
        .with("id", Id::new("MDQ6VXNlcjE="))
        .unwrap();

    let plain = QueryCompiler::new(Config::new().string_type(StringType::String));
    assert_eq!(plain.arguments(&variables), "$id:ID!$query:String!");

    let custom = QueryCompiler::new(Config::new().string_type(StringType::Custom("URI")));
    assert_eq!(custom.arguments(&variables), "$id:ID!$query:URI!");

    assert_eq!(compile_arguments(&variables), "$id:ID!$query:ID!");
}

#[test]
fn explicit_types() {
    let mut out = String::new();
    let ty = ArgumentType::optional(ArgumentType::list(ArgumentType::optional(
        ArgumentType::named("Int"),
    )));
    write_argument_type(&mut out, &ty, StringType::Id);
    assert_eq!(out, "[Int]");

    let mut variables = Variables::new();
    variables.insert_value(
        "since",
        ArgumentType::named("DateTime"),
        serde_json::Value::String("2024-01-01T00:00:00Z".into()),
    );
    assert_eq!(compile_arguments(&variables), "$since:DateTime!");
}

#[test]
fn doubly_optional_is_nullable_once() {
    let mut out = String::new();
    let ty = ArgumentType::optional(ArgumentType::optional(ArgumentType::String));
    write_argument_type(&mut out, &ty, StringType::String);
    assert_eq!(out, "String");
}
