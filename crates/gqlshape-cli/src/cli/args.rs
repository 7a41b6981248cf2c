//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Operation file (positional). `-` reads stdin.
pub fn query_path_arg() -> Arg {
    Arg::new("query_path")
        .value_name("QUERY")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("query_text")
        .help("Operation file (use \"-\" for stdin)")
}

/// Inline operation text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .help("Inline operation text")
}

/// Endpoint (--url).
pub fn url_arg() -> Arg {
    Arg::new("url")
        .long("url")
        .value_name("URL")
        .env("GQLSHAPE_URL")
        .required(true)
        .help("GraphQL endpoint")
}

/// Extra request header (-H/--header), repeatable.
pub fn header_arg() -> Arg {
    Arg::new("header")
        .short('H')
        .long("header")
        .value_name("NAME:VALUE")
        .action(ArgAction::Append)
        .value_parser(parse_header)
        .help("Add a request header")
}

/// Bearer token (--bearer).
pub fn bearer_arg() -> Arg {
    Arg::new("bearer")
        .long("bearer")
        .value_name("TOKEN")
        .env("GQLSHAPE_TOKEN")
        .hide_env_values(true)
        .help("Send Authorization: Bearer <TOKEN>")
}

/// Request timeout in seconds (--timeout).
pub fn timeout_arg() -> Arg {
    Arg::new("timeout")
        .long("timeout")
        .value_name("SECS")
        .value_parser(value_parser!(u64).range(1..))
        .help("Request timeout in seconds")
}

/// Inline variables object (--variables).
pub fn variables_text_arg() -> Arg {
    Arg::new("variables_text")
        .long("variables")
        .value_name("JSON")
        .conflicts_with("variables_file")
        .help("Variables as a JSON object")
}

/// Variables file (--variables-file).
pub fn variables_file_arg() -> Arg {
    Arg::new("variables_file")
        .long("variables-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read variables from a JSON file")
}

/// Send as a mutation (--mutation).
pub fn mutation_arg() -> Arg {
    Arg::new("mutation")
        .long("mutation")
        .action(ArgAction::SetTrue)
        .help("Prefix the operation with the mutation keyword if missing")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log to stderr (-v debug, -vv trace)")
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in '{raw}'"));
    }
    Ok((name.to_owned(), value.trim().to_owned()))
}
