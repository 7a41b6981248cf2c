use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("query is required: use a positional file or -q/--query")]
    MissingQuery,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid variables: {0}")]
    Variables(#[source] serde_json::Error),

    #[error("variables must be a JSON object")]
    VariablesNotObject,
}

pub fn load_query(query_path: Option<&Path>, query_text: Option<&str>) -> Result<String, InputError> {
    if let Some(text) = query_text {
        return Ok(text.to_owned());
    }

    match query_path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(InputError::MissingQuery),
    }
}

/// Prepend the `mutation` keyword unless the text already starts with it.
pub fn as_mutation(query: &str) -> String {
    let trimmed = query.trim_start();
    match trimmed.strip_prefix("mutation") {
        Some(rest)
            if rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c == '{' || c == '(') =>
        {
            trimmed.to_owned()
        }
        _ => format!("mutation{trimmed}"),
    }
}

/// Variables from inline text or a file. Absent means none.
pub fn load_variables(
    variables_text: Option<&str>,
    variables_file: Option<&Path>,
) -> Result<Map<String, Value>, InputError> {
    let text = match (variables_text, variables_file) {
        (Some(text), _) => text.to_owned(),
        (None, Some(path)) => load_file(path)?,
        (None, None) => return Ok(Map::new()),
    };

    match serde_json::from_str(&text).map_err(InputError::Variables)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(InputError::VariablesNotObject),
    }
}

fn load_stdin() -> Result<String, InputError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(InputError::Stdin)?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_owned(),
        source,
    })
}
