use std::path::PathBuf;
use std::time::Duration;

use gqlshape::{Client, HttpTransport, Outcome, Request, ServerError, TransportError};
use serde_json::Value;

use super::input::{InputError, as_mutation, load_query, load_variables};

pub struct ExecArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub bearer: Option<String>,
    pub timeout: Option<Duration>,
    pub variables_text: Option<String>,
    pub variables_file: Option<PathBuf>,
    pub mutation: bool,
    pub pretty: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Client(#[from] gqlshape::Error),

    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to format output: {0}")]
    Output(#[source] serde_json::Error),
}

pub fn run(args: ExecArgs) {
    match exec(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether the response was free of server errors.
fn exec(args: &ExecArgs) -> Result<bool, ExecError> {
    let query = load_query(args.query_path.as_deref(), args.query_text.as_deref())?;
    let query = if args.mutation {
        as_mutation(&query)
    } else {
        query
    };
    let variables = load_variables(args.variables_text.as_deref(), args.variables_file.as_deref())?;

    let client = Client::with_transport(build_transport(args)?);
    let request = Request::new(query).json_variables(variables);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ExecError::Runtime)?;
    let outcome: Outcome<Value> = runtime.block_on(client.execute(request))?;

    if let Some(data) = &outcome.data {
        println!("{}", render(data, args.pretty)?);
    }
    for error in &outcome.errors {
        eprintln!("error: {}", describe(error));
    }
    Ok(outcome.errors.is_empty())
}

fn build_transport(args: &ExecArgs) -> Result<HttpTransport, TransportError> {
    let mut builder = HttpTransport::builder(&args.url)
        .user_agent(concat!("gqlshape/", env!("CARGO_PKG_VERSION")));
    for (name, value) in &args.headers {
        builder = builder.header(name, value);
    }
    if let Some(token) = &args.bearer {
        builder = builder.bearer_auth(token);
    }
    if let Some(timeout) = args.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

pub fn render(data: &Value, pretty: bool) -> Result<String, ExecError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    };
    rendered.map_err(ExecError::Output)
}

/// One-line description of a server error: message, then locations and path.
pub fn describe(error: &ServerError) -> String {
    let mut out = error.message.clone();
    if !error.locations.is_empty() {
        let locations: Vec<String> = error
            .locations
            .iter()
            .map(|location| format!("{}:{}", location.line, location.column))
            .collect();
        out.push_str(&format!(" (at {})", locations.join(", ")));
    }
    if let Some(path) = &error.path {
        let segments: Vec<String> = path
            .iter()
            .map(|segment| match segment {
                Value::String(name) => name.clone(),
                other => other.to_string(),
            })
            .collect();
        out.push_str(&format!(" [path: {}]", segments.join(".")));
    }
    out
}
