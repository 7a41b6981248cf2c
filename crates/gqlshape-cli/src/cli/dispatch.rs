//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;
use std::time::Duration;

use clap::ArgMatches;

use crate::commands::exec::ExecArgs;

pub struct ExecParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub bearer: Option<String>,
    pub timeout: Option<u64>,
    pub variables_text: Option<String>,
    pub variables_file: Option<PathBuf>,
    pub mutation: bool,
    pub compact: bool,
    pub verbose: u8,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            url: m.get_one::<String>("url").cloned().unwrap_or_default(),
            headers: m
                .get_many::<(String, String)>("header")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            bearer: m.get_one::<String>("bearer").cloned(),
            timeout: m.get_one::<u64>("timeout").copied(),
            variables_text: m.get_one::<String>("variables_text").cloned(),
            variables_file: m.get_one::<PathBuf>("variables_file").cloned(),
            mutation: m.get_flag("mutation"),
            compact: m.get_flag("compact"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            url: p.url,
            headers: p.headers,
            bearer: p.bearer,
            timeout: p.timeout.map(Duration::from_secs),
            variables_text: p.variables_text,
            variables_file: p.variables_file,
            mutation: p.mutation,
            pretty: !p.compact,
        }
    }
}
