//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gqlshape")
        .about("Send GraphQL operations from the terminal")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(exec_command())
}

/// Send an operation and print its data.
pub fn exec_command() -> Command {
    Command::new("exec")
        .about("Send an operation and print the response data")
        .override_usage(
            "\
  gqlshape exec <QUERY> --url <URL>
  gqlshape exec -q <TEXT> --url <URL>",
        )
        .after_help(
            r#"EXAMPLES:
  gqlshape exec -q '{viewer{login}}' --url https://api.github.com/graphql --bearer $TOKEN
  gqlshape exec repo.graphql --variables '{"owner":"rust-lang","name":"rust"}'
  gqlshape exec --mutation -q '{addStar(input:$input){clientMutationId}}' --variables-file vars.json
  echo '{viewer{login}}' | gqlshape exec - --compact

Server errors are printed to stderr and the exit status is 1."#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(url_arg())
        .arg(header_arg())
        .arg(bearer_arg())
        .arg(timeout_arg())
        .arg(variables_text_arg())
        .arg(variables_file_arg())
        .arg(mutation_arg())
        .arg(compact_arg())
        .arg(verbose_arg())
}
