mod cli;
mod commands;

use cli::{ExecParams, build_cli, init_tracing};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("exec", m)) => {
            let params = ExecParams::from_matches(m);
            init_tracing(params.verbose);
            tracing::trace!("subcommand: exec");
            commands::exec::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
