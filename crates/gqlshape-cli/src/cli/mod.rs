mod args;
mod commands;
mod dispatch;


use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub use commands::build_cli;
pub use dispatch::ExecParams;

/// Default log filter for a `-v` count. `RUST_LOG` takes precedence.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Stdout stays reserved for response data.
pub fn init_tracing(verbose: u8) {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::new(log_filter(verbose)),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}
