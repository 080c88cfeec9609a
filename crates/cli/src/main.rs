use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sqlre::RegexpError;
use sqlre::cli::Cli;

mod cmd_eval;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cmd_eval::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<RegexpError>() {
                Some(e) => eprintln!("error[{}]: {e}", e.kind()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `SQLRE_LOG` (default `warn`, `debug` with --verbose).
fn init_logging(verbose: bool) {
    let default = if verbose { "sqlre=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("SQLRE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
