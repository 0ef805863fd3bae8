mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    commands::run(&cli).await
}

/// `RUST_LOG` overrides; otherwise workspace crates log at info and dependencies at warn.
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn,stockview=info");
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();
}
