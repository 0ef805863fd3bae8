mod chart;
mod serve;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Serve(args) => serve::run(args).await,
        Command::Chart(args) => chart::run(args).await,
    }
}
