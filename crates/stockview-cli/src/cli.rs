//! CLI argument definitions for stockview.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `serve` | Run the quote fetch proxy over HTTP |
//! | `chart` | Fetch one symbol through the proxy and render its chart |
//!
//! # Examples
//!
//! ```bash
//! # Start the proxy (reads ALPHA_VANTAGE_API_KEY per request)
//! stockview serve --bind 127.0.0.1:3000
//!
//! # Chart one year of AAPL with 25- and 75-day averages
//! stockview chart AAPL --range 1y --ma 25,75 --svg aapl.svg
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stockview_core::config::DEFAULT_UPSTREAM_TIMEOUT_MS;
use stockview_core::{AveragePeriod, RangeSelector, DEFAULT_API_KEY_ENV};
use stockview_view::DEFAULT_PROXY_URL;
use stockview_web::DEFAULT_BIND;

/// Daily stock charts with simple moving averages.
#[derive(Debug, Parser)]
#[command(
    name = "stockview",
    author,
    version,
    about = "Daily stock charts with simple moving averages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the quote fetch proxy.
    ///
    /// Serves GET {base-path}/api/stock?symbol=..&range=.. and forwards each
    /// request to the Alpha Vantage daily time-series endpoint.
    Serve(ServeArgs),

    /// Fetch a symbol through the proxy and render its chart.
    ///
    /// # Examples
    ///
    ///   stockview chart AAPL
    ///   stockview chart msft --range 6m --ma 5,25,75,200 --svg msft.svg
    Chart(ChartArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Socket address to listen on.
    #[arg(long, default_value_t = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Route prefix, e.g. /gemini-cli-trial.
    #[arg(long, default_value = "")]
    pub base_path: String,

    /// Directory of front-end assets served for non-API paths.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Disable permissive CORS headers.
    #[arg(long, default_value_t = false)]
    pub no_cors: bool,

    /// Upstream query endpoint.
    #[arg(long, default_value = stockview_core::adapters::alphavantage::DEFAULT_BASE_URL)]
    pub upstream_url: String,

    /// Upstream request timeout in milliseconds.
    #[arg(long, default_value_t = DEFAULT_UPSTREAM_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Environment variable holding the upstream API key.
    #[arg(long, default_value = DEFAULT_API_KEY_ENV)]
    pub api_key_env: String,
}

#[derive(Debug, Clone, Args)]
pub struct ChartArgs {
    /// Ticker symbol (case-insensitive).
    pub symbol: String,

    /// Date window: 1m, 3m, 6m, 1y, 5y, or full.
    #[arg(long, default_value = "full")]
    pub range: RangeSelector,

    /// Moving averages to draw, comma-separated from 5, 25, 75, 200.
    #[arg(long = "ma", value_delimiter = ',', default_value = "25")]
    pub averages: Vec<AveragePeriod>,

    /// Quote proxy endpoint.
    #[arg(long, default_value = DEFAULT_PROXY_URL)]
    pub proxy_url: String,

    /// Proxy request timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Write the chart as SVG to this path.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    #[arg(long, default_value_t = 960)]
    pub width: u32,

    #[arg(long, default_value_t = 400)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn chart_parses_range_and_averages() {
        let cli = Cli::try_parse_from([
            "stockview",
            "chart",
            "aapl",
            "--range",
            "1y",
            "--ma",
            "5,200",
        ])
        .expect("valid arguments");

        let Command::Chart(args) = cli.command else {
            panic!("expected chart command");
        };
        assert_eq!(args.range, RangeSelector::OneYear);
        assert_eq!(args.averages, vec![AveragePeriod::Five, AveragePeriod::TwoHundred]);
        assert_eq!(args.proxy_url, DEFAULT_PROXY_URL);
    }

    #[test]
    fn chart_rejects_unknown_average() {
        let result = Cli::try_parse_from(["stockview", "chart", "AAPL", "--ma", "20"]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["stockview", "serve"]).expect("valid arguments");
        let Command::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.bind, DEFAULT_BIND);
        assert_eq!(args.api_key_env, "ALPHA_VANTAGE_API_KEY");
        assert!(!args.no_cors);
    }
}
