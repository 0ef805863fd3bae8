use std::sync::Arc;

use stockview_core::{AveragePeriod, HttpClient, ReqwestHttpClient, ValidationError};
use stockview_view::{render_svg, render_text, QuoteClient, Screen, ViewState};

use crate::cli::ChartArgs;
use crate::error::CliError;

pub async fn run(args: &ChartArgs) -> Result<(), CliError> {
    let screen = run_with(args, Arc::new(ReqwestHttpClient::new())).await?;
    println!("{}", render_text(&screen));

    if let Screen::Error(message) = screen {
        return Err(CliError::Fetch(message));
    }
    Ok(())
}

/// One submit/fetch/complete cycle of the chart view; writes the SVG when asked.
pub async fn run_with(
    args: &ChartArgs,
    http_client: Arc<dyn HttpClient>,
) -> Result<Screen, CliError> {
    let mut view = ViewState::new();
    view.set_symbol(&args.symbol);
    view.set_range(args.range);
    for period in AveragePeriod::ALL {
        view.toggle_average(period, args.averages.contains(&period));
    }

    let request = view.submit().ok_or(ValidationError::EmptySymbol)?;
    let client = QuoteClient::new(http_client, args.proxy_url.clone())
        .with_timeout_ms(args.timeout_ms);
    let outcome = client.fetch(&request).await;
    view.complete(outcome);

    let screen = Screen::from_state(&view);
    if let (Screen::Chart(frame), Some(path)) = (&screen, &args.svg) {
        std::fs::write(path, render_svg(frame, args.width, args.height))?;
        log::info!("chart written to {}", path.display());
    }
    Ok(screen)
}
