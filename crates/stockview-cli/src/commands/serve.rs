use stockview_core::{CredentialSource, ProxyConfig};
use stockview_web::{AppState, ServerConfig};

use crate::cli::ServeArgs;
use crate::error::CliError;

pub fn server_config(args: &ServeArgs) -> ServerConfig {
    ServerConfig {
        bind: args.bind,
        base_path: args.base_path.clone(),
        static_dir: args.static_dir.clone(),
        cors: !args.no_cors,
        proxy: ProxyConfig::default()
            .with_upstream_url(args.upstream_url.clone())
            .with_timeout_ms(args.timeout_ms)
            .with_credentials(CredentialSource::env(args.api_key_env.clone())),
    }
}

pub async fn run(args: &ServeArgs) -> Result<(), CliError> {
    let config = server_config(args);
    let state = AppState::from_config(&config);
    stockview_web::serve(config, state).await?;
    Ok(())
}
