use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use stockview_core::ProxyConfig;

/// Default listen address for `stockview serve`.
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);

/// HTTP server settings wrapped around the proxy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Prefix for every route, e.g. `/gemini-cli-trial`. Empty serves from the root.
    pub base_path: String,
    /// Directory of exported front-end assets served for non-API paths.
    pub static_dir: Option<PathBuf>,
    pub cors: bool,
    pub proxy: ProxyConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            base_path: String::new(),
            static_dir: None,
            cors: true,
            proxy: ProxyConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Base path with a leading slash and no trailing slash; `None` for the root.
    pub fn normalized_base_path(&self) -> Option<String> {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }

    pub fn stock_route(&self) -> String {
        format!("{}/api/stock", self.normalized_base_path().unwrap_or_default())
    }
}
