use std::time::Duration;

pub const NSE_BASE_URL: &str = "https://www.nseindia.com";
pub const PRE_OPEN_PATH: &str = "/api/market-data-pre-open";
pub const DEFAULT_MARKET_KEY: &str = "ALL";

/// NSE rejects requests without a recognizable browser identity.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";

/// Market segments served by the pre-open endpoint.
pub const MARKET_KEYS: [&str; 6] = ["ALL", "NIFTY", "BANKNIFTY", "SME", "FO", "OTHERS"];

/// Connection settings for the NSE pre-open endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct NseConfig {
    pub base_url: String,
    pub market_key: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
    pub use_system_proxy: bool,
}

impl Default for NseConfig {
    fn default() -> Self {
        Self {
            base_url: NSE_BASE_URL.to_string(),
            market_key: DEFAULT_MARKET_KEY.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(30)),
            use_system_proxy: true,
        }
    }
}

impl NseConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_market_key(mut self, key: impl Into<String>) -> Self {
        self.market_key = key.into();
        self
    }

    /// Landing page hit by the session bootstrap.
    pub fn landing_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Pre-open data endpoint, without the query string.
    pub fn data_url(&self) -> String {
        format!("{}{}", self.landing_url(), PRE_OPEN_PATH)
    }
}
