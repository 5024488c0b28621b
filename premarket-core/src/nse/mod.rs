pub mod fetch;
pub mod session;

pub use fetch::decode_records;
pub use session::SessionCookies;

use reqwest::blocking::Client;

use crate::config::NseConfig;
use crate::error::{PremarketError, Result};
use crate::models::Snapshot;

/// Blocking client for the NSE landing page and pre-open API.
///
/// The underlying client keeps no cookie store; session cookies travel
/// explicitly from [`NseClient::acquire_session`] to [`NseClient::fetch_records`].
#[derive(Debug, Clone)]
pub struct NseClient {
    http: Client,
    config: NseConfig,
}

impl NseClient {
    pub fn new(config: NseConfig) -> Result<Self> {
        let http = create_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &NseConfig {
        &self.config
    }

    /// One page load: bootstrap a session, then fetch the pre-open records.
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let session = self.acquire_session()?;
        let records = self.fetch_records(&session)?;
        Ok(Snapshot::new(records))
    }
}

fn create_http_client(config: &NseConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .gzip(true);

    if !config.use_system_proxy {
        builder = builder.no_proxy();
    }

    builder.build().map_err(PremarketError::ClientBuild)
}
