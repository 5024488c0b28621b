use reqwest::header::COOKIE;
use serde::Deserialize;
use serde_json::Value;

use super::{NseClient, SessionCookies};
use crate::error::{PremarketError, Result};
use crate::models::RawRecord;

impl NseClient {
    /// GET the pre-open endpoint with the session cookies and decode its
    /// `data` array. An empty array is a valid result.
    pub fn fetch_records(&self, session: &SessionCookies) -> Result<Vec<RawRecord>> {
        const CONTEXT: &str = "Error fetching data from API";

        let url = self.config.data_url();
        log::debug!("Fetching pre-open data from {}?key={}", url, self.config.market_key);

        let mut request = self
            .http
            .get(&url)
            .query(&[("key", self.config.market_key.as_str())]);
        if let Some(cookie) = session.header_value() {
            request = request.header(COOKIE, cookie);
        }

        let network = |source: reqwest::Error| {
            log::warn!("{}: {}", CONTEXT, source);
            PremarketError::Network { context: CONTEXT, source }
        };

        let response = request
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(network)?;
        let body = response.text().map_err(network)?;

        let records = decode_records(&body).inspect_err(|e| log::warn!("{}", e))?;
        log::info!("Fetched {} pre-open records", records.len());
        Ok(records)
    }
}

/// Decodes a pre-open response body.
///
/// The body must be a JSON object whose `data` field is an array. Each
/// entry's `metadata` object becomes one [`RawRecord`]; entries without
/// one keep their position as an all-absent record.
pub fn decode_records(body: &str) -> Result<Vec<RawRecord>> {
    let payload: Value = serde_json::from_str(body).map_err(|e| PremarketError::decode(e, body))?;

    let entries = match payload.get("data") {
        Some(Value::Array(entries)) => entries,
        Some(Value::Null) | None => {
            return Err(PremarketError::decode("missing field `data`", body));
        }
        Some(_) => {
            return Err(PremarketError::decode("field `data` is not an array", body));
        }
    };

    let records = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry.get("metadata") {
            Some(metadata @ Value::Object(_)) => {
                RawRecord::deserialize(metadata).unwrap_or_else(|e| {
                    log::warn!("Skipping unreadable metadata at index {}: {}", i, e);
                    RawRecord::default()
                })
            }
            _ => {
                log::debug!("Entry {} has no metadata object", i);
                RawRecord::default()
            }
        })
        .collect();

    Ok(records)
}
