use super::NseClient;
use crate::error::{PremarketError, Result};

/// Cookies set by the NSE landing page, needed by the data API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    pairs: Vec<(String, String)>,
}

impl SessionCookies {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Cookie` request header value, e.g. `nsit=abc; nseappid=xyz`.
    pub fn header_value(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }
        let joined = self
            .pairs
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        Some(joined)
    }
}

impl NseClient {
    /// Single GET to the landing page. No retry; the caller re-invokes on
    /// the next page load.
    pub fn acquire_session(&self) -> Result<SessionCookies> {
        const CONTEXT: &str = "Error fetching cookies";

        let url = self.config.landing_url();
        log::debug!("Bootstrapping NSE session from {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|source| {
                log::warn!("{}: {}", CONTEXT, source);
                PremarketError::Network { context: CONTEXT, source }
            })?;

        let cookies = SessionCookies::from_pairs(
            response
                .cookies()
                .map(|c| (c.name().to_string(), c.value().to_string())),
        );

        log::info!("NSE session established with {} cookies", cookies.len());
        Ok(cookies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_joins_pairs_in_order() {
        let cookies = SessionCookies::from_pairs([("nsit", "abc"), ("nseappid", "xyz"), ("bm_sv", "1")]);
        assert_eq!(cookies.len(), 3);
        assert_eq!(cookies.header_value().as_deref(), Some("nsit=abc; nseappid=xyz; bm_sv=1"));
    }

    #[test]
    fn test_empty_jar_has_no_header() {
        let cookies = SessionCookies::default();
        assert!(cookies.is_empty());
        assert_eq!(cookies.header_value(), None);
    }
}
