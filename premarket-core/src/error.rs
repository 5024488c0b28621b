use thiserror::Error;

/// Failures surfaced by the session bootstrap and the data fetch.
#[derive(Error, Debug)]
pub enum PremarketError {
    /// Connection, timeout, or non-2xx status on either outbound call.
    #[error("{context}: {source}")]
    Network {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server replied but the payload shape was unexpected.
    #[error("Error decoding JSON: {reason}. Response text: {body}")]
    Decode { reason: String, body: String },

    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Decode,
    Client,
}

impl PremarketError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PremarketError::Network { .. } => ErrorKind::Network,
            PremarketError::Decode { .. } => ErrorKind::Decode,
            PremarketError::ClientBuild(_) => ErrorKind::Client,
        }
    }

    /// Raw response text for decode failures.
    pub fn body(&self) -> Option<&str> {
        match self {
            PremarketError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    pub(crate) fn decode(reason: impl ToString, body: &str) -> Self {
        PremarketError::Decode {
            reason: reason.to_string(),
            body: body.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PremarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_message_carries_body() {
        let err = PremarketError::decode("expected value at line 1 column 1", "<html>denied</html>");
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.body(), Some("<html>denied</html>"));
        assert_eq!(
            err.to_string(),
            "Error decoding JSON: expected value at line 1 column 1. Response text: <html>denied</html>"
        );
    }
}
