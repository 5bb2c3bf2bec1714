use thiserror::Error;

/// Local clipboard access failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read clipboard: {0}")]
    Read(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),
}

/// Remote store failures.
///
/// A missing entry on touch is not an error; see
/// [`TouchOutcome::NotFound`](super::TouchOutcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteStoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("server error: HTTP {status}")]
    Server { status: u16 },

    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl RemoteStoreError {
    /// The store could not be reached at all (as opposed to answering badly).
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_classification() {
        assert!(RemoteStoreError::Network("refused".into()).is_connectivity());
        assert!(RemoteStoreError::Timeout.is_connectivity());
        assert!(!RemoteStoreError::Server { status: 500 }.is_connectivity());
        assert!(!RemoteStoreError::Decode("eof".into()).is_connectivity());
    }

    #[test]
    fn error_messages_name_the_status() {
        assert_eq!(
            RemoteStoreError::Server { status: 503 }.to_string(),
            "server error: HTTP 503"
        );
    }
}
