use thiserror::Error;

/// Failures the storefront can observe while talking to the catalog API or
/// reading identifiers from the URL and localStorage.
///
/// None of them is fatal: the screen degrades to its empty/loading state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to send request: {0}")]
    Network(String),

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("invalid id: {0:?}")]
    InvalidId(String),
}

impl CatalogError {
    /// Whether issuing the same request again can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, CatalogError::Network(_) | CatalogError::Status(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(CatalogError::Network("offline".into()).is_retryable());
        assert!(CatalogError::Status(503).is_retryable());
        assert!(!CatalogError::Decode("eof".into()).is_retryable());
        assert!(!CatalogError::InvalidId("abc".into()).is_retryable());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CatalogError::Status(404).to_string(),
            "request failed with status 404"
        );
        assert_eq!(CatalogError::InvalidId("NaN".into()).to_string(), "invalid id: \"NaN\"");
    }
}
