use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No usable response: connection failure, TLS, timeout, or the body
    /// could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("normalization error for product {product_id}: {reason}")]
    Normalization { product_id: String, reason: String },

    #[error("product not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}: {message}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        message: String,
    },

    #[error("invalid catalog base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl CatalogError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// `true` when the server answered but the body was not the expected shape.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Deserialize { .. } | Self::Normalization { .. })
    }

    /// HTTP status of the failed response, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
