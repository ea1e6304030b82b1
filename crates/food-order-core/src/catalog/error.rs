//! Catalog errors

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Why a catalog read failed
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Transport failure (DNS, TLS, connection reset, CORS)
    Http(String),
    /// Server answered with a non-success status
    Status(u16, String),
    /// Response body was not a document list
    Decode(String),
    /// Unusable configuration
    Config(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Http(msg) => write!(f, "Request failed: {}", msg),
            CatalogError::Status(code, body) => write!(f, "Unexpected status {}: {}", code, body),
            CatalogError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            CatalogError::Config(msg) => write!(f, "Invalid catalog config: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::Decode(e.to_string())
        } else {
            CatalogError::Http(e.to_string())
        }
    }
}
