use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport failure or a non-success status.
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The response decoded but lacks a field the domain needs.
    #[error("unexpected response shape: {0}")]
    DataShape(String),
}

impl CatalogError {
    pub fn network(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
