use thiserror::Error;

use crate::ports::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("expected {abilities} descriptions, got {descriptions}")]
    MisalignedDescriptions {
        abilities: usize,
        descriptions: usize,
    },
}

/// Failure of a detail load.
///
/// 详情加载失败。
#[derive(Debug, Error)]
pub enum DetailError {
    #[error("failed to load entry: {0}")]
    Entry(#[source] CatalogError),

    /// One or more description fetches failed; nothing was exposed.
    #[error("{failed} of {total} ability descriptions could not be loaded: {first}")]
    DescriptionAggregation {
        failed: usize,
        total: usize,
        #[source]
        first: CatalogError,
    },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// A newer load (or a reset) started before this one finished.
    #[error("detail load superseded by a newer request")]
    Superseded,
}

impl DetailError {
    /// Text shown in place of the detail view.
    pub fn user_message(&self) -> String {
        match self {
            Self::Entry(CatalogError::Network { .. }) => {
                "Could not reach the catalog. Try again later.".to_string()
            }
            Self::Entry(CatalogError::DataShape(_)) => {
                "This entry could not be read.".to_string()
            }
            Self::DescriptionAggregation { .. } => {
                "Ability details are unavailable for this entry.".to_string()
            }
            Self::Snapshot(_) | Self::Superseded => self.to_string(),
        }
    }
}
