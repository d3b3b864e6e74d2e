//! Port interfaces for the application layer
//!
//! Ports define the contract between the stores in `cv-app` and the
//! infrastructure that talks to the remote catalog.

mod catalog;
pub mod errors;

pub use catalog::CatalogPort;
#[cfg(any(test, feature = "test-utils"))]
pub use catalog::MockCatalogPort;
pub use errors::CatalogError;
