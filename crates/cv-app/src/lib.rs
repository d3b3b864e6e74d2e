//! Catalog viewer application layer
//!
//! This crate owns the stateful stores the views read from. Each store wraps a
//! pure state type from `cv-core` and drives it through [`cv_core::CatalogPort`].

pub mod app;
pub mod deps;
pub mod stores;

pub use app::App;
pub use deps::AppDeps;
pub use stores::{DetailLoader, DisplayPreferenceStore, IncrementalListStore, LoadOutcome};
