//! # cv-core
//!
//! Core domain models and state transitions for the catalog viewer.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! Network access is expressed through [`ports::CatalogPort`] and implemented elsewhere.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod display;
pub mod fanout;
pub mod ids;
pub mod list;
pub mod ports;

// Re-export commonly used types at the crate root
pub use catalog::{AbilityRef, CategoryFilter, Entry, KNOWN_CATEGORIES};
pub use config::AppConfig;
pub use detail::{DetailError, DetailPhase, DetailSnapshot, DetailState};
pub use display::{DisplayProfile, Palette};
pub use ids::EntryId;
pub use list::{ListState, ListStatus, PageNumber};
pub use ports::{CatalogError, CatalogPort};
