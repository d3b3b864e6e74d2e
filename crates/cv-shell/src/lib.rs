//! # cv-shell
//!
//! Terminal view layer for the catalog viewer.
//!
//! ## Modules
//!
//! - **bootstrap**: configuration loading, tracing, wiring and the run loop
//! - **view**: route parsing and text rendering of the list and detail views
//! - **session**: navigation history and command handling

pub mod bootstrap;
pub mod session;
pub mod view;

pub use bootstrap::{run, Cli};
pub use session::{Flow, Session};
