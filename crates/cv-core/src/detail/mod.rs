//! Detail view state: one entry plus its aggregated ability descriptions.

mod error;
mod state;

pub use error::{DetailError, SnapshotError};
pub use state::{DetailPhase, DetailSnapshot, DetailState, DetailTicket};
