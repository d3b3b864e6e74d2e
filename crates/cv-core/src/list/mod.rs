//! Incremental list state.
//!
//! Pure state transitions for accumulating paginated results. The stateful
//! store wrapping this lives in `cv-app`; everything here is synchronous and
//! free of I/O so it can be tested exhaustively.

mod page;
mod state;

pub use page::PageNumber;
pub use state::{ListState, ListStatus, LoadApplied, PageRequest, LOAD_ERROR_MESSAGE};
