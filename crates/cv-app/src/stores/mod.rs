//! Stateful stores consumed by the views.
//!
//! State sits behind a `std::sync::Mutex` that is never held across an
//! `.await`; every suspension happens between two short critical sections.

mod detail_loader;
mod display_preference;
mod incremental_list;

pub use detail_loader::DetailLoader;
pub use display_preference::DisplayPreferenceStore;
pub use incremental_list::{IncrementalListStore, LoadOutcome};
