//! Catalog domain: entries as delivered by the remote service and the
//! client-side category filter applied over them.

mod category;
mod entry;

pub use category::{CategoryFilter, ALL_SENTINEL, KNOWN_CATEGORIES};
pub use entry::{AbilityRef, Entry};

#[cfg(test)]
pub(crate) mod fixtures;
