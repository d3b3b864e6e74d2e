//! ID type wrappers for type safety.

mod id_macro;

use id_macro::impl_id;

/// Stable identifier of a catalog entry.
///
/// The remote service exposes a numeric id; it is kept as text so that
/// both `25` and `pikachu` style keys can address an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl_id!(EntryId);
