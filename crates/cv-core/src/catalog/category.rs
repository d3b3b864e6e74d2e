use std::fmt::{Display, Formatter};

use super::Entry;

/// Filter value that means "show everything", same as an empty filter.
pub const ALL_SENTINEL: &str = "all";

/// Category tags offered as filter options.
///
/// Other tags are accepted by [`CategoryFilter::parse`]; they simply match nothing
/// until an entry carrying them is loaded.
pub const KNOWN_CATEGORIES: [&str; 18] = [
    "bug", "dark", "dragon", "electric", "fairy", "fighting", "fire", "flying", "ghost", "grass",
    "ground", "ice", "normal", "poison", "psychic", "rock", "steel", "water",
];

/// Active client-side filter over loaded entries.
///
/// 作用于已加载条目的客户端过滤器。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No filter selected.
    #[default]
    Unset,
    /// Explicit "all" selection.
    All,
    /// Keep entries whose categories contain this tag.
    Tag(String),
}

impl CategoryFilter {
    /// Parse a raw select value. Empty input and `"all"` are identity filters.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Unset
        } else if trimmed == ALL_SENTINEL {
            Self::All
        } else {
            Self::Tag(trimmed.to_string())
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Unset | Self::All)
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Self::Unset | Self::All => true,
            Self::Tag(tag) => entry.has_category(tag),
        }
    }

    /// Derived view over `items`: order preserved, nothing copied but references.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: AsRef<Entry>,
    {
        items
            .iter()
            .filter(|item| self.matches(item.as_ref()))
            .collect()
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::All => write!(f, "{ALL_SENTINEL}"),
            Self::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl AsRef<Entry> for Entry {
    fn as_ref(&self) -> &Entry {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::entry_with;

    #[test]
    fn test_parse_empty_and_all_are_identity() {
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::Unset);
        assert_eq!(CategoryFilter::parse("  "), CategoryFilter::Unset);
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert!(CategoryFilter::parse("all").is_identity());
        assert_eq!(
            CategoryFilter::parse("fire"),
            CategoryFilter::Tag("fire".to_string())
        );
    }

    #[test]
    fn test_apply_identity_returns_every_item_in_order() {
        let items = vec![entry_with("1", &["grass"]), entry_with("2", &["fire"])];
        let view = CategoryFilter::All.apply(&items);
        let ids: Vec<&str> = view.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_apply_tag_keeps_matching_subsequence() {
        let items = vec![
            entry_with("1", &["grass", "poison"]),
            entry_with("2", &["fire"]),
            entry_with("3", &["water", "poison"]),
        ];
        let view = CategoryFilter::parse("poison").apply(&items);
        let ids: Vec<&str> = view.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_apply_unknown_tag_is_empty() {
        let items = vec![entry_with("1", &["grass"])];
        assert!(CategoryFilter::parse("shadow").apply(&items).is_empty());
    }

    #[test]
    fn test_display_round_trips_select_value() {
        assert_eq!(CategoryFilter::Unset.to_string(), "");
        assert_eq!(CategoryFilter::All.to_string(), "all");
        assert_eq!(CategoryFilter::parse("ice").to_string(), "ice");
    }

    #[test]
    fn test_known_categories_are_sorted_and_unique() {
        let mut sorted = KNOWN_CATEGORIES.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, KNOWN_CATEGORIES.to_vec());
    }
}
