//! Deterministic entries for unit tests.

use super::{AbilityRef, Entry};

pub(crate) fn entry_with(id: &str, categories: &[&str]) -> Entry {
    Entry {
        identifier: id.into(),
        display_name: format!("entry-{id}"),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        abilities: vec![AbilityRef {
            name: "static".to_string(),
            description_key: "https://example.test/ability/static".to_string(),
        }],
        moves: vec!["tackle".to_string()],
        image_ref: None,
    }
}
