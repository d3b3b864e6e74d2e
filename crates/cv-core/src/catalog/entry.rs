use crate::ids::EntryId;

/// Reference to an ability attached to an entry.
///
/// 条目所关联能力的引用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRef {
    /// Ability name, also the key used to fetch its description.
    pub name: String,
    /// Remote resource locator of the ability description.
    pub description_key: String,
}

/// One catalog item as returned by the remote service.
///
/// Entries are immutable once fetched. Each store fetches and owns its own
/// copies, so no entry is shared between the list and a detail view.
///
/// 远程服务返回的单个目录条目。获取后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub identifier: EntryId,
    pub display_name: String,
    /// Category tags in the order the service lists them.
    pub categories: Vec<String>,
    pub abilities: Vec<AbilityRef>,
    pub moves: Vec<String>,
    pub image_ref: Option<String>,
}

impl Entry {
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }

    /// Ability names with duplicates removed, first occurrence order kept.
    pub fn distinct_ability_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.abilities.len());
        for ability in &self.abilities {
            if !names.contains(&ability.name.as_str()) {
                names.push(ability.name.as_str());
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::entry_with;

    #[test]
    fn test_has_category_matches_exact_tag() {
        let entry = entry_with("1", &["grass", "poison"]);
        assert!(entry.has_category("poison"));
        assert!(!entry.has_category("pois"));
    }

    #[test]
    fn test_distinct_ability_names_keeps_first_seen_order() {
        let mut entry = entry_with("1", &["grass"]);
        entry.abilities = ["overgrow", "chlorophyll", "overgrow"]
            .iter()
            .map(|name| AbilityRef {
                name: name.to_string(),
                description_key: format!("ability/{name}"),
            })
            .collect();

        assert_eq!(
            entry.distinct_ability_names(),
            vec!["overgrow", "chlorophyll"]
        );
    }
}
