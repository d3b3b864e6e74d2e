//! Wire → domain mapping.

use cv_core::{AbilityRef, CatalogError, Entry, EntryId};

use super::models::{AbilityResource, EntryResource};

/// Language whose effect text is shown for abilities.
pub const DESCRIPTION_LANGUAGE: &str = "en";

pub trait ResourceMapper<R, D>: Send + Sync {
    fn to_domain(&self, resource: R) -> Result<D, CatalogError>;
}

pub struct EntryResourceMapper;

impl ResourceMapper<EntryResource, Entry> for EntryResourceMapper {
    fn to_domain(&self, resource: EntryResource) -> Result<Entry, CatalogError> {
        if resource.name.is_empty() {
            return Err(CatalogError::DataShape(format!(
                "entry {} has an empty name",
                resource.id
            )));
        }

        let mut types = resource.types;
        types.sort_by_key(|slot| slot.slot);

        Ok(Entry {
            identifier: EntryId::from(resource.id),
            display_name: resource.name,
            categories: types.into_iter().map(|slot| slot.kind.name).collect(),
            abilities: resource
                .abilities
                .into_iter()
                .map(|slot| AbilityRef {
                    name: slot.ability.name,
                    description_key: slot.ability.url,
                })
                .collect(),
            moves: resource
                .moves
                .into_iter()
                .map(|slot| slot.move_ref.name)
                .collect(),
            image_ref: resource.sprites.other.official_artwork.front_default,
        })
    }
}

/// Picks the first effect entry in [`DESCRIPTION_LANGUAGE`].
pub struct AbilityDescriptionMapper<'a> {
    pub ability: &'a str,
}

impl ResourceMapper<AbilityResource, String> for AbilityDescriptionMapper<'_> {
    fn to_domain(&self, resource: AbilityResource) -> Result<String, CatalogError> {
        resource
            .effect_entries
            .into_iter()
            .find(|entry| entry.language.name == DESCRIPTION_LANGUAGE)
            .map(|entry| entry.short_effect)
            .ok_or_else(|| {
                CatalogError::DataShape(format!(
                    "ability {} has no {DESCRIPTION_LANGUAGE} effect entry",
                    self.ability
                ))
            })
    }
}
