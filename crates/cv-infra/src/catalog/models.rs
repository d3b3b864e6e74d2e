//! Wire shapes of the remote catalog API.
//!
//! Only the fields the domain reads are declared; everything else in the
//! payload is ignored by serde.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /{resource}?limit=N&offset=M`
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

/// `GET /{resource}/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct EntryResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EffectEntry {
    pub short_effect: String,
    pub language: NamedResource,
}

/// `GET /ability/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct AbilityResource {
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}
