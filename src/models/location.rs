//! Location area DTOs
//!
//! Shapes of `/location-area` (paginated listing) and
//! `/location-area/{name}` (single area) responses.

use serde::Deserialize;

/// A `{ name, url }` pair, PokeAPI's generic reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of the location area listing.
///
/// `next` and `previous` are absolute URLs, `null` at either end of the list.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Encounter data for a single location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationAreaDetail {
    /// Names of every creature that can be encountered here, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
