//! Response models for the PokeAPI endpoints the explorer uses
//!
//! Only the fields the REPL needs are declared; everything else in the
//! upstream JSON is ignored during deserialization.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
