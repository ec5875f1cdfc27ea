//! Pokedex - An interactive PokeAPI explorer
//!
//! Browses location areas, explores encounters and catches Pokemon, with
//! every API response held in an expiring in-memory cache.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::{Flow, Repl};
