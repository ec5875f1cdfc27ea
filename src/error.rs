//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; everything here comes from the network, decoding, or user input.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the client and the REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-200 status
    #[error("unexpected status code {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// Response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing REPL output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input did not name a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command requires an argument that was not given
    #[error("usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Area or creature name that cannot be used as a URL path segment
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// Inspect was asked about something not in the collection
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// Collection listing requested while nothing has been caught
    #[error("your pokedex is empty")]
    EmptyPokedex,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
