//! Command parsing
//!
//! Turns a raw input line into a typed [`Command`].

use crate::error::{PokedexError, Result};

/// Name and help text for one REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command the REPL understands, in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "Displays the next page of location areas",
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "Displays the previous page of location areas",
    },
    CommandInfo {
        name: "explore",
        usage: "explore <area>",
        description: "Lists the Pokemon found in a location area",
    },
    CommandInfo {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throws a Pokeball at a Pokemon",
    },
    CommandInfo {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Shows details of a caught Pokemon",
    },
    CommandInfo {
        name: "pokedex",
        usage: "pokedex",
        description: "Lists every Pokemon you have caught",
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exits the Pokedex",
    },
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Exit,
}

impl Command {
    /// Parses cleaned input words.
    ///
    /// Returns `Ok(None)` for blank input. Words after the ones a command
    /// uses are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Self>> {
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.as_str() {
            "help" => Command::Help,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required_arg(args, "explore", "area")?),
            "catch" => Command::Catch(required_arg(args, "catch", "pokemon")?),
            "inspect" => Command::Inspect(required_arg(args, "inspect", "pokemon")?),
            "pokedex" => Command::Pokedex,
            "exit" => Command::Exit,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required_arg(args: &[String], command: &'static str, argument: &'static str) -> Result<String> {
    args.first()
        .cloned()
        .ok_or(PokedexError::MissingArgument { command, argument })
}

/// Lowercases and splits a raw input line on whitespace.
pub fn clean_input(line: &str) -> Vec<String> {
    line.split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
