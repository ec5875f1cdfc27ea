//! Interactive REPL
//!
//! Owns the explorer's session state (map pagination and caught creatures)
//! and executes one input line at a time against the catalog client.

mod catch;
mod commands;
mod pokedex;

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::client::PokeClient;
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;

pub use catch::{attempt_catch, catch_difficulty};
pub use commands::{clean_input, Command, CommandInfo, COMMANDS};
pub use pokedex::Pokedex;

/// Prompt printed before each input line.
pub const PROMPT: &str = "Pokedex > ";

/// Whether the REPL should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// Links from the most recently shown location page.
#[derive(Debug, Default)]
struct Pagination {
    next: Option<String>,
    previous: Option<String>,
    started: bool,
}

/// REPL session: executes commands and writes their output to `out`.
pub struct Repl<W, R = StdRng> {
    client: PokeClient,
    out: W,
    rng: R,
    pages: Pagination,
    pokedex: Pokedex,
}

impl<W: Write> Repl<W, StdRng> {
    /// Creates a session with an OS-seeded random source.
    pub fn new(client: PokeClient, out: W) -> Self {
        Self::with_rng(client, out, StdRng::from_os_rng())
    }
}

impl<W: Write, R: Rng> Repl<W, R> {
    /// Creates a session with a caller-supplied random source for catches.
    pub fn with_rng(client: PokeClient, out: W, rng: R) -> Self {
        Self {
            client,
            out,
            rng,
            pages: Pagination::default(),
            pokedex: Pokedex::new(),
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Writes the prompt and flushes it.
    pub fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Parses and runs one input line.
    ///
    /// Command failures (unknown command, network errors, ...) are returned
    /// as errors; the session stays usable afterwards.
    pub async fn execute(&mut self, line: &str) -> Result<Flow> {
        let words = clean_input(line);
        let Some(command) = Command::parse(&words)? else {
            return Ok(Flow::Continue);
        };
        debug!(?command, "Executing command");

        match command {
            Command::Help => self.help()?,
            Command::Map => self.map_forward().await?,
            Command::MapBack => self.map_back().await?,
            Command::Explore(area) => self.explore(&area).await?,
            Command::Catch(name) => self.catch(&name).await?,
            Command::Inspect(name) => self.inspect(&name)?,
            Command::Pokedex => self.list_pokedex()?,
            Command::Exit => {
                writeln!(self.out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    /// Runs a line and reports any error to the output instead of returning it.
    pub async fn execute_and_report(&mut self, line: &str) -> Result<Flow> {
        match self.execute(line).await {
            Ok(flow) => Ok(flow),
            Err(PokedexError::Io(err)) => Err(PokedexError::Io(err)),
            Err(err) => {
                writeln!(self.out, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn help(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to the Pokedex!")?;
        writeln!(self.out, "Usage:")?;
        writeln!(self.out)?;
        for info in COMMANDS {
            writeln!(self.out, "{}: {}", info.usage, info.description)?;
        }
        Ok(())
    }

    async fn map_forward(&mut self) -> Result<()> {
        if self.pages.started && self.pages.next.is_none() {
            writeln!(self.out, "You've reached the end of the available locations.")?;
            return Ok(());
        }

        let page = self.client.location_areas(self.pages.next.as_deref()).await?;
        self.show_page(page)
    }

    async fn map_back(&mut self) -> Result<()> {
        let Some(previous) = self.pages.previous.clone() else {
            writeln!(self.out, "You're on the first page.")?;
            return Ok(());
        };

        let page = self.client.location_areas(Some(&previous)).await?;
        self.show_page(page)
    }

    fn show_page(&mut self, page: LocationAreaPage) -> Result<()> {
        self.pages = Pagination {
            next: page.next,
            previous: page.previous,
            started: true,
        };
        for area in &page.results {
            writeln!(self.out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore(&mut self, area: &str) -> Result<()> {
        let detail = self.client.explore_area(area).await?;

        writeln!(self.out, "Exploring {area}...")?;
        writeln!(self.out, "Found Pokemon:")?;
        for name in detail.pokemon_names() {
            writeln!(self.out, " - {name}")?;
        }
        Ok(())
    }

    async fn catch(&mut self, name: &str) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;

        writeln!(self.out, "Throwing a Pokeball at {name}...")?;
        if attempt_catch(&mut self.rng, pokemon.base_experience) {
            writeln!(self.out, "{name} was caught!")?;
            writeln!(self.out, "You may now inspect it with the inspect command.")?;
            self.pokedex.insert(name, pokemon);
        } else {
            writeln!(self.out, "{name} escaped!")?;
        }
        Ok(())
    }

    fn inspect(&mut self, name: &str) -> Result<()> {
        let pokemon = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        writeln!(self.out, "Name: {}", pokemon.name)?;
        writeln!(self.out, "Height: {}", pokemon.height)?;
        writeln!(self.out, "Weight: {}", pokemon.weight)?;
        writeln!(self.out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(self.out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(self.out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(self.out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex(&mut self) -> Result<()> {
        if self.pokedex.is_empty() {
            return Err(PokedexError::EmptyPokedex);
        }

        writeln!(self.out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(self.out, " - {name}")?;
        }
        Ok(())
    }
}
