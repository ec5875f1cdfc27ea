//! Pokedex - An interactive PokeAPI explorer
//!
//! Reads commands from stdin until `exit`, end of input, or Ctrl+C.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Cache, Config, Flow, PokeClient, Repl};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start its reaper
/// 4. Build the API client and REPL session
/// 5. Read and execute commands until exit
/// 6. Cancel the reaper on the way out
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the REPL; override
    // with RUST_LOG (e.g. RUST_LOG=pokedex=debug to see cache hits).
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base_url={}, cache_ttl={}s, http_timeout={}s, page_size={}",
        config.api_base_url, config.cache_ttl, config.http_timeout, config.page_size
    );

    let shutdown = CancellationToken::new();
    let cache = Arc::new(Cache::with_cancellation(
        config.cache_ttl_duration(),
        shutdown.clone(),
    ));
    let client = PokeClient::new(&config, cache).context("failed to build HTTP client")?;
    let mut repl = Repl::new(client, io::stdout());

    let result = tokio::select! {
        result = run(&mut repl) => result,
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
            Ok(())
        }
    };

    shutdown.cancel();
    result
}

async fn run(repl: &mut Repl<io::Stdout>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        repl.prompt()?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            info!("End of input, exiting");
            return Ok(());
        };

        if repl.execute_and_report(&line).await? == Flow::Exit {
            return Ok(());
        }
    }
}
