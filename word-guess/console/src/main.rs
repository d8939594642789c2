// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod logging;

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use word_guess_core::{
    AtomicShutdownSignal, ConfigOverrides, ConsoleSink, FastrandRandom, InstantClock, RandomGuesser,
    SearchConfig, SearchDriver,
};

const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Guess a fixed word by drawing random candidates until one matches.
#[derive(Debug, Parser)]
#[command(name = "word-guess", version)]
struct Args {
    /// JSON config file. Defaults to ./config.json when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word to search for.
    #[arg(long)]
    target: Option<String>,

    /// Symbols candidates are drawn from, in order.
    #[arg(long)]
    alphabet: Option<String>,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Attempts between progress markers.
    #[arg(long)]
    progress_interval: Option<u64>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            target: self.target.clone(),
            alphabet: self.alphabet.clone(),
            seed: self.seed,
            progress_interval: self.progress_interval,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();
    let args = Args::parse();

    let mut config =
        SearchConfig::load_or_default(args.config.as_deref(), Path::new(DEFAULT_CONFIG_PATH))?;
    config.apply_overrides(&args.overrides());
    debug!(?config, "configuration loaded");
    let resolved = config.resolve()?;

    let shutdown = AtomicShutdownSignal::new();
    let handler_signal = shutdown.clone();
    ctrlc::set_handler(move || {
        info!("Ctrl+C received, stopping search");
        handler_signal.shutdown();
    })?;

    let random = match resolved.seed {
        Some(seed) => FastrandRandom::with_seed(seed),
        None => FastrandRandom::new(),
    };
    info!(
        alphabet_size = resolved.alphabet.len(),
        target_len = resolved.target.len(),
        seed = ?resolved.seed,
        "starting word guess"
    );

    let mut guesser = RandomGuesser::new(resolved.alphabet, resolved.target, random);
    let mut driver = SearchDriver::new(
        InstantClock::new(),
        ConsoleSink::stdout(),
        shutdown,
        resolved.settings,
    );
    driver.run(&mut guesser)?;

    Ok(())
}
