// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod error;
pub use error::{ConfigError, SearchError};

mod alphabet;
pub use alphabet::{Alphabet, Target};

pub mod random;
pub use random::Random;

pub mod fastrand_random;
pub use fastrand_random::FastrandRandom;

pub mod clock;
pub use clock::Clock;

pub mod instant_clock;
pub use instant_clock::InstantClock;

pub mod output_sink;
pub use output_sink::OutputSink;

pub mod console_sink;
pub use console_sink::ConsoleSink;

pub mod shutdown_signal;
pub use shutdown_signal::ShutdownSignal;

pub mod atomic_shutdown_signal;
pub use atomic_shutdown_signal::AtomicShutdownSignal;

mod guesser;
pub use guesser::{generate_and_match, Guesser, RandomGuesser};

pub mod search_driver;
pub use search_driver::{
    SearchDriver, SearchOutcome, SearchReport, SearchSettings, SearchState, Throughput,
};

mod search_config;
pub use search_config::{
    ConfigOverrides, ResolvedConfig, SearchConfig, DEFAULT_ALPHABET, DEFAULT_TARGET,
};
