// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::search_driver::{
    DEFAULT_ELAPSED_PRECISION, DEFAULT_PROGRESS_INTERVAL, DEFAULT_RATE_PRECISION,
};
use crate::{Alphabet, ConfigError, SearchSettings, Target};
use serde::Deserialize;
use std::fs;
use std::num::NonZeroU64;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DEFAULT_TARGET: &str = "paste";

/// Raw, unvalidated run configuration as read from JSON or built from flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub alphabet: String,
    pub target: String,
    pub progress_interval: u64,
    pub elapsed_precision: usize,
    pub rate_precision: usize,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            target: DEFAULT_TARGET.to_string(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL.get(),
            elapsed_precision: DEFAULT_ELAPSED_PRECISION,
            rate_precision: DEFAULT_RATE_PRECISION,
            seed: None,
        }
    }
}

/// Values supplied on the command line. Each one that is set replaces the
/// corresponding file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub target: Option<String>,
    pub alphabet: Option<String>,
    pub seed: Option<u64>,
    pub progress_interval: Option<u64>,
}

/// Validated pieces ready to wire into a guesser and a driver.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub alphabet: Alphabet,
    pub target: Target,
    pub settings: SearchSettings,
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` when given and fails on any error. Otherwise tries
    /// `fallback`, using defaults if it is missing (silently) or unreadable
    /// or malformed (with a warning).
    pub fn load_or_default(explicit: Option<&Path>, fallback: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::load(fallback) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!("no {} found, using defaults", fallback.display());
                Ok(Self::default())
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Ok(Self::default())
            }
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(target) = &overrides.target {
            self.target = target.clone();
        }
        if let Some(alphabet) = &overrides.alphabet {
            self.alphabet = alphabet.clone();
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(interval) = overrides.progress_interval {
            self.progress_interval = interval;
        }
    }

    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let alphabet = Alphabet::new(&self.alphabet)?;
        let target = Target::new(&self.target, &alphabet)?;
        let progress_interval =
            NonZeroU64::new(self.progress_interval).ok_or(ConfigError::ZeroProgressInterval)?;

        Ok(ResolvedConfig {
            alphabet,
            target,
            settings: SearchSettings {
                progress_interval,
                elapsed_precision: self.elapsed_precision,
                rate_precision: self.rate_precision,
            },
            seed: self.seed,
        })
    }
}
