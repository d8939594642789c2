// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;

pub struct FastrandRandom {
    rng: fastrand::Rng,
}

impl FastrandRandom {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible stream for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastrandRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Random for FastrandRandom {
    fn usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.rng.usize(range)
    }
}
