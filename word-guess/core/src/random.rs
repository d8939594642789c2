// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Uniform source of symbol indices for candidate generation.
pub trait Random: Send {
    /// Draws uniformly from the half-open `range`.
    fn usize(&mut self, range: std::ops::Range<usize>) -> usize;
}
