// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Alphabet, Random, Target};

/// Placeholder written into the candidate buffer before each attempt.
const BLANK: char = '\0';

/// Fills `candidate` with symbols drawn uniformly from `alphabet`, then
/// scans it against `target` left to right, stopping at the first mismatch.
///
/// Returns true iff every position matched. An empty target always matches.
///
/// # Panics
///
/// If `candidate` and `target` differ in length.
pub fn generate_and_match<R: Random + ?Sized>(
    alphabet: &Alphabet,
    target: &[char],
    candidate: &mut [char],
    random: &mut R,
) -> bool {
    assert_eq!(
        candidate.len(),
        target.len(),
        "candidate buffer length must equal target length"
    );

    let symbols = alphabet.symbols();
    for slot in candidate.iter_mut() {
        *slot = symbols[random.usize(0..symbols.len())];
    }

    let mut position = 0;
    while position < target.len() && candidate[position] == target[position] {
        position += 1;
    }
    position == target.len()
}

/// One generate-and-compare attempt per call.
pub trait Guesser {
    fn guess(&mut self) -> bool;
    fn target(&self) -> &Target;
}

/// Uninformed uniform random search: no state survives between attempts
/// other than the reused buffer, which is blanked before every draw.
pub struct RandomGuesser<R: Random> {
    alphabet: Alphabet,
    target: Target,
    candidate: Vec<char>,
    random: R,
}

impl<R: Random> RandomGuesser<R> {
    pub fn new(alphabet: Alphabet, target: Target, random: R) -> Self {
        let candidate = vec![BLANK; target.len()];
        Self {
            alphabet,
            target,
            candidate,
            random,
        }
    }

    /// Candidate produced by the most recent `guess`.
    pub fn last_candidate(&self) -> &[char] {
        &self.candidate
    }
}

impl<R: Random> Guesser for RandomGuesser<R> {
    fn guess(&mut self) -> bool {
        self.candidate.fill(BLANK);
        generate_and_match(
            &self.alphabet,
            self.target.symbols(),
            &mut self.candidate,
            &mut self.random,
        )
    }

    fn target(&self) -> &Target {
        &self.target
    }
}
