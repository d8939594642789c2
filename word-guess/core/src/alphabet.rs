// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ConfigError;
use std::collections::HashSet;
use std::fmt;

/// Ordered, duplicate-free set of symbols that candidates are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self, ConfigError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for &symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols })
    }

    /// The letters `a` through `z`.
    pub fn lowercase() -> Self {
        Self {
            symbols: ('a'..='z').collect(),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

/// Fixed sequence the search tries to reproduce. Every symbol is known to
/// belong to the alphabet it was validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    symbols: Vec<char>,
}

impl Target {
    pub fn new(text: &str, alphabet: &Alphabet) -> Result<Self, ConfigError> {
        let symbols: Vec<char> = text.chars().collect();
        if let Some((position, &symbol)) = symbols
            .iter()
            .enumerate()
            .find(|(_, symbol)| !alphabet.contains(**symbol))
        {
            return Err(ConfigError::SymbolNotInAlphabet { symbol, position });
        }
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
