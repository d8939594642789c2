// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("alphabet lists symbol '{0}' more than once")]
    DuplicateSymbol(char),

    #[error("target symbol '{symbol}' at position {position} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: char, position: usize },

    #[error("progress interval must be greater than zero")]
    ZeroProgressInterval,

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("output sink failed: {0}")]
    Output(#[from] std::io::Error),
}
