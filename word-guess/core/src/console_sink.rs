// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::OutputSink;
use std::io::{self, Stdout, Write};

pub const PROGRESS_MARKER: char = '.';

/// Writes markers and report lines to any `Write`, flushing after each one.
pub struct ConsoleSink<W: Write> {
    writer: W,
    markers_pending: bool,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            markers_pending: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn progress_marker(&mut self) -> io::Result<()> {
        write!(self.writer, "{}", PROGRESS_MARKER)?;
        self.markers_pending = true;
        self.writer.flush()
    }

    fn report(&mut self, line: &str) -> io::Result<()> {
        // Start the report on its own line after a run of markers
        if self.markers_pending {
            writeln!(self.writer)?;
            self.markers_pending = false;
        }
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}
