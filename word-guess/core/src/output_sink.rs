// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::io;

/// Destination for liveness markers and the final report.
pub trait OutputSink {
    /// Emits a single marker with no line break. Must be visible immediately.
    fn progress_marker(&mut self) -> io::Result<()>;

    /// Emits one complete line of text.
    fn report(&mut self, line: &str) -> io::Result<()>;
}
