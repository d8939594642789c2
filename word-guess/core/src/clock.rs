// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Monotonic wall-clock reading, measured from the clock's own origin.
pub trait Clock: Send {
    fn now(&self) -> Duration;
}
