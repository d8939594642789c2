// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Trait for observing an external request to stop searching
pub trait ShutdownSignal: Send {
    fn is_cancelled(&self) -> bool;
}
