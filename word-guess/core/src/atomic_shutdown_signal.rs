// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::ShutdownSignal;

/// Shutdown signal backed by a shared atomic flag, safe to trip from a
/// signal handler thread
#[derive(Clone, Default)]
pub struct AtomicShutdownSignal {
    flag: Arc<AtomicBool>,
}

impl AtomicShutdownSignal {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl ShutdownSignal for AtomicShutdownSignal {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
