// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Clock, Guesser, OutputSink, SearchError, ShutdownSignal};
use std::num::NonZeroU64;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_PROGRESS_INTERVAL: NonZeroU64 = match NonZeroU64::new(100_000) {
    Some(interval) => interval,
    None => unreachable!(),
};
pub const DEFAULT_ELAPSED_PRECISION: usize = 4;
pub const DEFAULT_RATE_PRECISION: usize = 2;

/// Presentation knobs for the driver loop. None of them affect the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// One progress marker every this many attempts.
    pub progress_interval: NonZeroU64,
    /// Decimal digits for elapsed milliseconds.
    pub elapsed_precision: usize,
    /// Decimal digits for attempts per millisecond.
    pub rate_precision: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            elapsed_precision: DEFAULT_ELAPSED_PRECISION,
            rate_precision: DEFAULT_RATE_PRECISION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Succeeded,
    Cancelled,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Succeeded { matched: String },
    Cancelled,
}

/// Attempts per millisecond. Undefined when the elapsed time would print as
/// zero at the report's precision, which happens when a match lands inside
/// one clock tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Throughput {
    PerMillisecond(f64),
    Undefined,
}

impl Throughput {
    pub fn measure(attempts: u64, elapsed: Duration, elapsed_precision: usize) -> Self {
        let elapsed_ms = duration_ms(elapsed);
        if elapsed.is_zero() || elapsed_ms < display_resolution_ms(elapsed_precision) {
            return Throughput::Undefined;
        }
        Throughput::PerMillisecond(attempts as f64 / elapsed_ms)
    }

    fn render(&self, precision: usize) -> String {
        match self {
            Throughput::PerMillisecond(rate) => format!("{:.*} a/ms", precision, rate),
            Throughput::Undefined => "n/a a/ms (elapsed time too short to measure)".to_string(),
        }
    }
}

/// Smallest elapsed value that does not round to zero at `precision` digits.
fn display_resolution_ms(precision: usize) -> f64 {
    0.5 / 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub attempts: u64,
    pub elapsed: Duration,
    pub throughput: Throughput,
}

impl SearchReport {
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.elapsed)
    }

    /// Single human-readable line: outcome phrase, attempts, timing.
    pub fn render(&self, settings: &SearchSettings) -> String {
        let headline = match &self.outcome {
            SearchOutcome::Succeeded { matched } => {
                format!("found '{}' in {} attempts", matched, self.attempts)
            }
            SearchOutcome::Cancelled => format!("exiting after {} attempts", self.attempts),
        };
        format!(
            "{}, took {:.*}ms, {}",
            headline,
            settings.elapsed_precision,
            self.elapsed_ms(),
            self.throughput.render(settings.rate_precision)
        )
    }
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Repeats attempts until one matches or the shutdown signal trips, then
/// writes the final report to the sink.
pub struct SearchDriver<C: Clock, O: OutputSink, S: ShutdownSignal> {
    clock: C,
    sink: O,
    signal: S,
    settings: SearchSettings,
}

impl<C: Clock, O: OutputSink, S: ShutdownSignal> SearchDriver<C, O, S> {
    pub fn new(clock: C, sink: O, signal: S, settings: SearchSettings) -> Self {
        Self {
            clock,
            sink,
            signal,
            settings,
        }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn sink(&self) -> &O {
        &self.sink
    }

    pub fn into_sink(self) -> O {
        self.sink
    }

    pub fn run<G: Guesser + ?Sized>(&mut self, guesser: &mut G) -> Result<SearchReport, SearchError> {
        let start = self.clock.now();
        let interval = self.settings.progress_interval.get();
        let mut attempts: u64 = 0;
        let mut state = SearchState::Running;

        info!(target_len = guesser.target().len(), "search started");

        while !state.is_terminal() {
            if self.signal.is_cancelled() {
                state = SearchState::Cancelled;
                break;
            }

            let matched = guesser.guess();
            attempts += 1;

            if attempts % interval == 0 {
                self.sink.progress_marker()?;
            }
            if matched {
                state = SearchState::Succeeded;
            }
        }

        let elapsed = self.clock.now().saturating_sub(start);
        let outcome = match state {
            SearchState::Succeeded => SearchOutcome::Succeeded {
                matched: guesser.target().to_string(),
            },
            _ => SearchOutcome::Cancelled,
        };

        let report = SearchReport {
            outcome,
            attempts,
            elapsed,
            throughput: Throughput::measure(attempts, elapsed, self.settings.elapsed_precision),
        };
        info!(?state, attempts, "search finished");
        debug!(elapsed_ms = report.elapsed_ms(), throughput = ?report.throughput);

        self.sink.report(&report.render(&self.settings))?;
        Ok(report)
    }
}
