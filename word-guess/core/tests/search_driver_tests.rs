// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::Cell;
use std::io;
use std::num::NonZeroU64;
use std::time::Duration;
use word_guess_core::{
    Alphabet, AtomicShutdownSignal, Clock, ConsoleSink, Guesser, OutputSink, Random,
    RandomGuesser, SearchDriver, SearchOutcome, SearchSettings, ShutdownSignal, Target,
    Throughput,
};

// ============================================================
// Fakes
// ============================================================

/// Returns each scripted reading once, then repeats the last one.
struct ScriptedClock {
    readings: Vec<Duration>,
    next: Cell<usize>,
}

impl ScriptedClock {
    fn new(readings: &[Duration]) -> Self {
        Self {
            readings: readings.to_vec(),
            next: Cell::new(0),
        }
    }

    fn frozen() -> Self {
        Self::new(&[Duration::ZERO])
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> Duration {
        let index = self.next.get().min(self.readings.len() - 1);
        self.next.set(self.next.get() + 1);
        self.readings[index]
    }
}

#[derive(Default)]
struct RecordingSink {
    markers: u64,
    lines: Vec<String>,
}

impl OutputSink for RecordingSink {
    fn progress_marker(&mut self) -> io::Result<()> {
        self.markers += 1;
        Ok(())
    }

    fn report(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

struct FailingSink;

impl OutputSink for FailingSink {
    fn progress_marker(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn report(&mut self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

struct NeverCancel;

impl ShutdownSignal for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Reports cancellation once `allowed` polls have passed.
struct CancelAfter {
    allowed: u64,
    polls: Cell<u64>,
}

impl CancelAfter {
    fn new(allowed: u64) -> Self {
        Self {
            allowed,
            polls: Cell::new(0),
        }
    }
}

impl ShutdownSignal for CancelAfter {
    fn is_cancelled(&self) -> bool {
        let polls = self.polls.get();
        self.polls.set(polls + 1);
        polls >= self.allowed
    }
}

/// Fails every attempt until `succeed_on`, if set.
struct ScriptedGuesser {
    target: Target,
    succeed_on: Option<u64>,
    calls: u64,
}

impl ScriptedGuesser {
    fn new(succeed_on: Option<u64>) -> Self {
        Self {
            target: Target::new("ab", &Alphabet::lowercase()).unwrap(),
            succeed_on,
            calls: 0,
        }
    }
}

impl Guesser for ScriptedGuesser {
    fn guess(&mut self) -> bool {
        self.calls += 1;
        Some(self.calls) == self.succeed_on
    }

    fn target(&self) -> &Target {
        &self.target
    }
}

struct ScriptedRandom(Vec<usize>);

impl Random for ScriptedRandom {
    fn usize(&mut self, _range: std::ops::Range<usize>) -> usize {
        self.0.remove(0)
    }
}

fn settings_with_interval(interval: u64) -> SearchSettings {
    SearchSettings {
        progress_interval: NonZeroU64::new(interval).unwrap(),
        ..SearchSettings::default()
    }
}

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

// ============================================================
// Attempt counting and success
// ============================================================

#[test]
fn test_attempts_increase_by_one_per_iteration() {
    let mut guesser = ScriptedGuesser::new(Some(7));
    let mut driver = SearchDriver::new(
        ScriptedClock::frozen(),
        RecordingSink::default(),
        NeverCancel,
        SearchSettings::default(),
    );

    let report = driver.run(&mut guesser).unwrap();

    assert_eq!(report.attempts, 7);
    assert_eq!(guesser.calls, 7, "Every counted attempt is exactly one guess");
}

#[test]
fn test_scripted_random_search_succeeds_on_third_attempt() {
    let alphabet = Alphabet::lowercase();
    let target = Target::new("ab", &alphabet).unwrap();
    // "az", "ba", "ab"
    let random = ScriptedRandom(vec![0, 25, 1, 0, 0, 1]);
    let mut guesser = RandomGuesser::new(alphabet, target, random);
    let mut driver = SearchDriver::new(
        ScriptedClock::new(&[millis(0), millis(3)]),
        RecordingSink::default(),
        NeverCancel,
        SearchSettings::default(),
    );

    let report = driver.run(&mut guesser).unwrap();

    assert_eq!(report.attempts, 3);
    assert_eq!(
        report.outcome,
        SearchOutcome::Succeeded {
            matched: "ab".to_string()
        }
    );
    assert_eq!(
        driver.sink().lines,
        vec!["found 'ab' in 3 attempts, took 3.0000ms, 1.00 a/ms".to_string()]
    );
}

#[test]
fn test_empty_target_succeeds_on_first_attempt() {
    let alphabet = Alphabet::lowercase();
    let target = Target::new("", &alphabet).unwrap();
    let mut guesser = RandomGuesser::new(alphabet, target, ScriptedRandom(Vec::new()));
    let mut driver = SearchDriver::new(
        ScriptedClock::new(&[millis(0), millis(1)]),
        RecordingSink::default(),
        NeverCancel,
        SearchSettings::default(),
    );

    let report = driver.run(&mut guesser).unwrap();

    assert_eq!(report.attempts, 1);
    assert_eq!(
        report.outcome,
        SearchOutcome::Succeeded {
            matched: String::new()
        }
    );
}

// ============================================================
// Progress markers
// ============================================================

#[test]
fn test_progress_marker_once_per_hundred_thousand_attempts() {
    let mut guesser = ScriptedGuesser::new(Some(250_000));
    let mut driver = SearchDriver::new(
        ScriptedClock::frozen(),
        RecordingSink::default(),
        NeverCancel,
        SearchSettings::default(),
    );

    driver.run(&mut guesser).unwrap();

    assert_eq!(driver.sink().markers, 2);
}

#[test]
fn test_progress_marker_emitted_on_matching_multiple() {
    let mut guesser = ScriptedGuesser::new(Some(300_000));
    let mut driver = SearchDriver::new(
        ScriptedClock::frozen(),
        RecordingSink::default(),
        NeverCancel,
        SearchSettings::default(),
    );

    driver.run(&mut guesser).unwrap();

    assert_eq!(driver.sink().markers, 3);
}

#[test]
fn test_no_progress_marker_before_first_interval() {
    let mut guesser = ScriptedGuesser::new(Some(99_999));
    let mut driver = SearchDriver::new(
        ScriptedClock::frozen(),
        RecordingSink::default(),
        NeverCancel,
        SearchSettings::default(),
    );

    driver.run(&mut guesser).unwrap();

    assert_eq!(driver.sink().markers, 0);
}

#[test]
fn test_custom_progress_interval() {
    let mut guesser = ScriptedGuesser::new(Some(35));
    let mut driver = SearchDriver::new(
        ScriptedClock::frozen(),
        RecordingSink::default(),
        NeverCancel,
        settings_with_interval(10),
    );

    driver.run(&mut guesser).unwrap();

    assert_eq!(driver.sink().markers, 3);
}

#[test]
fn test_console_sink_puts_report_on_its_own_line_after_markers() {
    let mut guesser = ScriptedGuesser::new(Some(4));
    let mut driver = SearchDriver::new(
        ScriptedClock::new(&[millis(0), millis(2)]),
        ConsoleSink::new(Vec::new()),
        NeverCancel,
        settings_with_interval(2),
    );

    driver.run(&mut guesser).unwrap();

    let output = String::from_utf8(driver.into_sink().into_inner()).unwrap();
    assert_eq!(output, "..\nfound 'ab' in 4 attempts, took 2.0000ms, 2.00 a/ms\n");
}

// ============================================================
// Cancellation
// ============================================================

#[test]
fn test_cancellation_after_five_attempts_reports_count() {
    let mut guesser = ScriptedGuesser::new(None);
    let mut driver = SearchDriver::new(
        ScriptedClock::new(&[millis(0), millis(10)]),
        RecordingSink::default(),
        CancelAfter::new(5),
        SearchSettings::default(),
    );

    let report = driver.run(&mut guesser).unwrap();

    assert_eq!(report.outcome, SearchOutcome::Cancelled);
    assert_eq!(report.attempts, 5);
    assert_eq!(guesser.calls, 5);
    assert_eq!(
        driver.sink().lines,
        vec!["exiting after 5 attempts, took 10.0000ms, 0.50 a/ms".to_string()]
    );
}

#[test]
fn test_cancellation_before_first_attempt() {
    let shutdown = AtomicShutdownSignal::new();
    shutdown.shutdown();
    let mut guesser = ScriptedGuesser::new(Some(1));
    let mut driver = SearchDriver::new(
        ScriptedClock::frozen(),
        RecordingSink::default(),
        shutdown,
        SearchSettings::default(),
    );

    let report = driver.run(&mut guesser).unwrap();

    assert_eq!(report.outcome, SearchOutcome::Cancelled);
    assert_eq!(report.attempts, 0);
    assert_eq!(guesser.calls, 0);
    assert_eq!(driver.sink().lines.len(), 1);
}

#[test]
fn test_atomic_shutdown_signal_is_shared_between_clones() {
    let shutdown = AtomicShutdownSignal::new();
    let handler_copy = shutdown.clone();
    assert!(!shutdown.is_cancelled());

    handler_copy.shutdown();

    assert!(shutdown.is_cancelled());
}

// ============================================================
// Timing and throughput
// ============================================================

#[test]
fn test_zero_elapsed_time_reports_undefined_throughput() {
    let mut guesser = ScriptedGuesser::new(Some(1));
    let mut driver = SearchDriver::new(
        ScriptedClock::frozen(),
        RecordingSink::default(),
        NeverCancel,
        SearchSettings::default(),
    );

    let report = driver.run(&mut guesser).unwrap();

    assert_eq!(report.elapsed, Duration::ZERO);
    assert_eq!(report.throughput, Throughput::Undefined);
    assert_eq!(
        driver.sink().lines,
        vec![
            "found 'ab' in 1 attempts, took 0.0000ms, n/a a/ms (elapsed time too short to measure)"
                .to_string()
        ]
    );
}

#[test]
fn test_throughput_uses_fractional_milliseconds() {
    assert_eq!(
        Throughput::measure(3, Duration::from_micros(1_500), 4),
        Throughput::PerMillisecond(2.0)
    );
}

#[test]
fn test_elapsed_below_display_precision_reports_undefined_throughput() {
    let mut guesser = ScriptedGuesser::new(Some(2));
    let mut driver = SearchDriver::new(
        ScriptedClock::new(&[Duration::ZERO, Duration::from_nanos(20)]),
        RecordingSink::default(),
        NeverCancel,
        SearchSettings::default(),
    );

    let report = driver.run(&mut guesser).unwrap();

    assert_eq!(report.throughput, Throughput::Undefined);
    assert_eq!(
        driver.sink().lines,
        vec![
            "found 'ab' in 2 attempts, took 0.0000ms, n/a a/ms (elapsed time too short to measure)"
                .to_string()
        ]
    );
}

#[test]
fn test_sub_microsecond_elapsed_measured_at_finer_precision() {
    let elapsed = Duration::from_nanos(20);

    assert_eq!(Throughput::measure(1, elapsed, 4), Throughput::Undefined);
    assert!(matches!(
        Throughput::measure(1, elapsed, 8),
        Throughput::PerMillisecond(rate) if rate > 0.0
    ));
}

#[test]
fn test_custom_precision_in_report() {
    let mut guesser = ScriptedGuesser::new(Some(3));
    let mut driver = SearchDriver::new(
        ScriptedClock::new(&[millis(0), millis(4)]),
        RecordingSink::default(),
        NeverCancel,
        SearchSettings {
            elapsed_precision: 1,
            rate_precision: 3,
            ..SearchSettings::default()
        },
    );

    driver.run(&mut guesser).unwrap();

    assert_eq!(driver.settings().elapsed_precision, 1);
    assert_eq!(driver.settings().rate_precision, 3);
    assert_eq!(
        driver.sink().lines,
        vec!["found 'ab' in 3 attempts, took 4.0ms, 0.750 a/ms".to_string()]
    );
}

// ============================================================
// Output failures
// ============================================================

#[test]
fn test_sink_failure_propagates_as_error() {
    let mut guesser = ScriptedGuesser::new(Some(1));
    let mut driver = SearchDriver::new(
        ScriptedClock::frozen(),
        FailingSink,
        NeverCancel,
        SearchSettings::default(),
    );

    assert!(driver.run(&mut guesser).is_err());
}
