// File: crates/charge-monitor/tests/sampler.rs
// Purpose: Sampling loop termination, recording alignment and pacing.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use charge_monitor::clock::{Clock, ManualClock};
use charge_monitor::progress::{NoProgress, ProgressSink};
use charge_monitor::{
    BatteryStatus, MonitorError, ReplaySource, Sampler, SamplerConfig, StatusError, StatusSource,
    StopCondition,
};

fn reading(percentage: u32) -> BatteryStatus {
    BatteryStatus {
        percentage,
        temperature: 30.0 + percentage as f64 / 10.0,
        current: -1_000_000,
        health: None,
        plugged: None,
        status: None,
    }
}

fn replay(percentages: &[u32]) -> ReplaySource {
    ReplaySource::from_readings("scripted", percentages.iter().copied().map(reading).collect())
}

fn config(stop: StopCondition, interval_ms: u64) -> SamplerConfig {
    SamplerConfig { stop, interval: Duration::from_millis(interval_ms) }
}

#[derive(Default)]
struct Recorded {
    updates: Vec<u8>,
    finished: bool,
}

impl ProgressSink for Recorded {
    fn update(&mut self, percent: u8, _elapsed: Duration) {
        self.updates.push(percent);
    }
    fn finish(&mut self, _elapsed: Duration) {
        self.finished = true;
    }
}

#[test]
fn stops_when_percentage_target_is_reached() {
    let source = replay(&[70, 75, 80, 85, 90]);
    let mut sampler = Sampler::new(source, ManualClock::new(), config(StopCondition::new(80, None), 1000));
    let mut progress = Recorded::default();

    let rec = sampler.run(&mut progress).unwrap();

    assert_eq!(rec.len(), 3);
    assert_eq!(rec.percentage(), &[70.0, 75.0, 80.0]);
    assert_eq!(progress.updates, vec![87, 93, 100]);
    assert!(progress.finished);
}

#[test]
fn stops_when_time_limit_is_reached() {
    let source = replay(&[10; 50]);
    let stop = StopCondition::new(100, Some(Duration::from_secs(5)));
    let mut sampler = Sampler::new(source, ManualClock::new(), config(stop, 1000));

    let rec = sampler.run(&mut NoProgress).unwrap();

    // readings at 0..=5 s; the sixth hits 100% time progress
    assert_eq!(rec.timestamps(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    // no sleep after the final reading
    assert_eq!(sampler.clock().sleeps().len(), 5);
    assert!(sampler.clock().sleeps().iter().all(|d| *d == Duration::from_secs(1)));
}

#[test]
fn columns_stay_aligned_and_converted() {
    let source = replay(&[98, 99, 100]);
    let mut sampler = Sampler::new(source, ManualClock::new(), config(StopCondition::default(), 250));

    let rec = sampler.run(&mut NoProgress).unwrap();

    assert_eq!(rec.len(), 3);
    assert_eq!(rec.timestamps().len(), rec.percentage().len());
    assert_eq!(rec.temperature().len(), rec.current().len());
    assert_eq!(rec.timestamps(), &[0.0, 0.25, 0.5]);
    assert_eq!(rec.current(), &[1000.0, 1000.0, 1000.0]);
    assert!((rec.temperature()[2] - 40.0).abs() < 1e-9);
}

#[test]
fn exhausted_source_ends_the_loop_early() {
    let source = replay(&[10, 11]);
    let mut sampler = Sampler::new(source, ManualClock::new(), config(StopCondition::default(), 0));
    let rec = sampler.run(&mut NoProgress).unwrap();
    assert_eq!(rec.len(), 2);

    let mut empty = Sampler::new(replay(&[]), ManualClock::new(), config(StopCondition::default(), 0));
    assert!(empty.run(&mut NoProgress).unwrap().is_empty());
}

struct Flaky {
    calls: usize,
}

impl StatusSource for Flaky {
    fn read(&mut self) -> Result<BatteryStatus, StatusError> {
        self.calls += 1;
        if self.calls < 3 {
            Ok(reading(50))
        } else {
            Err(StatusError::Failed { command: "flaky".into(), code: "status 1".into(), stderr: String::new() })
        }
    }
}

#[test]
fn status_errors_abort_the_loop() {
    let mut sampler = Sampler::new(Flaky { calls: 0 }, ManualClock::new(), config(StopCondition::default(), 10));
    let err = sampler.run(&mut NoProgress).unwrap_err();
    assert!(matches!(err, MonitorError::Status(StatusError::Failed { .. })));
}

#[test]
fn discharge_target_is_tracked_from_first_reading() {
    let source = replay(&[60, 50, 40, 30, 20, 10]);
    let mut sampler = Sampler::new(source, ManualClock::new(), config(StopCondition::new(30, None), 1000));
    let mut progress = Recorded::default();
    let rec = sampler.run(&mut progress).unwrap();
    assert_eq!(rec.len(), 4);
    assert_eq!(progress.updates, vec![0, 33, 66, 100]);
}

/// Clock handle shared between the sampler and a sink that burns time.
#[derive(Clone, Default)]
struct SharedClock(Rc<RefCell<ManualClock>>);

impl Clock for SharedClock {
    fn elapsed(&self) -> Duration {
        self.0.borrow().elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        self.0.borrow_mut().sleep(duration);
    }
}

/// Advances the clock on every update, as a slow reading would.
struct Busy {
    clock: SharedClock,
    cost: Duration,
}

impl ProgressSink for Busy {
    fn update(&mut self, _percent: u8, _elapsed: Duration) {
        self.clock.0.borrow_mut().advance(self.cost);
    }
    fn finish(&mut self, _elapsed: Duration) {}
}

fn run_with_cost(cost_ms: u64) -> (Vec<f64>, Vec<Duration>) {
    let clock = SharedClock::default();
    let mut sampler = Sampler::new(replay(&[98, 99, 100]), clock.clone(), config(StopCondition::default(), 1000));
    let mut busy = Busy { clock: clock.clone(), cost: Duration::from_millis(cost_ms) };
    let rec = sampler.run(&mut busy).unwrap();
    let sleeps = clock.0.borrow().sleeps().to_vec();
    (rec.timestamps().to_vec(), sleeps)
}

#[test]
fn sleep_subtracts_time_spent_after_the_reading() {
    let (timestamps, sleeps) = run_with_cost(300);
    assert_eq!(sleeps, vec![Duration::from_millis(700); 2]);
    assert_eq!(timestamps, vec![0.0, 1.0, 2.0]);
}

#[test]
fn slow_readings_do_not_sleep_at_all() {
    let (timestamps, sleeps) = run_with_cost(1500);
    assert_eq!(sleeps, vec![Duration::ZERO; 2]);
    assert_eq!(timestamps, vec![0.0, 1.5, 3.0]);
}
