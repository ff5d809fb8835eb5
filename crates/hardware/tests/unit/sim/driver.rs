//! Frame Driver Tests.

use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::rstest;
use twelvebit_core::config::DriverConfig;
use twelvebit_core::isa::opcodes::*;
use twelvebit_core::sim::{FrameDriver, RunOutcome, Speed};

use crate::common::harness::TestContext;
use crate::common::programs::COUNTDOWN;

fn driver() -> FrameDriver {
    FrameDriver::new(&DriverConfig::default())
}

#[rstest]
#[case(Duration::ZERO, 0)]
#[case(Duration::from_nanos(1), 1)]
#[case(Duration::from_micros(1), 1)]
#[case(Duration::from_millis(1), 1_000)]
#[case(Duration::from_micros(16_666), 16_666)]
#[case(Duration::from_secs(1), 16_666)]
fn test_fast_ticks(#[case] elapsed: Duration, #[case] ticks: u64) {
    assert_eq!(driver().ticks_for(elapsed), ticks);
}

#[test]
fn test_fast_ticks_saturate() {
    let driver = FrameDriver::new(&DriverConfig {
        fast_target_hz: u64::MAX,
        max_ticks_per_frame: 500,
    });
    assert_eq!(driver.ticks_for(Duration::MAX), 500);
    assert_eq!(driver.ticks_for(Duration::from_secs(u64::MAX / 2)), 500);
}

#[test]
fn test_slow_is_one_tick() {
    let mut driver = driver();
    driver.speed = Speed::Slow;
    assert_eq!(driver.ticks_for(Duration::ZERO), 1);
    assert_eq!(driver.ticks_for(Duration::from_secs(5)), 1);
}

#[test]
fn test_starts_fast() {
    assert_eq!(driver().speed, Speed::Fast);
}

#[test]
fn test_frame_collects_outputs() {
    let mut ctx = TestContext::new().load_program(COUNTDOWN);
    ctx.set_run(true);

    let report = driver().run_frame(&mut ctx.engine, Duration::from_millis(1));
    assert_eq!(report.ticks, 1_000);
    assert_eq!(report.executed, 45);
    assert_eq!(report.outputs, vec![3, 2, 1]);
    assert!(ctx.engine.status.halted);
}

#[test]
fn test_slow_frames_step_one_cycle() {
    let mut ctx = TestContext::new().load_program(COUNTDOWN);
    ctx.set_run(true);
    let mut driver = driver();
    driver.speed = Speed::Slow;

    for expected in 1..=5 {
        let report = driver.run_frame(&mut ctx.engine, Duration::from_millis(16));
        assert_eq!(report.executed, 1);
        assert_eq!(ctx.engine.stats.machine_cycles, expected);
    }
    assert_eq!(ctx.a(), 3);
}

#[test]
fn test_run_until_halt() {
    let mut ctx = TestContext::new().load_program(COUNTDOWN);
    ctx.set_run(true);

    let report = driver().run_until_halt(&mut ctx.engine, 1_000);
    assert_eq!(report.outcome, RunOutcome::Halted);
    assert_eq!(report.cycles, 45);
    assert_eq!(report.outputs, vec![3, 2, 1]);
}

#[test]
fn test_run_until_halt_idle() {
    let mut ctx = TestContext::new().load_program(COUNTDOWN);
    let report = driver().run_until_halt(&mut ctx.engine, 1_000);
    assert_eq!(report.outcome, RunOutcome::Idle);
    assert_eq!(report.cycles, 0);
}

#[test]
fn test_run_until_halt_cycle_limit() {
    let mut ctx = TestContext::new().load_program(&[JMP, 0]);
    ctx.set_run(true);

    let report = driver().run_until_halt(&mut ctx.engine, 100);
    assert_eq!(report.outcome, RunOutcome::CycleLimit);
    assert_eq!(report.cycles, 100);
    assert!(ctx.engine.status.running);
}

#[test]
fn test_queued_keys_feed_latch() {
    let mut ctx = TestContext::new().load_program(&[KEY, OUT, KEY, OUT, KEY, OUT, HLT]);
    ctx.set_run(true);
    let mut driver = driver();
    driver.queue_keys([0o101, 0o102]);
    assert_eq!(driver.pending_keys(), 2);

    let report = driver.run_until_halt(&mut ctx.engine, 1_000);
    assert_eq!(report.outcome, RunOutcome::Halted);
    assert_eq!(report.outputs, vec![0o101, 0o102, 0]);
    assert_eq!(driver.pending_keys(), 0);
}
