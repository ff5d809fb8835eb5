//! Frame Driver.
//!
//! The engine executes one machine cycle per `update` call and never paces
//! itself. This module plays the role of the panel's animation loop. It provides:
//! 1. **Pacing:** One tick per frame in slow mode, or enough ticks to hit a target rate in fast mode.
//! 2. **Output:** Collects OUT values as the engine stamps them.
//! 3. **Keys:** Feeds queued keys into the key latch whenever it is empty.
//! 4. **Batch Runs:** Runs a program to HLT under a cycle limit.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::debug;

use crate::common::Word;
use crate::config::DriverConfig;
use crate::core::Engine;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Panel speed switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Speed {
    /// One machine cycle per frame.
    Slow,
    /// As many machine cycles as the elapsed time allows at the target rate.
    #[default]
    Fast,
}

/// What happened during one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// `update` calls made.
    pub ticks: u64,
    /// Ticks that executed a machine cycle.
    pub executed: u64,
    /// OUT values, in order.
    pub outputs: Vec<Word>,
}

/// Why [`FrameDriver::run_until_halt`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// HLT executed.
    Halted,
    /// The engine stopped executing without halting (off, or not running).
    Idle,
    /// The cycle limit was reached first.
    CycleLimit,
}

/// Result of [`FrameDriver::run_until_halt`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Why the run ended.
    pub outcome: RunOutcome,
    /// Machine cycles executed.
    pub cycles: u64,
    /// OUT values, in order.
    pub outputs: Vec<Word>,
}

/// Paces `update` calls and gathers their side effects.
#[derive(Debug)]
pub struct FrameDriver {
    /// Speed switch.
    pub speed: Speed,
    fast_target_hz: u64,
    max_ticks_per_frame: u64,
    keys: VecDeque<Word>,
}

impl FrameDriver {
    /// Creates a driver in fast mode.
    pub fn new(config: &DriverConfig) -> Self {
        Self {
            speed: Speed::Fast,
            fast_target_hz: config.fast_target_hz,
            max_ticks_per_frame: config.max_ticks_per_frame,
            keys: VecDeque::new(),
        }
    }

    /// Queues keys to be latched, one at a time, as the program reads them.
    pub fn queue_keys(&mut self, keys: impl IntoIterator<Item = Word>) {
        self.keys.extend(keys);
    }

    /// Keys not yet handed to the engine.
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Number of ticks owed for a frame.
    ///
    /// # Arguments
    ///
    /// * `elapsed` - Host time since the previous frame.
    ///
    /// # Returns
    ///
    /// 1 in slow mode. In fast mode, `ceil(fast_target_hz * elapsed)` capped
    /// at `max_ticks_per_frame`, so a long pause does not cause a burst.
    pub fn ticks_for(&self, elapsed: Duration) -> u64 {
        match self.speed {
            Speed::Slow => 1,
            Speed::Fast => {
                let owed = u128::from(self.fast_target_hz)
                    .saturating_mul(elapsed.as_nanos())
                    .div_ceil(NANOS_PER_SECOND);
                owed.min(u128::from(self.max_ticks_per_frame)) as u64
            }
        }
    }

    fn feed_key(&mut self, engine: &mut Engine) {
        if engine.key_latch().is_none() {
            if let Some(key) = self.keys.pop_front() {
                engine.latch_key(key);
            }
        }
    }

    fn tick(&mut self, engine: &mut Engine, outputs: &mut Vec<Word>) -> bool {
        self.feed_key(engine);
        let stamp = engine.out_stamp();
        let executed = engine.update();
        if engine.out_stamp() != stamp {
            outputs.push(engine.regs.out);
        }
        executed
    }

    /// Runs one frame.
    ///
    /// # Arguments
    ///
    /// * `engine` - The machine to tick.
    /// * `elapsed` - Host time since the previous frame.
    pub fn run_frame(&mut self, engine: &mut Engine, elapsed: Duration) -> FrameReport {
        let mut report = FrameReport {
            ticks: self.ticks_for(elapsed),
            ..FrameReport::default()
        };
        for _ in 0..report.ticks {
            if self.tick(engine, &mut report.outputs) {
                report.executed += 1;
            }
        }
        report
    }

    /// Ticks until HLT, until the engine stops executing, or until a cycle limit.
    ///
    /// The engine should already be running (or have a step line held).
    ///
    /// # Arguments
    ///
    /// * `engine` - The machine to tick.
    /// * `max_cycles` - Upper bound on machine cycles executed.
    pub fn run_until_halt(&mut self, engine: &mut Engine, max_cycles: u64) -> RunReport {
        let mut outputs = Vec::new();
        let mut cycles = 0;
        let outcome = loop {
            if cycles >= max_cycles {
                break RunOutcome::CycleLimit;
            }
            if !self.tick(engine, &mut outputs) {
                break RunOutcome::Idle;
            }
            cycles += 1;
            if engine.status.halted {
                break RunOutcome::Halted;
            }
        };
        debug!(?outcome, cycles, outputs = outputs.len(), "run finished");
        RunReport {
            outcome,
            cycles,
            outputs,
        }
    }
}
