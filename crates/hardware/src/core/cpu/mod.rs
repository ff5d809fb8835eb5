//! Engine Definition and Initialization.
//!
//! This module defines the central `Engine` structure, which owns the entire
//! simulated machine. It coordinates the following:
//! 1. **State Management:** Registers, flags, status, memory, and cycle counters.
//! 2. **Power Lifecycle:** Power-on noise, power-off, and reset.
//! 3. **Observation:** Changed addresses and the previous register snapshot.
//!
//! The engine is driven by an external loop that calls [`Engine::scan_inputs`]
//! whenever a front-panel line changes and [`Engine::update`] once per tick.

/// Machine-cycle state machine and micro-op dispatch.
pub mod execution;

/// Word access with wraparound and change tracking.
pub mod memory;

/// Front-panel input lines and their edge detection.
pub mod panel;

/// Serializable views of engine state.
pub mod snapshot;

use tracing::debug;

use crate::common::{ConfigError, NoiseSource, Word, WordWidth};
use crate::config::Config;
use crate::core::arch::memory::Memory;
use crate::core::arch::registers::{Flags, RegisterFile, Status};
use crate::isa::CycleType;
use crate::stats::SimStats;

use self::panel::{InputLines, PanelAction};
use self::snapshot::RegisterSnapshot;

/// The simulated machine.
///
/// Registers, flags, and status are public so a driver can read them for
/// display. Memory is reached through [`Engine::get_word_at`] and
/// [`Engine::put_word_at`] so that addresses always wrap and writes are
/// always observed.
#[derive(Debug)]
pub struct Engine {
    /// Architectural registers.
    pub regs: RegisterFile,
    /// ALU flags.
    pub flags: Flags,
    /// Power, run, and halt status.
    pub status: Status,
    /// Execution statistics since the last power-on.
    pub stats: SimStats,

    memory: Memory,
    width: WordWidth,
    call_addr: usize,

    m_cycle: usize,
    i_cycle: u64,
    opcode: usize,
    opcode_addr: Word,
    next_cycle: CycleType,

    lines: InputLines,
    m_stepped: bool,
    i_stepped: bool,
    key_latch: Option<Word>,
    out_stamp: u64,

    noise: NoiseSource,
    step_when_halted: bool,
    trace: bool,

    changed: Vec<usize>,
    changed_marks: Vec<bool>,
    previous: RegisterSnapshot,
}

impl Engine {
    /// Creates a powered-off engine with randomized memory and registers.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// The engine, or the first validation error in `config`.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let width = config.machine.word_width()?;
        let ram_words = config.machine.ram_words;
        let noise = config
            .general
            .seed
            .map_or_else(NoiseSource::from_clock, NoiseSource::new);

        let mut engine = Self {
            regs: RegisterFile::default(),
            flags: Flags::default(),
            status: Status::default(),
            stats: SimStats::default(),
            memory: Memory::new(ram_words, width),
            width,
            call_addr: ram_words - 1,
            m_cycle: 0,
            i_cycle: 0,
            opcode: 0,
            opcode_addr: 0,
            next_cycle: CycleType::Fetch,
            lines: InputLines::default(),
            m_stepped: false,
            i_stepped: false,
            key_latch: None,
            out_stamp: 0,
            noise,
            step_when_halted: config.general.step_when_halted,
            trace: config.general.trace_instructions,
            changed: Vec::new(),
            changed_marks: vec![false; ram_words],
            previous: RegisterSnapshot::default(),
        };
        engine.scramble();
        engine.sync_observation();
        Ok(engine)
    }

    /// Fills memory and every register with noise.
    fn scramble(&mut self) {
        self.memory.scramble(&mut self.noise);
        self.regs.scramble(&mut self.noise, self.width);
    }

    /// Powers the machine on.
    ///
    /// Memory and registers come up with fresh noise; flags, status, cycle
    /// counters, the key latch, and statistics are cleared.
    pub fn power_on(&mut self) {
        self.scramble();
        self.flags = Flags::default();
        self.status = Status {
            on: true,
            running: false,
            halted: false,
        };
        self.m_cycle = 0;
        self.i_cycle = 0;
        self.opcode = 0;
        self.opcode_addr = 0;
        self.next_cycle = CycleType::Fetch;
        self.m_stepped = false;
        self.i_stepped = false;
        self.key_latch = None;
        self.out_stamp = 0;
        self.stats = SimStats::default();
        self.sync_observation();
        debug!(pc = self.regs.pc, "power on");
    }

    /// Powers the machine off. State is kept until the next power-on.
    pub fn power_off(&mut self) {
        self.status.on = false;
        self.status.running = false;
        debug!("power off");
    }

    /// Resets the program counter and the machine-cycle sequencer.
    ///
    /// Memory, A, B, and the flags are left untouched. The next machine cycle
    /// is a FETCH from address zero.
    ///
    /// # Returns
    ///
    /// [`PanelAction::NotPoweredOn`] when off; the reset is then ignored.
    pub fn reset(&mut self) -> PanelAction {
        if !self.status.on {
            return PanelAction::NotPoweredOn;
        }
        self.regs.pc = 0;
        self.status.halted = false;
        self.status.running = false;
        self.m_cycle = 0;
        self.next_cycle = CycleType::Fetch;
        debug!("reset");
        PanelAction::Applied
    }

    /// Configured word width.
    #[inline]
    pub fn width(&self) -> WordWidth {
        self.width
    }

    /// Address of the subroutine call slot (the last word of RAM).
    #[inline]
    pub fn call_address(&self) -> usize {
        self.call_addr
    }

    /// Machine cycle about to execute (0 = FETCH, 1 = DECODE, 2.. = micro-ops).
    #[inline]
    pub fn m_cycle(&self) -> usize {
        self.m_cycle
    }

    /// Instruction cycles completed since power-on.
    #[inline]
    pub fn i_cycle(&self) -> u64 {
        self.i_cycle
    }

    /// Label of the machine cycle about to execute.
    #[inline]
    pub fn next_cycle_type(&self) -> CycleType {
        self.next_cycle
    }

    /// Opcode index selected by the last DECODE.
    #[inline]
    pub fn opcode(&self) -> usize {
        self.opcode
    }

    /// Address the current instruction was fetched from.
    #[inline]
    pub fn opcode_address(&self) -> Word {
        self.opcode_addr
    }

    /// Number of OUT micro-ops executed since power-on.
    ///
    /// A driver compares this against its last seen value to detect a new
    /// output, including one that repeats the previous value.
    #[inline]
    pub fn out_stamp(&self) -> u64 {
        self.out_stamp
    }

    /// Word waiting in the key latch, if any.
    #[inline]
    pub fn key_latch(&self) -> Option<Word> {
        self.key_latch
    }

    /// Input lines recorded by the last scan.
    #[inline]
    pub fn lines(&self) -> &InputLines {
        &self.lines
    }

    /// Whether stepping is honored while halted.
    #[inline]
    pub fn step_when_halted(&self) -> bool {
        self.step_when_halted
    }
}
