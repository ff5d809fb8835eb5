//! Register File, Flags, and Status.
//!
//! This module holds the programmer-visible machine state other than memory.
//! It performs the following:
//! 1. **Storage:** The five architectural registers plus the output latch.
//! 2. **Flags:** `carry` and `zero`, written only by ALU micro-ops.
//! 3. **Status:** Power, run, and halt state as shown on the front panel.

use serde::Serialize;

use crate::common::{NoiseSource, Word, WordWidth};

/// Architectural registers.
///
/// `out` is the output latch written by the OUT micro-op; it is not an
/// operand of any other instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    /// Program Counter.
    pub pc: Word,
    /// Instruction Register.
    pub ir: Word,
    /// Memory Address Register.
    pub mar: Word,
    /// Accumulator.
    pub a: Word,
    /// Temporary operand register.
    pub b: Word,
    /// Output latch.
    pub out: Word,
}

impl RegisterFile {
    /// Fills every register with noise, as a machine does when first powered.
    ///
    /// # Arguments
    ///
    /// * `noise` - Source of the random bit patterns.
    /// * `width` - Word width the patterns are truncated to.
    pub fn scramble(&mut self, noise: &mut NoiseSource, width: WordWidth) {
        self.pc = noise.next_word(width);
        self.ir = noise.next_word(width);
        self.mar = noise.next_word(width);
        self.a = noise.next_word(width);
        self.b = noise.next_word(width);
        self.out = noise.next_word(width);
    }
}

/// ALU condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Flags {
    /// Set when an addition carries out, or a subtraction needs no borrow.
    pub carry: bool,
    /// Set when the last ALU result was zero.
    pub zero: bool,
}

/// Machine status lamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Power is on.
    pub on: bool,
    /// Continuous execution is armed.
    pub running: bool,
    /// Execution was stopped by HLT.
    pub halted: bool,
}
