//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the accumulator ALU used by the `Alu` micro-op. It
//! takes the accumulator, the B register, and the carry flag, and produces
//! the new accumulator value with both flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, AddWithCarry, Subtract, SubtractWithBorrow, Compare, Increment, Decrement
//! - [`logic`]:      And, Or, Xor
//! - [`shifts`]:     RotateLeft, RotateRight, and their through-carry forms
//!
//! Carry polarity is the same for every arithmetic operation: all of them run
//! through one adder, and carry is the adder's carry-out. A subtraction
//! therefore leaves carry set when no borrow was needed.

/// Adder-based operations.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

/// Rotate operations.
pub mod shifts;

use crate::common::{Word, WordWidth};
use crate::isa::AluOp;

/// Result of one ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutcome {
    /// Computed value, truncated to the word width.
    pub value: Word,
    /// New carry flag.
    pub carry: bool,
    /// New zero flag, `value == 0`.
    pub zero: bool,
    /// Whether `value` replaces the accumulator (false for Compare).
    pub writes_back: bool,
}

impl AluOutcome {
    pub(crate) const fn new(value: Word, carry: bool) -> Self {
        Self {
            value,
            carry,
            zero: value == 0,
            writes_back: true,
        }
    }

    pub(crate) const fn discarded(self) -> Self {
        Self {
            writes_back: false,
            ..self
        }
    }
}

/// Arithmetic Logic Unit (ALU) for accumulator operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op`    - The ALU operation to perform
    /// * `a`     - Accumulator value
    /// * `b`     - B register value (ignored by unary operations)
    /// * `carry` - Current carry flag
    /// * `width` - Word width results are truncated to
    ///
    /// # Returns
    ///
    /// The result value and new flags. `zero` is always derived from the
    /// value, including for Compare, which does not write it back.
    ///
    /// # Examples
    ///
    /// ```
    /// use twelvebit_core::common::WordWidth;
    /// use twelvebit_core::core::units::alu::Alu;
    /// use twelvebit_core::isa::AluOp;
    ///
    /// let w = WordWidth::default();
    ///
    /// // Addition carries out of the top bit
    /// let r = Alu::execute(AluOp::Add, 0o7777, 1, false, w);
    /// assert_eq!((r.value, r.carry, r.zero), (0, true, true));
    ///
    /// // Subtraction without borrow leaves carry set
    /// let r = Alu::execute(AluOp::Subtract, 5, 3, false, w);
    /// assert_eq!((r.value, r.carry), (2, true));
    ///
    /// // Subtraction with borrow clears it
    /// let r = Alu::execute(AluOp::Subtract, 3, 5, false, w);
    /// assert_eq!((r.value, r.carry), (0o7776, false));
    /// ```
    pub fn execute(op: AluOp, a: Word, b: Word, carry: bool, width: WordWidth) -> AluOutcome {
        match op {
            AluOp::Add
            | AluOp::AddWithCarry
            | AluOp::Subtract
            | AluOp::SubtractWithBorrow
            | AluOp::Compare
            | AluOp::Increment
            | AluOp::Decrement => arithmetic::execute(op, a, b, carry, width),

            AluOp::And | AluOp::Or | AluOp::Xor => logic::execute(op, a, b, width),

            AluOp::RotateLeft
            | AluOp::RotateRight
            | AluOp::RotateLeftThroughCarry
            | AluOp::RotateRightThroughCarry => shifts::execute(op, a, carry, width),
        }
    }
}
