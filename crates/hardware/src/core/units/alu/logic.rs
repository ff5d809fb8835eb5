//! ALU bitwise operations.
//!
//! AND, OR, and XOR always clear carry and set zero from the result.

use super::AluOutcome;
use crate::common::{Word, WordWidth};
use crate::isa::AluOp;

/// Executes a logical operation.
///
/// # Arguments
///
/// * `op`    - The ALU operation to perform (must be And, Or, or Xor).
/// * `a`     - Accumulator value.
/// * `b`     - B register value.
/// * `width` - Word width.
///
/// # Returns
///
/// The outcome with carry cleared. Returns `a` for non-logic opcodes.
pub fn execute(op: AluOp, a: Word, b: Word, width: WordWidth) -> AluOutcome {
    let value = match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        _ => a,
    };
    AluOutcome::new(value & width.max_word(), false)
}
