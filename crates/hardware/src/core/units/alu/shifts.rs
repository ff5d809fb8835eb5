//! ALU rotate operations.
//!
//! Rotates move the accumulator one bit position. The bit shifted out always
//! becomes the new carry. A plain rotate feeds that same bit into the vacated
//! position; a through-carry rotate feeds the old carry in instead, making the
//! rotation N+1 bits wide.

use super::AluOutcome;
use crate::common::{Word, WordWidth};
use crate::isa::AluOp;

/// Executes a rotate operation.
///
/// # Arguments
///
/// * `op`    - The ALU operation to perform (must be a rotate variant).
/// * `a`     - Accumulator value.
/// * `carry` - Current carry flag, shifted in by the through-carry forms.
/// * `width` - Word width.
///
/// # Returns
///
/// The rotated value and new flags. Returns `a` for non-rotate opcodes.
pub fn execute(op: AluOp, a: Word, carry: bool, width: WordWidth) -> AluOutcome {
    let a = u64::from(a);
    let top = width.bits() - 1;
    let msb = (a >> top) & 1;
    let lsb = a & 1;
    let carry = u64::from(carry);

    let (value, out) = match op {
        AluOp::RotateLeft => ((a << 1) | msb, msb),
        AluOp::RotateLeftThroughCarry => ((a << 1) | carry, msb),
        AluOp::RotateRight => ((a >> 1) | (lsb << top), lsb),
        AluOp::RotateRightThroughCarry => ((a >> 1) | (carry << top), lsb),
        _ => (a, carry),
    };
    AluOutcome::new(width.truncate(value), out == 1)
}
