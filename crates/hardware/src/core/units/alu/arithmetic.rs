//! ALU adder operations.
//!
//! Every arithmetic operation is one pass through a single N-bit adder:
//! `sum = a + b' + carry_in`, with carry-out `sum >= 2^N`. Subtraction feeds
//! the ones' complement of the subtrahend with a carry-in of one, which is
//! `a + (2^N - b)`.
//!
//! | Operation          | b'     | carry in |
//! |--------------------|--------|----------|
//! | Add                | b      | 0        |
//! | AddWithCarry       | b      | C        |
//! | Subtract, Compare  | !b     | 1        |
//! | SubtractWithBorrow | !b     | C        |
//! | Increment          | 1      | 0        |
//! | Decrement          | !1     | 1        |

use super::AluOutcome;
use crate::common::{Word, WordWidth};
use crate::isa::AluOp;

/// Runs the adder and truncates its sum.
///
/// # Returns
///
/// The truncated sum and the carry-out.
#[inline]
pub fn add(a: Word, b: Word, carry_in: bool, width: WordWidth) -> (Word, bool) {
    let sum = u64::from(a) + u64::from(b) + u64::from(carry_in);
    (width.truncate(sum), sum >= u64::from(width.modulus()))
}

/// Ones' complement of a word within the width.
#[inline]
pub fn complement(b: Word, width: WordWidth) -> Word {
    !b & width.max_word()
}

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op`    - The ALU operation to perform (must be an adder variant).
/// * `a`     - Accumulator value.
/// * `b`     - B register value.
/// * `carry` - Current carry flag.
/// * `width` - Word width.
///
/// # Returns
///
/// The outcome. Non-arithmetic opcodes pass `a` through with flags from it.
pub fn execute(op: AluOp, a: Word, b: Word, carry: bool, width: WordWidth) -> AluOutcome {
    let (value, carry_out) = match op {
        AluOp::Add => add(a, b, false, width),
        AluOp::AddWithCarry => add(a, b, carry, width),
        AluOp::Subtract | AluOp::Compare => add(a, complement(b, width), true, width),
        AluOp::SubtractWithBorrow => add(a, complement(b, width), carry, width),
        AluOp::Increment => add(a, 1, false, width),
        AluOp::Decrement => add(a, complement(1, width), true, width),
        _ => (a, carry),
    };
    let outcome = AluOutcome::new(value, carry_out);
    if op == AluOp::Compare {
        outcome.discarded()
    } else {
        outcome
    }
}
