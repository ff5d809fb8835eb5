//! Micro-operation vocabulary.
//!
//! An instruction is an ordered list of [`MicroOp`] values, one per execute
//! machine cycle. Each micro-op applies exactly one primitive effect to the
//! engine: a register move, a memory access, an ALU operation, or a control
//! transfer. The engine interprets them in a single `match`, so the table can
//! stay plain immutable data.
//!
//! Each micro-op is paired with a [`CycleType`] label that the front panel
//! lights up one cycle ahead of the mutation it describes.

use std::fmt;

use serde::Serialize;

/// ALU operations. All of them update `carry` and `zero`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `A ← A + B`.
    Add,
    /// `A ← A + B + carry`.
    AddWithCarry,
    /// `A ← A − B`.
    Subtract,
    /// `A ← A − B − borrow`, where borrow is `!carry`.
    SubtractWithBorrow,
    /// Flags of `A − B`; `A` is left unchanged.
    Compare,
    /// `A ← A & B`.
    And,
    /// `A ← A | B`.
    Or,
    /// `A ← A ^ B`.
    Xor,
    /// `A ← A + 1`.
    Increment,
    /// `A ← A − 1`.
    Decrement,
    /// Rotate `A` left; the bit shifted out enters bit 0 and carry.
    RotateLeft,
    /// Rotate `A` right; the bit shifted out enters the top bit and carry.
    RotateRight,
    /// Rotate `A` left through carry.
    RotateLeftThroughCarry,
    /// Rotate `A` right through carry.
    RotateRightThroughCarry,
}

/// A single primitive state transition.
///
/// Names read as `destination ← source`; `*Addr` means "the word stored at
/// the address held in that register".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MicroOp {
    /// `PC ← PC + 1`.
    IncPc,
    /// `MAR ← [PC]`.
    LoadMarFromPcAddr,
    /// `A ← [MAR]`.
    LoadAFromMarAddr,
    /// `A ← [PC]`.
    LoadAFromPcAddr,
    /// `B ← [PC]`.
    LoadBFromPcAddr,
    /// `B ← [MAR]`.
    LoadBFromMarAddr,
    /// `[MAR] ← A`.
    StoreAAtMarAddr,
    /// `PC ← [PC]`.
    LoadPcFromPcAddr,
    /// `PC ← [PC]` if carry, else `PC ← PC + 1`.
    JumpIfCarry,
    /// `PC ← [PC]` if not carry, else `PC ← PC + 1`.
    JumpIfNotCarry,
    /// `PC ← [PC]` if zero, else `PC ← PC + 1`.
    JumpIfZero,
    /// `PC ← [PC]` if not zero, else `PC ← PC + 1`.
    JumpIfNotZero,
    /// ALU operation on `A` (and `B` for binary operations).
    Alu(AluOp),
    /// `OUT ← A`.
    Out,
    /// `A ← switches`.
    In,
    /// `A ← key latch`, emptying the latch.
    Key,
    /// Stop execution.
    Halt,
    /// `[CALL_ADDR] ← PC`.
    StorePcAtCallAddr,
    /// `PC ← MAR`.
    LoadPcFromMar,
    /// `PC ← [CALL_ADDR]`.
    LoadPcFromCallAddr,
}

/// Label of a machine cycle, as shown on the front panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CycleType {
    /// `IR ← [PC]`.
    Fetch,
    /// Opcode selection from `IR`.
    Decode,
    /// Memory read into a register.
    MemRead,
    /// Memory write from a register.
    MemWrite,
    /// Program counter increment.
    IncPc,
    /// Halt.
    Halt,
    /// Arithmetic or logic.
    Alu,
    /// Input from the panel.
    In,
    /// Output to the panel.
    Out,
    /// Register-to-PC transfer.
    Jump,
}

impl CycleType {
    /// Number of distinct cycle types.
    pub const COUNT: usize = 10;

    /// Every cycle type, in lamp order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Fetch,
        Self::Decode,
        Self::MemRead,
        Self::MemWrite,
        Self::IncPc,
        Self::Halt,
        Self::Alu,
        Self::In,
        Self::Out,
        Self::Jump,
    ];

    /// Position of this cycle type in [`CycleType::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable lamp caption.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fetch => "Fetch",
            Self::Decode => "Decode",
            Self::MemRead => "Memory read",
            Self::MemWrite => "Memory write",
            Self::IncPc => "Increment PC",
            Self::Halt => "Halt CPU",
            Self::Alu => "ALU",
            Self::In => "In",
            Self::Out => "Out",
            Self::Jump => "Jump",
        }
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
