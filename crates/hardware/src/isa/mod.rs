//! Instruction Set Architecture (ISA) Definitions.
//!
//! The machine has a single accumulator ISA whose opcode occupies the low six
//! bits of a word (two octal digits). Every one of the 64 opcode values maps
//! to an entry of the instruction table; values without an instruction are
//! NOP, so every bit pattern in memory is safely executable.
//!
//! # Organisation
//!
//! * `opcodes`: Named opcode values.
//! * `micro_op`: The micro-operation vocabulary and machine-cycle labels.
//! * `table`: The immutable opcode → instruction table and decoder.
//! * `disasm`: Mnemonic lookup and memory listings.

/// Instruction disassembler for listings and diagnostics.
pub mod disasm;

/// Micro-operations and machine-cycle type labels.
pub mod micro_op;

/// Opcode values of every defined instruction.
pub mod opcodes;

/// The instruction table and opcode decoder.
pub mod table;

pub use micro_op::{AluOp, CycleType, MicroOp};
pub use table::{Instruction, decode, find_opcode, lookup};
