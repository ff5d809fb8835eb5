//! Serializable views of engine state.
//!
//! A driver that wants to dump or compare machine state does so through these
//! plain structures rather than by borrowing the engine.

use serde::Serialize;

use super::Engine;
use crate::common::Word;
use crate::core::arch::registers::{Flags, RegisterFile, Status};
use crate::isa::CycleType;

/// Registers, flags, and status at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterSnapshot {
    /// Register file.
    pub regs: RegisterFile,
    /// ALU flags.
    pub flags: Flags,
    /// Machine status.
    pub status: Status,
}

/// Full machine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    /// Bits per word.
    pub word_bits: u32,
    /// Registers, flags, and status.
    #[serde(flatten)]
    pub registers: RegisterSnapshot,
    /// Machine cycle about to execute.
    pub m_cycle: usize,
    /// Instruction cycles completed.
    pub i_cycle: u64,
    /// Label of the next machine cycle.
    pub next_cycle: CycleType,
    /// Opcode selected by the last DECODE.
    pub opcode: usize,
    /// Mnemonic of that opcode.
    pub mnemonic: &'static str,
    /// OUT counter.
    pub out_stamp: u64,
    /// Pending key, if any.
    pub key_latch: Option<Word>,
    /// Memory contents.
    pub memory: Vec<Word>,
}

impl EngineSnapshot {
    /// Renders the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Engine {
    /// Captures the full machine state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            word_bits: self.width.bits(),
            registers: self.registers(),
            m_cycle: self.m_cycle,
            i_cycle: self.i_cycle,
            next_cycle: self.next_cycle,
            opcode: self.opcode,
            mnemonic: crate::isa::lookup(self.opcode).mnemonic,
            out_stamp: self.out_stamp,
            key_latch: self.key_latch,
            memory: self.memory().to_vec(),
        }
    }
}
