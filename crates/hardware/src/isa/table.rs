//! Instruction table and opcode decoder.
//!
//! The table maps every opcode value to an [`Instruction`]: its mnemonic, the
//! number of operand words that follow it, the micro-ops executed after
//! FETCH and DECODE, and the cycle-type label of each micro-op.
//!
//! The table is `const` data with exactly [`OPCODE_COUNT`] entries. Entries
//! that do not name an instruction are NOP (increment PC only), and
//! [`decode`] reduces any word modulo the table size, so decoding never fails.

use crate::common::{OPCODE_COUNT, Word};
use crate::isa::micro_op::{AluOp, CycleType, MicroOp};
use crate::isa::opcodes;

/// Definition of one opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Number of operand words following the opcode word (0 or 1).
    pub operand_count: u8,
    /// Micro-ops executed on machine cycles 2, 3, ...
    pub micro_ops: &'static [MicroOp],
    /// Cycle-type label of each micro-op, index-aligned with `micro_ops`.
    pub cycle_types: &'static [CycleType],
}

impl Instruction {
    /// Total machine cycles of one instruction cycle, FETCH and DECODE included.
    pub const fn machine_cycles(&self) -> usize {
        self.micro_ops.len() + 2
    }

    /// Number of memory words the instruction occupies.
    pub const fn word_count(&self) -> usize {
        1 + self.operand_count as usize
    }
}

/// Instruction definitions, one `const` per shape.
mod entries {
    use super::{AluOp, CycleType, Instruction, MicroOp};

    use CycleType as C;
    use MicroOp as M;

    /// Implied ALU op: one ALU cycle, then step past the opcode.
    macro_rules! implied_alu {
        ($mnemonic:literal, $op:expr) => {
            Instruction {
                mnemonic: $mnemonic,
                operand_count: 0,
                micro_ops: &[M::Alu($op), M::IncPc],
                cycle_types: &[C::Alu, C::IncPc],
            }
        };
    }

    /// Operand is an address; the ALU reads the word stored there into B.
    macro_rules! addressed_alu {
        ($mnemonic:literal, $op:expr) => {
            Instruction {
                mnemonic: $mnemonic,
                operand_count: 1,
                micro_ops: &[
                    M::IncPc,
                    M::LoadMarFromPcAddr,
                    M::LoadBFromMarAddr,
                    M::Alu($op),
                    M::IncPc,
                ],
                cycle_types: &[C::IncPc, C::MemRead, C::MemRead, C::Alu, C::IncPc],
            }
        };
    }

    /// Operand is the value itself, read straight into B.
    macro_rules! immediate_alu {
        ($mnemonic:literal, $op:expr) => {
            Instruction {
                mnemonic: $mnemonic,
                operand_count: 1,
                micro_ops: &[M::IncPc, M::LoadBFromPcAddr, M::Alu($op), M::IncPc],
                cycle_types: &[C::IncPc, C::MemRead, C::Alu, C::IncPc],
            }
        };
    }

    /// Jump whose second cycle either loads PC or steps past the operand.
    macro_rules! conditional_jump {
        ($mnemonic:literal, $op:expr) => {
            Instruction {
                mnemonic: $mnemonic,
                operand_count: 1,
                micro_ops: &[M::IncPc, $op],
                cycle_types: &[C::IncPc, C::MemRead],
            }
        };
    }

    pub const NOP: Instruction = Instruction {
        mnemonic: "NOP",
        operand_count: 0,
        micro_ops: &[M::IncPc],
        cycle_types: &[C::IncPc],
    };

    pub const LDA: Instruction = Instruction {
        mnemonic: "LDA",
        operand_count: 1,
        micro_ops: &[M::IncPc, M::LoadMarFromPcAddr, M::LoadAFromMarAddr, M::IncPc],
        cycle_types: &[C::IncPc, C::MemRead, C::MemRead, C::IncPc],
    };

    pub const STA: Instruction = Instruction {
        mnemonic: "STA",
        operand_count: 1,
        micro_ops: &[M::IncPc, M::LoadMarFromPcAddr, M::StoreAAtMarAddr, M::IncPc],
        cycle_types: &[C::IncPc, C::MemRead, C::MemWrite, C::IncPc],
    };

    pub const LDI: Instruction = Instruction {
        mnemonic: "LDI",
        operand_count: 1,
        micro_ops: &[M::IncPc, M::LoadAFromPcAddr, M::IncPc],
        cycle_types: &[C::IncPc, C::MemRead, C::IncPc],
    };

    pub const JMP: Instruction = Instruction {
        mnemonic: "JMP",
        operand_count: 1,
        micro_ops: &[M::IncPc, M::LoadPcFromPcAddr],
        cycle_types: &[C::IncPc, C::MemRead],
    };

    pub const JC: Instruction = conditional_jump!("JC", M::JumpIfCarry);
    pub const JZ: Instruction = conditional_jump!("JZ", M::JumpIfZero);
    pub const JNC: Instruction = conditional_jump!("JNC", M::JumpIfNotCarry);
    pub const JNZ: Instruction = conditional_jump!("JNZ", M::JumpIfNotZero);

    pub const OUT: Instruction = Instruction {
        mnemonic: "OUT",
        operand_count: 0,
        micro_ops: &[M::Out, M::IncPc],
        cycle_types: &[C::Out, C::IncPc],
    };

    pub const HLT: Instruction = Instruction {
        mnemonic: "HLT",
        operand_count: 0,
        micro_ops: &[M::IncPc, M::Halt],
        cycle_types: &[C::IncPc, C::Halt],
    };

    pub const IN: Instruction = Instruction {
        mnemonic: "IN",
        operand_count: 0,
        micro_ops: &[M::In, M::IncPc],
        cycle_types: &[C::In, C::IncPc],
    };

    pub const KEY: Instruction = Instruction {
        mnemonic: "KEY",
        operand_count: 0,
        micro_ops: &[M::Key, M::IncPc],
        cycle_types: &[C::In, C::IncPc],
    };

    pub const INC: Instruction = implied_alu!("INC", AluOp::Increment);
    pub const DEC: Instruction = implied_alu!("DEC", AluOp::Decrement);
    pub const RLC: Instruction = implied_alu!("RLC", AluOp::RotateLeft);
    pub const RRC: Instruction = implied_alu!("RRC", AluOp::RotateRight);
    pub const RAL: Instruction = implied_alu!("RAL", AluOp::RotateLeftThroughCarry);
    pub const RAR: Instruction = implied_alu!("RAR", AluOp::RotateRightThroughCarry);

    pub const ADD: Instruction = addressed_alu!("ADD", AluOp::Add);
    pub const SUB: Instruction = addressed_alu!("SUB", AluOp::Subtract);
    pub const AND: Instruction = addressed_alu!("AND", AluOp::And);
    pub const OR: Instruction = addressed_alu!("OR", AluOp::Or);
    pub const XOR: Instruction = addressed_alu!("XOR", AluOp::Xor);
    pub const CMP: Instruction = addressed_alu!("CMP", AluOp::Compare);
    pub const ADC: Instruction = addressed_alu!("ADC", AluOp::AddWithCarry);
    pub const SBB: Instruction = addressed_alu!("SBB", AluOp::SubtractWithBorrow);

    pub const ADI: Instruction = immediate_alu!("ADI", AluOp::Add);
    pub const SUI: Instruction = immediate_alu!("SUI", AluOp::Subtract);
    pub const ANI: Instruction = immediate_alu!("ANI", AluOp::And);
    pub const ORI: Instruction = immediate_alu!("ORI", AluOp::Or);
    pub const XRI: Instruction = immediate_alu!("XRI", AluOp::Xor);
    pub const CPI: Instruction = immediate_alu!("CPI", AluOp::Compare);
    pub const ACI: Instruction = immediate_alu!("ACI", AluOp::AddWithCarry);
    pub const SBI: Instruction = immediate_alu!("SBI", AluOp::SubtractWithBorrow);

    pub const CALL: Instruction = Instruction {
        mnemonic: "CALL",
        operand_count: 1,
        micro_ops: &[
            M::IncPc,
            M::LoadMarFromPcAddr,
            M::IncPc,
            M::StorePcAtCallAddr,
            M::LoadPcFromMar,
        ],
        cycle_types: &[C::IncPc, C::MemRead, C::IncPc, C::MemWrite, C::Jump],
    };

    pub const RET: Instruction = Instruction {
        mnemonic: "RET",
        operand_count: 0,
        micro_ops: &[M::LoadPcFromCallAddr],
        cycle_types: &[C::MemRead],
    };
}

const fn build_table() -> [Instruction; OPCODE_COUNT] {
    let mut table = [entries::NOP; OPCODE_COUNT];

    table[opcodes::LDA as usize] = entries::LDA;
    table[opcodes::ADD as usize] = entries::ADD;
    table[opcodes::SUB as usize] = entries::SUB;
    table[opcodes::STA as usize] = entries::STA;
    table[opcodes::LDI as usize] = entries::LDI;
    table[opcodes::JMP as usize] = entries::JMP;
    table[opcodes::JC as usize] = entries::JC;
    table[opcodes::JZ as usize] = entries::JZ;
    table[opcodes::OUT as usize] = entries::OUT;
    table[opcodes::HLT as usize] = entries::HLT;
    table[opcodes::IN as usize] = entries::IN;
    table[opcodes::KEY as usize] = entries::KEY;
    table[opcodes::INC as usize] = entries::INC;
    table[opcodes::DEC as usize] = entries::DEC;
    table[opcodes::RLC as usize] = entries::RLC;
    table[opcodes::RRC as usize] = entries::RRC;
    table[opcodes::RAL as usize] = entries::RAL;
    table[opcodes::RAR as usize] = entries::RAR;
    table[opcodes::AND as usize] = entries::AND;
    table[opcodes::OR as usize] = entries::OR;
    table[opcodes::XOR as usize] = entries::XOR;
    table[opcodes::CMP as usize] = entries::CMP;
    table[opcodes::ADI as usize] = entries::ADI;
    table[opcodes::SUI as usize] = entries::SUI;
    table[opcodes::ANI as usize] = entries::ANI;
    table[opcodes::ORI as usize] = entries::ORI;
    table[opcodes::XRI as usize] = entries::XRI;
    table[opcodes::CPI as usize] = entries::CPI;
    table[opcodes::CALL as usize] = entries::CALL;
    table[opcodes::RET as usize] = entries::RET;
    table[opcodes::JNC as usize] = entries::JNC;
    table[opcodes::JNZ as usize] = entries::JNZ;
    table[opcodes::ADC as usize] = entries::ADC;
    table[opcodes::SBB as usize] = entries::SBB;
    table[opcodes::ACI as usize] = entries::ACI;
    table[opcodes::SBI as usize] = entries::SBI;

    table
}

const TABLE: [Instruction; OPCODE_COUNT] = build_table();

// Every entry has at least one micro-op and one label per micro-op.
const _: () = {
    let mut i = 0;
    while i < OPCODE_COUNT {
        assert!(!TABLE[i].micro_ops.is_empty());
        assert!(TABLE[i].micro_ops.len() == TABLE[i].cycle_types.len());
        assert!(TABLE[i].operand_count <= 1);
        i += 1;
    }
};

/// The instruction table, indexed by opcode.
pub static INSTRUCTIONS: [Instruction; OPCODE_COUNT] = TABLE;

/// Reduces an instruction word to its opcode index.
///
/// The modulo is what makes every bit pattern a legal opcode.
#[inline]
pub const fn decode(word: Word) -> usize {
    word as usize % OPCODE_COUNT
}

/// Returns the instruction definition for an opcode index.
///
/// # Arguments
///
/// * `index` - Opcode index; values past the table wrap like [`decode`].
#[inline]
pub fn lookup(index: usize) -> &'static Instruction {
    &INSTRUCTIONS[index % OPCODE_COUNT]
}

/// Finds the lowest opcode whose mnemonic matches, ignoring ASCII case.
///
/// # Returns
///
/// `Some(opcode)` for a known mnemonic, `None` otherwise. `"NOP"` yields 0.
pub fn find_opcode(mnemonic: &str) -> Option<Word> {
    INSTRUCTIONS
        .iter()
        .position(|inst| inst.mnemonic.eq_ignore_ascii_case(mnemonic))
        .map(|index| index as Word)
}
