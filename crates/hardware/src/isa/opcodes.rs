//! Opcode values.
//!
//! Opcodes are written in octal to match the front panel, whose switches and
//! lamps are grouped in threes. Values from `0o45` to `0o77` are reserved and
//! execute as NOP.

use crate::common::Word;

/// No operation.
pub const NOP: Word = 0o00;
/// Load accumulator from address.
pub const LDA: Word = 0o01;
/// Add word at address to accumulator.
pub const ADD: Word = 0o02;
/// Subtract word at address from accumulator.
pub const SUB: Word = 0o03;
/// Store accumulator at address.
pub const STA: Word = 0o04;
/// Load accumulator immediate.
pub const LDI: Word = 0o05;
/// Jump to address.
pub const JMP: Word = 0o06;
/// Jump if carry set.
pub const JC: Word = 0o07;
/// Jump if zero set.
pub const JZ: Word = 0o10;
/// Copy accumulator to the output register.
pub const OUT: Word = 0o11;
/// Halt.
pub const HLT: Word = 0o12;
/// Load accumulator from the switch bank.
pub const IN: Word = 0o13;
/// Load accumulator from the key latch.
pub const KEY: Word = 0o14;
/// Increment accumulator.
pub const INC: Word = 0o15;
/// Decrement accumulator.
pub const DEC: Word = 0o16;
/// Rotate accumulator left.
pub const RLC: Word = 0o17;
/// Rotate accumulator right.
pub const RRC: Word = 0o20;
/// Rotate accumulator left through carry.
pub const RAL: Word = 0o21;
/// Rotate accumulator right through carry.
pub const RAR: Word = 0o22;
/// AND word at address into accumulator.
pub const AND: Word = 0o23;
/// OR word at address into accumulator.
pub const OR: Word = 0o24;
/// XOR word at address into accumulator.
pub const XOR: Word = 0o25;
/// Compare accumulator with word at address.
pub const CMP: Word = 0o26;
/// Add immediate.
pub const ADI: Word = 0o27;
/// Subtract immediate.
pub const SUI: Word = 0o30;
/// AND immediate.
pub const ANI: Word = 0o31;
/// OR immediate.
pub const ORI: Word = 0o32;
/// XOR immediate.
pub const XRI: Word = 0o33;
/// Compare immediate.
pub const CPI: Word = 0o34;
/// Call subroutine (return address kept in the call slot).
pub const CALL: Word = 0o35;
/// Return from subroutine.
pub const RET: Word = 0o36;
/// Jump if carry clear.
pub const JNC: Word = 0o37;
/// Jump if zero clear.
pub const JNZ: Word = 0o40;
/// Add word at address plus carry.
pub const ADC: Word = 0o41;
/// Subtract word at address with borrow.
pub const SBB: Word = 0o42;
/// Add immediate plus carry.
pub const ACI: Word = 0o43;
/// Subtract immediate with borrow.
pub const SBI: Word = 0o44;

/// First reserved opcode; this and every higher value decode to NOP.
pub const FIRST_RESERVED: Word = 0o45;
