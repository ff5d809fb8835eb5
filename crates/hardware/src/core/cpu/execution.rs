//! Machine-Cycle State Machine.
//!
//! This module implements the per-tick behavior of the engine. It performs the following:
//! 1. **Gating:** Decides whether this tick executes, from power, run, halt, and the step lines.
//! 2. **Sequencing:** FETCH on cycle 0, DECODE on cycle 1, one micro-op per cycle after that.
//! 3. **Dispatch:** Interprets each [`MicroOp`] against registers, memory, and flags.
//! 4. **Step Edges:** Marks steps as taken so a held step button fires once.

use tracing::{debug, trace};

use super::Engine;
use crate::common::Word;
use crate::core::units::alu::Alu;
use crate::isa::{AluOp, CycleType, MicroOp, decode, lookup};

impl Engine {
    /// Advances the machine by at most one machine cycle.
    ///
    /// A cycle executes when the machine is on and either running, or stopped
    /// with a step line asserted that has not fired yet. While halted, only a
    /// step can execute, and only if stepping while halted is enabled.
    ///
    /// # Returns
    ///
    /// `true` if a machine cycle was executed.
    pub fn update(&mut self) -> bool {
        let execute = self.cycle_requested();
        if execute {
            self.machine_cycle();
        }

        if !self.lines.m_step {
            self.m_stepped = false;
        }
        if !self.lines.i_step {
            self.i_stepped = false;
        }
        execute
    }

    fn step_pending(&self) -> bool {
        (self.lines.m_step && !self.m_stepped) || (self.lines.i_step && !self.i_stepped)
    }

    fn cycle_requested(&self) -> bool {
        if !self.status.on {
            return false;
        }
        if self.status.running {
            return !self.status.halted;
        }
        self.step_pending() && (!self.status.halted || self.step_when_halted)
    }

    fn machine_cycle(&mut self) {
        if self.status.halted {
            self.status.halted = false;
            debug!(pc = self.regs.pc, "stepping out of halt");
        }

        let kind = self.next_cycle;
        match self.m_cycle {
            0 => {
                self.regs.ir = self.get_word_at(i64::from(self.regs.pc));
                self.opcode_addr = self.regs.pc;
            }
            1 => {
                self.opcode = decode(self.regs.ir);
            }
            n => {
                let op = lookup(self.opcode).micro_ops[n - 2];
                self.execute_micro_op(op);
            }
        }
        self.stats.record_cycle(kind);
        trace!(m_cycle = self.m_cycle, cycle = %kind, pc = self.regs.pc, "machine cycle");

        let inst = lookup(self.opcode);
        if self.m_cycle >= 2 && self.m_cycle - 1 == inst.micro_ops.len() {
            self.i_cycle += 1;
            self.stats.instruction_cycles += 1;
            self.m_cycle = 0;
            self.next_cycle = CycleType::Fetch;
            self.i_stepped = true;
            self.m_stepped = true;
            if self.trace {
                debug!(
                    address = self.opcode_addr,
                    mnemonic = inst.mnemonic,
                    a = self.regs.a,
                    carry = self.flags.carry,
                    zero = self.flags.zero,
                    "instruction"
                );
            }
        } else {
            self.next_cycle = if self.m_cycle == 0 {
                CycleType::Decode
            } else {
                inst.cycle_types[self.m_cycle - 1]
            };
            self.m_cycle += 1;
            self.m_stepped = true;
        }
    }

    /// Word stored at the address held in PC.
    fn word_at_pc(&self) -> Word {
        self.get_word_at(i64::from(self.regs.pc))
    }

    fn increment_pc(&mut self) {
        self.regs.pc = self.width.increment(self.regs.pc);
    }

    fn jump_if(&mut self, condition: bool) {
        if condition {
            self.regs.pc = self.word_at_pc();
        } else {
            self.increment_pc();
        }
    }

    fn execute_alu(&mut self, op: AluOp) {
        let outcome = Alu::execute(op, self.regs.a, self.regs.b, self.flags.carry, self.width);
        if outcome.writes_back {
            self.regs.a = outcome.value;
        }
        self.flags.carry = outcome.carry;
        self.flags.zero = outcome.zero;
    }

    /// Applies one micro-op.
    pub(crate) fn execute_micro_op(&mut self, op: MicroOp) {
        let call_addr = self.call_addr as i64;
        match op {
            MicroOp::IncPc => self.increment_pc(),
            MicroOp::LoadMarFromPcAddr => self.regs.mar = self.word_at_pc(),
            MicroOp::LoadAFromMarAddr => self.regs.a = self.get_word_at(i64::from(self.regs.mar)),
            MicroOp::LoadAFromPcAddr => self.regs.a = self.word_at_pc(),
            MicroOp::LoadBFromPcAddr => self.regs.b = self.word_at_pc(),
            MicroOp::LoadBFromMarAddr => self.regs.b = self.get_word_at(i64::from(self.regs.mar)),
            MicroOp::StoreAAtMarAddr => {
                self.put_word_at(i64::from(self.regs.mar), u64::from(self.regs.a));
            }
            MicroOp::LoadPcFromPcAddr => self.regs.pc = self.word_at_pc(),
            MicroOp::JumpIfCarry => self.jump_if(self.flags.carry),
            MicroOp::JumpIfNotCarry => self.jump_if(!self.flags.carry),
            MicroOp::JumpIfZero => self.jump_if(self.flags.zero),
            MicroOp::JumpIfNotZero => self.jump_if(!self.flags.zero),
            MicroOp::Alu(alu_op) => self.execute_alu(alu_op),
            MicroOp::Out => {
                self.regs.out = self.regs.a;
                self.out_stamp += 1;
                self.stats.outputs += 1;
            }
            MicroOp::In => self.regs.a = self.width.truncate(u64::from(self.lines.switches)),
            MicroOp::Key => self.regs.a = self.key_latch.take().unwrap_or(0),
            MicroOp::Halt => {
                self.status.halted = true;
                self.status.running = false;
                self.stats.halts += 1;
                debug!(pc = self.regs.pc, "halt");
            }
            MicroOp::StorePcAtCallAddr => self.put_word_at(call_addr, u64::from(self.regs.pc)),
            MicroOp::LoadPcFromMar => self.regs.pc = self.regs.mar,
            MicroOp::LoadPcFromCallAddr => self.regs.pc = self.get_word_at(call_addr),
        }
    }
}
