//! Machine-Cycle State Machine Tests.

use pretty_assertions::assert_eq;
use twelvebit_core::PanelAction;
use twelvebit_core::isa::CycleType;
use twelvebit_core::isa::opcodes::*;

use crate::common::harness::TestContext;
use crate::common::programs::STORE_FIVE;

#[test]
fn test_store_five_runs_to_halt() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    let cycles = ctx.run_to_halt(1_000);

    assert_eq!(ctx.a(), 5);
    assert_eq!(ctx.mem(0o77), 5);
    assert!(ctx.engine.status.halted);
    assert!(!ctx.engine.status.running);
    assert_eq!(cycles, 15);
    assert_eq!(ctx.engine.i_cycle(), 3);
    assert_eq!(ctx.pc(), 5);
    assert_eq!(ctx.engine.m_cycle(), 0);
    assert_eq!(ctx.engine.next_cycle_type(), CycleType::Fetch);
}

#[test]
fn test_cycle_labels_run_one_ahead() {
    let mut ctx = TestContext::new().load_program(&[LDI, 0o42]);
    let mut labels = Vec::new();
    for _ in 0..6 {
        labels.push(ctx.engine.next_cycle_type());
        assert!(ctx.machine_step());
    }
    assert_eq!(
        labels,
        vec![
            CycleType::Fetch,
            CycleType::Decode,
            CycleType::IncPc,
            CycleType::MemRead,
            CycleType::IncPc,
            CycleType::Fetch,
        ]
    );
    assert_eq!(ctx.a(), 0o42);
}

#[test]
fn test_fetch_and_decode_registers() {
    let mut ctx = TestContext::new().load_program(&[0o1205]);
    assert!(ctx.machine_step());
    assert_eq!(ctx.engine.regs.ir, 0o1205);
    assert_eq!(ctx.engine.opcode_address(), 0);
    assert_eq!(ctx.pc(), 0);
    assert!(ctx.machine_step());
    assert_eq!(ctx.engine.opcode(), LDI as usize);
}

#[test]
fn test_reserved_opcode_only_advances_pc() {
    let mut ctx = TestContext::new().load_program(&[FIRST_RESERVED]);
    let before = ctx.engine.registers();

    let cycles = ctx.instruction_step();

    let after = ctx.engine.registers();
    assert_eq!(cycles, 3);
    assert_eq!(ctx.pc(), 1);
    assert_eq!(after.regs.a, before.regs.a);
    assert_eq!(after.regs.b, before.regs.b);
    assert_eq!(after.regs.mar, before.regs.mar);
    assert_eq!(after.flags, before.flags);
    assert!(ctx.engine.changed_addresses().is_empty());
}

#[test]
fn test_held_machine_step_fires_once() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    ctx.lines.m_step = true;
    ctx.scan();

    assert!(ctx.engine.update());
    assert!(!ctx.engine.update());
    ctx.scan();
    assert!(!ctx.engine.update());
    assert_eq!(ctx.engine.m_cycle(), 1);

    ctx.lines.m_step = false;
    ctx.scan();
    assert!(!ctx.engine.update());
    ctx.lines.m_step = true;
    ctx.scan();
    assert!(ctx.engine.update());
    assert_eq!(ctx.engine.m_cycle(), 2);
}

#[test]
fn test_instruction_step_runs_whole_instruction() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    assert_eq!(ctx.instruction_step(), 5);
    assert_eq!(ctx.a(), 5);
    assert_eq!(ctx.pc(), 2);
    assert_eq!(ctx.engine.i_cycle(), 1);
    assert_eq!(ctx.instruction_step(), 6);
    assert_eq!(ctx.mem(0o77), 5);
}

#[test]
fn test_idle_without_run_or_step() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    for _ in 0..10 {
        assert!(!ctx.engine.update());
    }
    assert_eq!(ctx.engine.m_cycle(), 0);
    assert_eq!(ctx.engine.stats.machine_cycles, 0);
}

#[test]
fn test_run_ignores_held_step() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    ctx.lines.m_step = true;
    ctx.set_run(true);
    for _ in 0..4 {
        assert!(ctx.engine.update());
    }
    assert_eq!(ctx.engine.m_cycle(), 4);
}

#[test]
fn test_powered_off_engine_does_nothing() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    ctx.lines.on = false;
    ctx.set_run(true);
    assert!(!ctx.engine.status.on);
    assert!(!ctx.engine.status.running);
    assert!(!ctx.engine.update());
    assert!(!ctx.machine_step());
}

#[test]
fn test_halt_blocks_run_and_step_by_default() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    let _ = ctx.run_to_halt(100);
    ctx.set_run(false);
    ctx.set_run(true);
    assert!(!ctx.engine.status.running);
    assert!(!ctx.engine.update());
    ctx.set_run(false);
    assert!(!ctx.machine_step());
    assert_eq!(ctx.instruction_step(), 0);
    assert!(ctx.engine.status.halted);
}

#[test]
fn test_step_when_halted_resumes() {
    let mut config = TestContext::config();
    config.general.step_when_halted = true;
    let mut ctx = TestContext::with_config(config).load_program(STORE_FIVE);
    let _ = ctx.run_to_halt(100);
    ctx.set_run(false);
    assert!(ctx.engine.status.halted);

    assert_eq!(ctx.instruction_step(), 3);
    assert!(!ctx.engine.status.halted);
    assert_eq!(ctx.pc(), 6);
}

#[test]
fn test_reset_keeps_memory_and_accumulator() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    let _ = ctx.run_to_halt(100);
    ctx.set_run(false);
    ctx.engine.regs.b = 0o321;
    let memory = ctx.engine.memory().to_vec();

    ctx.press_reset();

    assert_eq!(ctx.pc(), 0);
    assert!(!ctx.engine.status.halted);
    assert!(!ctx.engine.status.running);
    assert_eq!(ctx.a(), 5);
    assert_eq!(ctx.engine.regs.b, 0o321);
    assert_eq!(ctx.engine.memory(), memory.as_slice());
    assert_eq!(ctx.engine.next_cycle_type(), CycleType::Fetch);
}

#[test]
fn test_reset_mid_instruction_restarts_at_fetch() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    assert!(ctx.machine_step());
    assert!(ctx.machine_step());
    assert!(ctx.machine_step());
    assert_eq!(ctx.engine.reset(), PanelAction::Applied);
    assert_eq!(ctx.engine.m_cycle(), 0);
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn test_reset_ignored_when_off() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    ctx.engine.regs.pc = 0o17;
    ctx.lines.on = false;
    ctx.scan();
    assert_eq!(ctx.engine.reset(), PanelAction::NotPoweredOn);
    ctx.press_reset();
    assert_eq!(ctx.pc(), 0o17);
}

#[test]
fn test_pc_wraps_at_word_limit() {
    let mut ctx = TestContext::new().load_program(&[]);
    assert_eq!(ctx.engine.examine(0o7777), PanelAction::Applied);
    assert_eq!(ctx.instruction_step(), 3);
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn test_cycle_histogram() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    let _ = ctx.run_to_halt(100);
    let stats = &ctx.engine.stats;
    assert_eq!(stats.machine_cycles, 15);
    assert_eq!(stats.instruction_cycles, 3);
    assert_eq!(stats.cycles_of(CycleType::Fetch), 3);
    assert_eq!(stats.cycles_of(CycleType::Decode), 3);
    assert_eq!(stats.cycles_of(CycleType::IncPc), 5);
    assert_eq!(stats.cycles_of(CycleType::MemRead), 2);
    assert_eq!(stats.cycles_of(CycleType::MemWrite), 1);
    assert_eq!(stats.cycles_of(CycleType::Halt), 1);
    assert_eq!(stats.halts, 1);
}

#[test]
fn test_trace_instructions_does_not_change_execution() {
    let mut config = TestContext::config();
    config.general.trace_instructions = true;
    let mut ctx = TestContext::with_config(config).load_program(STORE_FIVE);
    assert_eq!(ctx.run_to_halt(100), 15);
    assert_eq!(ctx.mem(0o77), 5);
}

#[test]
fn test_same_seed_same_power_on_state() {
    let a = TestContext::new();
    let b = TestContext::new();
    assert_eq!(a.engine.memory(), b.engine.memory());
    assert_eq!(a.engine.registers(), b.engine.registers());
}

#[test]
fn test_snapshot_json() {
    let mut ctx = TestContext::new().load_program(STORE_FIVE);
    let _ = ctx.run_to_halt(100);
    let snapshot = ctx.engine.snapshot();
    assert_eq!(snapshot.memory.len(), 64);
    assert_eq!(snapshot.mnemonic, "HLT");

    let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(json["regs"]["a"], 5);
    assert_eq!(json["status"]["halted"], true);
    assert_eq!(json["word_bits"], 12);
    assert_eq!(json["next_cycle"], "Fetch");
}
