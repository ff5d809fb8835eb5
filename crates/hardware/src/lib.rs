//! Twelve-bit front-panel computer simulator library.
//!
//! This crate implements a machine-cycle-accurate simulator of a minimal
//! stored-program computer with the following:
//! 1. **ISA:** A 64-entry instruction table where every opcode is an ordered list of micro-ops.
//! 2. **Core:** Registers, memory, flags, the ALU, and the fetch/decode/execute state machine.
//! 3. **Panel:** Edge-triggered input lines (power, run, reset, step, examine, deposit).
//! 4. **Simulation:** RAM image text codec, frame driver, configuration, and statistics.

/// Common types and constants (words, widths, noise source, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU engine (register file, memory, ALU, machine-cycle state machine).
pub mod core;
/// Instruction set (opcodes, micro-ops, instruction table, disassembly).
pub mod isa;
/// RAM image import/export and the frame driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main engine type; owns registers, memory, flags, and status.
pub use crate::core::Engine;
/// Front-panel input lines scanned by [`Engine::scan_inputs`].
pub use crate::core::InputLines;
/// Unsigned machine word.
pub use crate::common::Word;
/// Outcome of a front-panel examine or deposit.
pub use crate::core::PanelAction;
