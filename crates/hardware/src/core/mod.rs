//! Core processor implementation.
//!
//! This module contains the machine's architectural state, its single
//! execution unit, and the engine that steps them one machine cycle at a time.

/// Architectural state (register file, flags, status, memory).
pub mod arch;

/// Engine: the machine-cycle state machine and its front-panel surface.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Engine;
pub use self::cpu::panel::{InputLines, PanelAction};
