//! Execution units.
//!
//! The machine has a single functional unit, the ALU. Register moves and
//! memory accesses are handled directly by the engine.

/// Arithmetic Logic Unit for accumulator operations.
pub mod alu;
