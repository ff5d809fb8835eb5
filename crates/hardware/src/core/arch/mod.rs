//! Architectural state of the machine.
//!
//! This module contains the state a programmer can observe on the front panel.
//! It includes the following modules:
//! 1. **Registers:** The register file, the ALU flags, and the machine status.
//! 2. **Memory:** The word-addressed RAM with wraparound addressing.

/// Word-addressed RAM.
pub mod memory;

/// Register file, flags, and status.
pub mod registers;
