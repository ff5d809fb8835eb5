//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks shared by the ISA table,
//! the engine, and the simulation helpers. It includes:
//! 1. **Words:** The machine word type and the configurable word width.
//! 2. **Constants:** Instruction table geometry and RAM image layout.
//! 3. **Noise:** The pseudo-random source that models uninitialised hardware.
//! 4. **Error Handling:** Configuration errors reported at construction time.

/// Common constants used throughout the simulator.
pub mod constants;

/// Configuration error type.
pub mod error;

/// Power-on noise generator.
pub mod noise;

/// Machine word and word-width arithmetic.
pub mod word;

pub use constants::{OPCODE_BITS, OPCODE_COUNT};
pub use error::ConfigError;
pub use noise::NoiseSource;
pub use word::{MAX_WORD_BITS, Word, WordWidth};
