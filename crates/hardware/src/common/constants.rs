//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Instruction Table:** Width of the opcode field and the resulting table size.
//! 2. **Memory Limits:** Bounds accepted for the configured RAM size.
//! 3. **Image Layout:** How RAM images are laid out as octal text.

/// Width of the opcode field in bits (two octal digits).
pub const OPCODE_BITS: u32 = 6;

/// Number of entries in the instruction table (`2^OPCODE_BITS`).
pub const OPCODE_COUNT: usize = 1 << OPCODE_BITS;

/// Largest RAM size accepted by the configuration, in words.
pub const MAX_RAM_WORDS: usize = 1 << 16;

/// Number of words written on each line of an exported RAM image.
pub const IMAGE_WORDS_PER_LINE: usize = 8;

/// Radix used by the RAM image text encoding.
pub const IMAGE_RADIX: u32 = 8;

/// Bits represented by a single digit of the RAM image text encoding.
pub const IMAGE_BITS_PER_DIGIT: u32 = 3;

const _: () = assert!(OPCODE_COUNT.is_power_of_two());
