//! Configuration error definitions.
//!
//! The engine itself never fails once constructed: addresses wrap, opcodes
//! wrap, and reserved opcodes decode to NOP. The only errors in the crate are
//! raised while building an engine from a configuration that describes an
//! impossible machine, or while reading that configuration from disk.

use thiserror::Error;

use super::constants::MAX_RAM_WORDS;
use super::word::MAX_WORD_BITS;

/// Errors raised while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The word width is zero or wider than a [`Word`](super::Word) can hold.
    #[error("word width must be between 1 and {max} bits, got {0}", max = MAX_WORD_BITS)]
    InvalidWordWidth(u32),

    /// The RAM size is zero or larger than the simulator supports.
    #[error("RAM must hold between 1 and {max} words, got {0}", max = MAX_RAM_WORDS)]
    InvalidRamSize(usize),

    /// The frame driver was configured to never tick.
    #[error(
        "driver rates must be non-zero (fast_target_hz = {fast_target_hz}, max_ticks_per_frame = {max_ticks_per_frame})"
    )]
    InvalidDriverRate {
        /// Target machine cycles per second in fast mode.
        fast_target_hz: u64,
        /// Upper bound on machine cycles executed per frame.
        max_ticks_per_frame: u64,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
}
