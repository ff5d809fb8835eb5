//! Configuration system for the front-panel computer simulator.
//!
//! This module defines all configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (word width, RAM size, driver rates).
//! 2. **Structures:** Hierarchical config for the machine, general options, and the frame driver.
//! 3. **Loading:** JSON parsing from text or a file, followed by validation.
//!
//! Every field is optional in JSON; missing fields take the reference values
//! of a twelve-bit machine with 64 words of RAM.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::MAX_RAM_WORDS;
use crate::common::{ConfigError, WordWidth};

/// Default configuration constants for the simulator.
mod defaults {
    /// Bits per machine word.
    pub const WORD_BITS: u32 = 12;

    /// Words of RAM; the last word doubles as the subroutine call slot.
    pub const RAM_WORDS: usize = 64;

    /// Machine cycles per second the fast driver aims for.
    pub const FAST_TARGET_HZ: u64 = 1_000_000;

    /// Cap on machine cycles per frame (one sixtieth of a second at the fast target).
    pub const MAX_TICKS_PER_FRAME: u64 = 16_666;
}

/// Root configuration structure for the simulator.
///
/// # Example
///
/// ```
/// use twelvebit_core::config::Config;
///
/// let json = r#"{
///     "machine": { "word_bits": 8, "ram_words": 256 },
///     "general": { "step_when_halted": true, "seed": 7 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.machine.word_bits, 8);
/// assert_eq!(config.machine.ram_words, 256);
/// assert!(config.general.step_when_halted);
/// assert_eq!(config.general.seed, Some(7));
/// assert_eq!(config.driver.fast_target_hz, 1_000_000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Machine geometry
    #[serde(default)]
    pub machine: MachineConfig,
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Frame driver pacing
    #[serde(default)]
    pub driver: DriverConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON document; absent fields take their defaults.
    ///
    /// # Returns
    ///
    /// The configuration, or the first parse or validation error.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks that the configuration describes a machine that can exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let _ = self.machine.word_width()?;
        if self.machine.ram_words == 0 || self.machine.ram_words > MAX_RAM_WORDS {
            return Err(ConfigError::InvalidRamSize(self.machine.ram_words));
        }
        if self.driver.fast_target_hz == 0 || self.driver.max_ticks_per_frame == 0 {
            return Err(ConfigError::InvalidDriverRate {
                fast_target_hz: self.driver.fast_target_hz,
                max_ticks_per_frame: self.driver.max_ticks_per_frame,
            });
        }
        Ok(())
    }
}

/// Machine geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// Bits per word (N)
    #[serde(default = "MachineConfig::default_word_bits")]
    pub word_bits: u32,

    /// Number of words of RAM
    #[serde(default = "MachineConfig::default_ram_words")]
    pub ram_words: usize,
}

impl MachineConfig {
    fn default_word_bits() -> u32 {
        defaults::WORD_BITS
    }

    fn default_ram_words() -> usize {
        defaults::RAM_WORDS
    }

    /// Returns the configured word width.
    ///
    /// # Returns
    ///
    /// [`ConfigError::InvalidWordWidth`] if `word_bits` is out of range.
    pub fn word_width(&self) -> Result<WordWidth, ConfigError> {
        WordWidth::new(self.word_bits).ok_or(ConfigError::InvalidWordWidth(self.word_bits))
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            word_bits: defaults::WORD_BITS,
            ram_words: defaults::RAM_WORDS,
        }
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Honor machine/instruction steps while the CPU is halted
    #[serde(default)]
    pub step_when_halted: bool,

    /// Seed for the power-on noise; `None` derives one from the clock
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log every completed instruction at debug level
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Frame driver pacing.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    /// Target machine cycles per second in fast mode
    #[serde(default = "DriverConfig::default_fast_target_hz")]
    pub fast_target_hz: u64,

    /// Upper bound on machine cycles executed in one frame
    #[serde(default = "DriverConfig::default_max_ticks_per_frame")]
    pub max_ticks_per_frame: u64,
}

impl DriverConfig {
    fn default_fast_target_hz() -> u64 {
        defaults::FAST_TARGET_HZ
    }

    fn default_max_ticks_per_frame() -> u64 {
        defaults::MAX_TICKS_PER_FRAME
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            fast_target_hz: defaults::FAST_TARGET_HZ,
            max_ticks_per_frame: defaults::MAX_TICKS_PER_FRAME,
        }
    }
}
