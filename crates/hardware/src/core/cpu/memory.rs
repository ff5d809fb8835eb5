//! Memory Access and Observation.
//!
//! This module provides the engine's word-access surface. It performs the following:
//! 1. **Wraparound:** Every address is reduced modulo the RAM size before use.
//! 2. **Truncation:** Every stored value is reduced modulo `2^N`.
//! 3. **Change Tracking:** Writes that alter a word are recorded for display.

use super::Engine;
use super::snapshot::RegisterSnapshot;
use crate::common::Word;

impl Engine {
    /// Reads the word at an address.
    ///
    /// # Arguments
    ///
    /// * `address` - Any address; negative and oversized values wrap.
    #[inline]
    pub fn get_word_at(&self, address: i64) -> Word {
        self.memory.read(address)
    }

    /// Writes a value at an address.
    ///
    /// # Arguments
    ///
    /// * `address` - Any address; negative and oversized values wrap.
    /// * `value` - Any value; only the low N bits are stored.
    ///
    /// The wrapped address is added to [`Engine::changed_addresses`] when the
    /// stored word actually changes.
    pub fn put_word_at(&mut self, address: i64, value: u64) {
        if let Some(index) = self.memory.write(address, value) {
            if !self.changed_marks[index] {
                self.changed_marks[index] = true;
                self.changed.push(index);
            }
        }
    }

    /// Number of words of RAM.
    #[inline]
    pub fn ram_words(&self) -> usize {
        self.memory.len()
    }

    /// All words of RAM in address order.
    #[inline]
    pub fn memory(&self) -> &[Word] {
        self.memory.words()
    }

    /// Addresses whose contents changed since the last [`Engine::sync_observation`].
    #[inline]
    pub fn changed_addresses(&self) -> &[usize] {
        &self.changed
    }

    /// Registers, flags, and status as of the last [`Engine::sync_observation`].
    #[inline]
    pub fn previous(&self) -> &RegisterSnapshot {
        &self.previous
    }

    /// Current registers, flags, and status.
    pub fn registers(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            regs: self.regs,
            flags: self.flags,
            status: self.status,
        }
    }

    /// Marks the current state as observed.
    ///
    /// Copies the current registers into the previous snapshot and clears the
    /// changed-address list.
    pub fn sync_observation(&mut self) {
        self.previous = self.registers();
        for &index in &self.changed {
            self.changed_marks[index] = false;
        }
        self.changed.clear();
    }
}
