//! Word-addressed RAM.
//!
//! Memory is a fixed array of words. Addresses of any sign or magnitude are
//! reduced modulo the RAM size before indexing, so no access can fall outside
//! the backing storage.

use crate::common::{NoiseSource, Word, WordWidth};

/// Fixed-size RAM with wraparound addressing and N-bit cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<Word>,
    width: WordWidth,
}

impl Memory {
    /// Creates a zero-filled memory.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of words; must be non-zero.
    /// * `width` - Width every stored word is truncated to.
    pub fn new(size: usize, width: WordWidth) -> Self {
        Self {
            words: vec![0; size.max(1)],
            width,
        }
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; a memory has at least one word.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reduces an address to an index into the backing storage.
    ///
    /// Equivalent to `((address mod len) + len) mod len`.
    #[inline]
    pub fn wrap(&self, address: i64) -> usize {
        address.rem_euclid(self.words.len() as i64) as usize
    }

    /// Reads the word at a wrapped address.
    #[inline]
    pub fn read(&self, address: i64) -> Word {
        self.words[self.wrap(address)]
    }

    /// Writes a truncated value at a wrapped address.
    ///
    /// # Returns
    ///
    /// The wrapped index if the stored word changed, `None` otherwise.
    pub fn write(&mut self, address: i64, value: u64) -> Option<usize> {
        let index = self.wrap(address);
        let value = self.width.truncate(value);
        if self.words[index] == value {
            return None;
        }
        self.words[index] = value;
        Some(index)
    }

    /// All words in address order.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Fills memory with noise.
    pub fn scramble(&mut self, noise: &mut NoiseSource) {
        for word in &mut self.words {
            *word = noise.next_word(self.width);
        }
    }
}
