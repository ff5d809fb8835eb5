//! Machine word and word-width arithmetic.
//!
//! Every register and memory cell holds a [`Word`]. The number of significant
//! bits is not fixed at compile time: a [`WordWidth`] carries the configured
//! width and performs all wrapping. It provides:
//! 1. **Truncation:** Reduces any integer modulo `2^N`.
//! 2. **Geometry:** Modulus, mask, and most-significant-bit helpers for the ALU.
//! 3. **Text Layout:** Number of octal digits needed to print one word.

use serde::Serialize;

use super::constants::IMAGE_BITS_PER_DIGIT;

/// Storage type for a machine word. Only the low `N` bits are significant.
pub type Word = u16;

/// Widest word the simulator can model.
pub const MAX_WORD_BITS: u32 = Word::BITS;

/// Configured width of a machine word.
///
/// All arithmetic on words wraps modulo `2^bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct WordWidth {
    bits: u32,
}

impl WordWidth {
    /// Creates a word width.
    ///
    /// # Arguments
    ///
    /// * `bits` - Number of bits per word (1 to [`MAX_WORD_BITS`]).
    ///
    /// # Returns
    ///
    /// `None` if `bits` is zero or wider than a [`Word`].
    pub const fn new(bits: u32) -> Option<Self> {
        if bits == 0 || bits > MAX_WORD_BITS {
            None
        } else {
            Some(Self { bits })
        }
    }

    /// Number of bits per word.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// `2^N`, the value at which word arithmetic wraps.
    #[inline]
    pub const fn modulus(self) -> u32 {
        1 << self.bits
    }

    /// Bit mask selecting the significant bits of a word.
    #[inline]
    pub const fn mask(self) -> u32 {
        self.modulus() - 1
    }

    /// Largest representable word (`2^N - 1`).
    #[inline]
    pub const fn max_word(self) -> Word {
        self.mask() as Word
    }

    /// Mask selecting the most significant bit of a word.
    #[inline]
    pub const fn msb(self) -> u32 {
        1 << (self.bits - 1)
    }

    /// Reduces `value` modulo `2^N`.
    #[inline]
    pub const fn truncate(self, value: u64) -> Word {
        (value & self.mask() as u64) as Word
    }

    /// Returns `word + 1` modulo `2^N`.
    #[inline]
    pub const fn increment(self, word: Word) -> Word {
        self.truncate(word as u64 + 1)
    }

    /// Number of octal digits needed to print a full word.
    pub const fn octal_digits(self) -> usize {
        self.bits.div_ceil(IMAGE_BITS_PER_DIGIT) as usize
    }
}

impl Default for WordWidth {
    /// Returns the reference twelve-bit width.
    fn default() -> Self {
        Self { bits: 12 }
    }
}
