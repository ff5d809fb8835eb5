//! RAM Image Text Format.
//!
//! This module converts memory to and from the panel's octal text format. It performs:
//! 1. **Export:** One zero-padded octal group per word, space separated, eight words per line.
//! 2. **Import:** Keeps only octal digits, groups them into words, and zero-fills the rest of RAM.
//!
//! The group width is `ceil(N / 3)` digits, so a twelve-bit word is four digits.
//! Import is permitted only while the machine is on and not running.

use std::fmt;

use tracing::debug;

use crate::common::Word;
use crate::common::constants::{IMAGE_RADIX, IMAGE_WORDS_PER_LINE};
use crate::core::Engine;

/// Result of [`import_ram`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportStatus {
    /// This many words were read from the text; the rest of RAM was zeroed.
    Loaded(usize),
    /// Ignored: the machine is off.
    NotPoweredOn,
    /// Ignored: the machine is running.
    Running,
    /// Ignored: the text holds more words than RAM.
    AddressOutOfRange,
    /// Ignored: the text holds no octal digits.
    NoValidData,
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(n) => write!(f, "loaded {n} words"),
            Self::NotPoweredOn => f.write_str("not powered on"),
            Self::Running => f.write_str("machine is running"),
            Self::AddressOutOfRange => f.write_str("address out of range"),
            Self::NoValidData => f.write_str("no valid data found"),
        }
    }
}

/// Renders memory in the RAM image text format.
///
/// # Returns
///
/// The image text, with no trailing newline.
pub fn export_ram(engine: &Engine) -> String {
    format_words(engine.memory(), engine.width().octal_digits())
}

/// Parses image text into word values without touching any engine.
///
/// Characters that are not octal digits are skipped. A trailing group with
/// fewer digits than a full word still counts as a word.
///
/// # Arguments
///
/// * `text` - Image text.
/// * `digits` - Octal digits per word.
pub fn parse_image(text: &str, digits: usize) -> Vec<u64> {
    let octal: Vec<u64> = text
        .chars()
        .filter_map(|c| c.to_digit(IMAGE_RADIX))
        .map(u64::from)
        .collect();
    octal
        .chunks(digits.max(1))
        .map(|group| {
            group
                .iter()
                .fold(0, |acc, &d| acc * u64::from(IMAGE_RADIX) + d)
        })
        .collect()
}

/// Replaces memory with the contents of an image.
///
/// Words beyond the end of the image are set to zero. Values wider than the
/// word width are truncated as by [`Engine::put_word_at`]. On any status
/// other than [`ImportStatus::Loaded`] memory is left unchanged.
///
/// # Arguments
///
/// * `engine` - Target machine; must be on and not running.
/// * `text` - Image text.
pub fn import_ram(engine: &mut Engine, text: &str) -> ImportStatus {
    if !engine.status.on {
        return ImportStatus::NotPoweredOn;
    }
    if engine.status.running {
        return ImportStatus::Running;
    }

    let words = parse_image(text, engine.width().octal_digits());
    if words.is_empty() {
        return ImportStatus::NoValidData;
    }
    if words.len() > engine.ram_words() {
        debug!(
            words = words.len(),
            capacity = engine.ram_words(),
            "image larger than memory"
        );
        return ImportStatus::AddressOutOfRange;
    }

    for address in 0..engine.ram_words() {
        let value = words.get(address).copied().unwrap_or(0);
        engine.put_word_at(address as i64, value);
    }
    debug!(words = words.len(), "image imported");
    ImportStatus::Loaded(words.len())
}

/// Converts a list of words to image text, laid out as [`export_ram`] does.
pub fn format_words(words: &[Word], digits: usize) -> String {
    words
        .chunks(IMAGE_WORDS_PER_LINE)
        .map(|line| {
            line.iter()
                .map(|w| format!("{w:0digits$o}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
