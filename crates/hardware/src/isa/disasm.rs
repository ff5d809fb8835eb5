//! Disassembler for memory listings.
//!
//! Turns instruction words back into mnemonics for trace output, the CLI
//! `disasm` command, and test diagnostics. Since every word decodes to some
//! instruction, disassembly never fails; data words simply read as whatever
//! instruction their low six bits select.
//!
//! # Usage
//!
//! ```
//! use twelvebit_core::common::WordWidth;
//! use twelvebit_core::isa::disasm::listing;
//!
//! let lines = listing(&[0o05, 0o05, 0o12], WordWidth::default());
//! assert_eq!(lines[0].to_string(), "0000: 0005 LDI 0005");
//! assert_eq!(lines[1].to_string(), "0002: 0012 HLT");
//! ```

use std::fmt;

use crate::common::{Word, WordWidth};
use crate::isa::table::{decode, lookup};

/// Returns the mnemonic of the instruction a word decodes to.
#[inline]
pub fn mnemonic(word: Word) -> &'static str {
    lookup(decode(word)).mnemonic
}

/// One disassembled instruction in a memory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    /// Address of the opcode word.
    pub address: usize,
    /// The full opcode word, including bits above the opcode field.
    pub word: Word,
    /// Mnemonic of the decoded instruction.
    pub mnemonic: &'static str,
    /// Operand word, if the instruction takes one and memory holds it.
    pub operand: Option<Word>,
    /// Octal digits per printed word.
    digits: usize,
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.digits;
        write!(
            f,
            "{:0w$o}: {:0w$o} {}",
            self.address, self.word, self.mnemonic
        )?;
        if let Some(operand) = self.operand {
            write!(f, " {operand:0w$o}")?;
        }
        Ok(())
    }
}

/// Disassembles a memory image from address zero.
///
/// Operand words are consumed with their instruction. An instruction whose
/// operand would lie past the end of `words` is listed without one.
///
/// # Arguments
///
/// * `words` - Memory contents.
/// * `width` - Word width, which sets the number of octal digits printed.
///
/// # Returns
///
/// One [`ListingLine`] per instruction, in address order.
pub fn listing(words: &[Word], width: WordWidth) -> Vec<ListingLine> {
    let digits = width.octal_digits();
    let mut lines = Vec::new();
    let mut address = 0;

    while address < words.len() {
        let word = words[address];
        let inst = lookup(decode(word));
        let operand = if inst.operand_count > 0 {
            words.get(address + 1).copied()
        } else {
            None
        };
        lines.push(ListingLine {
            address,
            word,
            mnemonic: inst.mnemonic,
            operand,
            digits,
        });
        address += inst.word_count();
    }

    lines
}
