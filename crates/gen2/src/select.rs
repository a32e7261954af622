//! Gen2 Select: a bit-range comparison against one memory bank of a tag.
//!
//! Bit addresses in EPC memory count from the start of the bank, so the 16-bit
//! CRC and 16-bit PC words occupy bits 0..32 and the EPC itself starts at bit 32.
//! Tag data read back from an inventory carries only the EPC, so matching shifts
//! the pointer by that header. Mask bits that land inside the header have no
//! defined outcome in the air protocol (Gen2 1.2.0, 6.3.2.11.1.1); they are
//! treated as matching.

use std::fmt;

use log::{debug, trace};

use crate::{
    bits::{bytes_for_bits, read_bit_at, to_hex},
    errors::{MatchError, SelectError},
    tag::TagData,
    types::Bank,
};

/// Bits of CRC + PC preceding the EPC in EPC-bank addressing.
pub const EPC_HEADER_BITS: i64 = 32;

/// A single Gen2 Select filter. Immutable once built; see [Select::new].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Select {
    invert: bool,
    bank: Bank,
    bit_pointer: u32,
    bit_length: u16,
    mask: Box<[u8]>,
}

impl Select {
    /// Builds a Select comparing `bit_length` bits of `mask` against `bank`
    /// starting at `bit_pointer`. The mask is copied. Fails on the reserved
    /// bank or when the mask is too short for `bit_length`.
    pub fn new(
        invert: bool,
        bank: Bank,
        bit_pointer: u32,
        bit_length: u16,
        mask: &[u8],
    ) -> Result<Self, SelectError> {
        if bank == Bank::Reserved {
            return Err(SelectError::InvalidBank);
        }

        if mask.len() < bytes_for_bits(bit_length as usize) {
            return Err(SelectError::MaskTooShort {
                bit_length,
                mask_len: mask.len(),
            });
        }

        Ok(Select {
            invert,
            bank,
            bit_pointer,
            bit_length,
            mask: mask.into(),
        })
    }

    /// Non-inverted Select on the EPC bank.
    pub fn epc(bit_pointer: u32, bit_length: u16, mask: &[u8]) -> Result<Self, SelectError> {
        Select::new(false, Bank::Epc, bit_pointer, bit_length, mask)
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn bank(&self) -> Bank {
        self.bank
    }

    pub fn bit_pointer(&self) -> u32 {
        self.bit_pointer
    }

    pub fn bit_length(&self) -> u16 {
        self.bit_length
    }

    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// Same filter with the invert flag flipped.
    pub fn inverted(&self) -> Self {
        Select {
            invert: !self.invert,
            ..self.clone()
        }
    }

    /// Evaluates this Select against the EPC bytes of a tag (no CRC or PC).
    ///
    /// Only EPC-bank filters can be evaluated locally. A mask that runs past
    /// the end of the EPC does not match.
    pub fn matches(&self, epc: &[u8]) -> Result<bool, MatchError> {
        if self.bank != Bank::Epc {
            return Err(MatchError::UnsupportedBank(self.bank));
        }

        let mut i = 0usize;
        let mut bit_addr = self.bit_pointer as i64 - EPC_HEADER_BITS;
        if bit_addr < 0 {
            debug!(
                "Select mask starts {} bits inside CRC/PC, skipping them",
                -bit_addr
            );
            i = (-bit_addr) as usize;
            bit_addr = 0;
        }

        let epc_bits = epc.len() * 8;
        let mut bit_addr = bit_addr as usize;
        let mut matched = true;

        while i < self.bit_length as usize {
            if bit_addr >= epc_bits {
                trace!("Select mask runs past {}-bit EPC", epc_bits);
                matched = false;
                break;
            }

            if read_bit_at(epc, bit_addr) != read_bit_at(&self.mask, i) {
                trace!("Select mismatch at mask bit {}, EPC bit {}", i, bit_addr);
                matched = false;
                break;
            }

            i += 1;
            bit_addr += 1;
        }

        Ok(matched != self.invert)
    }

    /// [Select::matches] over the EPC of `tag`.
    pub fn matches_tag(&self, tag: &TagData) -> Result<bool, MatchError> {
        self.matches(tag.epc())
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gen2.Select:[{}{},{},{},{}]",
            if self.invert { "Invert," } else { "" },
            self.bank,
            self.bit_pointer,
            self.bit_length,
            to_hex(&self.mask)
        )
    }
}
