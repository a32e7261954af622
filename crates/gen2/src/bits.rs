//! Bit access over byte slices as Gen2 addresses them.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first byte.
//! Both tag memory and Select masks use this layout on the air interface.

use std::fmt::Write;

/// Reads a single bit at `bit_pos` (0 = MSB of first byte). Returns `None` past the end.
pub fn read_bit_at(data: &[u8], bit_pos: usize) -> Option<u8> {
    let byte = *data.get(bit_pos / 8)?;
    Some((byte >> (7 - bit_pos % 8)) & 1)
}

/// Number of whole bytes needed to hold `bit_len` bits.
pub fn bytes_for_bits(bit_len: usize) -> usize {
    bit_len.div_ceil(8)
}

/// Uppercase hex with no separators, the way reader logs and Select strings print bytes.
pub fn to_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for byte in data {
        let _ = write!(out, "{:02X}", byte);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bit_at() {
        let data = [0b1000_0001, 0b0100_0000];
        assert_eq!(read_bit_at(&data, 0), Some(1));
        assert_eq!(read_bit_at(&data, 1), Some(0));
        assert_eq!(read_bit_at(&data, 7), Some(1));
        assert_eq!(read_bit_at(&data, 9), Some(1));
    }

    #[test]
    fn test_read_bit_out_of_bounds() {
        let data = [0b11111111];
        assert_eq!(read_bit_at(&data, 8), None);
        assert_eq!(read_bit_at(&[], 0), None);
    }

    #[test]
    fn test_bytes_for_bits() {
        assert_eq!(bytes_for_bits(0), 0);
        assert_eq!(bytes_for_bits(1), 1);
        assert_eq!(bytes_for_bits(8), 1);
        assert_eq!(bytes_for_bits(9), 2);
        assert_eq!(bytes_for_bits(96), 12);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0xAB, 0x01, 0xFF]), "AB01FF");
        assert_eq!(to_hex(&[]), "");
    }
}
