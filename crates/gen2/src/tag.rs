//! Gen2 tag identity as reported by an inventory or programmed by a WriteTag.

use std::fmt;

use crate::{bits::to_hex, errors::ValueError};

/// Longest EPC a Gen2 PC word can describe, in bytes.
pub const MAX_EPC_BYTES: usize = 62;

/// EPC of a tag plus the CRC and PC words that precede it in EPC memory.
///
/// Unless one is supplied, the PC is derived from the EPC length: the length
/// in words goes in the top five bits, everything else is zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::serde::TagDataDef", into = "crate::serde::TagDataDef")
)]
pub struct TagData {
    epc: Vec<u8>,
    crc: Option<Vec<u8>>,
    pc: Option<Vec<u8>>,
}

impl TagData {
    /// Tag data with a PC derived from the EPC length. The length is not checked.
    pub fn new(epc: impl Into<Vec<u8>>) -> Self {
        let epc = epc.into();
        let pc = default_pc(epc.len());
        TagData {
            epc,
            crc: None,
            pc: Some(pc.to_vec()),
        }
    }

    /// Like [TagData::new], but rejects an EPC of odd length or longer than
    /// [MAX_EPC_BYTES], neither of which a PC word can describe.
    pub fn checked(epc: impl Into<Vec<u8>>) -> Result<Self, ValueError> {
        let epc = epc.into();
        if epc.len() > MAX_EPC_BYTES || epc.len() % 2 != 0 {
            return Err(ValueError::OutOfRange {
                kind: "EPC length",
                value: epc.len() as u32,
            });
        }

        Ok(TagData::new(epc))
    }

    pub fn with_crc(mut self, crc: impl Into<Vec<u8>>) -> Self {
        self.crc = Some(crc.into());
        self
    }

    pub fn with_pc(mut self, pc: impl Into<Vec<u8>>) -> Self {
        self.pc = Some(pc.into());
        self
    }

    /// EPC bytes, without the CRC and PC header.
    pub fn epc(&self) -> &[u8] {
        &self.epc
    }

    pub fn crc(&self) -> Option<&[u8]> {
        self.crc.as_deref()
    }

    pub fn pc(&self) -> Option<&[u8]> {
        self.pc.as_deref()
    }

    /// EPC as uppercase hex.
    pub fn epc_hex(&self) -> String {
        to_hex(&self.epc)
    }
}

/// PC word for an EPC of `epc_len` bytes.
pub fn default_pc(epc_len: usize) -> [u8; 2] {
    [(epc_len << 3) as u8, 0]
}

impl fmt::Display for TagData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.epc_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_data_accessors() {
        let tag = TagData::new([0xE2, 0x00, 0x10])
            .with_crc([0x12, 0x34])
            .with_pc([0x30, 0x00]);

        assert_eq!(tag.epc(), &[0xE2, 0x00, 0x10]);
        assert_eq!(tag.crc(), Some(&[0x12, 0x34][..]));
        assert_eq!(tag.pc(), Some(&[0x30, 0x00][..]));
        assert_eq!(tag.to_string(), "E20010");
    }

    #[test]
    fn test_tag_data_default_pc() {
        let tag = TagData::new(vec![0u8; 12]);
        assert_eq!(tag.crc(), None);
        assert_eq!(tag.pc(), Some(&[0x60, 0x00][..]));

        assert_eq!(TagData::new(vec![0u8; 2]).pc(), Some(&[0x10, 0x00][..]));
        assert_eq!(TagData::new(Vec::new()).pc(), Some(&[0x00, 0x00][..]));
    }

    #[test]
    fn test_tag_data_explicit_pc_wins() {
        let tag = TagData::new(vec![0u8; 12]).with_pc([0x34, 0x00]);
        assert_eq!(tag.pc(), Some(&[0x34, 0x00][..]));
    }

    #[test]
    fn test_tag_data_checked_length() {
        assert_eq!(
            TagData::checked(vec![0u8; 12]),
            Ok(TagData::new(vec![0u8; 12]))
        );
        assert!(TagData::checked(vec![0u8; MAX_EPC_BYTES]).is_ok());
        assert!(TagData::checked(Vec::new()).is_ok());

        assert_eq!(
            TagData::checked(vec![0u8; 63]),
            Err(ValueError::OutOfRange {
                kind: "EPC length",
                value: 63
            })
        );
        assert_eq!(
            TagData::checked(vec![0u8; 64]),
            Err(ValueError::OutOfRange {
                kind: "EPC length",
                value: 64
            })
        );
        assert_eq!(
            TagData::checked([0xAB, 0xCD, 0xEF]),
            Err(ValueError::OutOfRange {
                kind: "EPC length",
                value: 3
            })
        );
    }
}
