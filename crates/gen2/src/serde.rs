//! JSON-deserializable descriptions of Select filters, lock actions and tag operations.
//!
//! These shapes are what configuration files and the WASM bindings exchange.
//! Convert them into the core types with `TryFrom`, which applies the same
//! checks as the core constructors.
//!
//! ```json
//! { "op": "Lock", "access_password": 0, "lock_action": "EPC_LOCK,USER_PERMALOCK" }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    errors::{LockActionError, SelectError, ValueError},
    lock::LockAction,
    select::Select,
    tag::TagData,
    tagop::TagOp,
    types::Bank,
};

/// A Select filter. Banks are spelled `"EPC"`, `"TID"`, `"USER"`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SelectDef {
    /// Deselect matching tags instead of selecting them.
    #[serde(default)]
    pub invert: bool,
    pub bank: Bank,
    /// First bit of the bank to compare, counting the CRC and PC on the EPC bank.
    pub bit_pointer: u32,
    /// Number of mask bits to compare.
    pub bit_length: u16,
    /// Mask bytes, MSB-first.
    pub mask: Vec<u8>,
}

impl TryFrom<SelectDef> for Select {
    type Error = SelectError;

    fn try_from(value: SelectDef) -> Result<Self, Self::Error> {
        Select::new(
            value.invert,
            value.bank,
            value.bit_pointer,
            value.bit_length,
            &value.mask,
        )
    }
}

impl From<&Select> for SelectDef {
    fn from(value: &Select) -> Self {
        SelectDef {
            invert: value.invert(),
            bank: value.bank(),
            bit_pointer: value.bit_pointer(),
            bit_length: value.bit_length(),
            mask: value.mask().to_vec(),
        }
    }
}

/// Tag data. `pc` defaults to the one derived from the EPC length.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TagDataDef {
    pub epc: Vec<u8>,
    #[serde(default)]
    pub crc: Option<Vec<u8>>,
    #[serde(default)]
    pub pc: Option<Vec<u8>>,
}

impl TryFrom<TagDataDef> for TagData {
    type Error = ValueError;

    fn try_from(value: TagDataDef) -> Result<Self, Self::Error> {
        let mut tag = TagData::checked(value.epc)?;
        if let Some(crc) = value.crc {
            tag = tag.with_crc(crc);
        }
        if let Some(pc) = value.pc {
            tag = tag.with_pc(pc);
        }

        Ok(tag)
    }
}

impl From<TagData> for TagDataDef {
    fn from(value: TagData) -> Self {
        TagDataDef {
            epc: value.epc().to_vec(),
            crc: value.crc().map(<[u8]>::to_vec),
            pc: value.pc().map(<[u8]>::to_vec),
        }
    }
}

/// A lock action, either as predefined names or as raw command fields.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum LockActionDef {
    /// Comma-separated predefined names, e.g. `"KILL_LOCK,ACCESS_LOCK"`.
    Names(String),
    /// Raw Lock command mask and action.
    Raw { mask: u16, action: u16 },
}

impl TryFrom<LockActionDef> for LockAction {
    type Error = LockActionError;

    fn try_from(value: LockActionDef) -> Result<Self, Self::Error> {
        match value {
            LockActionDef::Names(names) => LockAction::parse(&names),
            LockActionDef::Raw { mask, action } => Ok(LockAction::new(mask, action)),
        }
    }
}

impl From<LockAction> for LockActionDef {
    /// Uses names when they describe the value exactly, raw fields otherwise.
    fn from(value: LockAction) -> Self {
        let names = value.format();
        match LockAction::parse(&names) {
            Ok(parsed) if parsed == value => LockActionDef::Names(names),
            _ => LockActionDef::Raw {
                mask: value.mask(),
                action: value.action(),
            },
        }
    }
}

/// A tag operation, tagged by `"op"`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "op")]
pub enum TagOpDef {
    ReadData {
        bank: Bank,
        word_address: u32,
        len: u8,
    },
    WriteData {
        bank: Bank,
        word_address: u32,
        data: Vec<u16>,
    },
    Lock {
        #[serde(default)]
        access_password: u32,
        lock_action: LockActionDef,
    },
    Kill {
        kill_password: u32,
    },
    WriteTag {
        epc: TagData,
    },
    BlockWrite {
        bank: Bank,
        word_ptr: u32,
        data: Vec<u16>,
    },
    BlockPermaLock {
        read_lock: u8,
        bank: Bank,
        block_ptr: u32,
        block_range: u8,
        mask: Vec<u16>,
    },
}

impl TryFrom<TagOpDef> for TagOp {
    type Error = LockActionError;

    fn try_from(value: TagOpDef) -> Result<Self, Self::Error> {
        Ok(match value {
            TagOpDef::ReadData {
                bank,
                word_address,
                len,
            } => TagOp::read_data(bank, word_address, len),
            TagOpDef::WriteData {
                bank,
                word_address,
                data,
            } => TagOp::write_data(bank, word_address, data),
            TagOpDef::Lock {
                access_password,
                lock_action,
            } => TagOp::lock(access_password, lock_action.try_into()?),
            TagOpDef::Kill { kill_password } => TagOp::kill(kill_password),
            TagOpDef::WriteTag { epc } => TagOp::write_tag(epc),
            TagOpDef::BlockWrite {
                bank,
                word_ptr,
                data,
            } => TagOp::block_write(bank, word_ptr, data),
            TagOpDef::BlockPermaLock {
                read_lock,
                bank,
                block_ptr,
                block_range,
                mask,
            } => TagOp::block_perma_lock(read_lock, bank, block_ptr, block_range, mask),
        })
    }
}

impl From<&TagOp> for TagOpDef {
    fn from(value: &TagOp) -> Self {
        match value.clone() {
            TagOp::ReadData {
                bank,
                word_address,
                len,
            } => TagOpDef::ReadData {
                bank,
                word_address,
                len,
            },
            TagOp::WriteData {
                bank,
                word_address,
                data,
            } => TagOpDef::WriteData {
                bank,
                word_address,
                data,
            },
            TagOp::Lock {
                access_password,
                lock_action,
            } => TagOpDef::Lock {
                access_password,
                lock_action: lock_action.into(),
            },
            TagOp::Kill { kill_password } => TagOpDef::Kill { kill_password },
            TagOp::WriteTag { epc } => TagOpDef::WriteTag { epc },
            TagOp::BlockWrite {
                bank,
                word_ptr,
                data,
            } => TagOpDef::BlockWrite {
                bank,
                word_ptr,
                data,
            },
            TagOp::BlockPermaLock {
                read_lock,
                bank,
                block_ptr,
                block_range,
                mask,
            } => TagOpDef::BlockPermaLock {
                read_lock,
                bank,
                block_ptr,
                block_range,
                mask,
            },
        }
    }
}
