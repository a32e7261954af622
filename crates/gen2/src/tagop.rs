//! Gen2 tag operations handed to a reader for execution against a singulated tag.
//!
//! These are plain descriptors. Range checks (word counts, bank choice) belong
//! to the command encoder that turns them into reader payloads; in particular
//! [Bank::Reserved] is legal here, unlike in a [crate::select::Select].

use crate::{lock::LockAction, tag::TagData, types::Bank};

/// One Gen2 tag operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagOp {
    /// Read `len` 16-bit words from `bank` starting at `word_address`.
    ReadData {
        bank: Bank,
        word_address: u32,
        len: u8,
    },
    /// Write `data` word by word into `bank` starting at `word_address`.
    WriteData {
        bank: Bank,
        word_address: u32,
        data: Vec<u16>,
    },
    /// Apply `lock_action` after authenticating with `access_password`.
    Lock {
        access_password: u32,
        lock_action: LockAction,
    },
    Kill { kill_password: u32 },
    /// Program a new EPC.
    WriteTag { epc: TagData },
    /// Write `data` to `bank` at `word_ptr` with a single BlockWrite.
    BlockWrite {
        bank: Bank,
        word_ptr: u32,
        data: Vec<u16>,
    },
    /// Query (`read_lock == 0`) or set (`read_lock == 1`) block permalock bits.
    /// `block_range` counts groups of 16 blocks starting at `block_ptr`; `mask`
    /// holds one word per group.
    BlockPermaLock {
        read_lock: u8,
        bank: Bank,
        block_ptr: u32,
        block_range: u8,
        mask: Vec<u16>,
    },
}

impl TagOp {
    pub fn read_data(bank: Bank, word_address: u32, len: u8) -> Self {
        TagOp::ReadData {
            bank,
            word_address,
            len,
        }
    }

    pub fn write_data(bank: Bank, word_address: u32, data: impl Into<Vec<u16>>) -> Self {
        TagOp::WriteData {
            bank,
            word_address,
            data: data.into(),
        }
    }

    pub fn lock(access_password: u32, lock_action: LockAction) -> Self {
        TagOp::Lock {
            access_password,
            lock_action,
        }
    }

    pub fn kill(kill_password: u32) -> Self {
        TagOp::Kill { kill_password }
    }

    pub fn write_tag(epc: TagData) -> Self {
        TagOp::WriteTag { epc }
    }

    pub fn block_write(bank: Bank, word_ptr: u32, data: impl Into<Vec<u16>>) -> Self {
        TagOp::BlockWrite {
            bank,
            word_ptr,
            data: data.into(),
        }
    }

    pub fn block_perma_lock(
        read_lock: u8,
        bank: Bank,
        block_ptr: u32,
        block_range: u8,
        mask: impl Into<Vec<u16>>,
    ) -> Self {
        TagOp::BlockPermaLock {
            read_lock,
            bank,
            block_ptr,
            block_range,
            mask: mask.into(),
        }
    }

    /// Memory bank the operation addresses, for the variants that carry one.
    pub fn bank(&self) -> Option<Bank> {
        match self {
            TagOp::ReadData { bank, .. }
            | TagOp::WriteData { bank, .. }
            | TagOp::BlockWrite { bank, .. }
            | TagOp::BlockPermaLock { bank, .. } => Some(*bank),
            TagOp::Lock { .. } | TagOp::Kill { .. } | TagOp::WriteTag { .. } => None,
        }
    }

    /// Short operation name, as reader logs print it.
    pub fn name(&self) -> &'static str {
        match self {
            TagOp::ReadData { .. } => "ReadData",
            TagOp::WriteData { .. } => "WriteData",
            TagOp::Lock { .. } => "Lock",
            TagOp::Kill { .. } => "Kill",
            TagOp::WriteTag { .. } => "WriteTag",
            TagOp::BlockWrite { .. } => "BlockWrite",
            TagOp::BlockPermaLock { .. } => "BlockPermaLock",
        }
    }
}
