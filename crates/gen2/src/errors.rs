//! Error types for Select construction and matching, lock-action parsing and value decoding.

use thiserror::Error;

use crate::types::Bank;

/// Errors produced when building a [crate::select::Select].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Select may not operate on the reserved memory bank.
    #[error("Gen2 Select may not operate on reserved memory bank")]
    InvalidBank,
    /// Mask holds fewer bytes than `bit_length` needs.
    #[error("mask of {mask_len} bytes is too short for {bit_length} bits")]
    MaskTooShort { bit_length: u16, mask_len: usize },
}

/// Errors produced by [crate::select::Select::matches].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Local matching is only defined against EPC memory.
    #[error("can't match against non-EPC memory ({0})")]
    UnsupportedBank(Bank),
}

/// Errors produced when parsing a lock-action name list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockActionError {
    /// Token has no entry in the predefined lock-action table.
    #[error("unknown Gen2 lock action {0:?}")]
    UnknownLockActionName(String),
    /// Input was empty where a name list was required.
    #[error("lock action input is empty")]
    NullInput,
}

/// Errors produced when decoding a numeric protocol code into a value type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Code is outside the range defined for `kind`.
    #[error("{value} is not a valid {kind}")]
    OutOfRange { kind: &'static str, value: u32 },
    /// Name does not spell any variant of `kind`.
    #[error("{name:?} is not a valid {kind}")]
    UnknownName { kind: &'static str, name: String },
}
