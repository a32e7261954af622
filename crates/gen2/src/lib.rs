//! # gen2
//!
//! Data model for the EPC Class-1 Gen2 RFID air interface as a reader-control
//! library sees it: Select filters, Lock command payloads and tag operations.
//!
//! Build a [select::Select] to describe which tags to talk to, evaluate it
//! locally against inventoried EPCs, compose [lock::LockAction]s from their
//! predefined names, and wrap everything in [tagop::TagOp]s for a command
//! encoder. Bits are addressed MSB-first throughout: bit 0 is the high bit of
//! the first byte.
//!
//! ## Example
//!
//! ```
//! use gen2::select::Select;
//! use gen2::lock::LockAction;
//! use gen2::tagop::TagOp;
//!
//! // EPC memory bit 32 is the first bit of the EPC, after CRC and PC.
//! let select = Select::epc(32, 8, &[0xAB]).unwrap();
//! assert_eq!(select.matches(&[0xAB, 0x12, 0x34, 0x56]), Ok(true));
//!
//! let lock: LockAction = "EPC_LOCK,ACCESS_LOCK".parse().unwrap();
//! let op = TagOp::lock(0x1234_5678, lock);
//! assert_eq!(lock.to_string(), "ACCESS_LOCK,EPC_LOCK");
//! # let _ = op;
//! ```

pub mod bits;
pub mod errors;
pub mod lock;
pub mod select;
#[cfg(feature = "serde")]
pub mod serde;
pub mod tag;
pub mod tagop;
pub mod types;

pub use errors::{LockActionError, MatchError, SelectError, ValueError};
pub use lock::{LockAction, LockBits, LockField, LockOp};
pub use select::Select;
pub use tag::TagData;
pub use tagop::TagOp;
pub use types::Bank;
