//! Gen2 Lock command payloads: which lock bits to touch and what to set them to.
//!
//! The Lock command carries a 10-bit mask and a 10-bit action. Each of the five
//! lockable fields owns two adjacent bits, a value bit (locked / unlocked) and
//! a permalock bit (whether the value bit may change again):
//!
//! ```text
//! bit   9    8         7      6            5    4         3    2         1     0
//!       KILL KILL_PERM ACCESS ACCESS_PERM  EPC  EPC_PERM  TID  TID_PERM  USER  USER_PERM
//! ```
//!
//! Only bits set in the mask are changed on the tag; action bits outside the
//! mask are ignored.
//!
//! ## Example
//!
//! ```
//! use gen2::lock::LockAction;
//!
//! let la: LockAction = "kill_lock,USER_PERMALOCK".parse().unwrap();
//! assert_eq!(la, LockAction::KILL_LOCK | LockAction::USER_PERMALOCK);
//! assert_eq!(la.to_string(), "KILL_LOCK,USER_PERMALOCK");
//! assert_eq!((la.mask(), la.action()), (0x0303, 0x0203));
//! ```

use std::{fmt, ops::BitOr, str::FromStr};

use bitflags::bitflags;
use log::debug;

use crate::errors::LockActionError;

bitflags! {
    /// Bit positions of the Gen2 Lock mask and action fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LockBits: u16 {
        const USER_PERM = 1 << 0;
        const USER = 1 << 1;
        const TID_PERM = 1 << 2;
        const TID = 1 << 3;
        const EPC_PERM = 1 << 4;
        const EPC = 1 << 5;
        const ACCESS_PERM = 1 << 6;
        const ACCESS = 1 << 7;
        const KILL_PERM = 1 << 8;
        const KILL = 1 << 9;
    }
}

/// A lockable part of tag memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockField {
    /// Kill password.
    Kill,
    /// Access password.
    Access,
    Epc,
    Tid,
    User,
}

impl LockField {
    pub const ALL: [LockField; 5] = [
        LockField::Kill,
        LockField::Access,
        LockField::Epc,
        LockField::Tid,
        LockField::User,
    ];

    pub const fn value_bit(self) -> LockBits {
        match self {
            LockField::Kill => LockBits::KILL,
            LockField::Access => LockBits::ACCESS,
            LockField::Epc => LockBits::EPC,
            LockField::Tid => LockBits::TID,
            LockField::User => LockBits::USER,
        }
    }

    pub const fn perm_bit(self) -> LockBits {
        match self {
            LockField::Kill => LockBits::KILL_PERM,
            LockField::Access => LockBits::ACCESS_PERM,
            LockField::Epc => LockBits::EPC_PERM,
            LockField::Tid => LockBits::TID_PERM,
            LockField::User => LockBits::USER_PERM,
        }
    }

    /// Both bits owned by this field.
    pub const fn bits(self) -> LockBits {
        self.value_bit().union(self.perm_bit())
    }
}

/// What to do to a [LockField].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockOp {
    Lock,
    Unlock,
    /// Lock and make the lock permanent.
    Permalock,
    /// Unlock and make the unlock permanent.
    Permaunlock,
}

impl LockOp {
    pub const ALL: [LockOp; 4] = [
        LockOp::Lock,
        LockOp::Unlock,
        LockOp::Permalock,
        LockOp::Permaunlock,
    ];
}

/// A Gen2 lock mask/action pair.
///
/// Values combine with [LockAction::compose] (or `|`): masks are unioned and,
/// where two actions touch the same bit, the later one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LockAction {
    mask: u16,
    action: u16,
}

impl LockAction {
    /// Touches nothing.
    pub const NONE: LockAction = LockAction { mask: 0, action: 0 };

    pub const KILL_LOCK: LockAction = LockAction::of(LockField::Kill, LockOp::Lock);
    pub const KILL_UNLOCK: LockAction = LockAction::of(LockField::Kill, LockOp::Unlock);
    pub const KILL_PERMALOCK: LockAction = LockAction::of(LockField::Kill, LockOp::Permalock);
    pub const KILL_PERMAUNLOCK: LockAction = LockAction::of(LockField::Kill, LockOp::Permaunlock);
    pub const ACCESS_LOCK: LockAction = LockAction::of(LockField::Access, LockOp::Lock);
    pub const ACCESS_UNLOCK: LockAction = LockAction::of(LockField::Access, LockOp::Unlock);
    pub const ACCESS_PERMALOCK: LockAction = LockAction::of(LockField::Access, LockOp::Permalock);
    pub const ACCESS_PERMAUNLOCK: LockAction =
        LockAction::of(LockField::Access, LockOp::Permaunlock);
    pub const EPC_LOCK: LockAction = LockAction::of(LockField::Epc, LockOp::Lock);
    pub const EPC_UNLOCK: LockAction = LockAction::of(LockField::Epc, LockOp::Unlock);
    pub const EPC_PERMALOCK: LockAction = LockAction::of(LockField::Epc, LockOp::Permalock);
    pub const EPC_PERMAUNLOCK: LockAction = LockAction::of(LockField::Epc, LockOp::Permaunlock);
    pub const TID_LOCK: LockAction = LockAction::of(LockField::Tid, LockOp::Lock);
    pub const TID_UNLOCK: LockAction = LockAction::of(LockField::Tid, LockOp::Unlock);
    pub const TID_PERMALOCK: LockAction = LockAction::of(LockField::Tid, LockOp::Permalock);
    pub const TID_PERMAUNLOCK: LockAction = LockAction::of(LockField::Tid, LockOp::Permaunlock);
    pub const USER_LOCK: LockAction = LockAction::of(LockField::User, LockOp::Lock);
    pub const USER_UNLOCK: LockAction = LockAction::of(LockField::User, LockOp::Unlock);
    pub const USER_PERMALOCK: LockAction = LockAction::of(LockField::User, LockOp::Permalock);
    pub const USER_PERMAUNLOCK: LockAction = LockAction::of(LockField::User, LockOp::Permaunlock);

    /// Builds a lock action from raw Lock command fields. Bits above the ten
    /// defined lock bits are dropped, as are action bits outside the mask.
    pub const fn new(mask: u16, action: u16) -> Self {
        let mask = mask & LockBits::all().bits();
        LockAction {
            mask,
            action: action & mask,
        }
    }

    pub const fn from_bits(mask: LockBits, action: LockBits) -> Self {
        LockAction::new(mask.bits(), action.bits())
    }

    /// The single-field action for `op` applied to `field`.
    pub const fn of(field: LockField, op: LockOp) -> Self {
        let action = match op {
            LockOp::Lock => field.value_bit(),
            LockOp::Unlock => LockBits::empty(),
            LockOp::Permalock => field.bits(),
            LockOp::Permaunlock => field.perm_bit(),
        };

        LockAction::from_bits(field.bits(), action)
    }

    /// Mask field of the Lock command.
    pub const fn mask(self) -> u16 {
        self.mask
    }

    /// Action field of the Lock command.
    pub const fn action(self) -> u16 {
        self.action
    }

    pub const fn mask_bits(self) -> LockBits {
        LockBits::from_bits_truncate(self.mask)
    }

    pub const fn action_bits(self) -> LockBits {
        LockBits::from_bits_truncate(self.action)
    }

    /// Applies `next` on top of `self`: masks union, `next` wins on the bits it masks.
    pub const fn then(self, next: LockAction) -> Self {
        LockAction {
            mask: self.mask | next.mask,
            action: (self.action & !next.mask) | (next.action & next.mask),
        }
    }

    /// Folds `actions` left to right with [LockAction::then], starting from [LockAction::NONE].
    pub fn compose(actions: &[LockAction]) -> Self {
        actions.iter().copied().collect()
    }

    /// Parses a comma-separated list of predefined names, e.g. `"EPC_LOCK,USER_UNLOCK"`.
    ///
    /// Names are matched without regard to case but are not trimmed. Later names
    /// take precedence over earlier ones on the same field.
    pub fn parse(text: &str) -> Result<Self, LockActionError> {
        if text.is_empty() {
            return Err(LockActionError::NullInput);
        }

        let mut composed = LockAction::NONE;
        for name in text.split(',') {
            let Some(action) = LockAction::by_name(name) else {
                debug!("rejecting lock action list {:?} at {:?}", text, name);
                return Err(LockActionError::UnknownLockActionName(name.to_string()));
            };
            composed = composed.then(action);
        }

        Ok(composed)
    }

    /// Looks up a predefined action by name, ignoring ASCII case only.
    pub fn by_name(name: &str) -> Option<Self> {
        PREDEFINED
            .iter()
            .find(|(predefined, _)| predefined.eq_ignore_ascii_case(name))
            .map(|&(_, action)| action)
    }

    /// All predefined actions with their canonical names, in a fixed order:
    /// KILL, ACCESS, EPC, TID, USER, each as LOCK, UNLOCK, PERMALOCK, PERMAUNLOCK.
    pub fn predefined() -> impl Iterator<Item = (&'static str, LockAction)> {
        PREDEFINED.iter().copied()
    }

    /// Whether `self` sets every bit `other` sets, to the same values.
    pub const fn covers(self, other: LockAction) -> bool {
        self.mask & other.mask == other.mask
            && self.action & other.mask == other.action & other.mask
    }

    /// Names of the predefined actions this value covers, in [LockAction::predefined] order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        LockAction::predefined()
            .filter(move |&(_, predefined)| self.covers(predefined))
            .map(|(name, _)| name)
    }

    /// Canonical comma-separated form; the inverse of [LockAction::parse] for
    /// unions of predefined actions.
    pub fn format(self) -> String {
        self.names().collect::<Vec<_>>().join(",")
    }
}

static PREDEFINED: [(&str, LockAction); 20] = [
    ("KILL_LOCK", LockAction::KILL_LOCK),
    ("KILL_UNLOCK", LockAction::KILL_UNLOCK),
    ("KILL_PERMALOCK", LockAction::KILL_PERMALOCK),
    ("KILL_PERMAUNLOCK", LockAction::KILL_PERMAUNLOCK),
    ("ACCESS_LOCK", LockAction::ACCESS_LOCK),
    ("ACCESS_UNLOCK", LockAction::ACCESS_UNLOCK),
    ("ACCESS_PERMALOCK", LockAction::ACCESS_PERMALOCK),
    ("ACCESS_PERMAUNLOCK", LockAction::ACCESS_PERMAUNLOCK),
    ("EPC_LOCK", LockAction::EPC_LOCK),
    ("EPC_UNLOCK", LockAction::EPC_UNLOCK),
    ("EPC_PERMALOCK", LockAction::EPC_PERMALOCK),
    ("EPC_PERMAUNLOCK", LockAction::EPC_PERMAUNLOCK),
    ("TID_LOCK", LockAction::TID_LOCK),
    ("TID_UNLOCK", LockAction::TID_UNLOCK),
    ("TID_PERMALOCK", LockAction::TID_PERMALOCK),
    ("TID_PERMAUNLOCK", LockAction::TID_PERMAUNLOCK),
    ("USER_LOCK", LockAction::USER_LOCK),
    ("USER_UNLOCK", LockAction::USER_UNLOCK),
    ("USER_PERMALOCK", LockAction::USER_PERMALOCK),
    ("USER_PERMAUNLOCK", LockAction::USER_PERMAUNLOCK),
];

impl BitOr for LockAction {
    type Output = LockAction;

    fn bitor(self, rhs: LockAction) -> LockAction {
        self.then(rhs)
    }
}

impl FromIterator<LockAction> for LockAction {
    fn from_iter<I: IntoIterator<Item = LockAction>>(iter: I) -> Self {
        iter.into_iter().fold(LockAction::NONE, LockAction::then)
    }
}

impl FromStr for LockAction {
    type Err = LockActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LockAction::parse(s)
    }
}

impl fmt::Display for LockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_bits() {
        assert_eq!(
            (LockAction::KILL_LOCK.mask(), LockAction::KILL_LOCK.action()),
            (0x0300, 0x0200)
        );
        assert_eq!(
            (LockAction::ACCESS_PERMAUNLOCK.mask(), LockAction::ACCESS_PERMAUNLOCK.action()),
            (0x00C0, 0x0040)
        );
        assert_eq!(
            (LockAction::EPC_PERMALOCK.mask(), LockAction::EPC_PERMALOCK.action()),
            (0x0030, 0x0030)
        );
        assert_eq!(
            (LockAction::TID_UNLOCK.mask(), LockAction::TID_UNLOCK.action()),
            (0x000C, 0x0000)
        );
        assert_eq!(
            (LockAction::USER_LOCK.mask(), LockAction::USER_LOCK.action()),
            (0x0003, 0x0002)
        );
    }

    #[test]
    fn test_predefined_order() {
        let names: Vec<&str> = LockAction::predefined().map(|(name, _)| name).collect();
        assert_eq!(names.len(), 20);
        assert_eq!(names[0], "KILL_LOCK");
        assert_eq!(names[3], "KILL_PERMAUNLOCK");
        assert_eq!(names[4], "ACCESS_LOCK");
        assert_eq!(names[19], "USER_PERMAUNLOCK");

        let mut i = 0;
        for field in LockField::ALL {
            for op in LockOp::ALL {
                assert_eq!(PREDEFINED[i].1, LockAction::of(field, op));
                i += 1;
            }
        }
    }

    #[test]
    fn test_new_drops_undefined_bits() {
        let la = LockAction::new(0xFFFF, 0xF0F0);
        assert_eq!(la.mask(), 0x03FF);
        assert_eq!(la.action(), 0x00F0);
        assert_eq!(la.mask_bits(), LockBits::all());

        let la = LockAction::new(0x0003, 0x0302);
        assert_eq!(la, LockAction::USER_LOCK);
    }

    #[test]
    fn test_compose_empty() {
        assert_eq!(LockAction::compose(&[]), LockAction::NONE);
        assert_eq!(LockAction::NONE.to_string(), "");
    }

    #[test]
    fn test_compose_idempotent() {
        for (_, la) in LockAction::predefined() {
            assert_eq!(LockAction::compose(&[la, la]), la);
        }
    }

    #[test]
    fn test_compose_last_writer_wins() {
        let la = LockAction::compose(&[LockAction::USER_LOCK, LockAction::USER_UNLOCK]);
        assert_eq!(la, LockAction::USER_UNLOCK);
        assert_eq!(la.to_string(), "USER_UNLOCK");

        let la = LockAction::compose(&[LockAction::USER_UNLOCK, LockAction::USER_LOCK]);
        assert_eq!(la, LockAction::USER_LOCK);
    }

    #[test]
    fn test_compose_disjoint_fields() {
        let la = LockAction::KILL_LOCK | LockAction::ACCESS_LOCK;
        assert_eq!(la.mask(), 0x03C0);
        assert_eq!(la.action(), 0x0280);
        assert_eq!(la.to_string(), "KILL_LOCK,ACCESS_LOCK");
    }

    #[test]
    fn test_compose_partial_overlap() {
        let only_kill_value = LockAction::from_bits(LockBits::KILL, LockBits::empty());
        let la = LockAction::KILL_PERMALOCK | only_kill_value;
        assert_eq!(la, LockAction::KILL_PERMAUNLOCK);
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(LockAction::parse("EPC_LOCK"), Ok(LockAction::EPC_LOCK));
        assert_eq!(LockAction::parse("epc_lock"), Ok(LockAction::EPC_LOCK));
        assert_eq!(
            "Tid_PermaUnlock".parse::<LockAction>(),
            Ok(LockAction::TID_PERMAUNLOCK)
        );
    }

    #[test]
    fn test_parse_later_wins() {
        assert_eq!(
            LockAction::parse("USER_LOCK,EPC_LOCK,USER_UNLOCK"),
            Ok(LockAction::EPC_LOCK | LockAction::USER_UNLOCK)
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            LockAction::parse("KILL_LOCK,bogus"),
            Err(LockActionError::UnknownLockActionName("bogus".to_string()))
        );
    }

    #[test]
    fn test_parse_does_not_trim() {
        assert_eq!(
            LockAction::parse("KILL_LOCK, USER_LOCK"),
            Err(LockActionError::UnknownLockActionName(" USER_LOCK".to_string()))
        );
        assert_eq!(
            LockAction::parse("KILL_LOCK,"),
            Err(LockActionError::UnknownLockActionName(String::new()))
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(LockAction::parse(""), Err(LockActionError::NullInput));
    }

    #[test]
    fn test_format_round_trip() {
        for (name, la) in LockAction::predefined() {
            assert_eq!(la.to_string(), name);
            assert_eq!(LockAction::parse(&la.to_string()), Ok(la));
        }
    }

    #[test]
    fn test_format_unions() {
        let la = LockAction::USER_PERMALOCK | LockAction::KILL_UNLOCK | LockAction::TID_LOCK;
        assert_eq!(la.to_string(), "KILL_UNLOCK,TID_LOCK,USER_PERMALOCK");
        assert_eq!(LockAction::parse(&la.to_string()), Ok(la));
    }

    #[test]
    fn test_format_ignores_half_fields() {
        let la = LockAction::from_bits(LockBits::EPC | LockBits::USER, LockBits::EPC);
        assert_eq!(la.to_string(), "");
    }

    #[test]
    fn test_covers() {
        let la = LockAction::EPC_LOCK | LockAction::USER_LOCK;
        assert!(la.covers(LockAction::EPC_LOCK));
        assert!(la.covers(LockAction::NONE));
        assert!(!la.covers(LockAction::EPC_UNLOCK));
        assert!(!la.covers(LockAction::TID_LOCK));
    }

    #[test]
    fn test_by_name_case_folding_is_ascii_only() {
        assert_eq!(LockAction::by_name("kill_lock"), Some(LockAction::KILL_LOCK));
        assert_eq!(LockAction::by_name("k\u{131}ll_lock"), None);
        assert_eq!(
            LockAction::parse("k\u{131}ll_lock"),
            Err(LockActionError::UnknownLockActionName(
                "k\u{131}ll_lock".to_string()
            ))
        );
    }
}
