//! Plain Gen2 protocol values: memory banks, inventory parameters, passwords and Q.
//!
//! These carry no behavior beyond conversion from the numeric codes readers use
//! on the wire and a printable form.

use std::{fmt, str::FromStr};

use crate::errors::ValueError;

/// Declares a fieldless enum with a numeric protocol code per variant and a
/// checked conversion back from that code.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $repr:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $(#[$meta])*
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Numeric code of this value as the reader protocol encodes it.
            pub const fn code(self) -> $repr {
                match self {
                    $( $name::$variant => $code, )+
                }
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = ValueError;

            fn try_from(value: $repr) -> Result<Self, Self::Error> {
                match value {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(ValueError::OutOfRange {
                        kind: stringify!($name),
                        value: value as u32,
                    }),
                }
            }
        }
    };
}

code_enum! {
    /// Gen2 memory bank identifiers.
    #[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
    pub enum Bank: u8 {
        /// Kill and access passwords.
        Reserved = 0,
        /// CRC, PC and EPC.
        Epc = 1,
        /// Tag implementation identifiers.
        Tid = 2,
        /// User-defined data.
        User = 3,
    }
}

impl Bank {
    pub const ALL: [Bank; 4] = [Bank::Reserved, Bank::Epc, Bank::Tid, Bank::User];

    /// Canonical uppercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Bank::Reserved => "RESERVED",
            Bank::Epc => "EPC",
            Bank::Tid => "TID",
            Bank::User => "USER",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Bank {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bank::ALL
            .into_iter()
            .find(|bank| bank.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::UnknownName {
                kind: "Bank",
                name: s.to_string(),
            })
    }
}

code_enum! {
    /// Inventory search target.
    pub enum Target: u8 {
        A = 0,
        B = 1,
        /// Search A until exhausted, then B.
        AB = 2,
        /// Search B until exhausted, then A.
        BA = 3,
    }
}

code_enum! {
    /// Inventory session flag.
    pub enum Session: u8 {
        S0 = 0,
        S1 = 1,
        S2 = 2,
        S3 = 3,
    }
}

code_enum! {
    /// Tag-to-reader modulation.
    pub enum TagEncoding: u8 {
        FM0 = 0,
        M2 = 1,
        M4 = 2,
        M8 = 3,
    }
}

code_enum! {
    pub enum DivideRatio: u8 {
        /// DR of 8.
        DR8 = 0,
        /// DR of 64/3.
        DR64_3 = 1,
    }
}

code_enum! {
    /// Whether the tag prepends a pilot tone to its reply.
    pub enum TrExt: u8 {
        NoPilotTone = 0,
        PilotTone = 1,
    }
}

code_enum! {
    /// Backscatter link frequency, coded in kHz.
    pub enum LinkFrequency: u16 {
        Link40Khz = 40,
        Link250Khz = 250,
        Link300Khz = 300,
        Link400Khz = 400,
        Link640Khz = 640,
    }
}

impl LinkFrequency {
    pub const fn khz(self) -> u16 {
        self.code()
    }
}

code_enum! {
    /// Reader-to-tag data-0 symbol length.
    pub enum Tari: u8 {
        Tari25Us = 0,
        Tari12_5Us = 1,
        Tari6_25Us = 2,
    }
}

code_enum! {
    /// How writes are issued to the tag.
    pub enum WriteMode: u8 {
        WordOnly = 0,
        BlockOnly = 1,
        /// Try BlockWrite, fall back to word writes.
        BlockFallback = 2,
    }
}

/// A 32-bit Gen2 access or kill password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Password(pub u32);

impl Password {
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Password {
    fn from(value: u32) -> Self {
        Password(value)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Q algorithm used to size inventory rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Q {
    /// Reader adjusts Q as the round progresses.
    Dynamic,
    /// Fixed Q with the given initial value.
    Static(u8),
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Q::Dynamic => f.write_str("DynamicQ"),
            Q::Static(initial_q) => write!(f, "StaticQ({})", initial_q),
        }
    }
}
