//! Declarative record schemas.
//!
//! Each syntax declares its constructor kinds once with [`ctor_kinds!`]. The
//! field-kind list of a kind drives both the encoder and the decoder, so the
//! two sides cannot disagree on a layout.
//!
//! Tag byte layout:
//! - Bits 0-6: constructor kind (`Previous` is always 0)
//! - Bit 7: the first string field had its leading `v` removed

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::field::FieldKind;

/// Tag bits holding the constructor kind.
pub const KIND_MASK: u8 = 0x7F;

/// Tag bit marking a stripped `v` prefix.
pub const V_PREFIX_FLAG: u8 = 0x80;

/// A syntax's constructor-kind enumeration.
pub trait CtorKind: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Back-reference to the previous record.
    const PREVIOUS: Self;

    /// Every kind, indexed by tag value.
    const ALL: &'static [Self];

    fn from_u8(raw: u8) -> Option<Self> {
        Self::ALL.get(usize::from(raw)).copied()
    }

    fn as_u8(self) -> u8;

    fn name(self) -> &'static str;

    /// Field layout following the tag byte.
    fn fields(self) -> &'static [FieldKind];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Position of the first string field, which carries the `v` flag.
    fn first_str(self) -> Option<usize> {
        self.fields().iter().position(|&f| f == FieldKind::Str)
    }
}

/// Per-syntax table options.
pub trait Syntax: 'static {
    type Kind: CtorKind;

    const ID: SyntaxId;

    /// Fold a leading `v` of the first string into the tag byte.
    const STRIP_V_PREFIX: bool;

    /// Encode a record equal to its predecessor as a bare `Previous` tag.
    const ELIDE_REPEATS: bool;
}

/// Runtime name of a syntax, for file formats and the command line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxId {
    Gas,
    Intel,
    Masm,
}

impl SyntaxId {
    pub const ALL: [Self; 3] = [Self::Gas, Self::Intel, Self::Masm];

    pub fn name(self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Intel => "intel",
            Self::Masm => "masm",
        }
    }
}

impl fmt::Display for SyntaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SyntaxId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown syntax '{s}' (expected gas, intel or masm)"))
    }
}

/// Declares a constructor-kind enum with its field layouts.
///
/// `Previous` is inserted as tag 0; the listed kinds follow in order.
macro_rules! ctor_kinds {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => [$($field:ident),* $(,)?]),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(u8)]
        pub enum $name {
            Previous,
            $($variant),+
        }

        const _: () = assert!(
            [$(stringify!($variant)),+].len() < $crate::schema::KIND_MASK as usize,
            "constructor kinds must fit in 7 bits"
        );

        impl $crate::schema::CtorKind for $name {
            const PREVIOUS: Self = Self::Previous;
            const ALL: &'static [Self] = &[Self::Previous, $(Self::$variant),+];

            #[inline]
            fn as_u8(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                match self {
                    Self::Previous => "Previous",
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            fn fields(self) -> &'static [$crate::field::FieldKind] {
                match self {
                    Self::Previous => &[],
                    $(Self::$variant => &[$($crate::field::FieldKind::$field),*]),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::schema::CtorKind::name(*self))
            }
        }
    };
}

pub(crate) use ctor_kinds;
