//! Record field values and their static kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::values::{CodeSize, InstrOpInfoFlags, PseudoOpsKind, Register};

/// Kind of a field slot in a constructor schema.
///
/// Wire encoding per kind:
/// - `Str`: varint pool index
/// - `Char`: one byte, `'\0'` means "no character"
/// - `Flags`, `Int`: varint (`Int` as its `u32` bit pattern)
/// - `PseudoOps`, `CodeSize`, `Register`, `Bool`: one byte
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FieldKind {
    Str,
    Char,
    Flags,
    Int,
    PseudoOps,
    CodeSize,
    Register,
    Bool,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Str => "string",
            Self::Char => "char",
            Self::Flags => "flags",
            Self::Int => "int",
            Self::PseudoOps => "pseudo-ops",
            Self::CodeSize => "code size",
            Self::Register => "register",
            Self::Bool => "bool",
        })
    }
}

/// One field of an instruction record.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Str(String),
    Char(char),
    Flags(InstrOpInfoFlags),
    Int(i32),
    PseudoOps(PseudoOpsKind),
    CodeSize(CodeSize),
    Register(Register),
    Bool(bool),
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Str(_) => FieldKind::Str,
            Self::Char(_) => FieldKind::Char,
            Self::Flags(_) => FieldKind::Flags,
            Self::Int(_) => FieldKind::Int,
            Self::PseudoOps(_) => FieldKind::PseudoOps,
            Self::CodeSize(_) => FieldKind::CodeSize,
            Self::Register(_) => FieldKind::Register,
            Self::Bool(_) => FieldKind::Bool,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Human-readable form used in generated comments and dumps.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Char('\0') => f.write_str("'\\0'"),
            Self::Char(c) => write!(f, "'{c}'"),
            Self::Flags(flags) => write!(f, "{:#X} = {flags}", flags.bits()),
            Self::Int(v) => write!(f, "{:#X}", *v as u32),
            Self::PseudoOps(kind) => write!(f, "{kind}"),
            Self::CodeSize(size) => write!(f, "{size}"),
            Self::Register(reg) => write!(f, "{reg}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
