//! GNU assembler (AT&T) syntax tables.
//!
//! Mnemonic suffixes (`b`, `w`, `l`, `q`) are stored as a separate character
//! field so the bare mnemonic can be shared in the pool.

use crate::schema::{Syntax, SyntaxId, ctor_kinds};

/// AT&T syntax.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gas;

impl Syntax for Gas {
    type Kind = GasCtorKind;

    const ID: SyntaxId = SyntaxId::Gas;
    const STRIP_V_PREFIX: bool = true;
    const ELIDE_REPEATS: bool = true;
}

ctor_kinds! {
    /// Gas record layouts. The mnemonic is always the first field.
    pub enum GasCtorKind {
        Normal1 => [Str],
        Normal2a => [Str, Char],
        Normal2b => [Str, Flags],
        Normal2c => [Str, Char],
        Normal3 => [Str, Char, Flags],
        AamAad => [Str],
        Asz => [Str, Int],
        Bnd2_2 => [Str, Char],
        Bnd2_3 => [Str, Char, Flags],
        DeclareData => [Str],
        Er2 => [Str, Int],
        Er4 => [Str, Char, Int, Flags],
        Far => [Str, Char, Int],
        Imul => [Str, Char],
        Maskmovq => [Str],
        Movabs => [Str, Char, Int, Str, Char],
        Nop => [Str, Int, Register],
        OpSize => [Str, CodeSize],
        OpSize2Bnd => [Str, Str, Str, Str],
        OpSize3 => [Str, Char, Int],
        OsA => [Str, Int],
        OsB => [Str, Int, Flags],
        OsBnd => [Str, Int],
        Cc1 => [Str, Char, Int],
        Cc2 => [Str, Str, Char, Int],
        Cc3 => [Str, Str, Str, Char, Int],
        OsJcc1 => [Str, Int, Int],
        OsJcc2 => [Str, Str, Int, Int],
        OsJcc3 => [Str, Str, Str, Int, Int],
        OsLoopcc => [Str, Str, Char, Int, Int, Int],
        OsLoop => [Str, Char, Int, Int],
        OsMem => [Str, Char, Int],
        OsMemReg16 => [Str, Int],
        OsMem2 => [Str, Char, Int],
        Os2_3 => [Str, Char, Int],
        Os2_4 => [Str, Char, Int, Flags],
        Os2Bnd => [Str, Char, Int],
        Pblendvb => [Str],
        Pclmulqdq => [Str, PseudoOps],
        Pops => [Str, PseudoOps],
        Reg16 => [Str],
        Reg32 => [Str],
        Sae => [Str, Int],
        SaePops => [Str, Int, PseudoOps],
        StSti => [Str],
        StiSt => [Str],
        StiSt2 => [Str],
        Stig1a => [Str],
        Stig1b => [Str, Bool],
        Xbegin => [Str, Int],
    }
}

/// The four spellings of an `OpSize` mnemonic: bare, then with `w`, `l`, `q`.
pub fn op_size_mnemonics(mnemonic: &str) -> [String; 4] {
    [
        mnemonic.to_string(),
        format!("{mnemonic}w"),
        format!("{mnemonic}l"),
        format!("{mnemonic}q"),
    ]
}
