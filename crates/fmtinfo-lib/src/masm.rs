//! Microsoft assembler syntax tables.
//!
//! A leading `v` is part of the stored mnemonic here, so tags never carry the
//! prefix flag.

use crate::schema::{Syntax, SyntaxId, ctor_kinds};

/// MASM syntax.
#[derive(Clone, Copy, Debug, Default)]
pub struct Masm;

impl Syntax for Masm {
    type Kind = MasmCtorKind;

    const ID: SyntaxId = SyntaxId::Masm;
    const STRIP_V_PREFIX: bool = false;
    const ELIDE_REPEATS: bool = true;
}

ctor_kinds! {
    /// MASM record layouts.
    pub enum MasmCtorKind {
        Normal1 => [Str],
        Normal2 => [Str, Flags],
        AamAad => [Str],
        Ax => [Str, Char, Flags],
        Ay => [Str, Char, Flags],
        Bnd1 => [Str],
        Bnd2 => [Str, Flags],
        DeclareData => [Str],
        Dx => [Str, Char, Flags],
        Fword => [CodeSize, Bool, Str, Char],
        Ib => [Str],
        Imul => [Str],
        Invlpga => [Int, Str],
        Jcc => [Str],
        Maskmovq => [Str, Flags],
        Memsize => [Int, Str],
        Mmxmem1 => [Str],
        Mmxmem2 => [Str, Flags],
        Monitor => [Str, Register, Register, Register],
        Mwait => [Str],
        Mwaitx => [Str],
        Nop => [Int, Str, Register],
        OpSize1 => [CodeSize, Str],
        OpSize2 => [CodeSize, Str, Char],
        OpSize2Str => [Str, Str, Str, Str],
        OpSize2Bnd => [Str, Str, Str, Str],
        Pblendvb => [Str],
        Pclmulqdq => [Str, PseudoOps],
        Pops2 => [Str, PseudoOps],
        Pops3 => [Str, PseudoOps, Flags],
        Pushm => [CodeSize, Str],
        Reg => [Str, Register],
        Reg16 => [Str],
        Reverse2 => [Str],
        StSti => [Str],
        StiSt => [Str],
        StiSt2 => [Str],
        Stig1_1 => [Str],
        Stig1_2 => [Str, Bool],
        Xlat => [Str, Char],
        Xy => [Str, Char, Flags],
        Ya => [Str, Char, Flags],
        Yd => [Str, Char, Flags],
        Yx => [Str, Char, Flags],
    }
}
