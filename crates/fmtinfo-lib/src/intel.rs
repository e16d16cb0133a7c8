//! Intel syntax tables.
//!
//! Every record is written out in full; this syntax never back-references.

use crate::schema::{Syntax, SyntaxId, ctor_kinds};

/// Intel syntax.
#[derive(Clone, Copy, Debug, Default)]
pub struct Intel;

impl Syntax for Intel {
    type Kind = IntelCtorKind;

    const ID: SyntaxId = SyntaxId::Intel;
    const STRIP_V_PREFIX: bool = true;
    const ELIDE_REPEATS: bool = false;
}

ctor_kinds! {
    /// Intel record layouts.
    pub enum IntelCtorKind {
        Normal1 => [Str],
        Normal2 => [Str, Flags],
        AsSize => [Int, Str],
        Ax => [Str],
        Ay => [Str],
        Bnd => [Str],
        DeclareData => [Str],
        FpuStSti => [Str],
        FpuStiSt => [Str],
        Imul => [Str],
        K1 => [Str],
        K2 => [Str],
        Maskmovq => [Str, Flags],
        Memsize => [Int, Str],
        Movabs => [Int, Str],
        Nop => [Int, Str, Register],
        Nop0F1F => [Register, Str, Flags],
        Os => [Int, Str],
        Os2 => [Int, Str, Flags],
        OsBnd => [Int, Str],
        OsJcc => [Int, Str],
        OsJcc2 => [Int, Str, Flags],
        OsLoop => [Int, Register, Str],
        OsMem => [Int, Str],
        Pclmulqdq => [Str, PseudoOps],
        Pops => [Str, PseudoOps],
        Reg => [Str, Register],
        Reg16 => [Str],
        St1 => [Str, Flags],
        St2 => [Str, Flags],
        StSti => [Str],
        StiSt => [Str],
        Xbegin => [Int, Str],
        Ya => [Str],
    }
}
