//! Typed values stored in record fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operand rendering flags attached to a record.
///
/// Bit layout:
/// - Bits 0-2: memory size display (`MEM_SIZE_NOTHING`, `SHOW_NO_MEM_SIZE_FORCE_SIZE`,
///   `SHOW_MIN_MEM_SIZE_FORCE_SIZE`)
/// - Bits 3-4: operand size override (16/32/64)
/// - Bits 5-6: address size override (16/32/64)
/// - Bits 7-17: single-bit switches
/// - Bits 18-20: sign-extension info
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrOpInfoFlags(pub u32);

impl InstrOpInfoFlags {
    pub const NONE: Self = Self(0);
    pub const MEM_SIZE_NOTHING: Self = Self(1 << 0);
    pub const SHOW_NO_MEM_SIZE_FORCE_SIZE: Self = Self(1 << 1);
    pub const SHOW_MIN_MEM_SIZE_FORCE_SIZE: Self = Self(1 << 2);

    pub const SIZE_OVERRIDE_MASK: u32 = 3;
    pub const OP_SIZE_SHIFT: u32 = 3;
    pub const OP_SIZE16: Self = Self(1 << Self::OP_SIZE_SHIFT);
    pub const OP_SIZE32: Self = Self(2 << Self::OP_SIZE_SHIFT);
    pub const OP_SIZE64: Self = Self(3 << Self::OP_SIZE_SHIFT);
    pub const ADDR_SIZE_SHIFT: u32 = 5;
    pub const ADDR_SIZE16: Self = Self(1 << Self::ADDR_SIZE_SHIFT);
    pub const ADDR_SIZE32: Self = Self(2 << Self::ADDR_SIZE_SHIFT);
    pub const ADDR_SIZE64: Self = Self(3 << Self::ADDR_SIZE_SHIFT);

    pub const BRANCH_SIZE_INFO_SHORT: Self = Self(1 << 7);
    pub const REGISTER_TO: Self = Self(1 << 8);
    pub const BND_PREFIX: Self = Self(1 << 9);
    pub const MNEMONIC_IS_DIRECTIVE: Self = Self(1 << 10);
    pub const JCC_NOT_TAKEN: Self = Self(1 << 11);
    pub const JCC_TAKEN: Self = Self(1 << 12);
    pub const IGNORE_INDEX_REG: Self = Self(1 << 13);
    pub const IGNORE_SEGMENT_PREFIX: Self = Self(1 << 14);
    pub const INDIRECT_OPERAND: Self = Self(1 << 15);
    pub const KEEP_OPERAND_ORDER: Self = Self(1 << 16);
    pub const FAR_MNEMONIC: Self = Self(1 << 17);

    pub const SIGN_EXTEND_INFO_MASK: u32 = 7;
    pub const SIGN_EXTEND_INFO_SHIFT: u32 = 18;

    const SWITCHES: [(Self, &'static str); 14] = [
        (Self::MEM_SIZE_NOTHING, "MemSize_Nothing"),
        (Self::SHOW_NO_MEM_SIZE_FORCE_SIZE, "ShowNoMemSize_ForceSize"),
        (Self::SHOW_MIN_MEM_SIZE_FORCE_SIZE, "ShowMinMemSize_ForceSize"),
        (Self::BRANCH_SIZE_INFO_SHORT, "BranchSizeInfo_Short"),
        (Self::REGISTER_TO, "RegisterTo"),
        (Self::BND_PREFIX, "BndPrefix"),
        (Self::MNEMONIC_IS_DIRECTIVE, "MnemonicIsDirective"),
        (Self::JCC_NOT_TAKEN, "JccNotTaken"),
        (Self::JCC_TAKEN, "JccTaken"),
        (Self::IGNORE_INDEX_REG, "IgnoreIndexReg"),
        (Self::IGNORE_SEGMENT_PREFIX, "IgnoreSegmentPrefix"),
        (Self::INDIRECT_OPERAND, "IndirectOperand"),
        (Self::KEEP_OPERAND_ORDER, "KeepOperandOrder"),
        (Self::FAR_MNEMONIC, "FarMnemonic"),
    ];

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Operand size override: 0 (none), 16, 32 or 64.
    pub fn op_size(self) -> u32 {
        size_from_field((self.0 >> Self::OP_SIZE_SHIFT) & Self::SIZE_OVERRIDE_MASK)
    }

    /// Address size override: 0 (none), 16, 32 or 64.
    pub fn addr_size(self) -> u32 {
        size_from_field((self.0 >> Self::ADDR_SIZE_SHIFT) & Self::SIZE_OVERRIDE_MASK)
    }

    pub fn sign_extend_info(self) -> u32 {
        (self.0 >> Self::SIGN_EXTEND_INFO_SHIFT) & Self::SIGN_EXTEND_INFO_MASK
    }
}

fn size_from_field(field: u32) -> u32 {
    match field {
        1 => 16,
        2 => 32,
        3 => 64,
        _ => 0,
    }
}

impl std::ops::BitOr for InstrOpInfoFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for InstrOpInfoFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstrOpInfoFlags({:#X} = {self})", self.0)
    }
}

/// Names of the set flags joined with ` | `, or `None`.
///
/// Bits without a name are printed as one trailing hex value.
impl fmt::Display for InstrOpInfoFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = Vec::new();
        let mut rest = self.0;

        for (flag, name) in Self::SWITCHES {
            if self.contains(flag) {
                names.push(name.to_string());
                rest &= !flag.0;
            }
        }
        let op_size = self.op_size();
        if op_size != 0 {
            names.push(format!("OpSize{op_size}"));
            rest &= !(Self::SIZE_OVERRIDE_MASK << Self::OP_SIZE_SHIFT);
        }
        let addr_size = self.addr_size();
        if addr_size != 0 {
            names.push(format!("AddrSize{addr_size}"));
            rest &= !(Self::SIZE_OVERRIDE_MASK << Self::ADDR_SIZE_SHIFT);
        }
        let sex = self.sign_extend_info();
        if sex != 0 {
            names.push(format!("SignExtendInfo({sex})"));
            rest &= !(Self::SIGN_EXTEND_INFO_MASK << Self::SIGN_EXTEND_INFO_SHIFT);
        }
        if rest != 0 {
            names.push(format!("{rest:#X}"));
        }

        if names.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&names.join(" | "))
        }
    }
}

/// Defines a byte-sized enum with contiguous discriminants, its name table
/// and a checked conversion from `u8`.
macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident = $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn from_u8(raw: u8) -> Option<Self> {
                Self::ALL.get(usize::from(raw)).copied()
            }

            #[inline]
            pub fn as_u8(self) -> u8 {
                self as u8
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

byte_enum! {
    /// Code size a mnemonic variant applies to.
    pub enum CodeSize {
        Unknown = "Unknown",
        Code16 = "Code16",
        Code32 = "Code32",
        Code64 = "Code64",
    }
}

byte_enum! {
    /// Pseudo-op mnemonic family selected by an immediate operand.
    pub enum PseudoOpsKind {
        Cmpps = "cmpps",
        Vcmpps = "vcmpps",
        Cmppd = "cmppd",
        Vcmppd = "vcmppd",
        Cmpss = "cmpss",
        Vcmpss = "vcmpss",
        Cmpsd = "cmpsd",
        Vcmpsd = "vcmpsd",
        Pclmulqdq = "pclmulqdq",
        Vpclmulqdq = "vpclmulqdq",
        Vpcomb = "vpcomb",
        Vpcomw = "vpcomw",
        Vpcomd = "vpcomd",
        Vpcomq = "vpcomq",
        Vpcomub = "vpcomub",
        Vpcomuw = "vpcomuw",
        Vpcomud = "vpcomud",
        Vpcomuq = "vpcomuq",
        Vpcmpb = "vpcmpb",
        Vpcmpw = "vpcmpw",
        Vpcmpd = "vpcmpd",
        Vpcmpq = "vpcmpq",
        Vpcmpub = "vpcmpub",
        Vpcmpuw = "vpcmpuw",
        Vpcmpud = "vpcmpud",
        Vpcmpuq = "vpcmpuq",
        Vcmpph = "vcmpph",
        Vcmpsh = "vcmpsh",
        Vcmpps8 = "vcmpps8",
        Vcmppd8 = "vcmppd8",
        Vpcmpd6 = "vpcmpd6",
        Vpcmpud6 = "vpcmpud6",
    }
}

/// Register operand. Only the first 256 values fit a table byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Register(pub u16);

impl Register {
    pub const NONE: Self = Self(0);

    const NAMES: [&'static str; 77] = [
        "None", "AL", "CL", "DL", "BL", "AH", "CH", "DH", "BH", "SPL", "BPL", "SIL", "DIL", "R8L",
        "R9L", "R10L", "R11L", "R12L", "R13L", "R14L", "R15L", "AX", "CX", "DX", "BX", "SP", "BP",
        "SI", "DI", "R8W", "R9W", "R10W", "R11W", "R12W", "R13W", "R14W", "R15W", "EAX", "ECX",
        "EDX", "EBX", "ESP", "EBP", "ESI", "EDI", "R8D", "R9D", "R10D", "R11D", "R12D", "R13D",
        "R14D", "R15D", "RAX", "RCX", "RDX", "RBX", "RSP", "RBP", "RSI", "RDI", "R8", "R9", "R10",
        "R11", "R12", "R13", "R14", "R15", "EIP", "RIP", "ES", "CS", "SS", "DS", "FS", "GS",
    ];

    /// Name of a general-purpose or segment register.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMES.get(usize::from(self.0)).copied()
    }

    /// Register with the given name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| Self(i as u16))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Register({})", self.0),
        }
    }
}
