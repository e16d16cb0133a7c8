use crate::values::{CodeSize, InstrOpInfoFlags, PseudoOpsKind, Register};

#[test]
fn empty_flags() {
    assert_eq!(InstrOpInfoFlags::NONE.to_string(), "None");
    assert_eq!(InstrOpInfoFlags::default().bits(), 0);
}

#[test]
fn flag_names_joined() {
    let flags = InstrOpInfoFlags::BND_PREFIX | InstrOpInfoFlags::OP_SIZE32;

    assert_eq!(flags.to_string(), "BndPrefix | OpSize32");
    assert_eq!(format!("{flags:?}"), "InstrOpInfoFlags(0x210 = BndPrefix | OpSize32)");
}

#[test]
fn size_overrides() {
    let flags = InstrOpInfoFlags::OP_SIZE16 | InstrOpInfoFlags::ADDR_SIZE64;

    assert_eq!(flags.op_size(), 16);
    assert_eq!(flags.addr_size(), 64);
    assert_eq!(flags.to_string(), "OpSize16 | AddrSize64");
    assert_eq!(InstrOpInfoFlags::NONE.op_size(), 0);
}

#[test]
fn sign_extend_info() {
    let flags = InstrOpInfoFlags(5 << InstrOpInfoFlags::SIGN_EXTEND_INFO_SHIFT);

    assert_eq!(flags.sign_extend_info(), 5);
    assert_eq!(flags.to_string(), "SignExtendInfo(5)");
}

#[test]
fn unnamed_bits_are_hex() {
    let flags = InstrOpInfoFlags::FAR_MNEMONIC | InstrOpInfoFlags(1 << 30);
    assert_eq!(flags.to_string(), "FarMnemonic | 0x40000000");
}

#[test]
fn contains() {
    let flags = InstrOpInfoFlags::JCC_TAKEN | InstrOpInfoFlags::REGISTER_TO;

    assert!(flags.contains(InstrOpInfoFlags::JCC_TAKEN));
    assert!(!flags.contains(InstrOpInfoFlags::JCC_NOT_TAKEN));
    assert!(flags.contains(InstrOpInfoFlags::NONE));
}

#[test]
fn code_size_bytes() {
    assert_eq!(CodeSize::from_u8(2), Some(CodeSize::Code32));
    assert_eq!(CodeSize::from_u8(4), None);
    assert_eq!(CodeSize::Code64.as_u8(), 3);
    assert_eq!(CodeSize::Code16.to_string(), "Code16");
}

#[test]
fn pseudo_ops_bytes() {
    let last = PseudoOpsKind::ALL.len() as u8 - 1;

    assert_eq!(PseudoOpsKind::from_u8(0), Some(PseudoOpsKind::Cmpps));
    assert_eq!(PseudoOpsKind::from_u8(last), Some(PseudoOpsKind::Vpcmpud6));
    assert_eq!(PseudoOpsKind::from_u8(last + 1), None);
    assert_eq!(PseudoOpsKind::Vpclmulqdq.to_string(), "vpclmulqdq");
}

#[test]
fn every_byte_enum_round_trips() {
    for (i, kind) in PseudoOpsKind::ALL.iter().enumerate() {
        assert_eq!(kind.as_u8() as usize, i);
    }
    for (i, size) in CodeSize::ALL.iter().enumerate() {
        assert_eq!(size.as_u8() as usize, i);
    }
}

#[test]
fn register_names() {
    assert_eq!(Register::NONE.to_string(), "None");
    assert_eq!(Register::from_name("eax").map(|r| r.to_string()), Some("EAX".to_string()));
    assert_eq!(Register::from_name("gs").and_then(Register::name), Some("GS"));
    assert_eq!(Register::from_name("xmm0"), None);
    assert_eq!(Register(200).name(), None);
    assert_eq!(Register(200).to_string(), "Register(200)");
}
