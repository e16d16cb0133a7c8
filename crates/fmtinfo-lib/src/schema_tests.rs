use crate::field::FieldKind;
use crate::gas::{Gas, GasCtorKind};
use crate::intel::{Intel, IntelCtorKind};
use crate::masm::{Masm, MasmCtorKind};
use crate::schema::{CtorKind, Syntax, SyntaxId};

#[test]
fn previous_is_tag_zero() {
    assert_eq!(GasCtorKind::Previous.as_u8(), 0);
    assert_eq!(IntelCtorKind::Previous.as_u8(), 0);
    assert_eq!(MasmCtorKind::Previous.as_u8(), 0);
    assert!(GasCtorKind::Previous.fields().is_empty());
}

#[test]
fn tags_follow_declaration_order() {
    assert_eq!(GasCtorKind::Normal1.as_u8(), 1);
    assert_eq!(GasCtorKind::Normal2b.as_u8(), 3);
    assert_eq!(GasCtorKind::Normal3.as_u8(), 5);
    assert_eq!(GasCtorKind::Asz.as_u8(), 7);
    assert_eq!(GasCtorKind::Movabs.as_u8(), 16);

    for (i, kind) in GasCtorKind::ALL.iter().enumerate() {
        assert_eq!(GasCtorKind::from_u8(i as u8), Some(*kind));
    }
}

#[test]
fn catalog_sizes() {
    assert_eq!(GasCtorKind::ALL.len(), 51);
    assert_eq!(IntelCtorKind::ALL.len(), 35);
    assert_eq!(MasmCtorKind::ALL.len(), 45);
    assert_eq!(GasCtorKind::from_u8(51), None);
}

#[test]
fn names() {
    assert_eq!(GasCtorKind::Bnd2_2.name(), "Bnd2_2");
    assert_eq!(IntelCtorKind::from_name("AsSize"), Some(IntelCtorKind::AsSize));
    assert_eq!(MasmCtorKind::from_name("OpSize2Str"), Some(MasmCtorKind::OpSize2Str));
    assert_eq!(GasCtorKind::from_name("normal1"), None);
    assert_eq!(GasCtorKind::Stig1b.to_string(), "Stig1b");
}

#[test]
fn field_layouts() {
    assert_eq!(
        GasCtorKind::Movabs.fields(),
        [FieldKind::Str, FieldKind::Char, FieldKind::Int, FieldKind::Str, FieldKind::Char]
    );
    assert_eq!(
        IntelCtorKind::Nop.fields(),
        [FieldKind::Int, FieldKind::Str, FieldKind::Register]
    );
}

#[test]
fn first_string_position() {
    assert_eq!(GasCtorKind::Normal1.first_str(), Some(0));
    assert_eq!(IntelCtorKind::AsSize.first_str(), Some(1));
    assert_eq!(IntelCtorKind::Nop0F1F.first_str(), Some(1));
    assert_eq!(GasCtorKind::Previous.first_str(), None);
}

#[test]
fn syntax_options() {
    assert!(Gas::STRIP_V_PREFIX && Gas::ELIDE_REPEATS);
    assert!(Intel::STRIP_V_PREFIX && !Intel::ELIDE_REPEATS);
    assert!(!Masm::STRIP_V_PREFIX && Masm::ELIDE_REPEATS);
}

#[test]
fn syntax_id_parse() {
    assert_eq!("gas".parse::<SyntaxId>(), Ok(SyntaxId::Gas));
    assert_eq!("MASM".parse::<SyntaxId>(), Ok(SyntaxId::Masm));
    assert_eq!(
        "nasm".parse::<SyntaxId>(),
        Err("unknown syntax 'nasm' (expected gas, intel or masm)".to_string())
    );
    assert_eq!(Intel::ID.to_string(), "intel");
}
