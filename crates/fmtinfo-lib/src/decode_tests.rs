//! Unit tests for the table deserializer.

use fmtinfo_core::ReadError;

use crate::decode::{DecodeError, decode_table};
use crate::field::{Field, FieldKind};
use crate::gas::{Gas, GasCtorKind};
use crate::intel::Intel;
use crate::masm::Masm;
use crate::record::InstrRecord;
use crate::schema::CtorKind;
use crate::test_utils::{roundtrip, s};
use crate::values::InstrOpInfoFlags;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn back_reference_decodes_full_record() {
    let data = [1, 0, 0];

    let infos = decode_table::<Gas>(&data, &strings(&["add"]), 2).unwrap();

    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].kind, GasCtorKind::Normal1);
    assert_eq!(infos[1].kind, GasCtorKind::Normal1);
    assert_eq!(infos[0].code, 0);
    assert_eq!(infos[1].code, 1);
    assert_eq!(infos[0].fields, infos[1].fields);
    assert_eq!(infos[1].mnemonic(), Some("add"));
}

#[test]
fn chained_back_references_replay_first_record() {
    let data = [1, 0, 0, 0];

    let infos = decode_table::<Gas>(&data, &strings(&["nop"]), 3).unwrap();

    assert_eq!(infos.len(), 3);
    assert!(infos.iter().all(|i| i.kind == GasCtorKind::Normal1));
    assert!(infos.iter().all(|i| i.mnemonic() == Some("nop")));
    assert_eq!(infos[2].code, 2);
}

#[test]
fn linear_decoding_resumes_after_replay() {
    let records = vec![
        InstrRecord::new(
            GasCtorKind::Normal3,
            0,
            vec![s("vaddps"), Field::Char('x'), Field::Flags(InstrOpInfoFlags::BRANCH_SIZE_INFO_SHORT)],
        ),
        InstrRecord::new(
            GasCtorKind::Normal3,
            1,
            vec![s("vaddps"), Field::Char('x'), Field::Flags(InstrOpInfoFlags::BRANCH_SIZE_INFO_SHORT)],
        ),
        InstrRecord::new(GasCtorKind::Normal1, 2, vec![s("ret")]),
    ];

    let (bytes, infos) = roundtrip::<Gas>(&records);

    assert_eq!(bytes, [0x85, 0x00, b'x', 0x80, 0x01, 0x80, 0x01, 0x01]);
    assert_eq!(infos[1].mnemonic(), Some("vaddps"));
    assert_eq!(infos[1].flags(), InstrOpInfoFlags::BRANCH_SIZE_INFO_SHORT);
    assert_eq!(infos[2].mnemonic(), Some("ret"));
}

#[test]
fn v_prefix_is_restored() {
    let data = [0x81, 0x00];

    let infos = decode_table::<Gas>(&data, &strings(&["addps"]), 1).unwrap();

    assert_eq!(infos[0].fields, [s("vaddps")]);
}

#[test]
fn padded_stream() {
    let data = [1, 0, 0, 0];

    let err = decode_table::<Gas>(&data, &strings(&["add"]), 2).unwrap_err();

    assert_eq!(err, DecodeError::TrailingBytes(1));
}

#[test]
fn count_shorter_than_stream() {
    let err = decode_table::<Gas>(&[1, 0, 0], &strings(&["add"]), 1).unwrap_err();
    assert_eq!(err, DecodeError::TrailingBytes(1));
}

#[test]
fn truncated_stream() {
    let err = decode_table::<Gas>(&[1, 0, 0], &strings(&["add"]), 3).unwrap_err();

    assert_eq!(
        err,
        DecodeError::Read {
            code: 2,
            source: ReadError::Truncated(3)
        }
    );
}

#[test]
fn huge_count_on_short_stream() {
    let err = decode_table::<Gas>(&[1, 0], &strings(&["add"]), usize::MAX).unwrap_err();

    assert_eq!(
        err,
        DecodeError::Read {
            code: 1,
            source: ReadError::Truncated(2)
        }
    );
}

#[test]
fn truncated_field() {
    let data = [GasCtorKind::Asz.as_u8(), 0, 0xFF];

    let err = decode_table::<Gas>(&data, &strings(&["jcxz"]), 1).unwrap_err();

    assert!(matches!(err, DecodeError::Read { code: 0, .. }));
}

#[test]
fn back_reference_at_start() {
    let err = decode_table::<Gas>(&[0], &[], 1).unwrap_err();
    assert_eq!(err, DecodeError::DanglingBackReference { code: 0 });
}

#[test]
fn unknown_kind() {
    let err = decode_table::<Gas>(&[0x7F], &[], 1).unwrap_err();
    assert_eq!(err, DecodeError::UnknownCtorKind { code: 0, raw: 0x7F });
}

#[test]
fn intel_rejects_back_reference() {
    let err = decode_table::<Intel>(&[1, 0, 0], &strings(&["add"]), 2).unwrap_err();
    assert_eq!(err, DecodeError::UnexpectedBackReference { code: 1 });
}

#[test]
fn masm_rejects_v_prefix_flag() {
    let err = decode_table::<Masm>(&[0x81, 0], &strings(&["addps"]), 1).unwrap_err();

    assert_eq!(
        err,
        DecodeError::UnexpectedVPrefix {
            code: 0,
            kind: "Normal1"
        }
    );
}

#[test]
fn string_index_out_of_range() {
    let err = decode_table::<Gas>(&[1, 5], &strings(&["add"]), 1).unwrap_err();
    assert_eq!(err, DecodeError::StringIndex { code: 0, index: 5 });
}

#[test]
fn bool_above_one() {
    let data = [GasCtorKind::Stig1b.as_u8(), 0, 2];

    let err = decode_table::<Gas>(&data, &strings(&["fstp"]), 1).unwrap_err();

    assert_eq!(err, DecodeError::InvalidBool { code: 0, value: 2 });
}

#[test]
fn unknown_code_size() {
    let data = [GasCtorKind::OpSize.as_u8(), 0, 9];

    let err = decode_table::<Gas>(&data, &strings(&["push"]), 1).unwrap_err();

    assert_eq!(
        err,
        DecodeError::InvalidValue {
            code: 0,
            field: FieldKind::CodeSize,
            value: 9
        }
    );
}

#[test]
fn empty_table() {
    let infos = decode_table::<Gas>(&[], &[], 0).unwrap();
    assert!(infos.is_empty());
}

#[test]
fn error_messages() {
    let err = DecodeError::Read {
        code: 7,
        source: ReadError::VarintOverflow(12),
    };
    assert_eq!(
        err.to_string(),
        "record 7: varint at offset 12 does not fit in 32 bits"
    );
    assert_eq!(
        DecodeError::TrailingBytes(3).to_string(),
        "3 unread bytes after the last record"
    );
}
