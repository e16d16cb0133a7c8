//! Test utilities shared by the table tests.

use fmtinfo_core::StringsTable;

use crate::field::{Field, FieldKind};
use crate::record::{InstrInfo, InstrRecord};
use crate::schema::{CtorKind, Syntax};
use crate::values::{CodeSize, InstrOpInfoFlags, PseudoOpsKind, Register};
use crate::{decode_table, encode_table};

pub fn s(text: &str) -> Field {
    Field::Str(text.to_string())
}

/// Pool contents in index order, as the decoder receives them.
pub fn pool(strings: &StringsTable) -> Vec<String> {
    strings.iter().map(|(_, s)| s.to_string()).collect()
}

/// Encode with a fresh pool, then decode.
pub fn roundtrip<S: Syntax>(records: &[InstrRecord<S::Kind>]) -> (Vec<u8>, Vec<InstrInfo<S::Kind>>) {
    let mut strings = StringsTable::new();
    let bytes = encode_table::<S>(records, &mut strings).expect("encoding failed");
    let infos = decode_table::<S>(&bytes, &pool(&strings), records.len()).expect("decoding failed");
    (bytes, infos)
}

/// A plausible value for a field slot. `seed` varies strings and numbers.
pub fn sample_field(kind: FieldKind, seed: u32, slot: usize) -> Field {
    match kind {
        FieldKind::Str if slot == 0 && seed % 3 == 0 => Field::Str(format!("vop{seed}")),
        FieldKind::Str => Field::Str(format!("op{seed}_{slot}")),
        FieldKind::Char => Field::Char(['\0', 'b', 'w', 'l', 'q'][seed as usize % 5]),
        FieldKind::Flags => Field::Flags(
            InstrOpInfoFlags::OP_SIZE32 | InstrOpInfoFlags(seed << 7 & 0x3_FF80),
        ),
        FieldKind::Int => Field::Int(seed as i32 * 1000 - 2),
        FieldKind::PseudoOps => {
            Field::PseudoOps(PseudoOpsKind::ALL[seed as usize % PseudoOpsKind::ALL.len()])
        }
        FieldKind::CodeSize => Field::CodeSize(CodeSize::ALL[seed as usize % CodeSize::ALL.len()]),
        FieldKind::Register => Field::Register(Register((seed % 256) as u16)),
        FieldKind::Bool => Field::Bool(seed % 2 == 1),
    }
}

/// One record per non-`Previous` kind of the catalog, in catalog order.
///
/// The first string of every record is placed where the v flag applies.
pub fn catalog_records<K: CtorKind>() -> Vec<InstrRecord<K>> {
    K::ALL
        .iter()
        .copied()
        .filter(|&kind| kind != K::PREVIOUS)
        .enumerate()
        .map(|(code, kind)| {
            let first = kind.first_str();
            let fields = kind
                .fields()
                .iter()
                .enumerate()
                .map(|(pos, &f)| {
                    let slot = if Some(pos) == first { 0 } else { pos + 1 };
                    sample_field(f, code as u32, slot)
                })
                .collect();
            InstrRecord::new(kind, code as u32, fields)
        })
        .collect()
}
