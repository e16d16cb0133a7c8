//! Record table serialization.
//!
//! Two passes over one table:
//! 1. [`TableSerializer::initialize`] adds every string to the shared pool.
//! 2. [`TableSerializer::serialize`] writes the tag and fields of each record.
//!
//! All validation happens in [`TableSerializer::new`], so a bad table fails
//! before any byte is written.

use fmtinfo_core::{StringsError, StringsTable, strip_v_prefix};

use crate::field::{Field, FieldKind};
use crate::record::InstrRecord;
use crate::schema::{CtorKind, Syntax, V_PREFIX_FLAG};
use crate::sink::{ByteSink, TableSink};

/// Serialization errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("record at position {index} has ordinal {code}")]
    OrdinalMismatch { index: usize, code: u32 },
    #[error("record {code} uses the reserved Previous kind")]
    ReservedKind { code: u32 },
    #[error("record {code} ({kind}): expected fields [{expected}], found [{found}]")]
    SchemaMismatch {
        code: u32,
        kind: &'static str,
        expected: String,
        found: String,
    },
    #[error("record {code}: {field} value {value:#X} does not fit in a byte")]
    ValueTooLarge {
        code: u32,
        field: FieldKind,
        value: u32,
    },
    #[error(transparent)]
    Strings(#[from] StringsError),
}

/// Counters reported after a table is written.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct EncodeStats {
    pub records: usize,
    pub back_references: usize,
}

/// Serializer for one syntax's record table.
#[derive(Debug)]
pub struct TableSerializer<'a, S: Syntax> {
    records: &'a [InstrRecord<S::Kind>],
}

impl<'a, S: Syntax> TableSerializer<'a, S> {
    /// Validate `records` against the syntax schema.
    pub fn new(records: &'a [InstrRecord<S::Kind>]) -> Result<Self, EncodeError> {
        for (index, record) in records.iter().enumerate() {
            validate_record(index, record)?;
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &'a [InstrRecord<S::Kind>] {
        self.records
    }

    /// Add every string of the table to `strings`.
    pub fn initialize(&self, strings: &mut StringsTable) {
        for record in self.records {
            let first = record.kind.first_str();
            for (pos, field) in record.fields.iter().enumerate() {
                let Field::Str(s) = field else { continue };
                match strip_v_prefix(s) {
                    Some(base) if S::STRIP_V_PREFIX && Some(pos) == first => strings.add(base),
                    _ => strings.add(s),
                }
            }
        }
    }

    /// Write every record to `sink`.
    pub fn serialize(
        &self,
        strings: &StringsTable,
        sink: &mut impl TableSink,
    ) -> Result<EncodeStats, EncodeError> {
        let mut stats = EncodeStats::default();
        let mut prev: Option<&InstrRecord<S::Kind>> = None;

        for (index, record) in self.records.iter().enumerate() {
            if index != 0 {
                sink.write_line("");
            }
            match &record.name {
                Some(name) => sink.write_comment_line(name),
                None => sink.write_comment_line(&format!("Code {}", record.code)),
            }

            let repeat = S::ELIDE_REPEATS && prev.is_some_and(|p| p.same_layout(record));
            prev = Some(record);

            let kind = if repeat {
                <S::Kind as CtorKind>::PREVIOUS
            } else {
                record.kind
            };
            let had_v_prefix = self.first_string_has_v_prefix(strings, record)?;
            if had_v_prefix {
                sink.write_byte(kind.as_u8() | V_PREFIX_FLAG);
                sink.write_comment_line(&format!("'v', {kind}"));
            } else {
                sink.write_byte(kind.as_u8());
                sink.write_comment_line(kind.name());
            }

            stats.records += 1;
            if repeat {
                stats.back_references += 1;
                tracing::trace!(code = record.code, "back-reference");
                continue;
            }
            self.write_fields(strings, record, sink)?;
        }

        tracing::debug!(
            syntax = %S::ID,
            records = stats.records,
            back_references = stats.back_references,
            "serialized table"
        );
        Ok(stats)
    }

    fn first_string_has_v_prefix(
        &self,
        strings: &StringsTable,
        record: &InstrRecord<S::Kind>,
    ) -> Result<bool, EncodeError> {
        let Some(pos) = record.kind.first_str() else {
            return Ok(false);
        };
        let Field::Str(s) = &record.fields[pos] else {
            unreachable!("record layout was validated")
        };
        let (_, had_v_prefix) = strings.get_index(s, S::STRIP_V_PREFIX)?;
        Ok(had_v_prefix)
    }

    fn write_fields(
        &self,
        strings: &StringsTable,
        record: &InstrRecord<S::Kind>,
        sink: &mut impl TableSink,
    ) -> Result<(), EncodeError> {
        let first = record.kind.first_str();
        for (pos, field) in record.fields.iter().enumerate() {
            match field {
                Field::Str(s) => {
                    let ignore_v_prefix = S::STRIP_V_PREFIX && Some(pos) == first;
                    let (index, _) = strings.get_index(s, ignore_v_prefix)?;
                    sink.write_compressed_u32(index);
                    sink.write_comment_line(&format!("{index} = \"{s}\""));
                    continue;
                }
                Field::Char(c) => sink.write_byte(*c as u8),
                Field::Flags(flags) => sink.write_compressed_u32(flags.bits()),
                Field::Int(v) => sink.write_compressed_u32(*v as u32),
                Field::PseudoOps(kind) => sink.write_byte(kind.as_u8()),
                Field::CodeSize(size) => sink.write_byte(size.as_u8()),
                Field::Register(reg) => sink.write_byte(reg.0 as u8),
                Field::Bool(b) => sink.write_byte(u8::from(*b)),
            }
            sink.write_comment_line(&field.to_string());
        }
        Ok(())
    }
}

/// Serialize `records` into a byte buffer, growing `strings` as needed.
pub fn encode_table<S: Syntax>(
    records: &[InstrRecord<S::Kind>],
    strings: &mut StringsTable,
) -> Result<Vec<u8>, EncodeError> {
    let serializer = TableSerializer::<S>::new(records)?;
    serializer.initialize(strings);
    let mut sink = ByteSink::new();
    serializer.serialize(strings, &mut sink)?;
    Ok(sink.into_bytes())
}

fn validate_record<K: CtorKind>(index: usize, record: &InstrRecord<K>) -> Result<(), EncodeError> {
    let code = record.code;
    if code as usize != index {
        return Err(EncodeError::OrdinalMismatch { index, code });
    }
    if record.kind == K::PREVIOUS {
        return Err(EncodeError::ReservedKind { code });
    }

    let expected = record.kind.fields();
    let matches = expected.len() == record.fields.len()
        && expected.iter().zip(&record.fields).all(|(&k, f)| f.kind() == k);
    if !matches {
        return Err(EncodeError::SchemaMismatch {
            code,
            kind: record.kind.name(),
            expected: join_kinds(expected.iter().copied()),
            found: join_kinds(record.fields.iter().map(Field::kind)),
        });
    }

    for field in &record.fields {
        let value = match field {
            Field::Char(c) => u32::from(*c),
            Field::Register(reg) => u32::from(reg.0),
            _ => continue,
        };
        if value > u32::from(u8::MAX) {
            return Err(EncodeError::ValueTooLarge {
                code,
                field: field.kind(),
                value,
            });
        }
    }
    Ok(())
}

fn join_kinds(kinds: impl Iterator<Item = FieldKind>) -> String {
    kinds.map(|k| k.to_string()).collect::<Vec<_>>().join(", ")
}
