//! Record table deserialization.
//!
//! Mirror of the encoder, driven by the same schema. The cursor is either
//! linear or replaying: a `Previous` tag jumps back to the last record that was
//! physically written, decodes its fields again, then resumes after the tag.

use fmtinfo_core::{DataReader, ReadError};

use crate::field::{Field, FieldKind};
use crate::record::InstrInfo;
use crate::schema::{CtorKind, KIND_MASK, Syntax, V_PREFIX_FLAG};
use crate::values::{CodeSize, InstrOpInfoFlags, PseudoOpsKind, Register};

/// Deserialization errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("record {code}: {source}")]
    Read {
        code: u32,
        #[source]
        source: ReadError,
    },
    #[error("record {code}: unknown constructor kind {raw}")]
    UnknownCtorKind { code: u32, raw: u8 },
    #[error("record {code}: back-reference without a previous record")]
    DanglingBackReference { code: u32 },
    #[error("record {code}: back-reference in a table that never elides records")]
    UnexpectedBackReference { code: u32 },
    #[error("record {code}: v-prefix flag on {kind}, which has no prefixed string")]
    UnexpectedVPrefix { code: u32, kind: &'static str },
    #[error("record {code}: string index {index} is out of range")]
    StringIndex { code: u32, index: u32 },
    #[error("record {code}: invalid bool byte {value}")]
    InvalidBool { code: u32, value: u8 },
    #[error("record {code}: invalid {field} byte {value}")]
    InvalidValue {
        code: u32,
        field: FieldKind,
        value: u8,
    },
    #[error("{0} unread bytes after the last record")]
    TrailingBytes(usize),
}

/// Cursor over the record stream.
///
/// `replay_from` is the tag offset of the last physically written record;
/// `resume_at` is set only while that record is being replayed.
#[derive(Debug)]
struct Cursor<'a> {
    reader: DataReader<'a>,
    replay_from: Option<usize>,
    resume_at: Option<usize>,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            reader: DataReader::new(data),
            replay_from: None,
            resume_at: None,
        }
    }

    /// Read a tag, following a back-reference. Returns the stored tag byte
    /// and the kind whose fields come next.
    fn read_tag<K: CtorKind>(&mut self, code: u32) -> Result<(u8, u8), DecodeError> {
        let tag_offset = self.reader.index();
        let tag = self.read(code, DataReader::read_u8)?;
        let raw = tag & KIND_MASK;
        if raw != K::PREVIOUS.as_u8() {
            self.replay_from = Some(tag_offset);
            return Ok((tag, raw));
        }

        let from = self
            .replay_from
            .ok_or(DecodeError::DanglingBackReference { code })?;
        assert!(self.resume_at.is_none(), "nested back-reference replay");
        self.resume_at = Some(self.reader.index());
        self.reader.set_index(from);

        let replayed = self.read(code, DataReader::read_u8)? & KIND_MASK;
        assert_ne!(
            replayed,
            K::PREVIOUS.as_u8(),
            "back-reference points at another back-reference"
        );
        Ok((tag, replayed))
    }

    /// Return to the linear position after a replay.
    fn finish_record(&mut self) {
        if let Some(resume) = self.resume_at.take() {
            self.reader.set_index(resume);
        }
    }

    fn read<T>(
        &mut self,
        code: u32,
        f: impl FnOnce(&mut DataReader<'a>) -> Result<T, ReadError>,
    ) -> Result<T, DecodeError> {
        f(&mut self.reader).map_err(|source| DecodeError::Read { code, source })
    }
}

/// Decode `count` records of syntax `S`.
///
/// `strings` is the deserialized string pool. The stream must end exactly
/// after the last record.
pub fn decode_table<S: Syntax>(
    data: &[u8],
    strings: &[String],
    count: usize,
) -> Result<Vec<InstrInfo<S::Kind>>, DecodeError> {
    let mut cursor = Cursor::new(data);
    // Every record takes at least one byte.
    let mut infos = Vec::with_capacity(count.min(data.len()));
    let mut back_references = 0usize;

    for i in 0..count {
        let code = i as u32;
        let (tag, raw) = cursor.read_tag::<S::Kind>(code)?;
        if tag & KIND_MASK == <S::Kind as CtorKind>::PREVIOUS.as_u8() {
            if !S::ELIDE_REPEATS {
                return Err(DecodeError::UnexpectedBackReference { code });
            }
            back_references += 1;
        }

        let kind = <S::Kind as CtorKind>::from_u8(raw)
            .ok_or(DecodeError::UnknownCtorKind { code, raw })?;
        let has_v_prefix = tag & V_PREFIX_FLAG != 0;
        let first = kind.first_str();
        if has_v_prefix && (!S::STRIP_V_PREFIX || first.is_none()) {
            return Err(DecodeError::UnexpectedVPrefix {
                code,
                kind: kind.name(),
            });
        }

        let mut fields = Vec::with_capacity(kind.fields().len());
        for (pos, &field_kind) in kind.fields().iter().enumerate() {
            let v_prefix = has_v_prefix && Some(pos) == first;
            fields.push(read_field(&mut cursor, code, field_kind, strings, v_prefix)?);
        }
        cursor.finish_record();

        tracing::trace!(code, kind = kind.name(), "decoded record");
        infos.push(InstrInfo { kind, code, fields });
    }

    if cursor.reader.can_read() {
        return Err(DecodeError::TrailingBytes(cursor.reader.remaining()));
    }

    tracing::debug!(
        syntax = %S::ID,
        records = infos.len(),
        bytes = data.len(),
        back_references,
        "decoded table"
    );
    Ok(infos)
}

fn read_field(
    cursor: &mut Cursor<'_>,
    code: u32,
    kind: FieldKind,
    strings: &[String],
    v_prefix: bool,
) -> Result<Field, DecodeError> {
    let field = match kind {
        FieldKind::Str => {
            let index = cursor.read(code, DataReader::read_compressed_u32)?;
            let s = strings
                .get(index as usize)
                .ok_or(DecodeError::StringIndex { code, index })?;
            if v_prefix {
                Field::Str(format!("v{s}"))
            } else {
                Field::Str(s.clone())
            }
        }
        FieldKind::Char => Field::Char(char::from(cursor.read(code, DataReader::read_u8)?)),
        FieldKind::Flags => Field::Flags(InstrOpInfoFlags(
            cursor.read(code, DataReader::read_compressed_u32)?,
        )),
        FieldKind::Int => Field::Int(cursor.read(code, DataReader::read_compressed_u32)? as i32),
        FieldKind::PseudoOps => {
            let value = cursor.read(code, DataReader::read_u8)?;
            Field::PseudoOps(PseudoOpsKind::from_u8(value).ok_or(DecodeError::InvalidValue {
                code,
                field: kind,
                value,
            })?)
        }
        FieldKind::CodeSize => {
            let value = cursor.read(code, DataReader::read_u8)?;
            Field::CodeSize(CodeSize::from_u8(value).ok_or(DecodeError::InvalidValue {
                code,
                field: kind,
                value,
            })?)
        }
        FieldKind::Register => {
            Field::Register(Register(u16::from(cursor.read(code, DataReader::read_u8)?)))
        }
        FieldKind::Bool => match cursor.read(code, DataReader::read_u8)? {
            0 => Field::Bool(false),
            1 => Field::Bool(true),
            value => return Err(DecodeError::InvalidBool { code, value }),
        },
    };
    Ok(field)
}
