//! Encoder input and decoder output.

use crate::field::Field;
use crate::schema::CtorKind;
use crate::values::InstrOpInfoFlags;

/// One row of a source table, as handed to the serializer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InstrRecord<K> {
    pub kind: K,
    /// Instruction ordinal; must equal the record's position.
    pub code: u32,
    /// Display name of the instruction code, used in generated comments.
    pub name: Option<String>,
    pub fields: Vec<Field>,
}

impl<K: CtorKind> InstrRecord<K> {
    pub fn new(kind: K, code: u32, fields: Vec<Field>) -> Self {
        Self {
            kind,
            code,
            name: None,
            fields,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this record encodes to the same bytes as `other`.
    ///
    /// The ordinal and display name are not part of the encoding.
    pub fn same_layout(&self, other: &Self) -> bool {
        self.kind == other.kind && self.fields == other.fields
    }
}

/// One decoded row, indexed by instruction ordinal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InstrInfo<K> {
    pub kind: K,
    pub code: u32,
    pub fields: Vec<Field>,
}

impl<K: CtorKind> InstrInfo<K> {
    /// First string field.
    pub fn mnemonic(&self) -> Option<&str> {
        self.fields.iter().find_map(Field::as_str)
    }

    /// First character field.
    pub fn suffix(&self) -> Option<char> {
        self.fields.iter().find_map(|f| match f {
            Field::Char(c) => Some(*c),
            _ => None,
        })
    }

    /// The mnemonic with its suffix character appended.
    pub fn mnemonic_with_suffix(&self) -> Option<String> {
        let mnemonic = self.mnemonic()?;
        Some(match self.suffix() {
            Some(c) => add_suffix(mnemonic, c),
            None => mnemonic.to_string(),
        })
    }

    /// All string fields in order.
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(Field::as_str)
    }

    /// First flags field, or `NONE`.
    pub fn flags(&self) -> InstrOpInfoFlags {
        self.fields
            .iter()
            .find_map(|f| match f {
                Field::Flags(flags) => Some(*flags),
                _ => None,
            })
            .unwrap_or(InstrOpInfoFlags::NONE)
    }
}

impl<K: CtorKind> From<InstrRecord<K>> for InstrInfo<K> {
    fn from(record: InstrRecord<K>) -> Self {
        Self {
            kind: record.kind,
            code: record.code,
            fields: record.fields,
        }
    }
}

/// `s` followed by `c`, where `'\0'` means no suffix.
pub fn add_suffix(s: &str, c: char) -> String {
    let mut res = String::with_capacity(s.len() + 1);
    res.push_str(s);
    if c != '\0' {
        res.push(c);
    }
    res
}
