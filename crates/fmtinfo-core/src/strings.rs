//! Deduplicated string pool shared by every formatter table.
//!
//! Insertion order assigns indices. Mnemonics of vector forms usually only
//! differ from their legacy forms by a leading `v`, so lookups can drop that
//! character and let the caller record it elsewhere.
//!
//! Serialized layout:
//! - varint: number of strings
//! - u8: length of the longest string
//! - per string: u8 length, then that many ASCII bytes

use indexmap::IndexSet;

use crate::reader::{DataReader, ReadError};
use crate::varint;

/// Longest string the serialized layout can hold.
pub const MAX_STRING_LEN: usize = u8::MAX as usize;

/// String pool errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StringsError {
    #[error("string {0:?} was never added to the pool")]
    Missing(String),
    #[error("string {0:?} is not ASCII")]
    NotAscii(String),
    #[error("string {0:?} is longer than {MAX_STRING_LEN} bytes")]
    TooLong(String),
    #[error("{0} unread bytes after the last pool string")]
    TrailingBytes(usize),
    #[error("malformed string pool: {0}")]
    Read(#[from] ReadError),
}

/// Returns `s` without its leading `v`, if it has one.
#[inline]
pub fn strip_v_prefix(s: &str) -> Option<&str> {
    s.strip_prefix('v')
}

/// Insertion-ordered string pool.
#[derive(Debug, Clone, Default)]
pub struct StringsTable {
    strings: IndexSet<String>,
}

impl StringsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a string. Adding a known string is a no-op.
    pub fn add(&mut self, s: &str) {
        if !self.strings.contains(s) {
            self.strings.insert(s.to_owned());
        }
    }

    /// Index of `s`, and whether a leading `v` was dropped to find it.
    ///
    /// With `ignore_v_prefix` set, a string starting with `v` is looked up
    /// without that character.
    pub fn get_index(&self, s: &str, ignore_v_prefix: bool) -> Result<(u32, bool), StringsError> {
        let (key, had_v_prefix) = match strip_v_prefix(s) {
            Some(base) if ignore_v_prefix => (base, true),
            _ => (s, false),
        };
        let index = self
            .strings
            .get_index_of(key)
            .ok_or_else(|| StringsError::Missing(key.to_owned()))?;
        Ok((index as u32, had_v_prefix))
    }

    /// String at `index`.
    #[inline]
    pub fn get(&self, index: u32) -> Option<&str> {
        self.strings.get_index(index as usize).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Length of the longest string.
    pub fn max_len(&self) -> usize {
        self.strings.iter().map(String::len).max().unwrap_or(0)
    }

    /// Iterate over all strings with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (i as u32, s.as_str()))
    }

    /// Serialize the pool.
    pub fn write_pool(&self, out: &mut Vec<u8>) -> Result<(), StringsError> {
        for s in &self.strings {
            if !s.is_ascii() {
                return Err(StringsError::NotAscii(s.clone()));
            }
            if s.len() > MAX_STRING_LEN {
                return Err(StringsError::TooLong(s.clone()));
            }
        }

        varint::write(out, self.strings.len() as u32);
        out.push(self.max_len() as u8);
        for s in &self.strings {
            out.push(s.len() as u8);
            out.extend_from_slice(s.as_bytes());
        }
        Ok(())
    }

    /// Serialize the pool into a fresh buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StringsError> {
        let mut out = Vec::new();
        self.write_pool(&mut out)?;
        Ok(out)
    }
}

/// Deserialize a pool written by [`StringsTable::write_pool`].
///
/// The whole buffer must be consumed.
pub fn read_pool(data: &[u8]) -> Result<Vec<String>, StringsError> {
    let mut header = DataReader::new(data);
    let count = header.read_compressed_u32()? as usize;
    let max_len = usize::from(header.read_u8()?);

    let mut reader = DataReader::with_max_string_len(data, max_len);
    reader.set_index(header.index());

    let mut strings = Vec::with_capacity(count.min(reader.remaining()));
    for _ in 0..count {
        strings.push(reader.read_ascii_string()?);
    }
    if reader.can_read() {
        return Err(StringsError::TrailingBytes(reader.remaining()));
    }
    Ok(strings)
}
