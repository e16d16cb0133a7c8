//! Forward-only byte cursor over a serialized table.
//!
//! The cursor position is public state: table decoders rewind it to replay a
//! previous record and then restore it.

use crate::varint::{self, CONTINUE, LAST_GROUP_MASK};

/// Errors raised while reading a serialized table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("unexpected end of data at offset {0}")]
    Truncated(usize),
    #[error("varint at offset {0} does not fit in 32 bits")]
    VarintOverflow(usize),
    #[error("string at offset {offset} is {len} bytes (longest expected: {max})")]
    StringTooLong { offset: usize, len: usize, max: usize },
}

/// Cursor over a byte buffer.
#[derive(Debug)]
pub struct DataReader<'a> {
    data: &'a [u8],
    index: usize,
    max_string_len: usize,
    /// Reused for every string read.
    scratch: Vec<char>,
}

impl<'a> DataReader<'a> {
    /// Reader that only decodes bytes and varints.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_max_string_len(data, 0)
    }

    /// Reader whose string scratch buffer holds up to `max_len` characters.
    pub fn with_max_string_len(data: &'a [u8], max_len: usize) -> Self {
        Self {
            data,
            index: 0,
            max_string_len: max_len,
            scratch: Vec::with_capacity(max_len),
        }
    }

    /// Current position.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move the cursor. Positions past the end make the next read fail.
    #[inline]
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Whether any byte is left after the cursor.
    #[inline]
    pub fn can_read(&self) -> bool {
        self.index < self.data.len()
    }

    /// Bytes left after the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.index)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        let b = *self
            .data
            .get(self.index)
            .ok_or(ReadError::Truncated(self.index))?;
        self.index += 1;
        Ok(b)
    }

    /// Decode a varint written by [`varint::write`].
    pub fn read_compressed_u32(&mut self) -> Result<u32, ReadError> {
        let start = self.index;
        let mut result = 0u32;
        for group in 0..varint::MAX_LEN {
            let b = self.read_u8()?;
            let payload = b & !CONTINUE;
            if group == varint::MAX_LEN - 1 && (b & CONTINUE != 0 || payload > LAST_GROUP_MASK) {
                return Err(ReadError::VarintOverflow(start));
            }
            result |= u32::from(payload) << (group * 7);
            if b & CONTINUE == 0 {
                return Ok(result);
            }
        }
        unreachable!("the last group always returns")
    }

    /// Read a length byte followed by that many single-byte characters.
    pub fn read_ascii_string(&mut self) -> Result<String, ReadError> {
        let offset = self.index;
        let len = usize::from(self.read_u8()?);
        let max = self.max_string_len;
        if len > max {
            return Err(ReadError::StringTooLong { offset, len, max });
        }
        let end = self.index + len;
        let bytes = self
            .data
            .get(self.index..end)
            .ok_or(ReadError::Truncated(self.data.len()))?;

        self.scratch.clear();
        self.scratch.extend(bytes.iter().map(|&b| char::from(b)));
        self.index = end;
        Ok(self.scratch.iter().collect())
    }
}
