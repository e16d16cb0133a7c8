//! Output targets for table serialization.
//!
//! The serializer writes bytes and review comments through [`TableSink`].
//! [`ByteSink`] keeps only the bytes; [`SourceSink`] renders Rust source where
//! every byte group is followed by its comment.

use std::fmt::Write as _;

use fmtinfo_core::varint;

const INDENT: &str = "    ";

/// Destination of a serialized table.
pub trait TableSink {
    fn write_byte(&mut self, b: u8);

    /// A comment describing the bytes written since the previous comment.
    fn write_comment_line(&mut self, text: &str);

    /// A raw source line. Empty text produces a blank line.
    fn write_line(&mut self, text: &str);

    fn indent(&mut self);

    fn unindent(&mut self);

    fn write_compressed_u32(&mut self, value: u32) {
        for b in varint::encode(value) {
            self.write_byte(b);
        }
    }
}

/// Collects the binary payload only.
#[derive(Debug, Default)]
pub struct ByteSink {
    bytes: Vec<u8>,
}

impl ByteSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl TableSink for ByteSink {
    #[inline]
    fn write_byte(&mut self, b: u8) {
        self.bytes.push(b);
    }

    fn write_comment_line(&mut self, _text: &str) {}

    fn write_line(&mut self, _text: &str) {}

    fn indent(&mut self) {}

    fn unindent(&mut self) {}
}

/// Renders bytes as Rust array elements with trailing comments.
#[derive(Debug, Default)]
pub struct SourceSink {
    out: String,
    level: usize,
    /// Byte literals not yet terminated by a comment or a line.
    pending: String,
    /// Payload size so far.
    len: usize,
}

impl SourceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes written.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The rendered source.
    pub fn finish(mut self) -> String {
        self.flush_pending();
        self.out
    }

    fn emit(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.level {
                self.out.push_str(INDENT);
            }
            self.out.push_str(line);
        }
        self.out.push('\n');
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let pending = std::mem::take(&mut self.pending);
            self.emit(&pending);
        }
    }
}

impl TableSink for SourceSink {
    fn write_byte(&mut self, b: u8) {
        if !self.pending.is_empty() {
            self.pending.push(' ');
        }
        write!(self.pending, "0x{b:02X},").expect("writing to a String cannot fail");
        self.len += 1;
    }

    fn write_comment_line(&mut self, text: &str) {
        let pending = std::mem::take(&mut self.pending);
        let text = escape_controls(text);
        let line = if pending.is_empty() {
            format!("// {text}")
        } else {
            format!("{pending} // {text}")
        };
        self.emit(&line);
    }

    fn write_line(&mut self, text: &str) {
        self.flush_pending();
        self.emit(text);
    }

    fn indent(&mut self) {
        self.flush_pending();
        self.level += 1;
    }

    fn unindent(&mut self) {
        self.flush_pending();
        assert!(self.level > 0, "unbalanced unindent");
        self.level -= 1;
    }
}

/// Control characters would end a `//` comment early.
fn escape_controls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
