//! Rust source files for generated tables.

use fmtinfo_core::StringsTable;

use crate::encode::{EncodeError, EncodeStats, TableSerializer};
use crate::schema::Syntax;
use crate::sink::{SourceSink, TableSink};

const HEADER: &str = "// Generated by fmtinfo. Do not edit.";

/// Name of the pool array in generated sources.
pub const STRINGS_STATIC: &str = "STRINGS_TBL_DATA";

/// Name of the record array for `S`.
pub fn table_static<S: Syntax>() -> String {
    format!("{}_TBL_DATA", S::ID.name().to_ascii_uppercase())
}

/// Name of the record count constant for `S`.
pub fn count_const<S: Syntax>() -> String {
    format!("{}_TBL_COUNT", S::ID.name().to_ascii_uppercase())
}

/// Render the record table as a `static` byte array.
pub fn table_source<S: Syntax>(
    serializer: &TableSerializer<'_, S>,
    strings: &StringsTable,
) -> Result<(String, EncodeStats), EncodeError> {
    let mut sink = SourceSink::new();
    sink.write_line(HEADER);
    sink.write_line("");
    sink.write_line(&format!(
        "pub(crate) const {}: usize = {};",
        count_const::<S>(),
        serializer.records().len()
    ));
    sink.write_line("");
    sink.write_line(&format!("pub(crate) static {}: &[u8] = &[", table_static::<S>()));
    sink.indent();
    let stats = serializer.serialize(strings, &mut sink)?;
    sink.unindent();
    sink.write_line("];");
    Ok((sink.finish(), stats))
}

/// Render the string pool as a `static` byte array.
///
/// Bytes match [`StringsTable::write_pool`].
pub fn strings_source(strings: &StringsTable) -> Result<String, EncodeError> {
    // Same checks as the binary form.
    strings.to_bytes()?;

    let mut sink = SourceSink::new();
    sink.write_line(HEADER);
    sink.write_line("");
    sink.write_line(&format!("pub(crate) static {STRINGS_STATIC}: &[u8] = &["));
    sink.indent();

    sink.write_compressed_u32(strings.len() as u32);
    sink.write_comment_line(&format!("{} strings", strings.len()));
    sink.write_byte(strings.max_len() as u8);
    sink.write_comment_line(&format!("longest: {}", strings.max_len()));
    for (index, s) in strings.iter() {
        sink.write_byte(s.len() as u8);
        for b in s.bytes() {
            sink.write_byte(b);
        }
        sink.write_comment_line(&format!("{index} = \"{s}\""));
    }

    sink.unindent();
    sink.write_line("];");
    Ok(sink.finish())
}
