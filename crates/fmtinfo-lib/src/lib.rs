//! Formatter instruction-metadata tables.
//!
//! Each assembler syntax keeps one record per instruction form. A record is a
//! constructor kind plus a kind-specific list of fields. The build tool turns a
//! record table into a compact byte stream; the library turns it back.
//!
//! - [`schema`]: constructor-kind catalogs and per-syntax options
//! - [`encode`]: two-pass serializer (`initialize`, then `serialize`)
//! - [`decode`]: the matching deserializer
//! - [`LazyInfos`]: embedded tables decoded on first use
//!
//! # Example
//!
//! ```
//! use fmtinfo_core::StringsTable;
//! use fmtinfo_lib::gas::{Gas, GasCtorKind};
//! use fmtinfo_lib::{Field, InstrRecord, decode_table, encode_table};
//!
//! let records = vec![
//!     InstrRecord::new(GasCtorKind::Normal1, 0, vec![Field::Str("add".into())]),
//!     InstrRecord::new(GasCtorKind::Normal1, 1, vec![Field::Str("add".into())]),
//! ];
//! let mut strings = StringsTable::new();
//! let bytes = encode_table::<Gas>(&records, &mut strings).unwrap();
//! assert_eq!(bytes, [1, 0, 0]);
//!
//! let pool: Vec<String> = strings.iter().map(|(_, s)| s.to_string()).collect();
//! let infos = decode_table::<Gas>(&bytes, &pool, 2).unwrap();
//! assert_eq!(infos[1].mnemonic(), Some("add"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod codegen;
pub mod decode;
pub mod encode;
pub mod field;
pub mod gas;
pub mod intel;
pub mod lazy;
pub mod masm;
pub mod record;
pub mod schema;
pub mod sink;
pub mod table;
pub mod values;

pub use decode::{DecodeError, decode_table};
pub use encode::{EncodeError, EncodeStats, TableSerializer, encode_table};
pub use field::{Field, FieldKind};
pub use lazy::{LazyInfos, LoadError, load_table};
pub use record::{InstrInfo, InstrRecord, add_suffix};
pub use schema::{CtorKind, Syntax, SyntaxId};
pub use sink::{ByteSink, SourceSink, TableSink};
pub use table::{RawRecord, RawTable, TableError};
pub use values::{CodeSize, InstrOpInfoFlags, PseudoOpsKind, Register};

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod decode_tests;
#[cfg(test)]
mod schema_tests;
#[cfg(test)]
mod sink_tests;
#[cfg(test)]
mod values_tests;
