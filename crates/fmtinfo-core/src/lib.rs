#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Low-level building blocks for formatter metadata tables.
//!
//! - [`varint`]: base-128 integer encoding shared by writer and reader
//! - [`DataReader`]: cursor with a settable position, used to replay records
//! - [`StringsTable`]: insertion-ordered pool with `v`-prefix folding

pub mod reader;
pub mod strings;
pub mod varint;

pub use reader::{DataReader, ReadError};
pub use strings::{MAX_STRING_LEN, StringsError, StringsTable, read_pool, strip_v_prefix};

#[cfg(test)]
mod reader_tests;
