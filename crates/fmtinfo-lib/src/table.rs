//! JSON source tables consumed by the generator.
//!
//! Two layers:
//! - **Raw layer** ([`RawTable`]): 1:1 mapping to the JSON file
//! - **Typed layer** ([`InstrRecord`]): kinds resolved against a syntax catalog
//!
//! ```json
//! {
//!   "syntax": "gas",
//!   "records": [
//!     { "code": "Add_rm8_r8", "kind": "Normal1", "fields": [{ "str": "add" }] }
//!   ]
//! }
//! ```

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::record::InstrRecord;
use crate::schema::{CtorKind, Syntax, SyntaxId};

/// Source table errors.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("invalid table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record {index}: unknown {syntax} constructor kind '{name}'")]
    UnknownCtorKind {
        index: usize,
        syntax: SyntaxId,
        name: String,
    },
    #[error("table is for {found}, expected {expected}")]
    SyntaxMismatch { expected: SyntaxId, found: SyntaxId },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A source table as written on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    pub syntax: SyntaxId,
    pub records: Vec<RawRecord>,
}

/// One record as written on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    /// Explicit ordinal; defaults to the record's position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u32>,
    /// Instruction code name, for comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub kind: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl RawTable {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Resolve every record against the catalog of `S`.
    pub fn records<S: Syntax>(&self) -> Result<Vec<InstrRecord<S::Kind>>, TableError> {
        if self.syntax != S::ID {
            return Err(TableError::SyntaxMismatch {
                expected: S::ID,
                found: self.syntax,
            });
        }

        self.records
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let kind = <S::Kind as CtorKind>::from_name(&raw.kind).ok_or_else(|| {
                    TableError::UnknownCtorKind {
                        index,
                        syntax: S::ID,
                        name: raw.kind.clone(),
                    }
                })?;
                Ok(InstrRecord {
                    kind,
                    code: raw.ordinal.unwrap_or(index as u32),
                    name: raw.code.clone(),
                    fields: raw.fields.clone(),
                })
            })
            .collect()
    }
}
