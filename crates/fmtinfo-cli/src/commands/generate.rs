//! `fmtinfo gen`: JSON record tables to Rust sources.
//!
//! All tables share one string pool. Every table is initialized into the pool
//! before any of them is serialized, so indices stay stable across syntaxes.

use std::path::{Path, PathBuf};

use fmtinfo_core::StringsTable;
use fmtinfo_lib::codegen::{strings_source, table_source};
use fmtinfo_lib::gas::{Gas, GasCtorKind};
use fmtinfo_lib::intel::{Intel, IntelCtorKind};
use fmtinfo_lib::masm::{Masm, MasmCtorKind};
use fmtinfo_lib::{
    ByteSink, EncodeError, InstrRecord, RawTable, Syntax, SyntaxId, TableError, TableSerializer,
};

pub struct GenArgs {
    pub tables: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub binary: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("{}: {source}", path.display())]
    Table { path: PathBuf, source: TableError },
    #[error("{}: a {syntax} table was already given", path.display())]
    DuplicateSyntax { path: PathBuf, syntax: SyntaxId },
    #[error("{syntax} table: {source}")]
    Encode {
        syntax: SyntaxId,
        source: EncodeError,
    },
    #[error("string pool: {0}")]
    Strings(EncodeError),
    #[error("{}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn run(args: GenArgs) {
    if let Err(e) = write_all(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Records of every syntax given on the command line.
#[derive(Default)]
struct Inputs {
    gas: Option<Vec<InstrRecord<GasCtorKind>>>,
    intel: Option<Vec<InstrRecord<IntelCtorKind>>>,
    masm: Option<Vec<InstrRecord<MasmCtorKind>>>,
}

pub fn write_all(args: &GenArgs) -> Result<(), GenError> {
    let inputs = load_inputs(&args.tables)?;

    let gas = serializer::<Gas>(inputs.gas.as_deref())?;
    let intel = serializer::<Intel>(inputs.intel.as_deref())?;
    let masm = serializer::<Masm>(inputs.masm.as_deref())?;

    let mut strings = StringsTable::new();
    if let Some(s) = &gas {
        s.initialize(&mut strings);
    }
    if let Some(s) = &intel {
        s.initialize(&mut strings);
    }
    if let Some(s) = &masm {
        s.initialize(&mut strings);
    }
    tracing::info!(strings = strings.len(), longest = strings.max_len(), "string pool ready");

    write_table(args, gas.as_ref(), &strings)?;
    write_table(args, intel.as_ref(), &strings)?;
    write_table(args, masm.as_ref(), &strings)?;

    let source = strings_source(&strings).map_err(GenError::Strings)?;
    write_file(&args.out_dir.join("strings_tbl.rs"), source.as_bytes())?;
    if args.binary {
        let bytes = strings
            .to_bytes()
            .map_err(|e| GenError::Strings(e.into()))?;
        write_file(&args.out_dir.join("strings_tbl.bin"), &bytes)?;
    }
    Ok(())
}

fn load_inputs(paths: &[PathBuf]) -> Result<Inputs, GenError> {
    let mut inputs = Inputs::default();
    for path in paths {
        let table_err = |source| GenError::Table {
            path: path.clone(),
            source,
        };
        let table = RawTable::from_path(path).map_err(table_err)?;
        tracing::debug!(path = %path.display(), syntax = %table.syntax, "loaded table");

        let duplicate = match table.syntax {
            SyntaxId::Gas => inputs
                .gas
                .replace(table.records::<Gas>().map_err(table_err)?)
                .is_some(),
            SyntaxId::Intel => inputs
                .intel
                .replace(table.records::<Intel>().map_err(table_err)?)
                .is_some(),
            SyntaxId::Masm => inputs
                .masm
                .replace(table.records::<Masm>().map_err(table_err)?)
                .is_some(),
        };
        if duplicate {
            return Err(GenError::DuplicateSyntax {
                path: path.clone(),
                syntax: table.syntax,
            });
        }
    }
    Ok(inputs)
}

fn serializer<S: Syntax>(
    records: Option<&[InstrRecord<S::Kind>]>,
) -> Result<Option<TableSerializer<'_, S>>, GenError> {
    records
        .map(TableSerializer::<S>::new)
        .transpose()
        .map_err(|source| GenError::Encode {
            syntax: S::ID,
            source,
        })
}

fn write_table<S: Syntax>(
    args: &GenArgs,
    serializer: Option<&TableSerializer<'_, S>>,
    strings: &StringsTable,
) -> Result<(), GenError> {
    let Some(serializer) = serializer else {
        return Ok(());
    };
    let encode_err = |source| GenError::Encode {
        syntax: S::ID,
        source,
    };

    let (source, stats) = table_source(serializer, strings).map_err(encode_err)?;
    write_file(&args.out_dir.join(format!("{}_tbl.rs", S::ID)), source.as_bytes())?;

    if args.binary {
        let mut sink = ByteSink::new();
        serializer.serialize(strings, &mut sink).map_err(encode_err)?;
        write_file(&args.out_dir.join(format!("{}_tbl.bin", S::ID)), sink.bytes())?;
    }

    tracing::info!(
        syntax = %S::ID,
        records = stats.records,
        back_references = stats.back_references,
        "wrote table"
    );
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), GenError> {
    std::fs::write(path, contents).map_err(|source| GenError::Write {
        path: path.to_path_buf(),
        source,
    })
}
