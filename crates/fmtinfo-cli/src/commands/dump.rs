//! `fmtinfo dump`: decode a binary table and list its records.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use fmtinfo_lib::gas::Gas;
use fmtinfo_lib::intel::Intel;
use fmtinfo_lib::masm::Masm;
use fmtinfo_lib::{CtorKind, Field, InstrInfo, Syntax, SyntaxId, load_table};

pub struct DumpArgs {
    pub table: PathBuf,
    pub syntax: SyntaxId,
    pub strings: PathBuf,
    pub count: usize,
    pub color: bool,
}

/// ANSI styles for dump output.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub kind: &'static str,
    pub string: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const ON: Self = Self {
        kind: "\x1b[34m",
        string: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        kind: "",
        string: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}

pub fn run(args: DumpArgs) {
    let data = read_or_exit(&args.table);
    let pool = read_or_exit(&args.strings);
    let palette = Palette::new(args.color);

    let rendered = match args.syntax {
        SyntaxId::Gas => dump::<Gas>(&data, &pool, args.count, palette),
        SyntaxId::Intel => dump::<Intel>(&data, &pool, args.count, palette),
        SyntaxId::Masm => dump::<Masm>(&data, &pool, args.count, palette),
    };
    match rendered {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("error: {}: {}", args.table.display(), e);
            std::process::exit(1);
        }
    }
}

fn read_or_exit(path: &Path) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

/// Decode `data` and render one line per record.
pub fn dump<S: Syntax>(
    data: &[u8],
    pool: &[u8],
    count: usize,
    palette: Palette,
) -> Result<String, fmtinfo_lib::LoadError> {
    let infos = load_table::<S>(data, pool, count)?;
    Ok(render(&infos, palette))
}

pub fn render<K: CtorKind>(infos: &[InstrInfo<K>], p: Palette) -> String {
    let width = infos.iter().map(|i| i.kind.name().len()).max().unwrap_or(0);
    let mut out = String::new();

    for info in infos {
        write!(
            out,
            "{}{:>5}{} {}{:<width$}{}",
            p.dim,
            info.code,
            p.reset,
            p.kind,
            info.kind.name(),
            p.reset
        )
        .expect("writing to a String cannot fail");

        for (i, field) in info.fields.iter().enumerate() {
            out.push_str(if i == 0 { "  " } else { ", " });
            match field {
                Field::Str(_) => write!(out, "{}{field}{}", p.string, p.reset),
                _ => write!(out, "{field}"),
            }
            .expect("writing to a String cannot fail");
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }
    out
}
