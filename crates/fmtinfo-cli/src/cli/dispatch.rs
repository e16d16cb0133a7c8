//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use fmtinfo_lib::SyntaxId;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenArgs;

pub struct GenParams {
    pub tables: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub binary: bool,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tables: m
                .get_many::<PathBuf>("tables")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            out_dir: m
                .get_one::<PathBuf>("out_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            binary: m.get_flag("binary"),
        }
    }
}

impl From<GenParams> for GenArgs {
    fn from(p: GenParams) -> Self {
        Self {
            tables: p.tables,
            out_dir: p.out_dir,
            binary: p.binary,
        }
    }
}

pub struct DumpParams {
    pub table: PathBuf,
    pub syntax: SyntaxId,
    pub strings: PathBuf,
    pub count: usize,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table: m.get_one::<PathBuf>("table").cloned().unwrap_or_default(),
            syntax: parse_syntax(m),
            strings: m.get_one::<PathBuf>("strings").cloned().unwrap_or_default(),
            count: m.get_one::<usize>("count").copied().unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            table: p.table,
            syntax: p.syntax,
            strings: p.strings,
            count: p.count,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_syntax(m: &ArgMatches) -> SyntaxId {
    match m.get_one::<String>("syntax").map(|s| s.as_str()) {
        Some("intel") => SyntaxId::Intel,
        Some("masm") => SyntaxId::Masm,
        _ => SyntaxId::Gas,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
