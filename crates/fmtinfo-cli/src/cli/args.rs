//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source table files (positional, one or more).
pub fn tables_arg() -> Arg {
    Arg::new("tables")
        .value_name("TABLE")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("JSON record tables, at most one per syntax")
}

/// Output directory (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .default_value(".")
        .value_parser(value_parser!(PathBuf))
        .help("Directory for generated files")
}

/// Also write raw binary tables (--binary).
pub fn binary_arg() -> Arg {
    Arg::new("binary")
        .long("binary")
        .action(ArgAction::SetTrue)
        .help("Also write .bin files next to the Rust sources")
}

/// Assembler syntax (-s/--syntax).
pub fn syntax_arg() -> Arg {
    Arg::new("syntax")
        .short('s')
        .long("syntax")
        .value_name("SYNTAX")
        .required(true)
        .value_parser(["gas", "intel", "masm"])
        .help("Syntax the table was generated for")
}

/// Binary record table (positional).
pub fn table_arg() -> Arg {
    Arg::new("table")
        .value_name("TABLE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Binary record table")
}

/// Binary string pool (--strings).
pub fn strings_arg() -> Arg {
    Arg::new("strings")
        .long("strings")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Binary string pool the table indexes into")
}

/// Number of records (-n/--count).
pub fn count_arg() -> Arg {
    Arg::new("count")
        .short('n')
        .long("count")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .required(true)
        .help("Number of records in the table")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
