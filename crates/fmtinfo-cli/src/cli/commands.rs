//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("fmtinfo")
        .about("Generate and inspect x86 formatter metadata tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gen_command())
        .subcommand(dump_command())
}

/// Encode JSON record tables into Rust sources sharing one string pool.
pub fn gen_command() -> Command {
    Command::new("gen")
        .about("Generate table sources from JSON record tables")
        .override_usage("  fmtinfo gen <TABLE>... [-o <DIR>] [--binary]")
        .after_help(
            r#"EXAMPLES:
  fmtinfo gen gas.json intel.json masm.json -o src/generated
  fmtinfo gen gas.json --binary         # also gas_tbl.bin, strings_tbl.bin"#,
        )
        .arg(tables_arg())
        .arg(out_dir_arg())
        .arg(binary_arg())
}

/// Decode a binary table and print its records.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Decode a binary table and print its records")
        .override_usage("  fmtinfo dump <TABLE> -s <SYNTAX> --strings <FILE> -n <N>")
        .after_help(
            r#"EXAMPLES:
  fmtinfo dump gas_tbl.bin -s gas --strings strings_tbl.bin -n 4"#,
        )
        .arg(table_arg())
        .arg(syntax_arg())
        .arg(strings_arg())
        .arg(count_arg())
        .arg(color_arg())
}
