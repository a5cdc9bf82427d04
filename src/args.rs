use clap::{Arg, ArgAction, Command};
use std::fs;

pub fn build_cli() -> Command {
    Command::new("tucheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check whether an integer matrix is totally unimodular")
        .arg(
            Arg::new("input")
                .help("Matrix file, one row per line (default: built-in 9x18 incidence matrix)")
                .required(false)
                .value_parser(|input: &str| {
                    let path =
                        fs::canonicalize(input).map_err(|_| "Failed to resolve input path")?;
                    if path.is_file() {
                        Ok(path.to_string_lossy().to_string())
                    } else {
                        Err(String::from("Input file does not exist"))
                    }
                }),
        )
        .arg(
            Arg::new("transpose")
                .long("transpose")
                .help("Check the transpose of the matrix")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exhaustive")
                .long("exhaustive")
                .help("Check square submatrices of every order, not only 2x2")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-order")
                .long("max-order")
                .help("Largest submatrix order for --exhaustive")
                .value_name("K")
                .value_parser(clap::value_parser!(usize))
                .requires("exhaustive"),
        )
        .arg(
            Arg::new("unordered")
                .long("unordered")
                .help("Scan unordered index pairs only (same verdict, half the work)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for computation (0 = auto-detect)")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Disable all parallel processing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode - no output, exit status only")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
