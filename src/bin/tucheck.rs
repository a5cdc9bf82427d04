//! Total unimodularity checker
//!
//! Loads a matrix from a text file (or uses the built-in 9x18 incidence
//! matrix), optionally transposes it, and runs the 2x2 minor test or the
//! exhaustive test. Exit status is 0 when the check passes, 1 when it
//! fails and 2 when the input cannot be read as an integer matrix.

use anyhow::{Context, Result};
use log::info;
use unimodular::reporters::{CheckReporter, ConsoleCheckReporter, Reporter, SilentCheckReporter};
use unimodular::unimodular::{
    check_exhaustive_with_reporter, check_with_config_and_reporter, ExhaustiveConfig,
};
use unimodular::{matrix, reference, CheckConfig, Matrix};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = unimodular::parse_args();
    let quiet = matches.get_flag("quiet");
    let config = CheckConfig::from_args(&matches);

    let reporter: Box<dyn CheckReporter> = if quiet {
        Box::new(SilentCheckReporter::new())
    } else {
        Box::new(ConsoleCheckReporter::new())
    };

    let matrix = match load_input(&matches) {
        Ok(matrix) => matrix,
        Err(e) => {
            reporter.report_error(&format!("{:#}", e));
            std::process::exit(2);
        }
    };

    let matrix = if matches.get_flag("transpose") {
        if !quiet {
            println!("Transposed matrix A:");
        }
        matrix.transpose()
    } else {
        matrix
    };

    let report = if matches.get_flag("exhaustive") {
        let exhaustive = ExhaustiveConfig::new(matches.get_one::<usize>("max-order").copied());
        check_exhaustive_with_reporter(&matrix, &exhaustive, reporter.as_ref())
    } else {
        check_with_config_and_reporter(&matrix, &config, reporter.as_ref())
    };

    if report.verdict {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

fn load_input(matches: &clap::ArgMatches) -> Result<Matrix> {
    match matches.get_one::<String>("input") {
        Some(path) => matrix::load_matrix(path)
            .with_context(|| format!("Failed to load matrix from {}", path)),
        None => {
            info!("No input file given, using the built-in reference matrix");
            Ok(reference::reference_incidence_matrix())
        }
    }
}
