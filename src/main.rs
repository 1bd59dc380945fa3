//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipreco` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All lookup functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ipreco::config::EXIT_INTERRUPTED;
use ipreco::initialization::init_logger_with;
use ipreco::report::{
    print_banner, print_dns_warning, print_error, print_report, print_target, render_failure,
    Palette,
};
use ipreco::{run_lookup, Config, Opt, Query};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Malformed flags: clap prints usage and exits with status 2
    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let palette = Palette::colored();
    if config.show_banner {
        print_banner(&palette);
    }

    let query = match Query::from_args(opt.ip.as_deref(), opt.dns) {
        Ok(query) => query,
        Err(e) => {
            print_error(&e, &palette);
            process::exit(e.exit_code());
        }
    };
    print_target(query.target_ip, &palette);

    let outcome = tokio::select! {
        outcome = run_lookup(&config, &query) => outcome,
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!("{}", render_failure("Interrupted.", &palette));
            process::exit(EXIT_INTERRUPTED);
        }
    };

    match outcome {
        Ok(result) => {
            if query.resolve_dns && result.hostname.is_none() {
                print_dns_warning(&palette);
            }
            print_report(&result, &palette);
            Ok(())
        }
        Err(e) => {
            log::debug!("Lookup failed ({}): {:?}", e.kind(), e);
            print_error(&e, &palette);
            process::exit(e.exit_code());
        }
    }
}
