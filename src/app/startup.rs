//! Application startup sequence
//!
//! Parse arguments, merge configuration, start logging, then either print the
//! manual or run the update. Fatal errors exit with a non-zero status.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

use super::cli::Args;
use super::manual::print_manual;
use crate::core::error_handling::{fatal_message, log_error_with_context};
use crate::core::logging::{flush_logging, init_logging};
use crate::updater::UpdateOutcome;

/// Entry point used by the binary
pub fn startup() -> ExitCode {
    run(Args::parse())
}

/// Run with already parsed arguments
pub fn run(mut args: Args) -> ExitCode {
    // Logging is configured from these values, so failures go straight to stderr
    let config_path = match Args::load_config_file(&mut args) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}", fatal_message(&e, "Loading configuration"));
            return ExitCode::FAILURE;
        }
    };

    let color_enabled = args.use_color(std::io::stderr().is_terminal());
    colored::control::set_override(color_enabled);

    let log_file = args
        .effective_log_file()
        .map(|path| path.to_string_lossy().into_owned());
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        log_file.as_deref(),
        color_enabled,
    ) {
        eprintln!("Warning: failed to initialise logging: {}", e);
    }

    if let Some(path) = &config_path {
        log::debug!("Applied configuration from {}", path.display());
    }

    let code = execute(&args);
    flush_logging();
    code
}

fn execute(args: &Args) -> ExitCode {
    let Some((mode, project)) = args.operation() else {
        let use_color = args.use_color(std::io::stdout().is_terminal());
        colored::control::set_override(use_color);
        println!("Missing arguments: MODE and PROJECT are required.");
        print_manual(use_color);
        return ExitCode::SUCCESS;
    };

    if let Err(e) = args.validate() {
        log_error_with_context(&e, "Argument validation");
        return ExitCode::FAILURE;
    }

    let updater = args.updater();
    log::debug!(
        "Running with mode '{}', project '{}', limits {:?}",
        mode,
        project,
        updater.limits()
    );

    match updater.run(mode, project) {
        Ok(UpdateOutcome::Bumped {
            path,
            previous,
            current,
            replacements,
        }) => {
            log::info!(
                "{}: version {} -> {} ({} markers updated in {})",
                project,
                previous,
                current,
                replacements,
                path.display()
            );
            ExitCode::SUCCESS
        }
        Ok(UpdateOutcome::Skipped { .. }) => ExitCode::SUCCESS,
        Err(e) => {
            log_error_with_context(&e, "Version update");
            ExitCode::FAILURE
        }
    }
}
