//! svg-animate - inject SMIL animations into the LyricsSync logo SVG.

mod anim;
mod cli;
mod config;
mod inject;
mod logger;
mod pipeline;
mod svg;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::AnimConfig;
use pipeline::{Output, Report};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = match AnimConfig::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            log!("error"; "{:#}", err);
            return Ok(ExitCode::FAILURE);
        }
    };
    if let Some(path) = &config.config_path {
        log!("config"; "using {}", path.display());
    }
    debug!("config"; "{:?}", config);

    let report = match pipeline::run(&config, cli.dry) {
        Ok(report) => report,
        Err(err) => {
            log!("error"; "{}", error_chain(&err));
            if let Some(hint) = err.hint() {
                log!("hint"; "{}", hint);
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    print_report(&report);
    Ok(ExitCode::SUCCESS)
}

/// Print warnings, output status and totals.
fn print_report(report: &Report) {
    if !report.diagnostics.is_empty() {
        report.diagnostics.print();
    }

    match &report.output {
        Output::Written(path) => log!("done"; "wrote {}", path.display()),
        Output::Skipped => log!("done"; "dry run, nothing written"),
        Output::Failed(err) => {
            log!("error"; "{}", error_chain(err));
            if let Some(hint) = err.hint() {
                log!("hint"; "{}", hint);
            }
        }
    }

    log!("done"; "{} animation{} injected, {} element{} -> {}, {} warning{}",
        report.injected, plural(report.injected),
        report.elements_before, plural(report.elements_before),
        report.elements_after,
        report.warning_count(), plural(report.warning_count()));
}

/// `error: source: source...` on one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[inline]
fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
