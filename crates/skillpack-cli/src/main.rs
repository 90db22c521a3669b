//! Skillpack CLI - Command-line utility for validating, packing and
//! unpacking skill packages.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing from `RUST_LOG`, falling back to the `-v` count.
///
/// Logs always go to stderr so stdout stays reserved for results.
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "warn,skillpack=info,skillpack_core=info",
            2 => "info,skillpack=debug,skillpack_core=debug",
            _ => "debug,skillpack=trace,skillpack_core=trace",
        }
        .to_string()
    });

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.json);

    let formatter = output::create_formatter(cli.json, cli.verbose > 0, cli.quiet);

    let result = match &cli.command {
        cli::Commands::Validate(args) => commands::validate::execute(args, &*formatter),
        cli::Commands::Pack(args) => commands::pack::execute(args, &*formatter),
        cli::Commands::Unpack(args) => commands::unpack::execute(args, &*formatter),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(cli.command.name(), &err);
            ExitCode::FAILURE
        }
    }
}
