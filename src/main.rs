#![deny(clippy::all, clippy::pedantic)]
//! slackinfo binary: parse flags, run one report, map failures to an exit code.

use clap::{CommandFactory, Parser};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

use slackinfo::VERSION;
use slackinfo::cli::{Cli, normalize_args};
use slackinfo::commands;
use slackinfo::errors::AppError;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slackinfo=info"));

    let json_mode = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    // stdout carries the report; logs go to stderr.
    if json_mode {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .compact()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    if cli.version {
        println!("{VERSION}");
        return;
    }

    init_tracing();

    if let Err(err) = commands::dispatch(&cli) {
        if matches!(err, AppError::MissingToken) {
            eprintln!("{err}");
            eprintln!("{}", Cli::command().render_help());
        } else {
            error!("{err}");
        }
        std::process::exit(err.exit_code());
    }
}
