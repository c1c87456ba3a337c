#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! slackinfo — list Slack channels and users as aligned text or CSV.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod slack;
pub mod types;

/// Version string printed by `-version`. Set `SLACKINFO_VERSION` at build
/// time to override the crate version.
pub const VERSION: &str = match option_env!("SLACKINFO_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};
