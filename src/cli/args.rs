/// CLI argument definitions via clap derive.
///
/// Flags are long-only and may be spelled with a single dash (`-api.token`,
/// `-csv`); see [`normalize_args`].
use std::ffi::OsString;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::slack::DEFAULT_API_URL;

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: [&str; 2] = ["--api.token", "--api.url"];

/// slackinfo — list Slack channels and users as aligned text or CSV.
#[derive(Debug, Parser)]
#[command(
    name = "slackinfo",
    about = "List Slack channels (or users) as aligned text or CSV",
    disable_version_flag = true
)]
pub struct Cli {
    /// Slack API token.
    #[arg(
        long = "api.token",
        value_name = "TOKEN",
        env = "SLACK_API_TOKEN",
        hide_env_values = true
    )]
    pub api_token: Option<String>,

    /// Slack Web API base URL.
    #[arg(
        long = "api.url",
        value_name = "URL",
        env = "SLACK_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Print CSV output.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub csv: bool,

    /// Print user information instead of channels.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub userinfo: bool,

    /// Print version and exit.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub version: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Columns aligned with spaces, one header row.
    #[default]
    Table,
    /// RFC 4180 CSV with a header record.
    Csv,
}

impl Cli {
    /// The API token, if one was given and is not blank.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Output format selected by `-csv`.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        if self.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Table
        }
    }
}

/// Rewrite single-dash long flags (`-api.token`) to clap's `--api.token`.
///
/// The program name, short flags like `-h`, the value following a
/// value-taking flag, and everything after `--` pass through untouched.
#[must_use]
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out: Vec<OsString> = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                arg
            }
            Some(s) if s.len() > 2 && s.starts_with('-') && !s.starts_with("--") => {
                OsString::from(format!("-{s}"))
            }
            _ => arg,
        };

        expect_value = rewritten
            .to_str()
            .is_some_and(|s| VALUE_FLAGS.contains(&s));
        out.push(rewritten);
    }

    out
}
