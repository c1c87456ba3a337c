/// Top-level errors: anything that ends the run with a non-zero exit status.
use std::io;

use thiserror::Error;

use crate::slack::SlackError;

/// Errors that abort a report.
#[derive(Debug, Error)]
pub enum AppError {
    /// No `-api.token` and no `SLACK_API_TOKEN`.
    #[error("must provide an API token")]
    MissingToken,

    /// A top-level API call (`conversations.list`, `users.list`) failed.
    #[error("slack api error: {0}")]
    Slack(#[from] SlackError),

    /// Writing the report to stdout failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingToken | Self::Slack(_) | Self::Io(_) => 1,
        }
    }
}
