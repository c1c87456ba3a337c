/// Command dispatch: builds the client and writer, then runs the selected report.
pub mod channels;
pub mod users;

use std::io;

use crate::cli::{Cli, writer};
use crate::errors::AppError;
use crate::slack::SlackClient;

/// Run the report selected by `cli`, writing to stdout.
///
/// # Errors
///
/// Returns `AppError::MissingToken` before any network call when no token is
/// set, otherwise any fatal API or output error.
pub fn dispatch(cli: &Cli) -> Result<(), AppError> {
    let token = cli.token().ok_or(AppError::MissingToken)?;
    let client = SlackClient::new(token, &cli.api_url)?;

    let stdout = io::stdout();
    let mut out = writer(cli.format(), stdout.lock());

    if cli.userinfo {
        users::run(&client, out.as_mut())?;
    } else {
        channels::run(&client, out.as_mut())?;
    }
    Ok(())
}
