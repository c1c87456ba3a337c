/// User report: one row per workspace member.
use tracing::{debug, info};

use crate::cli::UserInfoOutputter;
use crate::errors::AppError;
use crate::slack::{SlackApi, User};
use crate::types::UserLine;

/// Run the user report and return the number of rows written.
///
/// # Errors
///
/// Returns `AppError::Slack` if the member list cannot be fetched (nothing is
/// written in that case), or `AppError::Io` if writing fails.
pub fn run<A, O>(api: &A, out: &mut O) -> Result<usize, AppError>
where
    A: SlackApi + ?Sized,
    O: UserInfoOutputter + ?Sized,
{
    let users = api.list_users()?;
    debug!(count = users.len(), "fetched users");

    out.user_header()?;
    for user in &users {
        out.write_user_line(&user_to_line(user))?;
    }
    out.footer()?;

    info!(written = users.len(), "user report complete");
    Ok(users.len())
}

fn user_to_line(user: &User) -> UserLine {
    UserLine {
        name: user.name.clone(),
        real_name: user.profile.real_name.clone(),
        title: user.profile.title.clone(),
        email: user.profile.email.clone(),
        is_admin: user.is_admin,
        is_restricted: user.is_restricted,
        is_ultra_restricted: user.is_ultra_restricted,
        has_2fa: user.has_2fa,
    }
}
