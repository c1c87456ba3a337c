/// Channel report: one row per channel, with the creator's handle resolved.
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::cli::Outputter;
use crate::errors::AppError;
use crate::slack::{Channel, SlackApi, User};
use crate::types::ChannelLine;

/// Run the channel report and return the number of rows written.
///
/// A channel whose creator cannot be looked up is logged and left out; the
/// report carries on with the next channel.
///
/// # Errors
///
/// Returns `AppError::Slack` if the channel list cannot be fetched (nothing is
/// written in that case), or `AppError::Io` if writing fails.
pub fn run<A, O>(api: &A, out: &mut O) -> Result<usize, AppError>
where
    A: SlackApi + ?Sized,
    O: Outputter + ?Sized,
{
    let channels = api.list_channels()?;
    debug!(count = channels.len(), "fetched channels");

    out.header()?;

    let mut written = 0;
    for channel in &channels {
        let creator = match api.user_info(&channel.creator) {
            Ok(user) => user,
            Err(err) => {
                warn!(
                    channel = %channel.name,
                    creator = %channel.creator,
                    error = %err,
                    "creator lookup failed, skipping channel"
                );
                continue;
            }
        };
        out.write_line(&channel_to_line(channel, &creator))?;
        written += 1;
    }

    out.footer()?;

    info!(
        written,
        skipped = channels.len() - written,
        "channel report complete"
    );
    Ok(written)
}

fn channel_to_line(channel: &Channel, creator: &User) -> ChannelLine {
    ChannelLine {
        channel_name: channel.name.clone(),
        user_name: creator.name.clone(),
        created_date: format_created(channel.created),
        num_members: channel.num_members,
        purpose: channel.purpose.value.clone(),
    }
}

/// Render Unix seconds as `YYYY-MM-DD HH:MM:SS +0000 UTC`.
///
/// Out-of-range timestamps render as the epoch.
#[must_use]
pub fn format_created(unix_seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(unix_seconds, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d %H:%M:%S %z %Z")
        .to_string()
}
