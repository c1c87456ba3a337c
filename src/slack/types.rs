/// Wire types for the Slack Web API responses this tool reads.
///
/// Only the fields the reports need are modelled. Anything else in the JSON is
/// ignored, and missing fields fall back to their defaults.
use serde::Deserialize;

/// A channel as returned by `conversations.list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Channel {
    pub id: String,
    pub name: String,
    /// User id of the member who created the channel.
    pub creator: String,
    /// Creation time, Unix seconds.
    pub created: i64,
    pub num_members: u64,
    pub is_archived: bool,
    pub purpose: Topic,
}

/// A channel's purpose or topic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub value: String,
}

/// A workspace member as returned by `users.info` and `users.list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub is_admin: bool,
    pub is_restricted: bool,
    pub is_ultra_restricted: bool,
    pub has_2fa: bool,
    pub profile: Profile,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub real_name: String,
    pub title: String,
    pub email: String,
}

/// Body of a successful `conversations.list` call.
#[derive(Debug, Deserialize)]
pub(crate) struct ChannelsResponse {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// Body of a successful `users.info` call.
#[derive(Debug, Deserialize)]
pub(crate) struct UserInfoResponse {
    pub user: User,
}

/// Body of a successful `users.list` call.
#[derive(Debug, Deserialize)]
pub(crate) struct UsersResponse {
    #[serde(default)]
    pub members: Vec<User>,
}
