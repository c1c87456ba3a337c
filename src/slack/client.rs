/// Blocking Slack Web API client.
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::errors::SlackError;
use super::types::{Channel, ChannelsResponse, User, UserInfoResponse, UsersResponse};

/// Production Web API root.
pub const DEFAULT_API_URL: &str = "https://slack.com/api/";

const REQUEST_TIMEOUT_SECONDS: u64 = 30;
const USER_AGENT: &str = concat!("slackinfo/", env!("CARGO_PKG_VERSION"));
/// Single page; the report does not paginate.
const CHANNEL_PAGE_LIMIT: &str = "1000";

/// The remote operations the reports need.
pub trait SlackApi {
    /// List public channels, archived ones included.
    ///
    /// # Errors
    ///
    /// Returns `SlackError` on transport, status, or API failure.
    fn list_channels(&self) -> Result<Vec<Channel>, SlackError>;

    /// Look up one member by id.
    ///
    /// # Errors
    ///
    /// Returns `SlackError` on transport, status, or API failure
    /// (e.g. `user_not_found`).
    fn user_info(&self, user_id: &str) -> Result<User, SlackError>;

    /// List all workspace members.
    ///
    /// # Errors
    ///
    /// Returns `SlackError` on transport, status, or API failure.
    fn list_users(&self) -> Result<Vec<User>, SlackError>;
}

/// Token-authenticated client for the Web API.
pub struct SlackClient {
    http: Client,
    base_url: String,
}

impl SlackClient {
    /// Build a client that sends `token` as a bearer credential to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::InvalidToken` if the token is not a valid header
    /// value, or `SlackError::Http` if the HTTP client cannot be built.
    pub fn new(token: &str, base_url: &str) -> Result<Self, SlackError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| SlackError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .user_agent(USER_AGENT)
            .build()?;

        let base_url = if base_url.ends_with('/') {
            base_url.to_owned()
        } else {
            format!("{base_url}/")
        };

        Ok(Self { http, base_url })
    }

    /// POST a form-encoded call to `endpoint` and decode the success body.
    fn call<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, SlackError> {
        debug!(endpoint, "slack api call");

        let response = self
            .http
            .post(format!("{}{endpoint}", self.base_url))
            .form(params)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SlackError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let value: Value = serde_json::from_str(&body).map_err(|e| SlackError::Decode {
            endpoint,
            message: e.to_string(),
        })?;

        let Some(obj) = value.as_object() else {
            return Err(SlackError::Decode {
                endpoint,
                message: "response is not a JSON object".to_owned(),
            });
        };

        if !obj.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            let error = obj
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown_error")
                .to_owned();
            return Err(SlackError::Api { endpoint, error });
        }

        serde_json::from_value(value).map_err(|e| SlackError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }
}

impl SlackApi for SlackClient {
    fn list_channels(&self) -> Result<Vec<Channel>, SlackError> {
        let resp: ChannelsResponse = self.call(
            "conversations.list",
            &[
                ("types", "public_channel"),
                ("exclude_archived", "false"),
                ("limit", CHANNEL_PAGE_LIMIT),
            ],
        )?;
        Ok(resp.channels)
    }

    fn user_info(&self, user_id: &str) -> Result<User, SlackError> {
        let resp: UserInfoResponse = self.call("users.info", &[("user", user_id)])?;
        Ok(resp.user)
    }

    fn list_users(&self) -> Result<Vec<User>, SlackError> {
        let resp: UsersResponse = self.call("users.list", &[])?;
        Ok(resp.members)
    }
}
