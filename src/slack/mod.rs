/// Slack Web API layer: blocking HTTP client, wire types, typed errors.
pub mod client;
pub mod errors;
pub mod types;

pub use client::{DEFAULT_API_URL, SlackApi, SlackClient};
pub use errors::SlackError;
pub use types::{Channel, User};
