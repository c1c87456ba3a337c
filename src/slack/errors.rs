/// Errors from the Slack Web API layer.
use thiserror::Error;

/// Typed errors from a single Web API call.
#[derive(Debug, Error)]
pub enum SlackError {
    /// The token contains characters that cannot go into an HTTP header.
    #[error("API token is not a valid header value")]
    InvalidToken,

    /// Transport failure: connect, timeout, TLS, body read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{endpoint}: request failed with status {status}")]
    Status {
        /// Web API method, e.g. `users.info`.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The server answered `"ok": false`.
    #[error("{endpoint}: {error}")]
    Api {
        /// Web API method.
        endpoint: &'static str,
        /// The API's error string, e.g. `user_not_found`.
        error: String,
    },

    /// The body was not JSON, not an object, or did not match the expected shape.
    #[error("{endpoint}: malformed response: {message}")]
    Decode {
        /// Web API method.
        endpoint: &'static str,
        /// Decoder message.
        message: String,
    },
}
