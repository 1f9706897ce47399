pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Describes any possible error returned from the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Query field cannot be empty")]
    EmptyQuery,

    #[error("HTTP request failed")]
    Request { source: reqwest::Error },

    #[error("Failed to read HTTP response")]
    ReadPayload { source: reqwest::Error },

    #[error("HTTP request has failed (HTTP status code: {status}):\n{body}")]
    BadResponseStatusCode {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Received an unexpected response JSON object")]
    UnexpectedResponseJsonShape { source: serde_json::Error },

    #[error("Failed to load the client configuration from the environment")]
    Config { source: envy::Error },
}
