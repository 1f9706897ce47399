mod basic_ext;
mod json_ext;

use std::time::Duration;

pub(crate) mod prelude {
    pub(crate) use super::basic_ext::RequestBuilderBasicExt;
    pub(crate) use super::json_ext::RequestBuilderJsonExt;
}

pub(crate) type Client = reqwest::Client;

/// Upper bound on a single request round trip. There is no retrying on top
/// of this, so a call fails at most once.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2 * 60);

pub(crate) fn create_client() -> Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|err| panic!("BUG: couldn't build the HTTP client: {err}"))
}
