use crate::error::{Error, Result};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.pexels.com/";
const DEFAULT_VERSION: &str = "v1";

/// Static configuration of a [`crate::Client`]. It is fixed at construction
/// time and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The API key sent verbatim in the `Authorization` header.
    pub api_key: String,

    /// Root of the remote API. The trailing slash is significant: endpoint
    /// paths are appended to this string literally.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Version segment used by the versioned endpoints, e.g. `v1`.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Config {
    /// Configuration pointing at the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            version: default_version(),
        }
    }

    /// Reads `PEXELS_API_KEY`, and optionally `PEXELS_BASE_URL` and
    /// `PEXELS_VERSION`, from the environment.
    pub fn from_env() -> Result<Self> {
        envy::prefixed("PEXELS_")
            .from_env()
            .map_err(|source| Error::Config { source })
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_owned()
}
