use crate::config::Config;
use crate::error::Result;
use crate::http;
use reqwest::header;

pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Entry point to the API. Cheap to clone; safe to share across tasks since
/// the configuration is never mutated after construction.
#[derive(Clone)]
pub struct Client {
    cfg: Config,
    http: http::Client,
}

impl Client {
    pub fn new(cfg: Config) -> Self {
        Self::with_http(cfg, http::create_client())
    }

    /// Same as [`Client::new`], but with a caller-supplied HTTP client.
    pub fn with_http(cfg: Config, http: reqwest::Client) -> Self {
        Self { cfg, http }
    }

    /// Builds a client from `PEXELS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::from_env()?))
    }

    pub(crate) fn config(&self) -> &Config {
        &self.cfg
    }

    /// GET request carrying the headers every endpoint sends. The API takes
    /// the bare key in the `Authorization` header, with no `Bearer` prefix.
    pub(crate) fn http_get(&self, url: String) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(header::ACCEPT, APPLICATION_JSON)
            .header(header::AUTHORIZATION, self.cfg.api_key.as_str())
    }
}
