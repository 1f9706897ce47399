use super::basic_ext::RequestBuilderBasicExt;
use crate::error::{Error, Result};
use async_trait::async_trait;
use easy_ext::ext;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::warn;

#[ext(RequestBuilderJsonExt)]
#[async_trait]
pub(crate) impl RequestBuilder {
    async fn read_json<Res: DeserializeOwned>(self) -> Result<Res> {
        let bytes = self.read_bytes().await?;

        serde_json::from_slice(&bytes).map_err(|source| {
            match std::str::from_utf8(&bytes) {
                Ok(response_body) => warn!(%response_body, "Bad JSON response"),
                Err(utf8_decode_err) => warn!(
                    response_body = ?bytes,
                    ?utf8_decode_err,
                    "Bad JSON response"
                ),
            };
            Error::UnexpectedResponseJsonShape { source }
        })
    }
}
