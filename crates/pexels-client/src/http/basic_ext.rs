use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use easy_ext::ext;
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::warn;

#[ext(RequestBuilderBasicExt)]
#[async_trait]
pub(crate) impl RequestBuilder {
    /// Better version of [`RequestBuilder::send`] that returns an error
    /// if an error response status code is returned.
    async fn try_send(self) -> Result<Response> {
        let response = self
            .send()
            .await
            .map_err(|source| Error::Request { source })?;

        let status = response.status();

        // Redirect statuses pass through: anything in [200, 400) counts as
        // a usable response.
        if status >= StatusCode::OK && status < StatusCode::BAD_REQUEST {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_else(|err| {
            format!("Could not collect the error response body text: {err}")
        });

        warn!(%status, "Request failed (error status)");

        Err(Error::BadResponseStatusCode { status, body })
    }

    async fn read_bytes(self) -> Result<Bytes> {
        self.try_send()
            .await?
            .bytes()
            .await
            .map_err(|source| Error::ReadPayload { source })
    }
}
