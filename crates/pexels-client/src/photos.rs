use crate::client::{Client, APPLICATION_JSON};
use crate::error::{Error, Result};
use crate::http::prelude::*;
use crate::query::{non_empty, non_zero, QueryPairs};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

const DEFAULT_PER_PAGE: u32 = 5;

/// A single photo as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub width: u64,
    pub height: u64,

    /// Web page of the photo.
    pub url: Url,

    pub photographer: String,
    pub photographer_url: Url,
    pub photographer_id: u64,

    /// Average color of the photo in hex notation, e.g. `#374824`.
    pub avg_color: String,

    pub src: PhotoSrc,
    pub liked: bool,
    pub alt: Option<String>,
}

/// Download URLs for every size variant of a photo.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSrc {
    pub original: Url,
    pub large2x: Url,
    pub large: Url,
    pub medium: Url,
    pub small: Url,
    pub portrait: Url,
    pub landscape: Url,
    pub tiny: Url,
}

#[derive(Debug, Clone, Default)]
pub struct SearchPhotosParams {
    /// Search query. Required; the call is rejected when it is empty.
    pub query: String,
    pub orientation: String,
    pub size: String,
    pub color: String,
    pub locale: String,
    /// Page number; `0` means the first page.
    pub page: u32,
    /// Results per page; `0` means the endpoint default.
    pub per_page: u32,
}

impl SearchPhotosParams {
    fn defaulted(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.per_page == 0 {
            self.per_page = DEFAULT_PER_PAGE;
        }
        self
    }

    fn query_pairs(&self) -> QueryPairs {
        [
            non_empty("query", &self.query),
            non_empty("orientation", &self.orientation),
            non_empty("size", &self.size),
            non_empty("color", &self.color),
            non_empty("locale", &self.locale),
            non_zero("page", self.page),
            non_zero("per_page", self.per_page),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CuratedPhotosParams {
    pub page: u32,
    pub per_page: u32,
}

impl CuratedPhotosParams {
    fn defaulted(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.per_page == 0 {
            self.per_page = DEFAULT_PER_PAGE;
        }
        self
    }

    fn query_pairs(&self) -> QueryPairs {
        [non_zero("page", self.page), non_zero("per_page", self.per_page)]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// One page of photo results.
#[derive(Debug, Clone, Deserialize)]
pub struct GetPhotosResponse {
    pub total_results: u64,
    pub page: u32,
    pub per_page: u32,
    pub photos: Vec<Photo>,
    pub next_page: Option<Url>,
    pub prev_page: Option<Url>,
}

impl Client {
    /// Searches photos matching `params.query`.
    pub async fn search_photos(&self, params: SearchPhotosParams) -> Result<GetPhotosResponse> {
        let params = params.defaulted();
        if params.query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let cfg = self.config();
        let url = format!("{}{}/search", cfg.base_url, cfg.version);

        // NOTE: search requests carry no Content-Type, unlike the rest of
        // the API surface.
        self.http_get(url)
            .query(&params.query_pairs())
            .read_json()
            .await
    }

    /// Lists photos from the curated feed.
    pub async fn get_curated_photos(
        &self,
        params: CuratedPhotosParams,
    ) -> Result<GetPhotosResponse> {
        let params = params.defaulted();

        let cfg = self.config();
        let url = format!("{}{}/curated", cfg.base_url, cfg.version);

        self.http_get(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .query(&params.query_pairs())
            .read_json()
            .await
    }

    /// Fetches a single photo by its numeric ID.
    pub async fn get_photo(&self, id: &str) -> Result<Photo> {
        let cfg = self.config();
        let url = format!("{}{}/photos/{id}", cfg.base_url, cfg.version);

        self.http_get(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .read_json()
            .await
    }
}
