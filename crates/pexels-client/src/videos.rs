use crate::client::{Client, APPLICATION_JSON};
use crate::error::{Error, Result};
use crate::http::prelude::*;
use crate::query::{non_empty, non_zero, QueryPairs};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

const DEFAULT_SEARCH_PER_PAGE: u32 = 5;
const DEFAULT_POPULAR_PER_PAGE: u32 = 2;

/// The account that uploaded a video.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub url: Url,
}

/// A single rendition of a video.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoFile {
    pub id: u64,
    pub quality: String,
    pub file_type: String,
    pub width: u64,
    pub height: u64,
    pub fps: f64,
    pub link: Url,
}

/// A preview still taken from a video.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: Url,
    pub nr: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: u64,
    pub width: u64,
    pub height: u64,

    /// Web page of the video.
    pub url: Url,

    /// Poster image shown before playback.
    pub image: Url,

    /// The API doesn't document a shape for this field, so it is kept as
    /// raw JSON.
    #[serde(default)]
    pub full_res: serde_json::Value,

    /// Same as [`Video::full_res`]: shape undocumented upstream.
    #[serde(default)]
    pub tags: Vec<serde_json::Value>,

    /// Duration in seconds.
    pub duration: u64,

    pub user: User,
    pub video_files: Vec<VideoFile>,
    pub video_pictures: Vec<VideoPicture>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchVideosParams {
    /// Search query. Required; the call is rejected when it is empty.
    pub query: String,
    pub orientation: String,
    pub size: String,
    pub locale: String,
    pub page: u32,
    pub per_page: u32,
}

impl SearchVideosParams {
    fn defaulted(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.per_page == 0 {
            self.per_page = DEFAULT_SEARCH_PER_PAGE;
        }
        self
    }

    fn query_pairs(&self) -> QueryPairs {
        [
            non_empty("query", &self.query),
            non_empty("orientation", &self.orientation),
            non_empty("size", &self.size),
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
pub struct PopularVideosParams {
    pub min_width: u32,
    pub min_height: u32,
    pub min_duration: u32,
    pub max_duration: u32,
    pub page: u32,
    pub per_page: u32,
}

impl PopularVideosParams {
    fn defaulted(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.per_page == 0 {
            self.per_page = DEFAULT_POPULAR_PER_PAGE;
        }
        self
    }

    fn query_pairs(&self) -> QueryPairs {
        [
            non_zero("min_width", self.min_width),
            non_zero("min_height", self.min_height),
            non_zero("min_duration", self.min_duration),
            non_zero("max_duration", self.max_duration),
            non_zero("page", self.page),
            non_zero("per_page", self.per_page),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// One page of video results. Unlike the photo envelope this one carries no
/// next/prev links, only an echo of the request URL.
#[derive(Debug, Clone, Deserialize)]
pub struct GetVideosResponse {
    pub page: u32,
    pub per_page: u32,
    pub total_results: u64,
    pub url: Option<Url>,
    pub videos: Vec<Video>,
}

// The video endpoints live under the bare `videos` prefix, outside the
// versioned part of the API. Two of the paths below start with a slash:
// combined with the trailing slash on the base URL this yields a
// double-slash path, which the server accepts.
impl Client {
    /// Searches videos matching `params.query`.
    pub async fn search_videos(&self, params: SearchVideosParams) -> Result<GetVideosResponse> {
        let params = params.defaulted();
        if params.query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let url = format!("{}/videos/search", self.config().base_url);

        // NOTE: search requests carry no Content-Type, unlike the rest of
        // the API surface.
        self.http_get(url)
            .query(&params.query_pairs())
            .read_json()
            .await
    }

    /// Lists the currently popular videos.
    pub async fn get_popular_videos(
        &self,
        params: PopularVideosParams,
    ) -> Result<GetVideosResponse> {
        let params = params.defaulted();

        let url = format!("{}videos/popular", self.config().base_url);

        self.http_get(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .query(&params.query_pairs())
            .read_json()
            .await
    }

    /// Fetches a single video by its numeric ID.
    pub async fn get_video(&self, id: &str) -> Result<Video> {
        let url = format!("{}/videos/videos/{id}", self.config().base_url);

        self.http_get(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .read_json()
            .await
    }
}
