use crate::client::{Client, APPLICATION_JSON};
use crate::error::Result;
use crate::http::prelude::*;
use crate::photos::Photo;
use crate::query::{non_empty, non_zero, QueryPairs};
use crate::videos::Video;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

const DEFAULT_PER_PAGE: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    /// Collections are keyed by an opaque string, not a numeric ID.
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub private: bool,
    pub media_count: u64,
    pub photos_count: u64,
    pub videos_count: u64,
}

/// A single entry of a collection, discriminated by the `type` field of the
/// wire format.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum CollectionMedia {
    Photo(Photo),
    Video(Video),
}

#[derive(Debug, Clone, Default)]
pub struct CollectionsParams {
    pub page: u32,
    pub per_page: u32,
}

impl CollectionsParams {
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

#[derive(Debug, Clone, Default)]
pub struct CollectionMediaParams {
    /// Restricts results to `photos` or `videos`; empty returns both.
    pub media_type: String,
    pub sort: String,
    pub page: u32,
    pub per_page: u32,
}

impl CollectionMediaParams {
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
            non_empty("type", &self.media_type),
            non_empty("sort", &self.sort),
            non_zero("page", self.page),
            non_zero("per_page", self.per_page),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// One page of collection listings.
#[derive(Debug, Clone, Deserialize)]
pub struct GetCollectionsResponse {
    pub collections: Vec<Collection>,
    pub page: u32,
    pub per_page: u32,
    pub total_results: u64,
    pub next_page: Option<Url>,
    pub prev_page: Option<Url>,
}

/// One page of the media inside a single collection.
#[derive(Debug, Clone, Deserialize)]
pub struct GetCollectionMediaResponse {
    pub id: String,
    pub media: Vec<CollectionMedia>,
    pub page: u32,
    pub per_page: u32,
    pub total_results: u64,
    pub next_page: Option<Url>,
    pub prev_page: Option<Url>,
}

impl Client {
    /// Lists the collections featured on the site.
    pub async fn get_featured_collections(
        &self,
        params: CollectionsParams,
    ) -> Result<GetCollectionsResponse> {
        self.get_collections(params, false).await
    }

    /// Lists the collections belonging to the authenticated account.
    pub async fn get_user_collections(
        &self,
        params: CollectionsParams,
    ) -> Result<GetCollectionsResponse> {
        self.get_collections(params, true).await
    }

    async fn get_collections(
        &self,
        params: CollectionsParams,
        own: bool,
    ) -> Result<GetCollectionsResponse> {
        let params = params.defaulted();

        let cfg = self.config();
        let url = if own {
            format!("{}{}/collections", cfg.base_url, cfg.version)
        } else {
            format!("{}{}/collections/featured", cfg.base_url, cfg.version)
        };

        self.http_get(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .query(&params.query_pairs())
            .read_json()
            .await
    }

    /// Pages through the media of one collection.
    pub async fn get_collection_media(
        &self,
        params: CollectionMediaParams,
        id: &str,
    ) -> Result<GetCollectionMediaResponse> {
        let params = params.defaulted();

        let cfg = self.config();
        let url = format!("{}{}/collections/{id}", cfg.base_url, cfg.version);

        self.http_get(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .query(&params.query_pairs())
            .read_json()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use assert_matches::assert_matches;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const COLLECTIONS_BODY: &str = r#"{
        "collections": [
            {
                "id": "9mp14cx",
                "title": "Cool Cats",
                "description": null,
                "private": false,
                "media_count": 11,
                "photos_count": 9,
                "videos_count": 2
            }
        ],
        "page": 1,
        "per_page": 5,
        "total_results": 1
    }"#;

    const COLLECTION_MEDIA_BODY: &str = r##"{
        "id": "9mp14cx",
        "media": [
            {
                "type": "Photo",
                "id": 3573351,
                "width": 3066,
                "height": 3968,
                "url": "https://www.pexels.com/photo/trees-during-day-3573351/",
                "photographer": "Lukas Rodriguez",
                "photographer_url": "https://www.pexels.com/@lukas-rodriguez-1845331",
                "photographer_id": 1845331,
                "avg_color": "#374824",
                "src": {
                    "original": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png",
                    "large2x": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png?h=650&w=940",
                    "large": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png?h=650",
                    "medium": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png?h=350",
                    "small": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png?h=130",
                    "portrait": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png?h=1200&w=800",
                    "landscape": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png?h=627&w=1200",
                    "tiny": "https://images.pexels.com/photos/3573351/pexels-photo-3573351.png?h=200&w=280"
                },
                "liked": false,
                "alt": "Brown rocks during golden hour"
            },
            {
                "type": "Video",
                "id": 2499611,
                "width": 1080,
                "height": 1920,
                "url": "https://www.pexels.com/video/2499611/",
                "image": "https://images.pexels.com/videos/2499611/free-video-2499611.jpg",
                "full_res": null,
                "tags": [],
                "duration": 22,
                "user": {
                    "id": 680589,
                    "name": "Joey Farina",
                    "url": "https://www.pexels.com/@joey"
                },
                "video_files": [
                    {
                        "id": 125004,
                        "quality": "hd",
                        "file_type": "video/mp4",
                        "width": 1080,
                        "height": 1920,
                        "fps": 23.98,
                        "link": "https://player.vimeo.com/external/342571552.hd.mp4?s=70d"
                    }
                ],
                "video_pictures": [
                    {
                        "id": 308178,
                        "picture": "https://static-videos.pexels.com/videos/2499611/pictures/preview-0.jpg",
                        "nr": 0
                    }
                ]
            }
        ],
        "page": 1,
        "per_page": 5,
        "total_results": 2
    }"##;

    fn test_client(server: &MockServer) -> Client {
        Client::new(Config {
            api_key: "test-api-key".to_owned(),
            base_url: format!("{}/", server.uri()),
            version: "v1".to_owned(),
        })
    }

    #[test_log::test(tokio::test)]
    async fn listing_routes_on_the_own_flag() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/collections/featured"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(COLLECTIONS_BODY, APPLICATION_JSON),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/collections"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(COLLECTIONS_BODY, APPLICATION_JSON),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);

        let featured = client
            .get_featured_collections(CollectionsParams::default())
            .await
            .unwrap();
        client
            .get_user_collections(CollectionsParams::default())
            .await
            .unwrap();

        let collection = &featured.collections[0];
        assert_eq!(collection.id, "9mp14cx");
        assert_eq!(collection.description, None);
        assert_eq!(collection.media_count, 11);
    }

    #[test_log::test(tokio::test)]
    async fn media_decodes_both_kinds() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/collections/9mp14cx"))
            .and(query_param("type", "photos"))
            .and(query_param("sort", "asc"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(COLLECTION_MEDIA_BODY, APPLICATION_JSON),
            )
            .expect(1)
            .mount(&server)
            .await;

        let page = test_client(&server)
            .get_collection_media(
                CollectionMediaParams {
                    media_type: "photos".to_owned(),
                    sort: "asc".to_owned(),
                    ..Default::default()
                },
                "9mp14cx",
            )
            .await
            .unwrap();

        assert_eq!(page.id, "9mp14cx");
        assert_eq!(page.total_results, 2);

        assert_matches!(&page.media[0], CollectionMedia::Photo(photo) => {
            assert_eq!(photo.id, 3573351);
        });
        assert_matches!(&page.media[1], CollectionMedia::Video(video) => {
            assert_eq!(video.duration, 22);
        });
    }
}
