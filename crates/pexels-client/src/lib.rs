//! Typed async client for the [Pexels] HTTP API: photo search, video search
//! and curated collections.
//!
//! Every method on [`Client`] performs exactly one `GET` round trip against
//! the remote API and decodes the JSON body into the matching response
//! record. There is no caching, no retrying and no shared mutable state, so
//! a single [`Client`] can be cloned and used from any number of tasks.
//!
//! ```no_run
//! # async fn run() -> pexels_client::Result<()> {
//! use pexels_client::{Client, SearchPhotosParams};
//!
//! // Reads PEXELS_API_KEY (and optional overrides) from the environment.
//! let client = Client::from_env()?;
//!
//! let page = client
//!     .search_photos(SearchPhotosParams {
//!         query: "nature".to_owned(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for photo in &page.photos {
//!     println!("{} by {}", photo.src.original, photo.photographer);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [Pexels]: https://www.pexels.com/api/documentation/

mod client;
mod collections;
mod config;
mod error;
mod http;
mod photos;
mod query;
mod videos;

pub use client::Client;
pub use collections::*;
pub use config::Config;
pub use error::{Error, Result};
pub use photos::*;
pub use videos::*;
