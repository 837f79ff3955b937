//! subrobot - HTTP helpers and crawler contract for the subtitles robot
//!
//! A thin layer over [`reqwest`] that gives every request the same treatment:
//!
//! - **Shared cookie jar** populated from responses and replayed on requests
//! - **Fixed User-Agent** with a desktop browser default
//! - **Per-request deadline** covering both the send and the body read
//! - **Optional proxy** (`http`, `https` or `socks5`)
//! - **One status policy**: only `200 OK` is a success
//!
//! Building a request never fails directly. Errors travel with the
//! [`Request`] and [`Response`] values and surface when the body is consumed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use serde::Deserialize;
//! use subrobot::Client;
//!
//! #[derive(Deserialize)]
//! struct Search {
//!     total: u32,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(None)?;
//!     let search: Search = client
//!         .post_form("https://example.com/search", [("q", "alien")])
//!         .invoke()
//!         .await
//!         .json()
//!         .await?;
//!     println!("{} results", search.total);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod cookies;
pub mod crawler;
pub mod error;
pub mod proxy;
pub mod request;
pub mod response;
pub mod timeout;
pub mod video;

// Re-export main types for convenience
pub use client::{Client, ClientBuilder, Options, DEFAULT_USER_AGENT};
pub use cookies::CookieJar;
pub use crawler::Crawler;
pub use error::{Error, Result};
pub use proxy::{ProxyConfig, ProxyType};
pub use request::Request;
pub use response::Response;
pub use timeout::DEFAULT_TIMEOUT;
pub use video::{Video, VideoKind};

// Re-export common HTTP types
pub use http::{HeaderMap, Method, StatusCode};

// Re-export URL types
pub use url::Url;

// Re-export for implementing `Crawler`
pub use async_trait::async_trait;
