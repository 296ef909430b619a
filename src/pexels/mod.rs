use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use bytes::Bytes;
use rand::Rng;
use reqwest::{
    Client as HttpClient, Request, RequestBuilder, Response,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

pub mod error;
pub mod models;
pub mod result;

pub use error::Error;
pub use models::{
    CuratedResult, Photo, PhotoSize, PhotoSource, PopularVideo, SearchResult, Video, VideoFile,
    VideoPicture, VideoSearchResult, VideoUser,
};
pub use result::Result;

pub const PHOTO_API: &str = "https://api.pexels.com/v1";
pub const VIDEO_API: &str = "https://api.pexels.com/videos";

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

const MAX_RANDOM_PAGE: u32 = 1000;

macro_rules! pexels_api {
    ($base:expr, $end_point:expr $(, $arg:expr)* $(,)?) => {
        format!(concat!("{}", $end_point), $base $(, $arg)*)
    };
}

macro_rules! query_params {
    ($($key:expr => $value:expr),+ $(,)?) => {
        &[
            $(($key, $value.to_string())),+
        ]
    };
}

/// Client for the Pexels photo and video APIs.
///
/// Clones share the HTTP connection pool and the remaining-requests counter.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    token: Arc<str>,
    photo_api: Arc<str>,
    video_api: Arc<str>,
    remaining: Arc<AtomicU32>,
}

impl Client {
    /// The token is not checked here. A rejected token shows up as
    /// [`Error::Status`] on the first request.
    pub fn new<T: AsRef<str>>(token: T) -> Self {
        Self::with_base_urls(token, PHOTO_API, VIDEO_API)
    }

    pub fn with_base_urls<T, P, V>(token: T, photo_api: P, video_api: V) -> Self
    where
        T: AsRef<str>,
        P: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            http: HttpClient::new(),
            token: token.as_ref().into(),
            photo_api: photo_api.as_ref().trim_end_matches('/').into(),
            video_api: video_api.as_ref().trim_end_matches('/').into(),
            remaining: Arc::new(AtomicU32::new(0)),
        }
    }

    pub async fn search_photos<T: AsRef<str>>(
        &self,
        query: T,
        per_page: u32,
        page: u32,
    ) -> Result<SearchResult> {
        let request = self
            .http
            .get(pexels_api!(self.photo_api, "/search"))
            .query(query_params!(
                "query" => query.as_ref(),
                "per_page" => per_page,
                "page" => page,
            ));

        self.fetch(request).await
    }

    pub async fn curated_photos(&self, per_page: u32, page: u32) -> Result<CuratedResult> {
        let request = self
            .http
            .get(pexels_api!(self.photo_api, "/curated"))
            .query(query_params!(
                "per_page" => per_page,
                "page" => page,
            ));

        self.fetch(request).await
    }

    pub async fn get_photo(&self, id: u64) -> Result<Photo> {
        let request = self.http.get(pexels_api!(self.photo_api, "/photos/{}", id));

        self.fetch(request).await
    }

    /// Picks a random page of the curated listing with one photo per page.
    ///
    /// Returns `Ok(None)` when the page does not hold exactly one photo.
    pub async fn get_random_photo(&self) -> Result<Option<Photo>> {
        let mut result = self.curated_photos(1, random_page()).await?;

        if result.photos.len() != 1 {
            debug!(count = result.photos.len(), "Random curated page did not hold one photo");
            return Ok(None);
        }

        Ok(result.photos.pop())
    }

    pub async fn search_video<T: AsRef<str>>(
        &self,
        query: T,
        per_page: u32,
        page: u32,
    ) -> Result<VideoSearchResult> {
        let request = self
            .http
            .get(pexels_api!(self.video_api, "/search"))
            .query(query_params!(
                "query" => query.as_ref(),
                "per_page" => per_page,
                "page" => page,
            ));

        self.fetch(request).await
    }

    pub async fn popular_video(&self, per_page: u32, page: u32) -> Result<PopularVideo> {
        let request = self
            .http
            .get(pexels_api!(self.video_api, "/popular"))
            .query(query_params!(
                "per_page" => per_page,
                "page" => page,
            ));

        self.fetch(request).await
    }

    pub async fn get_video(&self, id: u64) -> Result<Video> {
        let request = self.http.get(pexels_api!(self.video_api, "/videos/{}", id));

        self.fetch(request).await
    }

    pub async fn get_random_video(&self) -> Result<Option<Video>> {
        let mut result = self.popular_video(1, random_page()).await?;

        if result.videos.len() != 1 {
            debug!(count = result.videos.len(), "Random popular page did not hold one video");
            return Ok(None);
        }

        Ok(result.videos.pop())
    }

    /// Zero until a response carrying the rate limit header has been seen.
    pub fn remaining_requests(&self) -> u32 {
        self.remaining.load(Ordering::Relaxed)
    }

    /// Media hosts do not need the token, so none is sent.
    pub async fn download<T: AsRef<str>>(&self, url: T) -> Result<Bytes> {
        let request = self.http.get(url.as_ref()).build().map_err(Error::Build)?;

        let response = Self::check_status(self.execute(request).await?)?;
        let data = response.bytes().await.map_err(Error::Request)?;

        trace!(bytes = data.len(), "Downloaded media");

        Ok(data)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send_request(request).await?;
        let body = response.bytes().await.map_err(Error::Request)?;

        trace!(bytes = body.len(), "Received response body");

        let result = serde_json::from_slice(&body)?;

        Ok(result)
    }

    async fn send_request(&self, request: RequestBuilder) -> Result<Response> {
        let mut auth = HeaderValue::from_str(&self.token).map_err(|_| Error::InvalidToken)?;
        auth.set_sensitive(true);

        let request = request
            .header(AUTHORIZATION, auth)
            .build()
            .map_err(Error::Build)?;

        let response = self.execute(request).await?;
        self.track_rate_limit(response.headers());

        Self::check_status(response)
    }

    async fn execute(&self, request: Request) -> Result<Response> {
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        self.http.execute(request).await.map_err(Error::Request)
    }

    fn check_status(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        Ok(response)
    }

    fn track_rate_limit(&self, headers: &HeaderMap) {
        let Some(value) = headers.get(RATE_LIMIT_REMAINING) else {
            return;
        };

        // A negative count is not a valid quota and is ignored like any other garbage.
        match value.to_str().ok().and_then(|v| v.trim().parse::<u32>().ok()) {
            Some(remaining) => {
                self.remaining.store(remaining, Ordering::Relaxed);
                debug!(remaining, "Updated remaining requests");
            }

            None => warn!(?value, "Ignoring non-numeric rate limit header"),
        }
    }
}

fn random_page() -> u32 {
    rand::rng().random_range(0..=MAX_RANDOM_PAGE)
}
