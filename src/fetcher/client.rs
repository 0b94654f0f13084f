use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};
use async_trait::async_trait;
use bytes::BytesMut;
use reqwest::{
    Client, ClientBuilder,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::{debug, instrument};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = "PageAnalyzerBot/0.1 (+https://page-analyzer.example.com)";

/// Source of fetched pages. The check runner only sees this trait so tests
/// can hand it canned responses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError>;
}

#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher whose requests, connect included, give up after
    /// `timeout`.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = ClientBuilder::new()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    /// GET `url`. Error statuses (404, 500, ...) come back as a normal
    /// `PageResponse`; only transport failures are `Err`.
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let parsed_url = url::Url::parse(url)?;

        let mut response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();

        // Content-Length may be absent (chunked), so the cap is enforced
        // while streaming.
        let mut body = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(FetchError::from_reqwest_error)?
        {
            let size = (body.len() + chunk.len()) as u64;
            if size > MAX_BODY_SIZE {
                return Err(FetchError::BodyTooLarge(size));
            }
            body.extend_from_slice(&chunk);
        }
        let body_bytes = body.freeze();

        debug!(%status, size = body_bytes.len(), "page received");
        Ok(process_response(final_url, status, &headers, body_bytes))
    }
}
