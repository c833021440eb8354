//! News feed retrieval: locale-qualified RSS search URLs, bounded download,
//! and title extraction.

mod snippet;

pub use snippet::parse_titles;

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use tracing::{debug, info};

pub const DEFAULT_FEED_URL: &str = "https://news.google.com/rss/search";
const MAX_RESPONSE_BYTES: usize = 10_000_000;
/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum redirect hops before aborting.
const MAX_REDIRECTS: usize = 5;

/// Everything except unreserved characters and `/` is percent-encoded.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed request failed: status {0}")]
    Status(u16),

    #[error("feed too large (>{} bytes)", MAX_RESPONSE_BYTES)]
    TooLarge,

    #[error("malformed feed: {0}")]
    Parse(#[from] rss::Error),

    #[error("feed request timed out after {0}s")]
    Timeout(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub query: String,
    pub site: Option<String>,
    pub lang: String,
    pub region: String,
}

/// Source of headline snippets for a query.
/// Implemented by `GoogleNewsClient` for production; mock implementations used in tests.
pub trait FeedFetcher {
    async fn fetch(&self, request: &FeedRequest) -> Result<Vec<String>, FeedError>;
}

pub fn build_feed_url(base: &str, request: &FeedRequest) -> String {
    let query = match &request.site {
        Some(site) => format!("{} site:{site}", request.query),
        None => request.query.clone(),
    };
    let encoded = utf8_percent_encode(&query, QUERY_ENCODE_SET);
    let (lang, region) = (&request.lang, &request.region);
    format!("{base}?q={encoded}&hl={lang}&gl={region}&ceid={region}:{lang}")
}

#[derive(Clone)]
pub struct GoogleNewsClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl GoogleNewsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FeedError> {
        url::Url::parse(base_url)?;
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
            timeout,
        })
    }
}

impl FeedFetcher for GoogleNewsClient {
    async fn fetch(&self, request: &FeedRequest) -> Result<Vec<String>, FeedError> {
        let url = build_feed_url(&self.base_url, request);
        info!(query = %request.query, lang = %request.lang, region = %request.region, "fetching feed");

        let body = tokio::time::timeout(self.timeout, download(&self.http, &url))
            .await
            .unwrap_or_else(|_| Err(FeedError::Timeout(self.timeout.as_secs())))?;

        let titles = parse_titles(&body)?;
        debug!(bytes = body.len(), items = titles.len(), "feed fetched");
        Ok(titles)
    }
}

async fn download(client: &Client, url: &str) -> Result<Vec<u8>, FeedError> {
    let response = client
        .get(url)
        .header("User-Agent", crate::USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status.as_u16()));
    }

    if let Some(len) = response.content_length()
        && len as usize > MAX_RESPONSE_BYTES
    {
        return Err(FeedError::TooLarge);
    }

    let mut body = Vec::new();
    let mut stream = response;
    while let Some(chunk) = stream.chunk().await? {
        body.extend_from_slice(&chunk);
        if body.len() > MAX_RESPONSE_BYTES {
            return Err(FeedError::TooLarge);
        }
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str, site: Option<&str>) -> FeedRequest {
        FeedRequest {
            query: query.into(),
            site: site.map(Into::into),
            lang: "ko".into(),
            region: "KR".into(),
        }
    }

    #[test]
    fn url_carries_locale_parameters() {
        let url = build_feed_url(DEFAULT_FEED_URL, &request("rust", None));
        assert_eq!(
            url,
            "https://news.google.com/rss/search?q=rust&hl=ko&gl=KR&ceid=KR:ko"
        );
    }

    #[test]
    fn query_is_percent_encoded() {
        let url = build_feed_url("https://x.test/rss", &request("(a OR b) -c", None));
        assert!(url.contains("q=%28a%20OR%20b%29%20-c&"), "got: {url}");
    }

    #[test]
    fn non_ascii_query_is_utf8_encoded() {
        let url = build_feed_url("https://x.test/rss", &request("트럼프", None));
        assert!(url.contains("q=%ED%8A%B8%EB%9F%BC%ED%94%84&"), "got: {url}");
    }

    #[test]
    fn site_is_appended_before_encoding() {
        let url = build_feed_url("https://x.test/rss", &request("rust", Some("example.com")));
        assert!(url.contains("q=rust%20site%3Aexample.com&"), "got: {url}");
    }

    #[test]
    fn chinese_locale_ceid() {
        let req = FeedRequest {
            query: "经济".into(),
            site: None,
            lang: "zh-CN".into(),
            region: "CN".into(),
        };
        let url = build_feed_url(DEFAULT_FEED_URL, &req);
        assert!(url.ends_with("&hl=zh-CN&gl=CN&ceid=CN:zh-CN"), "got: {url}");
    }

    #[test]
    fn client_rejects_invalid_base_url() {
        let result = GoogleNewsClient::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(FeedError::InvalidUrl(_))));
    }
}

#[cfg(test)]
mod download_tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
  <title>news</title><link>https://news.test</link><description>d</description>
  <item><title>Cats are said to be cute - NewsCo</title></item>
  <item><title>Dogs win award - Daily</title></item>
</channel></rss>"#;

    fn request() -> FeedRequest {
        FeedRequest {
            query: "cats".into(),
            site: None,
            lang: "en".into(),
            region: "US".into(),
        }
    }

    #[tokio::test]
    async fn fetch_returns_normalized_titles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rss/search"))
            .and(query_param("q", "cats"))
            .and(query_param("ceid", "US:en"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
            .mount(&server)
            .await;

        let client =
            GoogleNewsClient::new(&format!("{}/rss/search", server.uri()), Duration::from_secs(5))
                .unwrap();
        let titles = client.fetch(&request()).await.unwrap();

        assert_eq!(titles, vec!["Cats are said to be cute ", "Dogs win award "]);
    }

    #[tokio::test]
    async fn fetch_404_returns_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client =
            GoogleNewsClient::new(&format!("{}/rss", server.uri()), Duration::from_secs(5)).unwrap();
        let result = client.fetch(&request()).await;
        assert!(matches!(result, Err(FeedError::Status(404))));
    }

    #[tokio::test]
    async fn fetch_malformed_body_returns_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not a feed</html>"))
            .mount(&server)
            .await;

        let client =
            GoogleNewsClient::new(&format!("{}/rss", server.uri()), Duration::from_secs(5)).unwrap();
        let result = client.fetch(&request()).await;
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }

    #[tokio::test]
    async fn fetch_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(FEED)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client =
            GoogleNewsClient::new(&format!("{}/rss", server.uri()), Duration::from_secs(1)).unwrap();
        let result = client.fetch(&request()).await;
        assert!(
            matches!(result, Err(FeedError::Timeout(1)) | Err(FeedError::Http(_))),
            "got: {result:?}"
        );
    }

    #[tokio::test]
    async fn download_too_large_body_rejected() {
        let oversized = "x".repeat(MAX_RESPONSE_BYTES + 1);
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/huge"))
            .respond_with(ResponseTemplate::new(200).set_body_string(oversized))
            .mount(&server)
            .await;

        let client = Client::new();
        let result = download(&client, &format!("{}/huge", server.uri())).await;
        assert!(matches!(result, Err(FeedError::TooLarge)));
    }
}
