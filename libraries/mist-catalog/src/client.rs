//! HTTP catalog client
//!
//! Talks to two upstream services: a rankings service exposing four
//! curated list endpoints, and a search service that doubles as the song
//! detail endpoint (same route, `n` picks which match to expand). Both
//! report failures through a `code` field in the body rather than the
//! HTTP status.

use async_trait::async_trait;
use mist_core::types::{Rankings, RawSongRef, Track};
use mist_core::{CatalogService, MistError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::error::{CatalogError, Result};
use crate::wire::{RankingEnvelope, RankingItem, SearchEnvelope, SearchItem, SongDetail};

/// Upstream service endpoints
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the rankings service
    pub rankings_url: String,

    /// Base URL of the search/detail service
    pub search_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            rankings_url: "https://mistpe-msc.hf.space".to_string(),
            search_url: "https://api.lolimi.cn/API/wydg".to_string(),
        }
    }
}

/// HTTP implementation of [`CatalogService`]
///
/// # Example
///
/// ```no_run
/// use mist_catalog::{CatalogClient, CatalogConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CatalogClient::new(CatalogConfig::default())?;
/// let rankings = client.rankings().await?;
/// println!("{} hot songs", rankings.hot.len());
/// # Ok(())
/// # }
/// ```
pub struct CatalogClient {
    http: Client,
    rankings_url: String,
    search_url: String,
}

impl CatalogClient {
    /// Create a client for the given endpoints
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let rankings_url = normalize_url(&config.rankings_url)?;
        let search_url = normalize_url(&config.search_url)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("MistPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            rankings_url,
            search_url,
        })
    }

    /// Fetch all four ranking lists concurrently
    pub async fn rankings(&self) -> Result<Rankings> {
        let (soaring, hot, new_songs, popular) = tokio::try_join!(
            self.ranking_list("fetch_music_soaring"),
            self.ranking_list("fetch_music_hot"),
            self.ranking_list("fetch_music_newSongs"),
            self.ranking_list("fetch_music_popular"),
        )?;

        info!(
            soaring = soaring.len(),
            hot = hot.len(),
            new_songs = new_songs.len(),
            popular = popular.len(),
            "rankings fetched"
        );

        Ok(Rankings {
            soaring,
            hot,
            new_songs,
            popular,
        })
    }

    /// Search the catalog
    pub async fn search_songs(&self, query: &str) -> Result<Vec<RawSongRef>> {
        let url = format!("{}/", self.search_url);
        debug!(url = %url, query = %query, "searching catalog");

        let response = self
            .http
            .get(&url)
            .query(&[("msg", query)])
            .send()
            .await
            .map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(http_failure(status, response).await);
        }

        let envelope: SearchEnvelope = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("search response: {e}")))?;

        if envelope.code != 200 {
            return Err(CatalogError::Api {
                code: envelope.code,
                message: envelope.msg.unwrap_or_else(|| "search failed".to_string()),
            });
        }

        Ok(envelope.data.into_iter().map(SearchItem::into_ref).collect())
    }

    /// Expand the `n`-th match for `query` into a playable track
    pub async fn song_detail(&self, query: &str, n: u32) -> Result<Track> {
        let url = format!("{}/", self.search_url);
        debug!(url = %url, query = %query, n, "resolving song detail");

        let response = self
            .http
            .get(&url)
            .query(&[("msg", query.to_string()), ("n", n.to_string())])
            .send()
            .await
            .map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(http_failure(status, response).await);
        }

        let detail: SongDetail = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("song detail: {e}")))?;

        if detail.code != 200 {
            return Err(CatalogError::Api {
                code: detail.code,
                message: detail
                    .msg
                    .unwrap_or_else(|| "failed to get song details".to_string()),
            });
        }

        detail.into_track()
    }

    async fn ranking_list(&self, path: &str) -> Result<Vec<RawSongRef>> {
        let url = format!("{}/{path}", self.rankings_url);
        debug!(url = %url, "fetching ranking list");

        let response = self.http.get(&url).send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(http_failure(status, response).await);
        }

        let envelope: RankingEnvelope = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("ranking list {path}: {e}")))?;

        Ok(envelope.data.into_iter().map(RankingItem::into_ref).collect())
    }
}

#[async_trait]
impl CatalogService for CatalogClient {
    async fn fetch_rankings(&self) -> mist_core::Result<Rankings> {
        self.rankings().await.map_err(MistError::from)
    }

    async fn search(&self, query: &str) -> mist_core::Result<Vec<RawSongRef>> {
        self.search_songs(query).await.map_err(MistError::from)
    }

    async fn resolve(&self, query: &str, n: u32) -> mist_core::Result<Track> {
        self.song_detail(query, n).await.map_err(MistError::from)
    }
}

/// Validate a base URL and strip any trailing slash
fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim_end_matches('/');
    let parsed =
        Url::parse(trimmed).map_err(|e| CatalogError::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CatalogError::InvalidUrl(format!(
            "{raw}: scheme must be http or https"
        )));
    }
    Ok(trimmed.to_string())
}

/// Separate "could not reach the catalog" from other request failures
fn classify(e: reqwest::Error) -> CatalogError {
    if e.is_connect() || e.is_timeout() {
        CatalogError::Unreachable(e.to_string())
    } else {
        CatalogError::Request(e)
    }
}

async fn http_failure(status: reqwest::StatusCode, response: reqwest::Response) -> CatalogError {
    let message = response.text().await.unwrap_or_default();
    CatalogError::Api {
        code: i64::from(status.as_u16()),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CatalogClient {
        CatalogClient::new(CatalogConfig {
            rankings_url: server.uri(),
            search_url: format!("{}/API/wydg", server.uri()),
        })
        .unwrap()
    }

    fn ranking_body(prefix: &str) -> serde_json::Value {
        serde_json::json!({
            "data": [
                {"id": 1, "song": format!("{prefix} one"), "singer": "A", "cover": "c1.jpg"},
                {"id": 2, "song": format!("{prefix} two"), "singer": "B", "cover": "c2.jpg"},
            ]
        })
    }

    #[tokio::test]
    async fn fetches_all_four_ranking_lists() {
        let server = MockServer::start().await;
        for (endpoint, prefix) in [
            ("fetch_music_soaring", "soaring"),
            ("fetch_music_hot", "hot"),
            ("fetch_music_newSongs", "new"),
            ("fetch_music_popular", "popular"),
        ] {
            Mock::given(method("GET"))
                .and(path(format!("/{endpoint}")))
                .respond_with(ResponseTemplate::new(200).set_body_json(ranking_body(prefix)))
                .mount(&server)
                .await;
        }

        let rankings = client_for(&server).rankings().await.unwrap();
        assert_eq!(rankings.soaring.len(), 2);
        assert_eq!(rankings.hot[0].title, "hot one");
        assert_eq!(rankings.new_songs[1].artist, "B");
        assert_eq!(rankings.popular[0].id.as_str(), "1");
    }

    #[tokio::test]
    async fn any_failed_ranking_endpoint_fails_the_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fetch_music_soaring"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ranking_body("soaring")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(client_for(&server).rankings().await.is_err());
    }

    #[tokio::test]
    async fn search_returns_display_refs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/API/wydg/"))
            .and(query_param("msg", "echoes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "data": [
                    {"id": "10", "name": "Echoes", "singer": "Canyon", "img": "i.jpg"},
                ]
            })))
            .mount(&server)
            .await;

        let results = client_for(&server).search_songs("echoes").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Echoes");
        assert_eq!(results[0].cover_url, "i.jpg");
    }

    #[tokio::test]
    async fn envelope_error_code_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 403,
                "msg": "rate limited"
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).search_songs("echoes").await;
        match result {
            Err(CatalogError::Api { code, message }) => {
                assert_eq!(code, 403);
                assert_eq!(message, "rate limited");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn detail_resolves_to_playable_track() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/API/wydg/"))
            .and(query_param("msg", "Echoes"))
            .and(query_param("n", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "id": 10,
                "name": "Echoes",
                "author": "Canyon",
                "img": "i.jpg",
                "market": "4:12",
                "mp3": "https://cdn.example.com/10.mp3",
                "lyric": [
                    {"name": "first", "time": "00:05"},
                    {"name": "second", "time": "00:12.5"},
                ]
            })))
            .mount(&server)
            .await;

        let track = client_for(&server).song_detail("Echoes", 1).await.unwrap();
        assert!(track.is_resolved());
        assert_eq!(track.title, "Echoes");
        assert_eq!(track.duration_hint, "4:12");
        assert_eq!(track.lyrics.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn detail_without_media_url_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "name": "Echoes",
                "author": "Canyon",
                "mp3": ""
            })))
            .mount(&server)
            .await;

        assert!(matches!(
            client_for(&server).song_detail("Echoes", 1).await,
            Err(CatalogError::EmptyMediaUrl(_))
        ));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        assert!(matches!(
            client_for(&server).search_songs("x").await,
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn rejects_non_http_urls() {
        let result = CatalogClient::new(CatalogConfig {
            rankings_url: "ftp://example.com".to_string(),
            search_url: "https://example.com".to_string(),
        });
        assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
    }
}
