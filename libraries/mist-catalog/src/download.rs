//! Media file download
//!
//! Streams a resolved media URL to disk. Fire-and-forget from the player's
//! perspective: downloads never touch playback state.

use async_trait::async_trait;
use futures_util::StreamExt;
use mist_core::{Downloader, MistError};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};

/// Progress of an in-flight download
#[derive(Debug, Clone)]
pub struct DownloadProgress {
    /// Bytes written so far
    pub bytes_received: u64,

    /// Total size, if the server sent a content length
    pub bytes_total: Option<u64>,

    /// Fraction complete (0.0 when the total is unknown)
    pub progress: f32,
}

/// Streaming HTTP implementation of [`Downloader`]
pub struct HttpDownloader {
    http: Client,
}

impl HttpDownloader {
    /// Create a downloader with its own HTTP client
    ///
    /// No request timeout is set: media files legitimately take longer than
    /// any fixed budget on slow links. The connect timeout still applies.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("MistPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Download `media_url` to `dest_path`, reporting progress per chunk
    pub async fn download_with_progress<F>(
        &self,
        media_url: &str,
        dest_path: &Path,
        mut progress_callback: F,
    ) -> Result<()>
    where
        F: FnMut(DownloadProgress),
    {
        debug!(url = %media_url, dest = %dest_path.display(), "downloading media");

        let response = self.http.get(media_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                code: i64::from(status.as_u16()),
                message,
            });
        }

        let bytes_total = response.content_length();

        if let Some(parent) = dest_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = File::create(dest_path).await?;
        let mut bytes_received: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            bytes_received += chunk.len() as u64;

            let progress = bytes_total
                .map(|total| bytes_received as f32 / total as f32)
                .unwrap_or(0.0);
            progress_callback(DownloadProgress {
                bytes_received,
                bytes_total,
                progress,
            });
        }

        file.flush().await?;

        info!(
            url = %media_url,
            dest = %dest_path.display(),
            size = bytes_received,
            "media downloaded"
        );

        Ok(())
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, media_url: &str, dest_path: &Path) -> mist_core::Result<()> {
        self.download_with_progress(media_url, dest_path, |_| {})
            .await
            .map_err(|e| MistError::Download(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn downloads_file_to_destination() {
        let server = MockServer::start().await;
        let body = vec![7u8; 4096];
        Mock::given(method("GET"))
            .and(path("/track.mp3"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("music/track.mp3");

        let downloader = HttpDownloader::new().unwrap();
        let mut reported: u64 = 0;
        downloader
            .download_with_progress(&format!("{}/track.mp3", server.uri()), &dest, |p| {
                reported = p.bytes_received;
            })
            .await
            .unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), body);
        assert_eq!(reported, 4096);
    }

    #[tokio::test]
    async fn http_error_does_not_create_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing.mp3");

        let downloader = HttpDownloader::new().unwrap();
        let result = downloader
            .download_with_progress(&format!("{}/missing.mp3", server.uri()), &dest, |_| {})
            .await;

        assert!(matches!(result, Err(CatalogError::Api { code: 404, .. })));
        assert!(!dest.exists());
    }
}
