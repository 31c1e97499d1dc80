use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use url::Url;

use crate::error::{LauncherError, Result};
use crate::progress::Progress;

const MAX_ATTEMPTS: u32 = 10;
const RETRY_DELAY: Duration = Duration::from_secs(3);
const CONCURRENT_DOWNLOADS: usize = 8;
const PROGRESS_EVERY: usize = 25;

#[derive(Debug, Clone)]
struct Download {
    url: String,
    dest_dir: PathBuf,
}

/// Queued HTTP downloader.
///
/// Install stages push files onto the queue; `run` drains it with bounded
/// concurrency. Files already on disk are skipped, transient failures are
/// retried with a pause between attempts.
pub struct Downloader {
    client: Client,
    queue: Vec<Download>,
}

impl Downloader {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            queue: Vec::new(),
        }
    }

    pub fn push(&mut self, url: impl Into<String>, dest_dir: PathBuf) {
        self.queue.push(Download {
            url: url.into(),
            dest_dir,
        });
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Fetch a JSON document into a typed value, with the same retry policy
    /// as file downloads.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut last_err = None;
        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_fetch_json(url).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::warn!("fetch {url} failed (attempt {attempt}/{MAX_ATTEMPTS}): {err}");
                    last_err = Some(err);
                    sleep(RETRY_DELAY).await;
                }
            }
        }
        Err(last_err.unwrap_or(LauncherError::DownloadFailed {
            url: url.to_string(),
            attempts: MAX_ATTEMPTS,
        }))
    }

    async fn try_fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Drain the queue, reporting a running count through `progress`.
    pub async fn run(&mut self, progress: &Progress) -> Result<()> {
        let total = self.queue.len();
        let mut completed = 0usize;
        let mut last_reported = 0usize;

        while !self.queue.is_empty() {
            let take = self.queue.len().min(CONCURRENT_DOWNLOADS);
            let batch: Vec<Download> = self.queue.drain(..take).collect();

            let handles: Vec<_> = batch
                .into_iter()
                .map(|download| {
                    let client = self.client.clone();
                    tokio::spawn(async move {
                        download_file(&client, &download.url, &download.dest_dir).await
                    })
                })
                .collect();

            for handle in handles {
                handle
                    .await
                    .map_err(|e| LauncherError::Io(std::io::Error::other(e)))??;
                completed += 1;
            }

            if completed - last_reported >= PROGRESS_EVERY || self.queue.is_empty() {
                progress.line(format!("Downloading files... {}/{}", completed, total));
                last_reported = completed;
            }
        }
        Ok(())
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

/// Download one file into `dest_dir`, named after the final URL segment.
async fn download_file(client: &Client, url: &str, dest_dir: &Path) -> Result<()> {
    let name = file_name_from_url(url)?;
    let full_path = dest_dir.join(&name);

    if full_path.is_file() {
        log::debug!("{name} already downloaded, skipping");
        return Ok(());
    }

    for attempt in 1..=MAX_ATTEMPTS {
        match fetch_bytes(client, url).await {
            Ok(body) => {
                fs::create_dir_all(dest_dir)?;
                fs::write(&full_path, &body)?;
                log::debug!("{} downloaded", full_path.display());
                return Ok(());
            }
            Err(err) => {
                log::warn!("download {url} failed (attempt {attempt}/{MAX_ATTEMPTS}): {err}");
                sleep(RETRY_DELAY).await;
            }
        }
    }

    Err(LauncherError::DownloadFailed {
        url: url.to_string(),
        attempts: MAX_ATTEMPTS,
    })
}

async fn fetch_bytes(client: &Client, url: &str) -> std::result::Result<Vec<u8>, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

/// Final path segment of the URL, percent-decoded by the `Url` parser.
fn file_name_from_url(url: &str) -> Result<String> {
    let parsed =
        Url::parse(url).map_err(|_| LauncherError::InvalidDownloadUrl(url.to_string()))?;
    let name = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| LauncherError::InvalidDownloadUrl(url.to_string()))?;
    Ok(name.to_string())
}
