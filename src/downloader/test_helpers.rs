//! Shared test helpers for driving the downloader against a scripted transport.

use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::api::{HttpTransport, TransportResponse};
use crate::config::Config;
use crate::downloader::SoundcloudDownloader;
use crate::error::Result;

/// Scripted [`HttpTransport`] serving canned responses keyed by URL fragment.
///
/// Routes match by substring in insertion order; URLs with no matching route
/// answer 404 with an empty body. Every request is recorded for call-count
/// assertions.
pub(crate) struct MockTransport {
    routes: Mutex<Vec<(String, u16, Vec<u8>)>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            routes: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serve `body` with HTTP 200 for any URL containing `fragment`
    pub(crate) fn on(&self, fragment: &str, body: impl Into<Vec<u8>>) {
        self.on_status(fragment, 200, body);
    }

    /// Serve an arbitrary status for any URL containing `fragment`
    pub(crate) fn on_status(&self, fragment: &str, status: u16, body: impl Into<Vec<u8>>) {
        self.routes
            .lock()
            .unwrap()
            .push((fragment.to_string(), status, body.into()));
    }

    /// Every URL requested so far, in order
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far
    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        let routes = self.routes.lock().unwrap();
        for (fragment, status, body) in routes.iter() {
            if url.contains(fragment.as_str()) {
                return Ok(TransportResponse {
                    status: *status,
                    body: body.clone(),
                });
            }
        }
        Ok(TransportResponse {
            status: 404,
            body: Vec::new(),
        })
    }
}

/// Build a downloader saving into a fresh temp directory.
///
/// Returns the downloader, its transport for scripting and call assertions,
/// and the tempdir (which must be kept alive).
pub(crate) async fn create_test_downloader() -> (SoundcloudDownloader, Arc<MockTransport>, TempDir)
{
    let temp_dir = tempfile::tempdir().unwrap();
    let transport = Arc::new(MockTransport::new());

    let mut config = Config::new("test-client-id");
    config.save_dir = Some(temp_dir.path().to_path_buf());

    let downloader = SoundcloudDownloader::with_transport(config, transport.clone())
        .await
        .unwrap();
    (downloader, transport, temp_dir)
}

/// JSON body of a resolved track document
pub(crate) fn track_json(id: u64, title: &str, username: &str) -> String {
    format!(r#"{{"id":{id},"title":"{title}","user":{{"username":"{username}"}}}}"#)
}

/// JSON body of a stream-info document carrying a direct stream URL
pub(crate) fn stream_json(url: &str) -> String {
    format!(r#"{{"http_mp3_128_url":"{url}"}}"#)
}
