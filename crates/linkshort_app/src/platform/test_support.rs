use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use linkshort_engine::{ApiError, ShortenResponse, ShortenerApi, StatsResponse};

use super::clipboard::Clipboard;

/// Backend that shortens everything to `ab12cd` and cannot serve stats.
pub struct FixedApi;

#[async_trait]
impl ShortenerApi for FixedApi {
    async fn create(&self, url: &str) -> Result<ShortenResponse, ApiError> {
        Ok(ShortenResponse {
            short_code: "ab12cd".to_string(),
            short_url: "http://host/ab12cd".to_string(),
            long_url: url.to_string(),
        })
    }

    async fn stats(&self, _short_code: &str) -> Result<StatsResponse, ApiError> {
        Err(ApiError::Network("connection refused".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Arc<Mutex<Vec<String>>>,
    pub broken: bool,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.broken {
            return Err("no display".to_string());
        }
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
