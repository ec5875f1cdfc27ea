//! PokeAPI Client
//!
//! Fetches catalog data over HTTP, checking the shared response cache before
//! every request and populating it after every successful one.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// HTTP client for the catalog API.
///
/// Cheap to clone; clones share the same connection pool and cache.
#[derive(Debug, Clone)]
pub struct PokeClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
    cache: Arc<Cache>,
}

impl PokeClient {
    /// Creates a client from configuration, backed by `cache`.
    pub fn new(config: &Config, cache: Arc<Cache>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout_duration())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first location area page.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    /// Fetches a page of location areas.
    ///
    /// `page_url` is a `next`/`previous` link from an earlier page; `None`
    /// fetches the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.first_page_url(),
        };
        self.get_json(&url).await
    }

    /// Fetches encounter data for one location area.
    pub async fn explore_area(&self, name: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, resource_name(name)?);
        self.get_json(&url).await
    }

    /// Fetches stat data for one creature.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, resource_name(name)?);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // Cache-through GET keyed by the full URL. Only 200 bodies are cached.
    async fn get(&self, url: &str) -> Result<Bytes> {
        if let Some(cached) = self.cache.get(url) {
            debug!(url, "Cache hit");
            return Ok(cached);
        }
        debug!(url, "Cache miss");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(PokedexError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }
}

// PokeAPI names and ids are ASCII letters, digits and hyphens. Anything
// else could change which resource the URL points at.
fn resource_name(name: &str) -> Result<&str> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(name)
    } else {
        Err(PokedexError::InvalidName(name.to_string()))
    }
}
