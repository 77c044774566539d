//! HTTP client for the catalog API, and the fetch step of the browser.

use crate::model::Game;
use crate::view::Browser;
use thiserror::Error;
use tracing::warn;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api/games";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch games: server answered {0}")]
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// `base_url` points at the collection root, e.g. `http://localhost:3001/api/games`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The list URL, with `search` appended when non-empty.
    pub fn list_url(&self, search: Option<&str>) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url)?;
        if let Some(term) = search.filter(|s| !s.is_empty()) {
            url.query_pairs_mut().append_pair("search", term);
        }
        Ok(url)
    }

    pub async fn list_games(&self, search: Option<&str>) -> Result<Vec<Game>, ClientError> {
        let url = self.list_url(search)?;
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }
        Ok(response.json::<Vec<Game>>().await?)
    }
}

impl Browser {
    /// Re-fetch the snapshot and return the recomputed view. On failure the
    /// error is logged and the last-known snapshot stays in place.
    pub async fn refresh(&mut self, client: &CatalogClient, search: Option<&str>) -> Vec<Game> {
        match client.list_games(search).await {
            Ok(games) => self.replace_snapshot(games),
            Err(e) => warn!(error = %e, url = client.base_url(), "error fetching games"),
        }
        self.view()
    }
}
