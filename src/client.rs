// File: src/client.rs
//! Authenticated HTTP client for the board service REST API.

use crate::error::Error;
use crate::model::{Board, Card, Label, List};
use serde::de::DeserializeOwned;

/// Production endpoint, API version path segment included.
pub const TRELLO_ENDPOINT: &str = "https://api.trello.com/1";

/// One client instance is built per invocation and threaded through the
/// whole pipeline. Credentials ride along as query parameters on every
/// request; no state is shared beyond the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    key: String,
    token: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(key: &str, token: &str) -> Self {
        Self::with_base_url(TRELLO_ENDPOINT, key, token)
    }

    /// Client against a non-default endpoint. Tests point this at a local
    /// mock server.
    pub fn with_base_url(base_url: &str, key: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.to_string(),
            token: token.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Boards owned by the given member handle.
    pub async fn boards(&self, member: &str) -> Result<Vec<Board>, Error> {
        self.get_json(&format!("/members/{}/boards", member)).await
    }

    /// Lists under the given board.
    pub async fn lists(&self, board_id: &str) -> Result<Vec<List>, Error> {
        self.get_json(&format!("/boards/{}/lists", board_id)).await
    }

    /// Labels under the given board.
    pub async fn labels(&self, board_id: &str) -> Result<Vec<Label>, Error> {
        self.get_json(&format!("/boards/{}/labels", board_id)).await
    }

    /// Submit a card. The response body is not inspected beyond the
    /// status code.
    pub async fn create_card(&self, card: &Card) -> Result<(), Error> {
        let url = format!("{}/cards", self.base_url);
        log::debug!("POST {}", url);
        let resp = self
            .http
            .post(&url)
            .query(&self.auth())
            .json(card)
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.clone(),
                source: e,
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }
        Ok(())
    }

    fn auth(&self) -> [(&'static str, &str); 2] {
        [("key", &self.key), ("token", &self.token)]
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);
        let resp = self
            .http
            .get(&url)
            .query(&self.auth())
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.clone(),
                source: e,
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }
        let body = resp.text().await.map_err(|e| Error::Transport {
            url: url.clone(),
            source: e,
        })?;
        serde_json::from_str(&body).map_err(|e| Error::Decode { url, source: e })
    }
}
