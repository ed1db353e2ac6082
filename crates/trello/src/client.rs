//! HTTP client for the Trello REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use rotation::{
    BoardCard, BoardError, BoardId, BoardList, BoardService, CardId, DeveloperId, LabelColor,
    ListId,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{status_error, transport_error, TrelloError};
use crate::wire::{created_card_id, created_list_id, Created, TrelloCard, TrelloList};

/// Default Trello API root.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`TrelloClient`].
#[derive(Clone)]
pub struct TrelloConfig {
    /// Application key (`key` query parameter).
    pub api_key: String,
    /// Member token (`token` query parameter).
    pub token: String,
    /// API root without a trailing slash, e.g. [`DEFAULT_BASE_URL`].
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl TrelloConfig {
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// [`BoardService`] backed by the Trello REST API.
#[derive(Debug, Clone)]
pub struct TrelloClient {
    client: Client,
    config: TrelloConfig,
}

impl TrelloClient {
    pub fn new(config: TrelloConfig) -> Result<Self, TrelloError> {
        for (field, value) in [
            ("API key", &config.api_key),
            ("token", &config.token),
            ("base URL", &config.base_url),
        ] {
            if value.trim().is_empty() {
                return Err(TrelloError::MissingSetting { field });
            }
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        request.query(&[
            ("key", self.config.api_key.as_str()),
            ("token", self.config.token.as_str()),
        ])
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BoardError> {
        let response = self
            .authenticated(request)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_response(response).await?;
        response.json::<T>().await.map_err(transport_error)
    }
}

/// Turns a non-success response into [`BoardError::Status`].
async fn check_response(response: Response) -> Result<Response, BoardError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.map_err(reqwest::Error::without_url);
    Err(status_error(status.as_u16(), body))
}

#[async_trait]
impl BoardService for TrelloClient {
    async fn list_board_lists(&self, board: &BoardId) -> Result<Vec<BoardList>, BoardError> {
        debug!(%board, "GET board lists");
        let request = self
            .client
            .get(self.url(&format!("boards/{board}/lists")))
            .query(&[("fields", "id,name")]);
        let lists: Vec<TrelloList> = self.send(request).await?;
        lists.into_iter().map(BoardList::try_from).collect()
    }

    async fn list_cards(&self, list: &ListId) -> Result<Vec<BoardCard>, BoardError> {
        debug!(%list, "GET list cards");
        let request = self
            .client
            .get(self.url(&format!("lists/{list}/cards")))
            .query(&[("fields", "id,name,desc,idMembers,labels")]);
        let cards: Vec<TrelloCard> = self.send(request).await?;
        cards.into_iter().map(BoardCard::try_from).collect()
    }

    async fn create_list(&self, board: &BoardId, name: &str) -> Result<ListId, BoardError> {
        debug!(%board, title = name, "POST list");
        let request = self
            .client
            .post(self.url("lists"))
            .query(&[("name", name), ("idBoard", board.as_str())]);
        created_list_id(self.send::<Created>(request).await?)
    }

    async fn create_card(
        &self,
        list: &ListId,
        name: &str,
        members: &[DeveloperId],
    ) -> Result<CardId, BoardError> {
        debug!(%list, title = name, members = members.len(), "POST card");
        let member_ids = members
            .iter()
            .map(DeveloperId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let mut query = vec![("idList", list.as_str()), ("name", name)];
        if !members.is_empty() {
            query.push(("idMembers", member_ids.as_str()));
        }
        let request = self.client.post(self.url("cards")).query(&query);
        created_card_id(self.send::<Created>(request).await?)
    }

    async fn add_label(&self, card: &CardId, color: &LabelColor) -> Result<(), BoardError> {
        debug!(%card, %color, "POST card label");
        let request = self
            .client
            .post(self.url(&format!("cards/{card}/labels")))
            .query(&[("color", color.as_str()), ("name", "")]);
        self.send::<serde_json::Value>(request).await?;
        Ok(())
    }
}
