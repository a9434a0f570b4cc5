use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use shared::play_error::PLAY_OK;
use shared::prize::{HistoryRecord, Prize};

use crate::config;
use crate::error::Error;

/// Result of one remote play call. `error_code == 0` is success and
/// carries the winning prize id; nonzero codes map onto the taxonomy in
/// `shared::play_error`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayOutcome {
    pub error_code: i32,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub prize_id: Option<i64>,
}

impl PlayOutcome {
    pub fn is_success(&self) -> bool {
        self.error_code == PLAY_OK
    }
}

/// The remote service boundary. The engine only invokes and awaits;
/// transport, authentication and retries live behind this trait.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn list_prize_templates(&self, template_id: i64) -> Result<Vec<Prize>, Error>;

    async fn list_history(
        &self,
        template_id: i64,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<HistoryRecord>, Error>;

    async fn play(&self, template_id: i64) -> Result<PlayOutcome, Error>;

    /// Offered for the rendering collaborator; the engine itself never
    /// reads translations.
    async fn get_translations(&self, language: &str) -> Result<HashMap<String, String>, Error>;
}

/// JSON-over-HTTP implementation of the remote boundary.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.into() }
    }

    /// Base URL from `LOOTBOX_API_URL` (or a .env file), falling back
    /// to the local development default.
    pub fn from_env() -> Self {
        Self::new(config::get_api_base_url())
    }
}

#[async_trait]
impl RemoteApi for HttpApi {
    async fn list_prize_templates(&self, template_id: i64) -> Result<Vec<Prize>, Error> {
        let url = format!("{}/api/lootbox/{}/prizes", self.base_url, template_id);
        let prizes: Vec<Prize> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!("fetched {} prize templates for game {}", prizes.len(), template_id);
        Ok(prizes)
    }

    async fn list_history(
        &self,
        template_id: i64,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<HistoryRecord>, Error> {
        let url = format!(
            "{}/api/lootbox/{}/history?limit={}&offset={}",
            self.base_url, template_id, limit, offset
        );
        Ok(self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn play(&self, template_id: i64) -> Result<PlayOutcome, Error> {
        let url = format!("{}/api/lootbox/{}/play", self.base_url, template_id);
        Ok(self
            .client
            .post(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn get_translations(&self, language: &str) -> Result<HashMap<String, String>, Error> {
        let url = format!("{}/api/translations/{}", self.base_url, language);
        Ok(self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_outcome_wire_format() {
        let won: PlayOutcome =
            serde_json::from_str(r#"{"errorCode":0,"prizeId":42}"#).unwrap();
        assert!(won.is_success());
        assert_eq!(won.prize_id, Some(42));
        assert_eq!(won.error_message, None);

        let rejected: PlayOutcome =
            serde_json::from_str(r#"{"errorCode":2,"errorMessage":"pool empty"}"#).unwrap();
        assert!(!rejected.is_success());
        assert_eq!(rejected.prize_id, None);
    }
}
