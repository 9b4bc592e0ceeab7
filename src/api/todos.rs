use super::{ApiError, Remote};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Task};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_USER_ID: i64 = 1;
const TODOS_PATH: &str = "todos";
const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[derive(Debug, Clone)]
pub struct TodosApi {
    client: Client,
    config: TodosConfig,
}

impl Remote for TodosApi {
    async fn fetch_all(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.collection_url();
        let res = Self::send(self.client.get(&url), &url).await?;
        Self::decode(res, &url).await
    }

    async fn create(&self, title: &str) -> Result<Task, ApiError> {
        let url = self.collection_url();
        let body = NewTask::new(title, self.config.user_id);
        let res = Self::send(self.client.post(&url).headers(Self::json_headers()).json(&body), &url).await?;
        Self::decode(res, &url).await
    }

    async fn update(&self, task: &Task) -> Result<Task, ApiError> {
        let url = self.item_url(task.id);
        let res = Self::send(self.client.put(&url).headers(Self::json_headers()).json(task), &url).await?;
        // A bodiless success still means the update was applied.
        if res.status() == StatusCode::NO_CONTENT || res.content_length() == Some(0) {
            return Ok(task.clone());
        }
        Self::decode(res, &url).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let url = self.item_url(id);
        Self::send(self.client.delete(&url), &url).await?;
        Ok(())
    }
}

impl TodosApi {
    pub fn new(config: &TodosConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), TODOS_PATH)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers
    }

    async fn send(request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let res = request.send().await.map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })?;

        let status = res.status();
        debug!(%url, %status, "remote responded");
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(res)
    }

    async fn decode<T: DeserializeOwned>(res: Response, url: &str) -> Result<T, ApiError> {
        res.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Remote endpoint settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TodosConfig {
    /// Base URL; the collection lives at `<base_url>/todos`.
    pub base_url: String,
    /// Owner id stamped on every created task.
    pub user_id: i64,
}

impl Default for TodosConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl TodosConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Todos API".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleApi);
        Ok(Self {
            base_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiBaseUrl.to_string())
                .default(config.base_url)
                .interact_text()?,
            user_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUserId.to_string())
                .default(config.user_id)
                .interact_text()?,
        })
    }
}
