//! Todo Commands
//!
//! HTTP access to the remote todo collection.

use crate::error::{FetchError, FetchResult};
use crate::models::TodoItem;
use super::TodoSource;

/// Fetches the whole collection with one GET, no parameters
#[derive(Debug, Clone)]
pub struct HttpTodoSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTodoSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl TodoSource for HttpTodoSource {
    async fn fetch_todos(&self) -> FetchResult<Vec<TodoItem>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_todo_list(status, &body)
    }
}

/// Turn a raw response into the collection. Any non-2xx status is a failure.
pub fn parse_todo_list(status: u16, body: &str) -> FetchResult<Vec<TodoItem>> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
