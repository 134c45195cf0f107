use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::utils::constants::{
    SANITY_API_VERSION, SANITY_DATASET, SANITY_PROJECT_ID, SANITY_TOKEN,
};

#[derive(Debug, Clone, Error)]
pub enum ContentError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned HTTP {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Every query response arrives wrapped in this envelope.
#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Thin client for the hosted content backend - queries go to the read
/// endpoint, mutations are posted as one transaction to the mutate endpoint.
#[derive(Clone)]
pub struct ContentClient {
    project_id: String,
    dataset: String,
    api_version: String,
    token: Option<String>,
}

impl ContentClient {
    pub fn new() -> Self {
        Self {
            project_id: SANITY_PROJECT_ID.to_string(),
            dataset: SANITY_DATASET.to_string(),
            api_version: SANITY_API_VERSION.to_string(),
            token: SANITY_TOKEN.map(str::to_string),
        }
    }

    fn query_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}/data/query/{}",
            self.project_id, self.api_version, self.dataset
        )
    }

    fn mutate_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}/data/mutate/{}",
            self.project_id, self.api_version, self.dataset
        )
    }

    /// Run a query and unwrap its result envelope.
    pub async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, ContentError> {
        let response = Request::get(&self.query_url())
            .query([("query", query)])
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ContentError::Status(response.status()));
        }

        let envelope = response
            .json::<QueryResponse<T>>()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;

        Ok(envelope.result)
    }

    /// Commit a batch of mutations. Fire-and-forget from the caller's side:
    /// the transaction result body is not inspected beyond the status code.
    pub async fn mutate(&self, mutations: Value) -> Result<(), ContentError> {
        let body = serde_json::json!({ "mutations": mutations });

        let mut request = Request::post(&self.mutate_url());
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .json(&body)
            .map_err(|e| ContentError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ContentError::Status(response.status()));
        }

        Ok(())
    }
}
