use crate::error::BackendError;
use crate::models::{MaintenanceOutcome, SearchQuery, SearchResult};
use crate::traits::SimilarityBackend;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use url::Url;

/// HTTP client for the similarity service. The base URL is injected so test
/// doubles can point it at a mock endpoint.
pub struct HttpSimilarityBackend {
    client: Client,
    base: Url,
}

impl HttpSimilarityBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::new(),
            base: Url::parse(base_url)?,
        })
    }

    async fn post_json<T>(&self, route: &str, body: Option<serde_json::Value>) -> Result<T, BackendError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.client.post(self.base.join(route)?);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Server {
                status: response.status(),
            });
        }

        let payload = response.text().await?;
        serde_json::from_str(&payload).map_err(BackendError::malformed)
    }
}

#[async_trait]
impl SimilarityBackend for HttpSimilarityBackend {
    async fn find_similar(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, BackendError> {
        self.post_json(
            "api/find_similar_projects",
            Some(json!({
                "text": query.title,
                "abstract": query.abstract_text,
            })),
        )
        .await
    }

    async fn load_data(&self) -> Result<MaintenanceOutcome, BackendError> {
        self.post_json("api/load_data", None).await
    }

    async fn generate_embeddings(&self) -> Result<MaintenanceOutcome, BackendError> {
        self.post_json("api/generate_embeddings", None).await
    }
}
