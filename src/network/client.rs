//! HTTP client for the cities backend

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::constants::CITIES_PATH;
use crate::models::{City, CityId, NewCity};
use crate::network::error::ApiError;

/// Port to the cities backend.
///
/// The store only talks to the backend through this trait, so tests can swap
/// in an in-memory double.
#[async_trait]
pub trait CityApi: Send + Sync + 'static {
    /// `GET /cities`
    async fn fetch_cities(&self) -> Result<Vec<City>, ApiError>;

    /// `GET /cities/{id}`
    async fn fetch_city(&self, id: &CityId) -> Result<City, ApiError>;

    /// `POST /cities`, returns the stored record with its id
    async fn create_city(&self, city: &NewCity) -> Result<City, ApiError>;

    /// `DELETE /cities/{id}`
    async fn delete_city(&self, id: &CityId) -> Result<(), ApiError>;
}

/// `CityApi` backed by reqwest
#[derive(Clone, Debug)]
pub struct HttpCityApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCityApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpCityApi {
            client: create_client(timeout),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, CITIES_PATH)
    }

    /// `{base}/cities/{id}` with the id percent-encoded as one path segment
    fn item_url(&self, id: &CityId) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.collection_url())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .push(&id.to_string());
        Ok(url)
    }

    /// Send a request and decode the JSON body
    async fn send_json<T: DeserializeOwned>(
        &self,
        req_builder: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let resp = self.send(req_builder, url).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request, treating any non-2xx status as a failure
    async fn send(
        &self,
        req_builder: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let start = Instant::now();
        let resp = req_builder.send().await?;
        let status = resp.status();
        tracing::debug!(
            url,
            status = status.as_u16(),
            time_ms = start.elapsed().as_millis() as u64,
            "Backend responded"
        );

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp)
    }
}

#[async_trait]
impl CityApi for HttpCityApi {
    async fn fetch_cities(&self) -> Result<Vec<City>, ApiError> {
        let url = self.collection_url();
        self.send_json(self.client.get(&url), &url).await
    }

    async fn fetch_city(&self, id: &CityId) -> Result<City, ApiError> {
        let url = self.item_url(id)?;
        self.send_json(self.client.get(url.clone()), url.as_str()).await
    }

    async fn create_city(&self, city: &NewCity) -> Result<City, ApiError> {
        let url = self.collection_url();
        let req_builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(city)?);
        self.send_json(req_builder, &url).await
    }

    async fn delete_city(&self, id: &CityId) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        // Body is not part of the contract
        self.send(self.client.delete(url.clone()), url.as_str()).await?;
        Ok(())
    }
}

/// Create an HTTP client with the given request timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
