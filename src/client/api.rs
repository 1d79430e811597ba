use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::record::Record;

use super::error::ClientError;

/// The create body the client posts to `/places`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub photo: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the record service's `places` routes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/places{path}", self.base_url)
    }

    pub async fn list_places(&self) -> Result<Vec<Record>, ClientError> {
        let response = self.http.get(self.url("")).send().await?;
        decode(response).await
    }

    pub async fn create_place(&self, place: &NewPlace) -> Result<Record, ClientError> {
        let response = self.http.post(self.url("")).json(place).send().await?;
        let record: Record = decode(response).await?;
        tracing::debug!(id = %record.id, "place created");
        Ok(record)
    }

    pub async fn get_place(&self, id: &str) -> Result<Record, ClientError> {
        let response = self.http.get(self.url(&format!("/{id}"))).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .map(|body| body.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
        tracing::warn!(status = status.as_u16(), %message, "request rejected");
        return Err(ClientError::Rejected { status: status.as_u16(), message });
    }

    Ok(serde_json::from_slice(&body)?)
}
