//! HTTP client for the event resource.
//!
//! Thin wrapper over the four CRUD calls against `/event`. Backend
//! errors are propagated untouched: no retries, no local cache, no
//! validation beyond what the form draft performs before submitting.
//! Callers own refresh timing.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use agenda_core::{Event, EventPage};

use crate::session::Session;

/// Page size used when a view needs an effectively-unpaginated
/// snapshot for aggregation (dashboard, calendar). Deliberately a very
/// large `limit` on the normal list call, not a separate endpoint.
pub const SNAPSHOT_LIMIT: u32 = 1000;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected the request ({status}): {body}")]
    Http { status: StatusCode, body: String },
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Client for the paginated event collection.
pub struct EventApi {
    http: Client,
    session: Session,
}

impl EventApi {
    pub fn new(session: Session) -> Self {
        EventApi {
            http: Client::new(),
            session,
        }
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        self.session
            .base_url()
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self.http.request(method, url.clone());
        if let Some(token) = self.session.bearer_for(&url) {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }

    /// GET /event?page={p}&limit={n} (pages are 1-based)
    pub async fn list(&self, page: u32, limit: u32) -> ApiResult<EventPage> {
        let url = self.url("event")?;
        let response = self
            .request(Method::GET, url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST /event
    pub async fn create(&self, event: &Event) -> ApiResult<Event> {
        let url = self.url("event")?;
        let response = self.request(Method::POST, url).json(event).send().await?;
        Self::decode(response).await
    }

    /// PUT /event/{id}
    pub async fn update(&self, id: i64, event: &Event) -> ApiResult<Event> {
        let url = self.url(&format!("event/{id}"))?;
        let response = self.request(Method::PUT, url).json(event).send().await?;
        Self::decode(response).await
    }

    /// DELETE /event/{id} (empty response body)
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("event/{id}"))?;
        let response = self.request(Method::DELETE, url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
