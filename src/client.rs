//! HTTP transport shared by every service.
//!
//! Attaches the stored bearer token to each request and unwraps the
//! `{status, message, data, timestamp}` envelope. A 401 clears the token and
//! broadcasts [`AuthEvent::LoginRequired`].

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::config::Config;
use crate::entities::ApiResponse;
use crate::error::{AppError, AppResult};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// The server rejected the credential; the caller should show a login view.
    LoginRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBase {
    Main,
    Auth,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    api_base: Url,
    auth_base: Url,
    session: Session,
    events: broadcast::Sender<AuthEvent>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Session) -> AppResult<Self> {
        let (events, _) = broadcast::channel(16);
        Ok(Self {
            http: Client::new(),
            api_base: parse_base(&config.api_base_url)?,
            auth_base: parse_base(config.auth_base())?,
            session,
            events,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    /// Build `<base>/<segments...>` with every segment percent-encoded.
    pub fn endpoint(&self, base: ApiBase, segments: &[&str]) -> AppResult<Url> {
        let mut url = match base {
            ApiBase::Main => self.api_base.clone(),
            ApiBase::Auth => self.auth_base.clone(),
        };
        url.path_segments_mut()
            .map_err(|_| AppError::Config("API base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn request(&self, method: Method, base: ApiBase, segments: &[&str]) -> AppResult<RequestBuilder> {
        let url = self.endpoint(base, segments)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        Ok(builder)
    }

    pub async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<ApiResponse<T>> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(method = %method, url = %url, "Sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!(method = %method, url = %url, error = %e, "Request failed");
            AppError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            tracing::debug!(method = %method, url = %url, status = %status, "Request completed");
            return serde_json::from_str(&body)
                .map_err(|e| AppError::Decode(format!("{} {}: {}", method, url.path(), e)));
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        tracing::warn!(
            method = %method,
            url = %url,
            status = %status,
            message = message.as_deref().unwrap_or(""),
            "Request rejected"
        );

        if status.as_u16() == 401 {
            self.handle_unauthorized();
            return Err(AppError::Unauthorized { message });
        }

        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Clear the token and notify subscribers, if any.
    fn handle_unauthorized(&self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear token after 401");
        }
        let _ = self.events.send(AuthEvent::LoginRequired);
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> AppResult<ApiResponse<T>> {
        self.execute(self.request(Method::GET, ApiBase::Main, segments)?)
            .await
    }

    pub async fn get_with<Q, T>(&self, segments: &[&str], query: &Q) -> AppResult<ApiResponse<T>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, ApiBase::Main, segments)?.query(query);
        self.execute(builder).await
    }

    /// List endpoints may answer `data: null`; that decodes as an empty list.
    pub async fn get_list<T: DeserializeOwned>(&self, segments: &[&str]) -> AppResult<ApiResponse<Vec<T>>> {
        self.get::<Option<Vec<T>>>(segments)
            .await
            .map(ApiResponse::or_default)
    }

    pub async fn get_list_with<Q, T>(&self, segments: &[&str], query: &Q) -> AppResult<ApiResponse<Vec<T>>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.get_with::<Q, Option<Vec<T>>>(segments, query)
            .await
            .map(ApiResponse::or_default)
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> AppResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, ApiBase::Main, segments)?.json(body);
        self.execute(builder).await
    }

    /// POST without a body, used by the action endpoints (`/delete`, `/activate`).
    pub async fn post_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> AppResult<ApiResponse<T>> {
        self.execute(self.request(Method::POST, ApiBase::Main, segments)?)
            .await
    }

    pub async fn put<B, T>(&self, segments: &[&str], body: &B) -> AppResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, ApiBase::Main, segments)?.json(body);
        self.execute(builder).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> AppResult<ApiResponse<T>> {
        self.execute(self.request(Method::DELETE, ApiBase::Main, segments)?)
            .await
    }
}

fn parse_base(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| AppError::Config(format!("Invalid base URL '{}': {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(AppError::Config(format!("'{}' cannot be a base URL", raw)));
    }
    Ok(url)
}
