use reqwest::Method;
use serde_json::Value;

use crate::client::{ApiBase, ApiClient};
use crate::entities::ApiResponse;
use crate::entities::user::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::AppResult;

/// Login, registration and logout; these talk to the auth base URL.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Stores the returned token when the envelope reports success.
    pub async fn login(&self, credentials: &LoginRequest) -> AppResult<ApiResponse<Option<LoginResponse>>> {
        let builder = self
            .api
            .request(Method::POST, ApiBase::Auth, &["auth", "login"])?
            .json(credentials);
        let response: ApiResponse<Option<LoginResponse>> = self.api.execute(builder).await?;

        if response.is_ok() {
            if let Some(login) = response.data.as_ref().filter(|l| !l.token.is_empty()) {
                self.api.session().store_token(&login.token)?;
                tracing::info!(user = %login.username, role = %login.role, "Logged in");
            }
        }

        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> AppResult<ApiResponse<Option<Value>>> {
        let builder = self
            .api
            .request(Method::POST, ApiBase::Auth, &["auth", "register"])?
            .json(request);
        self.api.execute(builder).await
    }

    /// The API call may fail; the local token is cleared regardless.
    pub async fn logout(&self) -> AppResult<()> {
        let result = match self.api.request(Method::POST, ApiBase::Auth, &["auth", "logout"]) {
            Ok(builder) => self
                .api
                .execute::<Option<Value>>(builder)
                .await
                .map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Logout API error");
        }
        self.api.session().clear()
    }
}
