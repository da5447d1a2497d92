use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::session::SessionPolicy;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub auth_base_url: Option<String>,
    pub token_file: Option<PathBuf>,
    pub session_policy: SessionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_base_url: None,
            token_file: None,
            session_policy: SessionPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = match non_empty_var("API_BASE_URL") {
            Some(url) => url,
            None => non_empty_var("FRONTEND_HOST")
                .map(|host| backend_url_for_host(&host))
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        };

        let session_policy = match non_empty_var("SESSION_POLICY") {
            Some(raw) => SessionPolicy::from_str(&raw)?,
            None => SessionPolicy::default(),
        };

        Ok(Self {
            api_base_url,
            auth_base_url: non_empty_var("AUTH_API_BASE_URL"),
            token_file: non_empty_var("TOKEN_FILE").map(PathBuf::from),
            session_policy,
        })
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = Some(url.into());
        self
    }

    pub fn with_session_policy(mut self, policy: SessionPolicy) -> Self {
        self.session_policy = policy;
        self
    }

    /// Base URL used for `/auth/*` calls.
    pub fn auth_base(&self) -> &str {
        self.auth_base_url.as_deref().unwrap_or(&self.api_base_url)
    }
}

/// Deployed front-ends live on `<name>-fe.<domain>`, their backend on `<name>-be.<domain>`.
pub fn backend_url_for_host(frontend_host: &str) -> String {
    format!("http://{}/api", frontend_host.replacen("-fe.", "-be.", 1))
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl FromStr for SessionPolicy {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(SessionPolicy::Permissive),
            "strict" => Ok(SessionPolicy::Strict),
            other => Err(AppError::Config(format!(
                "SESSION_POLICY must be 'permissive' or 'strict', got '{}'",
                other
            ))),
        }
    }
}
