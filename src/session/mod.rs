//! Bearer-token session: persistence, local decoding and role checks.
//!
//! Tokens are decoded without signature verification. By default the session
//! is permissive: a token without `exp` never expires and a token whose payload
//! cannot be decoded still counts as logged in. [`SessionPolicy::Strict`]
//! treats both cases as logged out.

pub mod token_store;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::entities::user::User;
use crate::error::AppResult;
use crate::rbac::{self, Role};
use crate::utils::jwt::{decode_unverified, Claims};

pub use token_store::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPolicy {
    #[default]
    Permissive,
    Strict,
}

#[derive(Clone)]
pub struct Session {
    tokens: Arc<dyn TokenStore>,
    policy: SessionPolicy,
}

impl Session {
    pub fn new(tokens: Arc<dyn TokenStore>, policy: SessionPolicy) -> Self {
        Self { tokens, policy }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()), SessionPolicy::default())
    }

    pub fn policy(&self) -> SessionPolicy {
        self.policy
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.load().filter(|t| !t.is_empty())
    }

    pub fn store_token(&self, token: &str) -> AppResult<()> {
        self.tokens.save(token)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.tokens.clear()
    }

    /// `None` without a token; `Some(Err)` when the payload does not decode.
    pub fn claims(&self) -> Option<AppResult<Claims>> {
        self.token().map(|token| decode_unverified(&token))
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now())
    }

    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> bool {
        let lenient = self.policy == SessionPolicy::Permissive;
        match self.claims() {
            None => false,
            Some(Ok(claims)) => match claims.is_expired_at(now.timestamp() as f64) {
                Some(expired) => !expired,
                None => lenient,
            },
            Some(Err(e)) => {
                tracing::debug!(error = %e, lenient, "Stored token did not decode");
                lenient
            }
        }
    }

    pub fn current_user(&self) -> Option<User> {
        match self.claims()? {
            Ok(claims) => Some(claims.user()),
            Err(_) => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user().as_ref().and_then(User::role)
    }

    pub fn can_access(&self, operation: &str) -> bool {
        rbac::can_access(self.current_user().as_ref(), operation)
    }

    pub fn has_role(&self, roles: &[Role]) -> bool {
        rbac::has_role(self.current_user().as_ref(), roles)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("policy", &self.policy)
            .field("has_token", &self.token().is_some())
            .finish()
    }
}
