use crate::entities::user::{LoginRequest, RegisterRequest, User};
use crate::error::AppResult;
use crate::services::AuthService;
use crate::session::Session;
use crate::stores::{Snapshot, StoreCell};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct AuthStore {
    service: AuthService,
    session: Session,
    state: StoreCell<AuthState>,
}

impl AuthStore {
    pub fn new(service: AuthService, session: Session) -> Self {
        Self {
            service,
            session,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<AuthState> {
        self.state.snapshot().await
    }

    /// Restore the user from a stored token, if it is still valid.
    pub async fn initialize(&self) {
        if self.session.is_authenticated() {
            let user = self.session.current_user();
            self.state.update(|s| s.data.user = user).await;
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The user recorded at login, else the one decoded from the token.
    pub async fn current_user(&self) -> Option<User> {
        match self.state.read(|s| s.user.clone()).await {
            Some(user) => Some(user),
            None => self.session.current_user(),
        }
    }

    pub async fn login_user(&self, email: &str, password: &str) -> LoginOutcome {
        self.state
            .update(|s| {
                s.loading = true;
                s.error = None;
            })
            .await;

        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.service.login(&credentials).await;

        self.state
            .update(|s| {
                s.loading = false;
                match result {
                    Ok(response) if response.is_ok() && response.data.is_some() => {
                        s.data.user = response.data.as_ref().map(User::from);
                        LoginOutcome {
                            success: true,
                            message: None,
                        }
                    }
                    Ok(response) => {
                        let message = if response.message.is_empty() {
                            "Login failed".to_string()
                        } else {
                            response.message
                        };
                        s.error = Some(message.clone());
                        LoginOutcome {
                            success: false,
                            message: Some(message),
                        }
                    }
                    Err(e) => {
                        let message = e.user_message("Login failed");
                        tracing::warn!(error = %e, "Login failed");
                        s.error = Some(message.clone());
                        LoginOutcome {
                            success: false,
                            message: Some(message),
                        }
                    }
                }
            })
            .await
    }

    pub async fn register_user(&self, request: &RegisterRequest) -> AppResult<()> {
        self.state
            .update(|s| {
                s.loading = true;
                s.error = None;
            })
            .await;

        let result = self.service.register(request).await;

        self.state
            .update(|s| {
                s.loading = false;
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "Registration failed");
                    s.error = Some(e.server_message().unwrap_or("Registration failed").to_string());
                }
            })
            .await;
        result.map(|_| ())
    }

    /// Always ends logged out, whatever the API answers.
    pub async fn logout_user(&self) {
        self.state.update(|s| s.loading = true).await;
        if let Err(e) = self.service.logout().await {
            tracing::error!(error = %e, "Logout error");
        }
        self.state
            .update(|s| {
                s.data.user = None;
                s.error = None;
                s.loading = false;
            })
            .await;
    }

    pub async fn clear_error(&self) {
        self.state.update(|s| s.error = None).await;
    }
}
