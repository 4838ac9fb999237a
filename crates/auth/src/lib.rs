//! Authentication and profile service used by the account pages.
//!
//! This crate provides:
//! - The `AuthService` trait pages are handed at construction time
//! - `MockAuthService`, an in-memory implementation that waits a simulated
//!   network latency and accepts any non-empty credentials
//!
//! There is no real security here: no password storage, no token
//! verification. The venue engine neither calls nor is called by this crate.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Token issued by the mock service for every session
pub const MOCK_TOKEN: &str = "mock_token_123";

/// Latency the account pages were designed around
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// 2024-01-01T00:00:00Z
const MOCK_ACCOUNT_CREATED: i64 = 1_704_067_200;

/// Errors returned by auth operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not authenticated")]
    NotAuthenticated,
}

pub type AuthResult<T> = Result<T, AuthError>;

/// A signed-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Sign-up form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Partial profile edit; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    fn apply_to(self, user: &mut User) {
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = Some(phone);
        }
        if let Some(avatar) = self.avatar {
            user.avatar = Some(avatar);
        }
    }
}

/// Account operations the pages depend on
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in and start a session
    async fn login(&self, email: &str, password: &str) -> AuthResult<User>;

    /// Create an account and start a session
    async fn register(&self, data: RegisterData) -> AuthResult<User>;

    /// End the current session, if any
    async fn logout(&self);

    /// Edit the signed-in user's profile
    async fn update_profile(&self, update: ProfileUpdate) -> AuthResult<User>;

    /// The signed-in user, if any
    async fn current_user(&self) -> Option<User>;

    async fn is_authenticated(&self) -> bool {
        self.current_user().await.is_some()
    }
}

#[derive(Debug, Clone)]
struct Session {
    token: String,
    user: User,
}

/// In-memory auth service with simulated latency
#[derive(Debug)]
pub struct MockAuthService {
    session: RwLock<Option<Session>>,
    latency: Duration,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            session: RwLock::new(None),
            latency,
        }
    }

    /// Token of the current session, if any
    pub async fn token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|session| session.token.clone())
    }

    /// Resume a session from a stored token.
    ///
    /// Any non-empty token resolves to the demo account; an empty one is
    /// discarded.
    pub async fn restore_session(&self, token: &str) -> Option<User> {
        if token.is_empty() {
            return None;
        }
        self.simulate_latency().await;

        let user = demo_user("john@example.com");
        *self.session.write().await = Some(Session {
            token: token.to_string(),
            user: user.clone(),
        });
        debug!("Restored session for {}", user.email);
        Some(user)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn start_session(&self, user: User) -> User {
        *self.session.write().await = Some(Session {
            token: MOCK_TOKEN.to_string(),
            user: user.clone(),
        });
        user
    }
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_user(email: &str) -> User {
    User {
        id: "1".to_string(),
        full_name: "John Doe".to_string(),
        email: email.to_string(),
        phone: Some("08123456789".to_string()),
        avatar: Some("/placeholder.svg?height=100&width=100".to_string()),
        is_verified: true,
        created_at: DateTime::from_timestamp(MOCK_ACCOUNT_CREATED, 0).unwrap_or_default(),
    }
}

fn require(field: &str, value: &str) -> AuthResult<()> {
    if value.trim().is_empty() {
        return Err(AuthError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        require("email", email)?;
        require("password", password)?;
        self.simulate_latency().await;

        let user = self.start_session(demo_user(email.trim())).await;
        info!("Logged in {}", user.email);
        Ok(user)
    }

    async fn register(&self, data: RegisterData) -> AuthResult<User> {
        require("full name", &data.full_name)?;
        require("email", &data.email)?;
        require("password", &data.password)?;
        self.simulate_latency().await;

        let phone = Some(data.phone).filter(|phone| !phone.trim().is_empty());
        let user = User {
            id: "1".to_string(),
            full_name: data.full_name.trim().to_string(),
            email: data.email.trim().to_string(),
            phone,
            avatar: Some("/placeholder.svg?height=100&width=100".to_string()),
            is_verified: false,
            created_at: Utc::now(),
        };
        let user = self.start_session(user).await;
        info!("Registered {}", user.email);
        Ok(user)
    }

    async fn logout(&self) {
        if let Some(session) = self.session.write().await.take() {
            info!("Logged out {}", session.user.email);
        }
    }

    async fn update_profile(&self, update: ProfileUpdate) -> AuthResult<User> {
        if self.session.read().await.is_none() {
            return Err(AuthError::NotAuthenticated);
        }
        self.simulate_latency().await;

        let mut guard = self.session.write().await;
        let session = guard.as_mut().ok_or(AuthError::NotAuthenticated)?;
        update.apply_to(&mut session.user);
        debug!("Updated profile for {}", session.user.email);
        Ok(session.user.clone())
    }

    async fn current_user(&self) -> Option<User> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|session| session.user.clone())
    }
}
