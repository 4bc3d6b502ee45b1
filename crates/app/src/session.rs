//! Admin session: API token plus the signed-in user.
//!
//! Persisted under [`TOKEN_KEY`] (raw token) and [`USER_KEY`] (JSON user). A
//! session only counts when both are present and the user decodes.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use doudou_client::{AdminBackend, AdminUser, AuthGrant, FallbackExt, NetworkError, Sourced};

use crate::store::{load_json, save_json, KeyValueStore, StoreError, StoreResult};

pub const TOKEN_KEY: &str = "admin_token";
pub const USER_KEY: &str = "admin_user";

/// Credentials that still sign in when the backend cannot be reached.
pub const DEMO_EMAIL: &str = "admin@doudou.com";
pub const DEMO_PASSWORD: &str = "admin123";

#[derive(Debug, Error)]
pub enum LoginError {
    /// Message shown on the login form.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl LoginError {
    fn from_network(error: &NetworkError) -> Self {
        let message = match error {
            NetworkError::Status { detail: Some(detail), .. } => detail.clone(),
            NetworkError::Status { status: 401, .. } => "Invalid email or password".to_string(),
            NetworkError::Transport(_) | NetworkError::Timeout => {
                "Network error. Is the backend running?".to_string()
            }
            NetworkError::Status { .. } | NetworkError::Decode(_) => "Login failed".to_string(),
        };
        LoginError::Rejected(message)
    }
}

fn demo_grant(now: DateTime<Utc>) -> AuthGrant {
    AuthGrant {
        token: format!("mock-token-demo-{}", now.timestamp_millis()),
        user: AdminUser { email: DEMO_EMAIL.to_string(), role: "ADMIN".to_string() },
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSession {
    grant: Option<AuthGrant>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the stored session. A stored user that does not decode clears both keys.
    pub fn restore<S: KeyValueStore + ?Sized>(store: &mut S) -> StoreResult<Self> {
        let token = store.get(TOKEN_KEY)?;
        let user = match load_json::<AdminUser, _>(&*store, USER_KEY) {
            Ok(user) => user,
            Err(StoreError::Serde { .. }) => {
                warn!("stored admin user is corrupt, clearing session");
                store.remove(TOKEN_KEY)?;
                store.remove(USER_KEY)?;
                None
            }
            Err(e) => return Err(e),
        };

        let grant = match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => Some(AuthGrant { token, user }),
            _ => None,
        };
        Ok(Self { grant })
    }

    pub fn is_authenticated(&self) -> bool {
        self.grant.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.grant.as_ref().map(|g| g.token.as_str())
    }

    pub fn user(&self) -> Option<&AdminUser> {
        self.grant.as_ref().map(|g| &g.user)
    }

    /// Sign in and persist the session.
    ///
    /// With the demo credentials a backend failure still signs in, through the
    /// fallback path, with a `mock-token-demo-<millis>` token.
    pub async fn login<B, S>(
        &mut self,
        backend: &B,
        store: &mut S,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Sourced<AdminUser>, LoginError>
    where
        B: AdminBackend + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let result = backend.login(email, password).await;
        let grant = if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            result.or_fallback("admin login", || demo_grant(now))
        } else {
            Sourced::Remote(result.map_err(|e| LoginError::from_network(&e))?)
        };

        store.set(TOKEN_KEY, grant.value().token.clone())?;
        save_json(store, USER_KEY, &grant.value().user)?;
        info!(
            email = %grant.value().user.email,
            fallback = grant.is_fallback(),
            "admin session started"
        );

        let user = grant.clone().map(|g| g.user);
        self.grant = Some(grant.into_inner());
        Ok(user)
    }

    pub fn logout<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> StoreResult<()> {
        self.grant = None;
        store.remove(TOKEN_KEY)?;
        store.remove(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;
    use doudou_admin::{DashboardStats, Order, OrderStatus};
    use doudou_core::OrderId;

    /// Backend whose login answers with a fixed result.
    struct LoginOnly(Result<AuthGrant, NetworkError>);

    #[async_trait::async_trait]
    impl AdminBackend for LoginOnly {
        async fn login(&self, _email: &str, _password: &str) -> Result<AuthGrant, NetworkError> {
            self.0.clone()
        }

        async fn dashboard_stats(&self, _token: &str) -> Result<DashboardStats, NetworkError> {
            Err(NetworkError::Timeout)
        }

        async fn orders(&self, _token: &str) -> Result<Vec<Order>, NetworkError> {
            Err(NetworkError::Timeout)
        }

        async fn order(&self, _token: &str, _id: OrderId) -> Result<Order, NetworkError> {
            Err(NetworkError::Timeout)
        }

        async fn update_order_status(
            &self,
            _token: &str,
            _id: OrderId,
            _status: OrderStatus,
        ) -> Result<Order, NetworkError> {
            Err(NetworkError::Timeout)
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    fn grant() -> AuthGrant {
        AuthGrant {
            token: "abc".to_string(),
            user: AdminUser { email: "ops@doudou.md".to_string(), role: "admin".to_string() },
        }
    }

    #[tokio::test]
    async fn login_persists_both_keys() {
        let mut store = MemoryStore::new();
        let mut session = AdminSession::new();
        let user = session
            .login(&LoginOnly(Ok(grant())), &mut store, "ops@doudou.md", "pw", now())
            .await
            .unwrap();

        assert!(!user.is_fallback());
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        let restored = AdminSession::restore(&mut store).unwrap();
        assert_eq!(restored, session);
    }

    #[tokio::test]
    async fn demo_credentials_survive_a_dead_backend() {
        let mut store = MemoryStore::new();
        let mut session = AdminSession::new();
        let backend = LoginOnly(Err(NetworkError::Transport("refused".into())));

        let user = session
            .login(&backend, &mut store, DEMO_EMAIL, DEMO_PASSWORD, now())
            .await
            .unwrap();

        assert!(user.is_fallback());
        assert_eq!(user.value().role, "ADMIN");
        assert_eq!(session.token(), Some("mock-token-demo-1700000000123"));
    }

    #[tokio::test]
    async fn rejection_messages() {
        let mut store = MemoryStore::new();
        let mut session = AdminSession::new();

        let unauthorized = LoginOnly(Err(NetworkError::Status { status: 401, detail: None }));
        let err = session
            .login(&unauthorized, &mut store, "x@y.z", "bad", now())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");

        let detailed = LoginOnly(Err(NetworkError::Status {
            status: 400,
            detail: Some("Account disabled.".to_string()),
        }));
        let err = session.login(&detailed, &mut store, "x@y.z", "bad", now()).await.unwrap_err();
        assert_eq!(err.to_string(), "Account disabled.");

        assert!(!session.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_user_clears_the_session() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "abc".to_string()).unwrap();
        store.set(USER_KEY, "{broken".to_string()).unwrap();

        let session = AdminSession::restore(&mut store).unwrap();
        assert!(!session.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn token_without_user_is_not_a_session() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "abc".to_string()).unwrap();
        assert!(!AdminSession::restore(&mut store).unwrap().is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_storage() {
        let mut store = MemoryStore::new();
        let mut session = AdminSession::new();
        session
            .login(&LoginOnly(Ok(grant())), &mut store, "ops@doudou.md", "pw", now())
            .await
            .unwrap();

        session.logout(&mut store).unwrap();
        assert!(!session.is_authenticated());
        assert!(store.is_empty());
    }
}
