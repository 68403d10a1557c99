//! # Console Context
//!
//! [`Console`] owns everything a running console needs: configuration,
//! session store, router, notification center and API client. It is created
//! once with [`Console::init`], passed by reference to whatever drives it
//! (the CLI, tests, an embedding UI) and torn down with [`Console::shutdown`].
//!
//! ```text
//! Console
//! ├── SessionStore ◄─────────┬──────────────┐
//! ├── Router ──── reads ─────┘              │
//! ├── NotificationCenter                    │
//! └── ApiClient ── reads/expires ───────────┘
//!        └── redirects through Router, notifies through NotificationCenter
//! ```

use std::sync::Arc;

use shared::{LoginRequest, ShopSummary};
use tracing_appender::non_blocking::WorkerGuard;

use crate::core::config::ConsoleConfig;
use crate::core::error::{ConsoleError, Result};
use crate::debug;
use crate::notifications::NotificationCenter;
use crate::router::routes::{HOME_PATH, LOGIN_PATH};
use crate::router::{RouteDescriptor, Router};
use crate::services::api::ApiClient;
use crate::session::{Session, SessionStore};
use crate::storage::{open_storage, Storage};

/// Running console.
pub struct Console {
    config: ConsoleConfig,
    session: Arc<SessionStore>,
    router: Arc<Router>,
    notifications: Arc<NotificationCenter>,
    api: ApiClient,
    log_guard: Option<WorkerGuard>,
}

impl Console {
    /// Start logging, open session storage and wire the collaborators.
    pub fn init(config: ConsoleConfig) -> Result<Self> {
        let log_guard = debug::init(&config);
        let storage = open_storage(config.storage_path.as_deref());
        let mut console = Self::with_storage(config, storage)?;
        console.log_guard = log_guard;
        Ok(console)
    }

    /// Wire a console over an explicit storage, without touching logging.
    pub fn with_storage(config: ConsoleConfig, storage: Arc<dyn Storage>) -> Result<Self> {
        let session = Arc::new(SessionStore::restore(storage));
        let router = Arc::new(Router::new(session.clone()));
        let notifications = Arc::new(NotificationCenter::new());
        let api = ApiClient::new(&config, session.clone(), router.clone(), notifications.clone())?;

        tracing::info!(
            api_base_url = %config.api_base_url,
            logged_in = session.is_logged_in(),
            "Console initialized"
        );

        Ok(Self {
            config,
            session,
            router,
            notifications,
            api,
            log_guard: None,
        })
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Log in, load the accessible shops and land on the home route.
    ///
    /// A failure to load shops does not undo the login.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let credentials = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };

        let session = match self.session.login(&self.api, credentials).await {
            Ok(session) => session,
            Err(err) => {
                // Transport and backend failures were already announced by the client.
                if matches!(err, ConsoleError::Validation(_)) {
                    self.notifications.error(err.notice());
                }
                return Err(err);
            }
        };

        self.notifications
            .success(format!("Welcome back, {}", session.display_name));

        if let Err(e) = self.session.load_accessible_shops(&self.api).await {
            tracing::warn!(error = %e, "Shops could not be loaded after login");
        }

        self.router.navigate(HOME_PATH)?;
        Ok(session)
    }

    /// Clear the session and return to the login route.
    pub fn logout(&self) -> Result<()> {
        self.session.logout();
        self.notifications.info("Logged out");
        self.router.navigate(LOGIN_PATH).map(|_| ())
    }

    /// Reload the shops the current user may operate on.
    pub async fn refresh_shops(&self) -> Result<Vec<ShopSummary>> {
        if !self.session.is_logged_in() {
            return Err(ConsoleError::Unauthenticated("not logged in".to_string()));
        }
        self.session.load_accessible_shops(&self.api).await
    }

    /// Select the shop to operate on; `None` clears the selection.
    ///
    /// The shop must be in the accessible list, which is loaded if still empty.
    pub async fn switch_shop(&self, shop_id: Option<i64>) -> Result<Option<ShopSummary>> {
        let Some(id) = shop_id else {
            self.session.switch_shop(None);
            return Ok(None);
        };

        let mut shops = self.session.accessible_shops();
        if shops.is_empty() {
            shops = self.refresh_shops().await?;
        }

        let shop = shops
            .into_iter()
            .find(|shop| shop.id == id)
            .ok_or_else(|| ConsoleError::Validation(format!("Shop {} is not accessible", id)))?;

        self.session.switch_shop(Some(id));
        self.notifications.info(format!("Now operating on {}", shop.shop_name));
        Ok(Some(shop))
    }

    /// Navigate to `path`, applying redirects and the guard.
    pub fn open(&self, path: &str) -> Result<&'static RouteDescriptor> {
        self.router.navigate(path)
    }

    /// Flush logs and release resources. Session data stays persisted.
    pub fn shutdown(self) {
        tracing::info!(
            logged_in = self.session.is_logged_in(),
            pending_notices = self.notifications.len(),
            "Console shutting down"
        );
        drop(self.log_guard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn offline_console() -> Console {
        let config = ConsoleConfig::default()
            .with_base_url("http://127.0.0.1:9/api/v1")
            .unwrap();
        Console::with_storage(config, Arc::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn test_open_without_session_lands_on_login() {
        let console = offline_console();
        assert_eq!(console.open("/orders").unwrap().path, LOGIN_PATH);
    }

    #[tokio::test]
    async fn test_blank_credentials_rejected_locally() {
        let console = offline_console();

        let err = console.login("  ", "secret").await.unwrap_err();

        assert!(matches!(err, ConsoleError::Validation(_)));
        assert_eq!(console.notifications().drain()[0].message, "Username is required");
    }

    #[tokio::test]
    async fn test_clear_shop_selection_needs_no_backend() {
        let console = offline_console();
        console.session().switch_shop(Some(4));

        assert_eq!(console.switch_shop(None).await.unwrap(), None);
        assert_eq!(console.session().current_shop_id(), None);
    }

    #[tokio::test]
    async fn test_login_flow_lands_on_dashboard_with_shops() {
        use axum::routing::{get, post};
        use axum::{Json, Router as AxumRouter};
        use serde_json::json;

        let routes = AxumRouter::new()
            .route(
                "/auth/login",
                post(|| async {
                    Json(json!({"code": 200, "data": {"token": "tok", "username": "ops", "permissions": ["order:view"]}}))
                }),
            )
            .route(
                "/user-shops/list",
                get(|| async { Json(json!({"code": 200, "data": [{"id": 3, "shopName": "Gamma"}]})) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, AxumRouter::new().nest("/api/v1", routes))
                .await
                .unwrap();
        });

        let config = ConsoleConfig::default()
            .with_base_url(&format!("http://{}/api/v1", addr))
            .unwrap();
        let console = Console::with_storage(config, Arc::new(MemoryStorage::new())).unwrap();

        let session = console.login("ops", "pw").await.unwrap();
        assert_eq!(session.display_name, "ops");
        assert_eq!(console.router().current().map(|r| r.path), Some("/dashboard"));
        assert_eq!(console.session().accessible_shops().len(), 1);

        let shop = console.switch_shop(Some(3)).await.unwrap();
        assert_eq!(shop.map(|s| s.shop_name), Some("Gamma".to_string()));
        assert!(console.switch_shop(Some(8)).await.is_err());
        assert_eq!(console.session().current_shop_id(), Some(3));

        assert_eq!(console.open("/users").unwrap().path, "/dashboard");
    }

    #[test]
    fn test_logout_returns_to_login() {
        let console = offline_console();
        console.session().set_token("t");

        console.logout().unwrap();

        assert!(!console.session().is_logged_in());
        assert_eq!(console.router().current().map(|r| r.path), Some(LOGIN_PATH));
    }
}
