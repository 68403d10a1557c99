//! # Session Store
//!
//! Token, identity, permissions and the current shop selection, shared by the
//! HTTP layer, the router and the CLI through an `Arc<SessionStore>`.
//!
//! Each field is mirrored into [`Storage`] under a fixed key (see [`keys`]).
//! The list of permissions is stored as a JSON array. A store whose storage
//! refuses writes keeps working from memory.
//!
//! ## Lifecycle
//!
//! - [`SessionStore::restore`] at startup
//! - [`SessionStore::login`] replaces every field
//! - [`SessionStore::logout`] clears every field and persisted key
//! - [`SessionStore::expire`] drops the credentials after a 401

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{LoginRequest, LoginResponse, ShopSummary, UserInfo};

use crate::core::error::Result;
use crate::core::service::{AuthService, ShopDirectory};
use crate::storage::{MemoryStorage, Storage};

/// Persisted key names.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USERNAME: &str = "username";
    pub const DISPLAY_NAME: &str = "displayName";
    pub const AVATAR: &str = "avatar";
    pub const PERMISSIONS: &str = "permissions";
    pub const CURRENT_SHOP_ID: &str = "currentShopId";

    pub const ALL: [&str; 6] = [TOKEN, USERNAME, DISPLAY_NAME, AVATAR, PERMISSIONS, CURRENT_SHOP_ID];
}

/// Permission codes that grant every admin route.
const ADMIN_PERMISSIONS: [&str; 2] = ["*", "admin"];

/// Authenticated user's identity, token, permissions and shop selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    /// Ordered, without duplicates.
    pub permissions: Vec<String>,
    pub current_shop_id: Option<i64>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.iter().any(|p| p == code)
    }

    pub fn is_admin(&self) -> bool {
        ADMIN_PERMISSIONS.iter().any(|code| self.has_permission(code))
    }

    fn from_login(response: &LoginResponse) -> Self {
        Self {
            token: Some(response.token.clone()),
            username: response.username.clone(),
            display_name: response.display_name().to_string(),
            avatar: response.avatar.clone().filter(|a| !a.is_empty()),
            permissions: dedup_ordered(&response.permissions),
            current_shop_id: None,
        }
    }
}

/// Single-field patch applied through [`SessionStore::set_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionField {
    Token(Option<String>),
    Username(String),
    DisplayName(String),
    Avatar(Option<String>),
    Permissions(Vec<String>),
    CurrentShopId(Option<i64>),
}

/// Session plus the accessible-shops cache, mirrored field by field into storage.
///
/// Locks are held only for the duration of a field copy, never across a
/// collaborator call.
pub struct SessionStore {
    session: RwLock<Session>,
    shops: RwLock<Vec<ShopSummary>>,
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    /// Rebuild the session from whatever `storage` holds.
    pub fn restore(storage: Arc<dyn Storage>) -> Self {
        let username = storage.get(keys::USERNAME).unwrap_or_default();
        let display_name = storage
            .get(keys::DISPLAY_NAME)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| username.clone());

        let permissions = match storage.get(keys::PERMISSIONS) {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Discarding unreadable persisted permissions");
                Vec::new()
            }),
            None => Vec::new(),
        };

        let current_shop_id = storage
            .get(keys::CURRENT_SHOP_ID)
            .and_then(|raw| raw.trim().parse::<i64>().ok());

        let session = Session {
            token: storage.get(keys::TOKEN).filter(|t| !t.is_empty()),
            username,
            display_name,
            avatar: storage.get(keys::AVATAR).filter(|a| !a.is_empty()),
            permissions: dedup_ordered(&permissions),
            current_shop_id,
        };

        tracing::debug!(
            logged_in = session.is_logged_in(),
            username = %session.username,
            current_shop_id = ?session.current_shop_id,
            persistent = storage.is_persistent(),
            "Session restored"
        );

        Self {
            session: RwLock::new(session),
            shops: RwLock::new(Vec::new()),
            storage,
        }
    }

    /// Empty session that is never persisted.
    pub fn in_memory() -> Self {
        Self::restore(Arc::new(MemoryStorage::new()))
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token.clone().filter(|t| !t.is_empty())
    }

    pub fn current_shop_id(&self) -> Option<i64> {
        self.session.read().current_shop_id
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in()
    }

    pub fn has_permission(&self, code: &str) -> bool {
        self.session.read().has_permission(code)
    }

    pub fn is_admin(&self) -> bool {
        self.session.read().is_admin()
    }

    /// Authenticate through `auth` and replace the whole session with the result.
    ///
    /// Collaborator errors are returned unchanged and leave the session untouched.
    #[tracing::instrument(skip(self, auth, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, auth: &dyn AuthService, credentials: LoginRequest) -> Result<Session> {
        let response = auth.login(&credentials).await?;
        let session = Session::from_login(&response);

        *self.session.write() = session.clone();
        self.shops.write().clear();
        self.persist_all(&session);

        tracing::info!(
            username = %session.username,
            permissions = session.permissions.len(),
            "Logged in"
        );
        Ok(session)
    }

    /// Clear every field and its persisted copy.
    pub fn logout(&self) {
        let username = std::mem::take(&mut *self.session.write()).username;
        self.shops.write().clear();

        for key in keys::ALL {
            if !self.storage.remove(key) {
                tracing::warn!(key, "Could not remove persisted session key");
            }
        }

        tracing::info!(username = %username, "Logged out");
    }

    /// Drop the credentials after the backend rejected them.
    ///
    /// Token and username go; the rest stays until the next login overwrites it.
    pub fn expire(&self) {
        {
            let mut session = self.session.write();
            session.token = None;
            session.username.clear();
        }
        self.storage.remove(keys::TOKEN);
        self.storage.remove(keys::USERNAME);
        tracing::warn!("Session expired, credentials cleared");
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.set_field(SessionField::Token(Some(token).filter(|t| !t.is_empty())));
    }

    pub fn set_user_info(&self, info: &UserInfo) {
        self.set_field(SessionField::Username(info.username.clone()));
        self.set_field(SessionField::DisplayName(info.display_name().to_string()));
        self.set_field(SessionField::Avatar(info.avatar.clone().filter(|a| !a.is_empty())));
    }

    /// Patch one field and persist it.
    pub fn set_field(&self, field: SessionField) {
        {
            let mut session = self.session.write();
            match &field {
                SessionField::Token(token) => session.token = token.clone(),
                SessionField::Username(name) => session.username = name.clone(),
                SessionField::DisplayName(name) => session.display_name = name.clone(),
                SessionField::Avatar(avatar) => session.avatar = avatar.clone(),
                SessionField::Permissions(perms) => session.permissions = dedup_ordered(perms),
                SessionField::CurrentShopId(id) => session.current_shop_id = *id,
            }
        }

        let persisted = match field {
            SessionField::Token(token) => self.store_optional(keys::TOKEN, token.as_deref()),
            SessionField::Username(name) => self.storage.set(keys::USERNAME, &name),
            SessionField::DisplayName(name) => self.storage.set(keys::DISPLAY_NAME, &name),
            SessionField::Avatar(avatar) => self.store_optional(keys::AVATAR, avatar.as_deref()),
            SessionField::Permissions(_) => {
                let perms = self.session.read().permissions.clone();
                self.store_permissions(&perms)
            }
            SessionField::CurrentShopId(id) => {
                self.store_optional(keys::CURRENT_SHOP_ID, id.map(|id| id.to_string()).as_deref())
            }
        };

        if !persisted {
            tracing::warn!("Session field kept in memory only");
        }
    }

    /// Refresh the accessible-shops cache.
    ///
    /// A selection that is no longer in the list becomes `None`.
    #[tracing::instrument(skip(self, directory))]
    pub async fn load_accessible_shops(&self, directory: &dyn ShopDirectory) -> Result<Vec<ShopSummary>> {
        let shops = directory.accessible_shops().await?;

        let selected = self.current_shop_id();
        if let Some(id) = selected {
            if !shops.iter().any(|shop| shop.id == id) {
                tracing::warn!(shop_id = id, "Selected shop no longer accessible, clearing selection");
                self.switch_shop(None);
            }
        }

        *self.shops.write() = shops.clone();
        tracing::debug!(count = shops.len(), "Accessible shops loaded");
        Ok(shops)
    }

    /// Cached shop list from the last [`Self::load_accessible_shops`].
    pub fn accessible_shops(&self) -> Vec<ShopSummary> {
        self.shops.read().clone()
    }

    /// Shop currently selected, if it is in the cache.
    pub fn current_shop(&self) -> Option<ShopSummary> {
        let id = self.current_shop_id()?;
        self.shops.read().iter().find(|shop| shop.id == id).cloned()
    }

    /// Change the shop selection. Open views are not refreshed.
    pub fn switch_shop(&self, shop_id: Option<i64>) {
        self.set_field(SessionField::CurrentShopId(shop_id));
        tracing::info!(shop_id = ?shop_id, "Shop context switched");
    }

    fn persist_all(&self, session: &Session) {
        let results = [
            self.store_optional(keys::TOKEN, session.token.as_deref()),
            self.storage.set(keys::USERNAME, &session.username),
            self.storage.set(keys::DISPLAY_NAME, &session.display_name),
            self.store_optional(keys::AVATAR, session.avatar.as_deref()),
            self.store_permissions(&session.permissions),
            self.store_optional(keys::CURRENT_SHOP_ID, None),
        ];

        if results.iter().any(|ok| !ok) {
            tracing::warn!("Session kept in memory only, storage refused a write");
        }
    }

    fn store_optional(&self, key: &str, value: Option<&str>) -> bool {
        match value {
            Some(value) => self.storage.set(key, value),
            None => self.storage.remove(key),
        }
    }

    fn store_permissions(&self, permissions: &[String]) -> bool {
        match serde_json::to_string(permissions) {
            Ok(json) => self.storage.set(keys::PERMISSIONS, &json),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode permissions");
                false
            }
        }
    }
}

fn dedup_ordered(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
