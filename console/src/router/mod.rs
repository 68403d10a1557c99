//! # Router
//!
//! Static route table ([`routes`]) and the pure authorization decision
//! ([`guard::authorize`]), plus a [`Router`] that applies both and remembers
//! where the console currently is.
//!
//! ```text
//! navigate("/") ──► find_route ──► layout redirect ──► authorize ──► location
//!                        ▲                                  │
//!                        └──────── Redirect(path) ◄─────────┘
//! ```

pub mod guard;
pub mod routes;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::error::{ConsoleError, Result};
use crate::core::service::Navigator;
use crate::session::SessionStore;

pub use guard::{authorize, GuardDecision};
pub use routes::{find_route, RouteDescriptor, RouteMeta, View, ROUTES};

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 5;

/// Entries kept in the navigation history.
const HISTORY_LIMIT: usize = 32;

/// Applies the guard against the shared session and tracks the location.
pub struct Router {
    session: Arc<SessionStore>,
    current: RwLock<Option<&'static RouteDescriptor>>,
    history: RwLock<Vec<&'static str>>,
}

impl Router {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            session,
            current: RwLock::new(None),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Resolve `path`, follow redirects and guard decisions, and move there.
    ///
    /// Returns the route finally entered.
    pub fn navigate(&self, path: &str) -> Result<&'static RouteDescriptor> {
        let mut target = path.to_string();

        for _ in 0..=MAX_REDIRECTS {
            let route = find_route(&target).ok_or_else(|| {
                tracing::warn!(path = %target, "Unknown route");
                ConsoleError::RouteNotFound(target.clone())
            })?;

            if let Some(redirect) = route.redirect {
                tracing::debug!(from = route.path, to = redirect, "Layout redirect");
                target = redirect.to_string();
                continue;
            }

            match authorize(&self.session.snapshot(), route) {
                GuardDecision::Allow => {
                    self.enter(route);
                    return Ok(route);
                }
                GuardDecision::Redirect(to) => {
                    tracing::debug!(from = route.path, to, "Guard redirect");
                    target = to.to_string();
                }
            }
        }

        tracing::error!(path, "Redirect loop");
        Err(ConsoleError::RouteNotFound(path.to_string()))
    }

    /// Route last entered.
    pub fn current(&self) -> Option<&'static RouteDescriptor> {
        *self.current.read()
    }

    /// Paths entered so far, oldest first.
    pub fn history(&self) -> Vec<&'static str> {
        self.history.read().clone()
    }

    fn enter(&self, route: &'static RouteDescriptor) {
        *self.current.write() = Some(route);

        let mut history = self.history.write();
        if history.len() == HISTORY_LIMIT {
            history.remove(0);
        }
        history.push(route.path);

        tracing::info!(path = route.path, title = route.meta.title, "Navigated");
    }
}

impl Navigator for Router {
    fn redirect(&self, path: &str) {
        if let Err(e) = self.navigate(path) {
            tracing::warn!(path, error = %e, "Redirect failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionField;

    fn router() -> (Arc<SessionStore>, Router) {
        let session = Arc::new(SessionStore::in_memory());
        let router = Router::new(session.clone());
        (session, router)
    }

    #[test]
    fn test_root_lands_on_login_when_logged_out() {
        let (_, router) = router();
        let route = router.navigate("/").unwrap();
        assert_eq!(route.path, "/login");
        assert_eq!(router.current().map(|r| r.view), Some(View::Login));
    }

    #[test]
    fn test_login_forwards_to_dashboard_when_logged_in() {
        let (session, router) = router();
        session.set_token("t");

        let route = router.navigate("/login").unwrap();
        assert_eq!(route.path, "/dashboard");
    }

    #[test]
    fn test_non_admin_bounced_to_dashboard() {
        let (session, router) = router();
        session.set_token("t");
        session.set_field(SessionField::Permissions(vec!["shop:view".to_string()]));

        assert_eq!(router.navigate("/menus").unwrap().path, "/dashboard");

        session.set_field(SessionField::Permissions(vec!["admin".to_string()]));
        assert_eq!(router.navigate("/menus").unwrap().path, "/menus");
        assert_eq!(router.history(), vec!["/dashboard", "/menus"]);
    }

    #[test]
    fn test_unknown_path() {
        let (_, router) = router();
        assert!(matches!(router.navigate("/missing"), Err(ConsoleError::RouteNotFound(_))));
        assert!(router.current().is_none());
    }
}
