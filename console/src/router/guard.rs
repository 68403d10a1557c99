//! Navigation guard.

use super::routes::{RouteDescriptor, DASHBOARD_PATH, HOME_PATH, LOGIN_PATH};
use crate::session::Session;

/// Outcome of [`authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide whether `session` may enter `route`.
///
/// Rules, first match wins:
/// 1. auth required and logged out: `/login`
/// 2. `/login` while logged in: `/`
/// 3. admin required and not admin: `/dashboard`
pub fn authorize(session: &Session, route: &RouteDescriptor) -> GuardDecision {
    let logged_in = session.is_logged_in();

    if route.meta.requires_auth && !logged_in {
        GuardDecision::Redirect(LOGIN_PATH)
    } else if route.path == LOGIN_PATH && logged_in {
        GuardDecision::Redirect(HOME_PATH)
    } else if route.meta.requires_admin && !session.is_admin() {
        GuardDecision::Redirect(DASHBOARD_PATH)
    } else {
        GuardDecision::Allow
    }
}
