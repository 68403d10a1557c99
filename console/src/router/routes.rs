//! Static route table.

/// Page rendered by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Layout,
    Dashboard,
    Shops,
    Orders,
    Tracking,
    Products,
    Procurement,
    Users,
    Roles,
    Permissions,
    Menus,
    OrgSync,
    Alerts,
    ThemeMigration,
}

/// Guard metadata of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
    pub title: &'static str,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub meta: RouteMeta,
    /// Layout routes forward to their default child.
    pub redirect: Option<&'static str>,
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

const fn page(path: &'static str, name: &'static str, view: View, title: &'static str) -> RouteDescriptor {
    RouteDescriptor {
        path,
        name,
        view,
        meta: RouteMeta {
            requires_auth: true,
            requires_admin: false,
            title,
        },
        redirect: None,
    }
}

const fn admin_page(path: &'static str, name: &'static str, view: View, title: &'static str) -> RouteDescriptor {
    let mut route = page(path, name, view, title);
    route.meta.requires_admin = true;
    route
}

/// Every route the console knows.
pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: LOGIN_PATH,
        name: "Login",
        view: View::Login,
        meta: RouteMeta {
            requires_auth: false,
            requires_admin: false,
            title: "Sign in",
        },
        redirect: None,
    },
    RouteDescriptor {
        path: HOME_PATH,
        name: "Layout",
        view: View::Layout,
        meta: RouteMeta {
            requires_auth: true,
            requires_admin: false,
            title: "Console",
        },
        redirect: Some(DASHBOARD_PATH),
    },
    page(DASHBOARD_PATH, "Dashboard", View::Dashboard, "Overview"),
    page("/shops", "Shops", View::Shops, "Shops"),
    page("/orders", "Orders", View::Orders, "Orders"),
    page("/tracking", "Tracking", View::Tracking, "Tracking"),
    page("/products", "Products", View::Products, "Products"),
    page("/procurement", "Procurement", View::Procurement, "Procurement"),
    admin_page("/users", "Users", View::Users, "Users"),
    admin_page("/roles", "Roles", View::Roles, "Roles"),
    admin_page("/permissions", "Permissions", View::Permissions, "Permissions"),
    admin_page("/menus", "Menus", View::Menus, "Menus"),
    admin_page("/org-sync", "OrgSync", View::OrgSync, "Organization sync"),
    page("/alerts", "Alerts", View::Alerts, "Alert settings"),
    page("/theme-migration", "ThemeMigration", View::ThemeMigration, "Theme migration"),
];

/// Canonical form of a path: leading slash, no trailing slash, no query or fragment.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_matches('/');
    format!("/{}", trimmed)
}

/// Route registered for `path`.
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    let path = normalize_path(path);
    ROUTES.iter().find(|route| route.path == path)
}

/// Route registered under `name`, case-insensitive.
pub fn find_by_name(name: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("dashboard"), "/dashboard");
        assert_eq!(normalize_path("/shops/"), "/shops");
        assert_eq!(normalize_path("/orders?page=2"), "/orders");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_find_route() {
        let route = find_route("/users").unwrap();
        assert_eq!(route.view, View::Users);
        assert!(route.meta.requires_admin);
        assert!(find_route("/nowhere").is_none());
        assert_eq!(find_by_name("orgsync").map(|r| r.path), Some("/org-sync"));
    }

    #[test]
    fn test_only_login_is_public() {
        let public: Vec<_> = ROUTES.iter().filter(|r| !r.meta.requires_auth).map(|r| r.path).collect();
        assert_eq!(public, vec![LOGIN_PATH]);
    }

    #[test]
    fn test_paths_are_unique() {
        for (i, route) in ROUTES.iter().enumerate() {
            assert!(ROUTES[i + 1..].iter().all(|other| other.path != route.path));
        }
    }
}
