//! Route table metadata and the back-navigation rule.
//!
//! Each route declares whether it shows the back control. The prefix rule
//! below is evaluated against the prefixes derived from those flags, so a
//! nested path such as `/products/123` inherits the flag of `/products`.

/// Static description of one page route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    /// Localization key of the page title
    pub title_key: &'static str,
    /// Icon name for the home page menu
    pub icon: &'static str,
    pub shows_back: bool,
    /// Listed on the home page menu
    pub in_menu: bool,
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/home";
pub const INVENTORY_DASHBOARD_PATH: &str = "/inventory-dashboard";

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: LOGIN_PATH,
        title_key: "login",
        icon: "login",
        shows_back: false,
        in_menu: false,
    },
    RouteEntry {
        path: HOME_PATH,
        title_key: "home",
        icon: "home",
        shows_back: false,
        in_menu: false,
    },
    RouteEntry {
        path: "/suppliers",
        title_key: "suppliers",
        icon: "suppliers",
        shows_back: true,
        in_menu: true,
    },
    RouteEntry {
        path: "/products",
        title_key: "products",
        icon: "products",
        shows_back: true,
        in_menu: true,
    },
    RouteEntry {
        path: "/customers",
        title_key: "customers",
        icon: "customers",
        shows_back: true,
        in_menu: true,
    },
    RouteEntry {
        path: "/orders",
        title_key: "orders",
        icon: "orders",
        shows_back: true,
        in_menu: true,
    },
    RouteEntry {
        path: "/sales",
        title_key: "sales",
        icon: "sales",
        shows_back: true,
        in_menu: true,
    },
    RouteEntry {
        path: "/stats",
        title_key: "stats",
        icon: "stats",
        shows_back: true,
        in_menu: true,
    },
    RouteEntry {
        path: INVENTORY_DASHBOARD_PATH,
        title_key: "inventory_dashboard",
        icon: "inventory",
        shows_back: true,
        in_menu: true,
    },
];

/// True iff `current_path` starts with at least one of `prefixes`.
///
/// Plain case-sensitive string prefix match, no wildcards. An empty set
/// matches nothing; a `/` prefix matches everything.
pub fn should_show_back<S: AsRef<str>>(current_path: &str, prefixes: &[S]) -> bool {
    prefixes
        .iter()
        .any(|prefix| current_path.starts_with(prefix.as_ref()))
}

/// Paths of every route flagged with `shows_back`, in table order.
pub fn back_prefixes() -> Vec<&'static str> {
    ROUTES
        .iter()
        .filter(|route| route.shows_back)
        .map(|route| route.path)
        .collect()
}

/// The rule applied to the route table.
pub fn shows_back_for(current_path: &str) -> bool {
    should_show_back(current_path, &back_prefixes())
}

pub fn find_route(path: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|route| route.path == path)
}

pub fn menu_routes() -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(|route| route.in_menu)
}
