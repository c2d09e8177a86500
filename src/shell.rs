//! Application shell
//!
//! Static layout data: brand, sidebar navigation and footer text.

/// Brand shown at the top of the sidebar
pub const BRAND: &str = "Analytics";

/// Icon shown next to each navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    TrendingUp,
    Users,
    Settings,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Home => "🏠",
            NavIcon::TrendingUp => "📈",
            NavIcon::Users => "👥",
            NavIcon::Settings => "⚙️",
        }
    }
}

/// A sidebar navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRoute {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl NavRoute {
    /// Only the overview renders the dashboard; the other links point at
    /// pages this application does not provide.
    pub fn is_implemented(&self) -> bool {
        self.href == "/"
    }
}

/// Sidebar entries, top to bottom
pub const NAV_ROUTES: [NavRoute; 4] = [
    NavRoute {
        href: "/",
        label: "Overview",
        icon: NavIcon::Home,
    },
    NavRoute {
        href: "/dashboard",
        label: "Dashboard",
        icon: NavIcon::TrendingUp,
    },
    NavRoute {
        href: "/users",
        label: "Users",
        icon: NavIcon::Users,
    },
    NavRoute {
        href: "/settings",
        label: "Settings",
        icon: NavIcon::Settings,
    },
];

/// Look up the navigation entry for a path
pub fn route_for(path: &str) -> Option<&'static NavRoute> {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    NAV_ROUTES.iter().find(|r| r.href == path)
}

/// Navigation entry for a path that is linked but has no page of its own
pub fn placeholder_for(path: &str) -> Option<&'static NavRoute> {
    route_for(path).filter(|r| !r.is_implemented())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_distinct_routes() {
        let hrefs: HashSet<_> = NAV_ROUTES.iter().map(|r| r.href).collect();
        assert_eq!(hrefs.len(), 4);
    }

    #[test]
    fn test_only_overview_is_implemented() {
        let implemented: Vec<_> = NAV_ROUTES
            .iter()
            .filter(|r| r.is_implemented())
            .map(|r| r.label)
            .collect();
        assert_eq!(implemented, ["Overview"]);
    }

    #[test]
    fn test_route_for() {
        assert_eq!(route_for("/").map(|r| r.label), Some("Overview"));
        assert_eq!(route_for("/users/").map(|r| r.label), Some("Users"));
        assert_eq!(route_for("").map(|r| r.href), Some("/"));
        assert!(route_for("/reports").is_none());
    }

    #[test]
    fn test_placeholder_for() {
        assert_eq!(placeholder_for("/users").map(|r| r.label), Some("Users"));
        assert_eq!(
            placeholder_for("/dashboard/").map(|r| r.label),
            Some("Dashboard")
        );
        assert!(placeholder_for("/").is_none());
        assert!(placeholder_for("/reports").is_none());
    }
}
