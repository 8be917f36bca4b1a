//! Site route table shared by the router, nav bar, and style derivation.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteRoute {
    Home,
    Services,
    Neda,
    Projects,
    Contact,
    Fleet,
    /// Any path outside the table (404 and friends).
    Other,
}

impl SiteRoute {
    /// Routed pages, in sitemap order.
    pub const PAGES: [Self; 6] = [Self::Home, Self::Services, Self::Neda, Self::Projects, Self::Contact, Self::Fleet];

    /// Resolve a location pathname. A single trailing slash is tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        match trimmed {
            "/" | "" => Self::Home,
            "/services" => Self::Services,
            "/neda" => Self::Neda,
            "/projects" => Self::Projects,
            "/contact" => Self::Contact,
            "/fleet" => Self::Fleet,
            _ => Self::Other,
        }
    }

    /// Canonical href. `Other` has none of its own and links home.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home | Self::Other => "/",
            Self::Services => "/services",
            Self::Neda => "/neda",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
            Self::Fleet => "/fleet",
        }
    }

    /// Pages whose top section is a dark hero image.
    #[must_use]
    pub fn has_dark_hero(self) -> bool {
        !matches!(self, Self::Projects | Self::Contact | Self::Services)
    }
}

/// Primary navigation links shown in the bar and the mobile overlay.
pub const NAV_LINKS: [(&str, SiteRoute); 3] = [
    ("Services", SiteRoute::Services),
    ("NEDA Tech", SiteRoute::Neda),
    ("Projects", SiteRoute::Projects),
];
