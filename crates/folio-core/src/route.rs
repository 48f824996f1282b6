//! Static path-based routing.
//!
//! The table is data, including the `/` alias for the About page, so it stays
//! the single source of truth for what every path shows.

use thiserror::Error;

/// Identity of a page in the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    About,
    Skills,
    Academics,
    Projects,
    Contact,
    Volunteering,
}

impl PageId {
    /// Canonical path (the one nav links point at).
    pub fn path(self) -> &'static str {
        match self {
            Self::About => "/about",
            Self::Skills => "/skills",
            Self::Academics => "/academics",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
            Self::Volunteering => "/volunteering",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Academics => "Academics",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
            Self::Volunteering => "Volunteering",
        }
    }
}

/// What the content region shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Page(PageId),
    NotFound,
}

impl Screen {
    pub fn page(self) -> Option<PageId> {
        match self {
            Self::Page(page) => Some(page),
            Self::NotFound => None,
        }
    }
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: PageId,
}

impl RouteEntry {
    pub const fn new(path: &'static str, page: PageId) -> Self {
        Self { path, page }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("duplicate route path `{0}`")]
    DuplicatePath(&'static str),
    #[error("route path `{0}` must start with `/`")]
    RelativePath(&'static str),
}

/// The site's routes.
pub const SITE_ROUTES: &[RouteEntry] = &[
    RouteEntry::new("/", PageId::About),
    RouteEntry::new("/about", PageId::About),
    RouteEntry::new("/skills", PageId::Skills),
    RouteEntry::new("/academics", PageId::Academics),
    RouteEntry::new("/projects", PageId::Projects),
    RouteEntry::new("/contact", PageId::Contact),
    RouteEntry::new("/volunteering", PageId::Volunteering),
];

/// An immutable path table with unique, absolute paths.
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: &'static [RouteEntry],
}

impl RouteTable {
    /// Validates `entries` and wraps them.
    pub fn new(entries: &'static [RouteEntry]) -> Result<Self, RouteError> {
        for (i, entry) in entries.iter().enumerate() {
            if !entry.path.starts_with('/') {
                return Err(RouteError::RelativePath(entry.path));
            }
            if entries[..i].iter().any(|e| e.path == entry.path) {
                return Err(RouteError::DuplicatePath(entry.path));
            }
        }
        Ok(Self { entries })
    }

    /// The site's own table.
    pub fn site() -> Self {
        Self {
            entries: SITE_ROUTES,
        }
    }

    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    /// Exact-match lookup.
    pub fn resolve(&self, path: &str) -> Option<PageId> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.page)
    }

    /// Like [`resolve`](Self::resolve), with unmatched paths going to the
    /// not-found screen.
    pub fn screen_for(&self, path: &str) -> Screen {
        self.resolve(path).map_or(Screen::NotFound, Screen::Page)
    }

    /// Each page once, in table order, skipping aliases.
    pub fn nav_entries(&self) -> Vec<PageId> {
        let mut pages = Vec::new();
        for entry in self.entries {
            if !pages.contains(&entry.page) {
                pages.push(entry.page);
            }
        }
        pages
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::site()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_table_is_valid() {
        assert!(RouteTable::new(SITE_ROUTES).is_ok());
    }

    #[test]
    fn test_every_table_path_resolves() {
        let table = RouteTable::site();
        for entry in table.entries() {
            assert_eq!(table.resolve(entry.path), Some(entry.page));
        }
    }

    #[test]
    fn test_root_aliases_about() {
        let table = RouteTable::site();
        assert_eq!(table.resolve("/"), Some(PageId::About));
        assert_eq!(table.resolve("/"), table.resolve("/about"));
    }

    #[test]
    fn test_exact_match_only() {
        let table = RouteTable::site();
        assert_eq!(table.resolve("/projects/"), None);
        assert_eq!(table.resolve("/Projects"), None);
        assert_eq!(table.resolve("projects"), None);
        assert_eq!(table.resolve(""), None);
        assert_eq!(table.screen_for("/nope"), Screen::NotFound);
        assert_eq!(
            table.screen_for("/projects"),
            Screen::Page(PageId::Projects)
        );
    }

    #[test]
    fn test_canonical_paths_round_trip() {
        let table = RouteTable::site();
        for page in table.nav_entries() {
            assert_eq!(table.resolve(page.path()), Some(page));
        }
    }

    #[test]
    fn test_nav_entries_skip_alias() {
        let pages = RouteTable::site().nav_entries();
        assert_eq!(pages.len(), 6);
        assert_eq!(pages[0], PageId::About);
        assert_eq!(pages[5], PageId::Volunteering);
    }

    #[test]
    fn test_rejects_bad_tables() {
        const DUP: &[RouteEntry] = &[
            RouteEntry::new("/a", PageId::About),
            RouteEntry::new("/a", PageId::Skills),
        ];
        const REL: &[RouteEntry] = &[RouteEntry::new("a", PageId::About)];

        assert_eq!(
            RouteTable::new(DUP).unwrap_err(),
            RouteError::DuplicatePath("/a")
        );
        assert_eq!(
            RouteTable::new(REL).unwrap_err(),
            RouteError::RelativePath("a")
        );
    }
}
