//! Server-rendered pages
//!
//! Each routed path maps to exactly one [`Page`]. Handlers render a full
//! HTML document through the shared [`layout`].

pub mod home;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod quiz;

/// A routed view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Quiz,
    Login,
    Profile,
    NotFound,
}

impl Page {
    /// Pages reachable through the navigation bar, in display order
    pub const ROUTED: [Page; 4] = [Page::Home, Page::Quiz, Page::Login, Page::Profile];

    /// Resolve a request path to the page that serves it
    ///
    /// A single trailing slash is ignored; anything unknown is `NotFound`.
    pub fn from_path(path: &str) -> Page {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Page::ROUTED
            .into_iter()
            .find(|page| page.path() == trimmed)
            .unwrap_or(Page::NotFound)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Quiz => "/quiz",
            Page::Login => "/login",
            Page::Profile => "/profile",
            Page::NotFound => "",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Quiz => "Quiz",
            Page::Login => "Login",
            Page::Profile => "Profile",
            Page::NotFound => "Not found",
        }
    }

    /// Identifier written to `data-page` on the page's `<main>` element
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Quiz => "quiz",
            Page::Login => "login",
            Page::Profile => "profile",
            Page::NotFound => "not-found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_path_maps_to_its_page() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/quiz"), Page::Quiz);
        assert_eq!(Page::from_path("/login"), Page::Login);
        assert_eq!(Page::from_path("/profile"), Page::Profile);
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(Page::from_path("/quiz/"), Page::Quiz);
        assert_eq!(Page::from_path("/profile/"), Page::Profile);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Page::from_path("/quiz/123"), Page::NotFound);
        assert_eq!(Page::from_path("/admin"), Page::NotFound);
        assert_eq!(Page::from_path(""), Page::NotFound);
    }

    #[test]
    fn test_routed_paths_round_trip() {
        for page in Page::ROUTED {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }
}
