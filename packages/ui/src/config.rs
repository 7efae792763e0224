//! # Application configuration: `summarist.toml`
//!
//! The web binary embeds `summarist.toml` at build time and hands it to [`AppConfig::load`].
//!
//! ```toml
//! [identity]
//! api_key = ""                 # empty = offline accounts
//!
//! [auth]
//! redirect_url = "https://summarist.vercel.app/for-you"
//!
//! [auth.guest]
//! email = "guest@gmail.com"
//! password = "guest123"
//!
//! [[sidebar.links]]
//! icon = "home"
//! route = "/for-you"
//! label = "For You"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config: identity service, auth behaviour, sidebar. |
//! | [`SidebarConfig`] | Ordered sidebar links. Defaults to the six stock entries. |
//!
//! A missing section means its defaults. `SUMMARIST_API_KEY` and
//! `SUMMARIST_REDIRECT_URL` override the file.

use api::{AuthConfig, IdentityConfig};
use serde::{Deserialize, Serialize};

use crate::nav_icon::{Cursor, NavIcon};
use crate::sidebar::SidebarLink;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub sidebar: SidebarConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SidebarConfig {
    #[serde(default = "default_links")]
    pub links: Vec<SidebarLink>,
}

fn default_links() -> Vec<SidebarLink> {
    vec![
        SidebarLink::new(NavIcon::Home, "/for-you", "For You", Cursor::Pointer),
        SidebarLink::new(NavIcon::Library, "/library", "My Library", Cursor::NotAllowed),
        SidebarLink::new(NavIcon::Highlights, "/highlights", "Highlights", Cursor::NotAllowed),
        SidebarLink::new(NavIcon::Search, "/search", "Search", Cursor::NotAllowed),
        SidebarLink::new(NavIcon::Settings, "/settings", "Settings", Cursor::NotAllowed),
        SidebarLink::new(NavIcon::Help, "/help", "Help & Support", Cursor::NotAllowed),
    ]
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            links: default_links(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "summarist.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse the embedded file and apply environment overrides.
    /// An unreadable file falls back to the defaults.
    pub fn load(embedded: &str) -> Self {
        let config = Self::from_toml(embedded).unwrap_or_else(|e| {
            tracing::error!("Invalid {}: {}", Self::filename(), e);
            Self::default()
        });

        Self {
            identity: config.identity.with_env_overrides(),
            auth: config.auth.with_env_overrides(),
            sidebar: config.sidebar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.sidebar.links.len(), 6);
        assert!(config.auth.guest.is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let config = AppConfig::from_toml(
            r#"
            [identity]
            api_key = "key-123"

            [auth]
            redirect_url = "http://localhost:8080/for-you"

            [auth.guest]
            email = "guest@gmail.com"
            password = "guest123"

            [[sidebar.links]]
            icon = "search"
            route = "/search"
            label = "Search"
            cursor = "not-allowed"

            [[sidebar.links]]
            icon = "help"
            route = "/help"
            label = "Help & Support"
            "#,
        )
        .unwrap();

        assert_eq!(config.identity.api_key, "key-123");
        assert!(config.identity.is_hosted());
        assert_eq!(config.auth.redirect_url, "http://localhost:8080/for-you");
        assert_eq!(config.auth.guest.as_ref().unwrap().email, "guest@gmail.com");

        let links = &config.sidebar.links;
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].icon, NavIcon::Search);
        assert_eq!(links[0].cursor, Cursor::NotAllowed);
        assert_eq!(links[1].cursor, Cursor::Pointer);
        assert!(links[1].is_footer());
    }

    #[test]
    fn test_default_links_order() {
        let labels: Vec<String> = default_links().into_iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec!["For You", "My Library", "Highlights", "Search", "Settings", "Help & Support"]
        );
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let config = AppConfig::load("[auth\nredirect_url = ");
        assert_eq!(config.sidebar, SidebarConfig::default());
        assert!(config.auth.guest.is_none());
    }
}
