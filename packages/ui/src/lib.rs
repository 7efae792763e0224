//! This crate contains all shared UI for the workspace.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `auth` | [`AuthProvider`], [`AuthStatus`] and the auth hooks. |
//! | `auth_flow` | Modal form state and the actions it runs against the identity provider. |
//! | `auth_modal` | [`AuthModal`] component. |
//! | `login_button` | [`LoginButton`] in its landing and auth-aware variants. |
//! | `sidebar` | [`LeftSidebar`] and link grouping. |
//! | `highlights` | Rotating highlight phrases used by the landing page. |
//! | `config` | [`AppConfig`], parsed from `summarist.toml`. |
//! | `navigation` | Full-page navigation and alerts, behind the [`Navigate`] trait. |

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const LOGO: Asset = asset!("/assets/logo.svg");
pub const LANDING_IMAGE: Asset = asset!("/assets/landing.svg");

pub mod views;
pub use views::Landing;

pub mod config;
pub use config::{AppConfig, SidebarConfig};

mod auth;
pub use auth::{use_auth, use_auth_config, use_identity, AuthProvider, AuthStatus};

pub mod auth_flow;
pub use auth_flow::{AuthForm, ModalMode};

mod auth_modal;
pub use auth_modal::AuthModal;

mod login_button;
pub use login_button::LoginButton;

mod nav_icon;
pub use nav_icon::{Cursor, NavIcon};

mod sidebar;
pub use sidebar::{partition_links, LeftSidebar, SidebarLink, FOOTER_LABELS};

pub mod highlights;

mod navigation;
pub use navigation::{BrowserNavigator, Navigate};
