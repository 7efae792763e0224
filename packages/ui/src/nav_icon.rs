use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::icons::{
    FaBookmark, FaCircleQuestion, FaGear, FaHouse, FaMagnifyingGlass, FaPenToSquare,
    FaRightToBracket,
};
use crate::Icon;

/// Icons available to sidebar links. Written in kebab-case in `summarist.toml`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    Home,
    Library,
    Highlights,
    Search,
    Settings,
    Help,
    Login,
}

/// Mouse cursor shown over a sidebar link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    #[default]
    Pointer,
    NotAllowed,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::NotAllowed => "not-allowed",
        }
    }
}

#[component]
pub fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon { icon: FaHouse, width: 20, height: 20 } },
        NavIcon::Library => rsx! { Icon { icon: FaBookmark, width: 20, height: 20 } },
        NavIcon::Highlights => rsx! { Icon { icon: FaPenToSquare, width: 20, height: 20 } },
        NavIcon::Search => rsx! { Icon { icon: FaMagnifyingGlass, width: 20, height: 20 } },
        NavIcon::Settings => rsx! { Icon { icon: FaGear, width: 20, height: 20 } },
        NavIcon::Help => rsx! { Icon { icon: FaCircleQuestion, width: 20, height: 20 } },
        NavIcon::Login => rsx! { Icon { icon: FaRightToBracket, width: 20, height: 20 } },
    }
}
