use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::login_button::LoginButton;
use crate::nav_icon::{Cursor, NavIcon, NavIconView};
use crate::LOGO;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Labels that go to the footer group instead of the main navigation.
pub const FOOTER_LABELS: [&str; 2] = ["Settings", "Help & Support"];

/// One navigation entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SidebarLink {
    pub icon: NavIcon,
    pub route: String,
    pub label: String,
    #[serde(default)]
    pub cursor: Cursor,
}

impl SidebarLink {
    pub fn new(icon: NavIcon, route: &str, label: &str, cursor: Cursor) -> Self {
        Self {
            icon,
            route: route.to_string(),
            label: label.to_string(),
            cursor,
        }
    }

    pub fn is_footer(&self) -> bool {
        FOOTER_LABELS.contains(&self.label.as_str())
    }

    /// Highlighted when its route is exactly the current one.
    pub fn is_active(&self, current_route: &str) -> bool {
        self.route == current_route
    }
}

/// Split links into `(main, footer)`, keeping input order within each group.
pub fn partition_links(links: &[SidebarLink]) -> (Vec<SidebarLink>, Vec<SidebarLink>) {
    links.iter().cloned().partition(|link| !link.is_footer())
}

/// Navigation shell: logo, main links, footer links and the auth-aware login button.
/// The link whose route equals `current_route` is highlighted.
#[component]
pub fn LeftSidebar(links: Vec<SidebarLink>, current_route: String) -> Element {
    let (main_links, footer_links) = partition_links(&links);

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        section {
            class: "left-sidebar",

            div {
                class: "left-sidebar-top",
                Link {
                    class: "left-sidebar-logo",
                    to: "/",
                    img { src: LOGO, alt: "Summarist logo" }
                }
                nav {
                    class: "left-sidebar-nav",
                    for link in main_links {
                        SidebarItem {
                            key: "{link.label}",
                            active: link.is_active(&current_route),
                            link: link.clone(),
                        }
                    }
                }
            }

            div {
                class: "left-sidebar-bottom",
                for link in footer_links {
                    SidebarItem {
                        key: "{link.label}",
                        active: link.is_active(&current_route),
                        link: link.clone(),
                    }
                }
                LoginButton { auth_aware: true }
            }
        }
    }
}

#[component]
fn SidebarItem(link: SidebarLink, active: bool) -> Element {
    rsx! {
        Link {
            class: if active { "sidebar-item active" } else { "sidebar-item" },
            to: link.route.clone(),
            style: "cursor: {link.cursor.css()}",
            NavIconView { icon: link.icon }
            span { class: "sidebar-item-label", "{link.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str) -> SidebarLink {
        SidebarLink::new(NavIcon::Home, &format!("/{}", label.to_lowercase()), label, Cursor::Pointer)
    }

    fn labels(links: &[SidebarLink]) -> Vec<&str> {
        links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn test_footer_labels_go_to_footer_group() {
        let links = vec![
            link("For You"),
            link("Settings"),
            link("My Library"),
            link("Help & Support"),
            link("Search"),
        ];
        let (main, footer) = partition_links(&links);

        assert_eq!(labels(&main), vec!["For You", "My Library", "Search"]);
        assert_eq!(labels(&footer), vec!["Settings", "Help & Support"]);
    }

    #[test]
    fn test_partition_ignores_input_order() {
        let links = vec![
            link("Help & Support"),
            link("Search"),
            link("Settings"),
            link("For You"),
        ];
        let (main, footer) = partition_links(&links);

        assert_eq!(labels(&main), vec!["Search", "For You"]);
        assert_eq!(labels(&footer), vec!["Help & Support", "Settings"]);
    }

    #[test]
    fn test_labels_match_exactly() {
        let (main, footer) = partition_links(&[link("settings"), link("Help")]);
        assert_eq!(main.len(), 2);
        assert!(footer.is_empty());
    }

    #[test]
    fn test_only_current_route_is_active() {
        let links = vec![link("For You"), link("Search"), link("Settings")];
        let active: Vec<&str> = links
            .iter()
            .filter(|l| l.is_active("/search"))
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(active, vec!["Search"]);

        assert!(!link("Search").is_active("/search/"));
        assert!(!link("Search").is_active("/"));
    }
}
