use dioxus::prelude::*;

use ui::{AppConfig, LeftSidebar};

use crate::Route;

/// Signed-in home: the sidebar next to an empty main area.
#[component]
pub fn ForYou() -> Element {
    let config = use_context::<AppConfig>();
    let current_route = use_route::<Route>().to_string();

    rsx! {
        div {
            class: "for-you",
            LeftSidebar {
                links: config.sidebar.links.clone(),
                current_route: current_route,
            }
            main { class: "for-you-main" }
        }
    }
}
