use dioxus::prelude::*;

use ui::{AppConfig, AuthProvider, MAIN_CSS};
use views::{ForYou, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/for-you")]
    ForYou {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const CONFIG_TOML: &str = include_str!("../summarist.toml");
const ROBOTO: &str =
    "https://fonts.googleapis.com/css2?family=Roboto:wght@100;300;400;500;700;900&display=swap";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::load(CONFIG_TOML));
    use_context_provider(|| config.clone());

    rsx! {
        // Global app resources
        document::Title { "Summarist" }
        document::Meta { name: "description", content: "The Ultimate Reading App" }
        document::Link { rel: "stylesheet", href: ROBOTO }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Unknown paths go back to the landing page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No route for /{}", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
