//! Page-level side effects: full navigations and blocking alerts.

/// Side effects the auth flow performs on the page.
pub trait Navigate {
    /// Load `url` as a new page. Everything in memory is discarded.
    fn assign(&self, url: &str);

    /// Show a blocking notice.
    fn alert(&self, message: &str);
}

/// [`Navigate`] backed by the browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigate for BrowserNavigator {
    fn assign(&self, url: &str) {
        tracing::info!("Navigating to {}", url);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(url).is_err() {
                    tracing::error!("Failed to navigate to {}", url);
                }
            }
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!("{}", message);
    }
}
