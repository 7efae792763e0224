//! Window plumbing for federated sign-in.

use crate::error::AuthError;

#[cfg(target_arch = "wasm32")]
use crate::error::codes;

#[cfg(target_arch = "wasm32")]
const POPUP_POLL: std::time::Duration = std::time::Duration::from_millis(300);

/// `origin + pathname` of the page the app is running on.
#[cfg(target_arch = "wasm32")]
pub(super) fn current_page() -> Option<String> {
    let location = web_sys::window()?.location();
    let origin = location.origin().ok()?;
    let path = location.pathname().ok()?;
    Some(format!("{origin}{path}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn current_page() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub(super) fn current_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn current_href() -> Option<String> {
    None
}

/// Open `auth_uri` in a popup and wait until it lands back on `continue_uri`.
/// Returns the full URL the provider redirected to.
#[cfg(target_arch = "wasm32")]
pub(super) async fn run_popup(auth_uri: &str, continue_uri: &str) -> Result<String, AuthError> {
    let window = web_sys::window().ok_or_else(|| AuthError::from_code(codes::INTERNAL_ERROR))?;
    let popup = window
        .open_with_url_and_target_and_features(auth_uri, "summarist-auth", "width=500,height=600")
        .ok()
        .flatten()
        .ok_or_else(|| AuthError::from_code(codes::POPUP_BLOCKED))?;

    loop {
        gloo_timers::future::sleep(POPUP_POLL).await;

        if popup.closed().unwrap_or(true) {
            return Err(AuthError::from_code(codes::POPUP_CLOSED_BY_USER));
        }
        // Reading the location throws while the popup is on the provider's origin.
        if let Ok(href) = popup.location().href() {
            if href.starts_with(continue_uri) && href.contains('?') {
                let _ = popup.close();
                return Ok(href);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) async fn run_popup(_auth_uri: &str, _continue_uri: &str) -> Result<String, AuthError> {
    Err(unsupported())
}

#[cfg(target_arch = "wasm32")]
pub(super) fn navigate(url: &str) -> Result<(), AuthError> {
    web_sys::window()
        .and_then(|window| window.location().set_href(url).ok())
        .ok_or_else(|| AuthError::from_code(codes::INTERNAL_ERROR))
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn navigate(_url: &str) -> Result<(), AuthError> {
    Err(unsupported())
}

#[cfg(not(target_arch = "wasm32"))]
fn unsupported() -> AuthError {
    AuthError::from_code(crate::error::codes::OPERATION_NOT_SUPPORTED)
}
