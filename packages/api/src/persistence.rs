//! Key/value persistence for the provider clients.
//!
//! Browser local storage on wasm, so values survive full page loads. Native builds
//! keep values in a map owned by the UI thread for the life of the process.

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn load(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn store(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to persist {}", key);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        if storage.remove_item(key).is_err() {
            tracing::warn!("Failed to remove {}", key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static VALUES: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn load(key: &str) -> Option<String> {
    VALUES.with(|values| values.borrow().get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn store(key: &str, value: &str) {
    VALUES.with(|values| {
        values.borrow_mut().insert(key.to_string(), value.to_string());
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn remove(key: &str) {
    VALUES.with(|values| {
        values.borrow_mut().remove(key);
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_store_load_remove() {
        assert_eq!(load("summarist.test"), None);
        store("summarist.test", "one");
        store("summarist.test", "two");
        assert_eq!(load("summarist.test").as_deref(), Some("two"));
        remove("summarist.test");
        assert_eq!(load("summarist.test"), None);
    }
}
