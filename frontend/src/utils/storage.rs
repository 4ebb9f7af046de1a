use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Storage, Window};

use crate::config::TOKEN_STORAGE_KEY;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Durable home of the bearer token.
///
/// The session container is the only component that writes through this
/// trait; the HTTP client reads from it on every request and clears it when
/// the backend answers 401.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), String>;
    fn clear(&self);
}

/// Browser `localStorage` under [`TOKEN_STORAGE_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()
            .ok()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), String> {
        local_storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|_| "Failed to persist token".to_string())
    }

    fn clear(&self) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// In-memory store used by host builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_token_store() -> Rc<dyn TokenStore> {
    Rc::new(LocalStorageTokenStore)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_token_store() -> Rc<dyn TokenStore> {
    Rc::new(MemoryTokenStore::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryTokenStore::default();
        assert!(store.get().is_none());
        store.set("abc").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc"));
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryTokenStore::with_token("shared");
        let other = store.clone();
        other.clear();
        assert!(store.get().is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_store_persists_under_token_key() {
        let store = LocalStorageTokenStore;
        store.clear();
        assert!(store.get().is_none());

        store.set("jwt-value").unwrap();
        let raw = local_storage()
            .unwrap()
            .get_item(TOKEN_STORAGE_KEY)
            .unwrap();
        assert_eq!(raw.as_deref(), Some("jwt-value"));
        assert_eq!(store.get().as_deref(), Some("jwt-value"));

        store.clear();
        assert!(store.get().is_none());
    }
}
