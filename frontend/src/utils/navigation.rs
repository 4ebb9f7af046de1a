use std::cell::RefCell;
use std::rc::Rc;

use crate::config::LOGIN_PATH;

pub trait Navigator {
    fn current_path(&self) -> Option<String>;
    fn navigate(&self, path: &str);

    fn redirect_to_login(&self) {
        if self.current_path().as_deref() == Some(LOGIN_PATH) {
            return;
        }
        self.navigate(LOGIN_PATH);
    }
}

/// Full page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::error!("Failed to navigate to {}", path);
            }
        }
    }
}

/// Records navigations instead of performing them.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryNavigator {
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            history: Rc::new(RefCell::new(vec![path.into()])),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    fn navigate(&self, path: &str) {
        self.history.borrow_mut().push(path.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_navigator() -> Rc<dyn Navigator> {
    Rc::new(BrowserNavigator)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_navigator() -> Rc<dyn Navigator> {
    Rc::new(MemoryNavigator::default())
}
