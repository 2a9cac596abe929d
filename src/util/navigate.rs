//! Full-page navigation.

use std::cell::RefCell;
use std::rc::Rc;

/// Sends the browser to another page.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Sets `window.location.href`. No-op outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// Records requested paths instead of leaving the page. Clones share history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_owned());
    }
}
