use std::sync::Arc;

use crate::services::PageStore;
use crate::templates::Templates;

/// A titled unit of wiki content, stored as a single `<title>.txt` file.
///
/// Pages are constructed fresh on every request, either from a file
/// (view/edit) or from the submitted form (save). Nothing is retained
/// between requests; the filesystem is the only store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: String,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A page that exists only as a title, for the edit-new-page flow.
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, "")
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: PageStore,
    pub templates: Arc<Templates>,
}
