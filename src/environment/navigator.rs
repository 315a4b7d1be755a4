use std::sync::{Arc, Mutex};

/// Where the logout flow sends the visitor.
pub const LOGIN: &str = "/login";

const ROOT: &str = "/";

/// Shared in-process history. Flows only ever push; reading the
/// current location is for the hosting view.
#[derive(Clone)]
pub struct Navigator {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(vec![ROOT.to_string()])),
        }
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("location", &self.location())
            .finish()
    }
}

impl Navigator {
    pub fn push(&self, path: impl Into<String>) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.push(path.into());
    }

    /// The path currently shown.
    pub fn location(&self) -> String {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.last().cloned())
            .unwrap_or_else(|| ROOT.to_string())
    }
}
