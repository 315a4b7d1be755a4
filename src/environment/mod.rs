pub mod model;
pub mod navigator;
pub mod storage;
pub mod types;

pub use model::Api;
pub use navigator::Navigator;
pub use storage::SessionStore;

/// Everything a component needs to talk to the outside world. Built
/// once at startup and handed to whoever needs it; a clone shares the
/// same store and history.
#[derive(Clone)]
pub struct Environment {
    pub api: Api,
    pub session: SessionStore,
    pub navigator: Navigator,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            session: SessionStore::new(),
            navigator: Navigator::default(),
        }
    }
}
