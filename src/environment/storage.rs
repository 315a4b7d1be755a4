use std::sync::{Arc, Mutex};

use crate::components::session::{reduce, SessionState};
use crate::environment::types::UserRecord;
use crate::Action;

type Subscriber = Box<dyn Fn(&Action) + Send>;

/// The one writable handle to the session. Clones share the same
/// state; all writes go through [`dispatch`](Self::dispatch), which
/// runs the session reducer and then tells the subscribers what
/// happened, in dispatch order.
#[derive(Default, Clone)]
pub struct SessionStore {
    state: Arc<Mutex<SessionState>>,
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.user().map(|u| u.email))
            .finish()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action to the session state. The transition is
    /// complete before the first subscriber runs.
    pub fn dispatch(&self, action: Action) -> Result<(), String> {
        {
            let mut state = self
                .state
                .lock()
                .map_err(|e| format!("Session Data Error: {e:?}"))?;
            *state = reduce(state.clone(), &action);
        }
        let subscribers = self
            .subscribers
            .lock()
            .map_err(|e| format!("Session Data Error: {e:?}"))?;
        for subscriber in subscribers.iter() {
            subscriber(&action);
        }
        Ok(())
    }

    /// Be told about every action that went through `dispatch`.
    pub fn subscribe(&self, subscriber: impl Fn(&Action) + Send + 'static) {
        let Ok(mut subscribers) = self.subscribers.lock() else {
            return;
        };
        subscribers.push(Box::new(subscriber));
    }

    /// Read access without handing out the guard.
    pub fn with<T>(&self, action: impl FnOnce(&SessionState) -> T) -> Result<T, String> {
        let state = self
            .state
            .lock()
            .map_err(|e| format!("Session Data Error: {e:?}"))?;
        Ok(action(&state))
    }

    /// The signed-in user, if there is one.
    pub fn user(&self) -> Option<UserRecord> {
        self.state.lock().ok()?.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }
}
