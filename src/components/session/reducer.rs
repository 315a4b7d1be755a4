use crate::environment::types::UserRecord;
use crate::Action;

/// Single source of truth for "is a user authenticated, and as whom".
///
/// Exactly two shapes exist: nobody (the default) or a populated
/// record. There is no loading or error representation in here; a
/// failed session fetch leaves the state as it was.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserRecord>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub fn reduce(state: SessionState, action: &Action) -> SessionState {
    log::trace!("{action:?}");
    match action {
        Action::SetUser(user) => SessionState {
            user: Some(user.clone()),
        },
        Action::ClearUser => SessionState::default(),
        _ => state,
    }
}
