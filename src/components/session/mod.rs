mod reducer;

pub use reducer::{reduce, SessionState};

use crate::environment::navigator::LOGIN;
use crate::environment::types::UserRecord;
use crate::environment::Environment;
use crate::Action;

/// Ask the backend who is currently signed in and remember the answer.
///
/// On success the store sees a single `SetUser` transition. A
/// transport failure or non-success status surfaces as the error
/// value; nothing is dispatched and the store keeps its prior state.
pub async fn fetch_session(environment: &Environment) -> Result<UserRecord, String> {
    let user = environment.api.me().await?;
    environment.session.dispatch(Action::SetUser(user.clone()))?;
    Ok(user)
}

/// Terminate the current session and return to the login view.
///
/// `ClearUser` is applied strictly before the navigator moves, so a
/// subscriber watching the store never observes the login view with a
/// user still set. On failure neither the store nor the navigator
/// changes.
pub async fn end_session(environment: &Environment) -> Result<(), String> {
    environment.api.logout().await?;
    environment.session.dispatch(Action::ClearUser)?;
    environment.navigator.push(LOGIN);
    Ok(())
}
