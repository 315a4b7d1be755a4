mod components;
mod environment;

pub use components::{checkout, session};
pub use environment::navigator::LOGIN;
pub use environment::types::{Car, OrderDraft, UserRecord};
pub use environment::{Api, Environment, Navigator, SessionStore};

use components::checkout::CheckoutField;

/// Everything the application can dispatch through a store.
///
/// Reducers receive the full vocabulary and act only on the actions
/// they recognize. Anything else is an identity transition, so a new
/// action kind never breaks an existing reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// A session was established for this user
    SetUser(UserRecord),
    /// The current session ended
    ClearUser,
    /// The car catalogue finished loading
    LoadedCars(Vec<Car>),
    /// One checkout form field changed
    EditField(CheckoutField, String),
}

/// Wire up stdout logging for the hosting application.
pub fn init_logging() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();
}
