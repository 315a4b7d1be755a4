mod reducer;

pub use reducer::{reduce, CheckoutField, CheckoutState};

use crate::environment::types::{Car, OrderDraft};
use crate::environment::Environment;

/// Load the car catalogue for the checkout listing. The view triggers
/// this once when it appears.
pub async fn load_catalogue(environment: &Environment) -> Result<Vec<Car>, String> {
    environment.api.cars().await
}

/// Hand the draft to the order endpoint exactly as the visitor typed
/// it. No validation happens on this side.
pub async fn submit_order(environment: &Environment, draft: &OrderDraft) -> Result<(), String> {
    environment.api.create_order(draft).await
}
