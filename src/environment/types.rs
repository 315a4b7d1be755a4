use serde::{Deserialize, Serialize};

// Wire types shared with the storefront backend.

/// The signed-in user as the identity provider returns it. `email` is
/// the only field we rely on; whatever else the provider sends rides
/// along in `profile` untouched.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

/// One catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
}

/// The guest-checkout form contents. Free text only; the backend
/// receives exactly what the visitor typed.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub card_number: String,
    pub card_type: String,
    pub expiration_date: String,
    pub csv: String,
    pub card_holder: String,
    pub shipping_address: String,
    pub billing_address: String,
}
