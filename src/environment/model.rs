use reqwest::Client;
use url::Url;

use super::types::{Car, OrderDraft, UserRecord};

const SESSION_ENDPOINT: &str = "/auth/me";
const LOGOUT_ENDPOINT: &str = "/auth/logout";
const CARS_ENDPOINT: &str = "/api/cars";
const ORDERS_ENDPOINT: &str = "/api/orders";

/// Client for the storefront backend. The backend session lives in a
/// cookie, so every clone keeps talking as the same visitor.
#[derive(Clone)]
pub struct Api {
    pub base_url: Url,
    client: Client,
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl Api {
    pub fn new(base_url: &str) -> Result<Self, String> {
        let base_url = Url::parse(base_url).string_error("base_url")?;
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .string_error("client")?;
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        self.base_url.join(path).string_error("endpoint")
    }

    /// Who is signed in right now?
    pub async fn me(&self) -> Result<UserRecord, String> {
        log::trace!("Me");
        self.client
            .get(self.endpoint(SESSION_ENDPOINT)?)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .string_error("me")?
            .json()
            .await
            .string_error("me")
    }

    /// Terminate the backend session. Responds 204 on success.
    pub async fn logout(&self) -> Result<(), String> {
        log::trace!("Logout");
        self.client
            .post(self.endpoint(LOGOUT_ENDPOINT)?)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .string_error("logout")
            .map(|_| ())
    }

    /// The full car catalogue.
    pub async fn cars(&self) -> Result<Vec<Car>, String> {
        log::trace!("Cars");
        self.client
            .get(self.endpoint(CARS_ENDPOINT)?)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .string_error("cars")?
            .json()
            .await
            .string_error("cars")
    }

    /// Submit an order draft as-is. The backend decides what to make
    /// of it.
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<(), String> {
        log::trace!("Create Order");
        self.client
            .post(self.endpoint(ORDERS_ENDPOINT)?)
            .json(draft)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .string_error("create_order")
            .map(|_| ())
    }
}

trait ResultExt {
    type Output;
    fn string_error(self, call: &'static str) -> Result<Self::Output, String>;
}

impl<T, E: std::fmt::Debug> ResultExt for Result<T, E> {
    type Output = T;
    fn string_error(self, call: &'static str) -> Result<T, String> {
        self.map_err(|e| {
            let string_error = format!("API Error: {call} {e:?}");
            log::error!("{string_error}");
            string_error
        })
    }
}
