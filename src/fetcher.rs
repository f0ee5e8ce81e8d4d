//! The fetch half of the fetch-and-display cycle.

use serde::Deserialize;

use crate::api_client::ApiClient;
use crate::config::BackendConfig;
use crate::{log_error, log_info};

/// Path of the one endpoint this client consumes.
pub const DATA_PATH: &str = "/api/data";

/// What the user sees when a fetch fails, whatever the cause.
pub const FETCH_ERROR_TEXT: &str = "Error fetching data";

/// Success body of `GET /api/data`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse {
    /// A 2xx body without this field deserializes to the empty string,
    /// which the paragraph renders as nothing.
    #[serde(default)]
    pub message: String,
}

/// Issues the backend request behind the "Fetch Message" button.
///
/// Provided to the view tree through Dioxus context by the root component.
#[derive(Debug, Clone)]
pub struct MessageFetcher {
    client: ApiClient,
}

impl MessageFetcher {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: ApiClient::new(config.base_url),
        }
    }

    /// Run one request/response cycle and return the next display value.
    ///
    /// Suspends until the network operation completes. Every failure kind
    /// (transport error, non-2xx status, malformed body) collapses into
    /// [`FETCH_ERROR_TEXT`]; no error escapes this function. There is no
    /// retry, timeout, or cancellation, and overlapping calls are allowed:
    /// whichever caller applies its result last determines what is shown.
    pub async fn fetch_message(&self) -> String {
        log_info!("Backend link: {}", self.client.url(DATA_PATH));

        match self.client.get_json::<DataResponse>(DATA_PATH).await {
            Ok(data) => {
                log_info!("Fetched message: {}", data.message);
                data.message
            }
            Err(err) => {
                log_error!("Error fetching message: {}", err);
                FETCH_ERROR_TEXT.to_string()
            }
        }
    }
}
