use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the backend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, body: String },
    Deserialize(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Deserialize(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a request path against the configured base URL.
    ///
    /// Absolute `http(s)://` paths pass through untouched; an empty base
    /// yields a same-origin relative URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let url = self.url(path);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.url("/api/data"), "http://localhost:8080/api/data");
        assert_eq!(client.url("api/data"), "http://localhost:8080/api/data");
    }

    #[test]
    fn url_trims_trailing_slashes_on_base() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/data"), "http://localhost:8080/api/data");
    }

    #[test]
    fn url_passes_absolute_urls_through() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(
            client.url("https://example.com/api/data"),
            "https://example.com/api/data"
        );
    }

    #[test]
    fn url_is_relative_when_base_is_empty() {
        let client = ApiClient::new("");
        assert_eq!(client.url("/api/data"), "/api/data");
        assert_eq!(client.url("api/data"), "/api/data");
    }
}
