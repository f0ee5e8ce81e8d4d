//! Backend endpoint configuration.

/// Where the client sends its fetch requests.
///
/// Built explicitly so views and tests can point the fetcher at any endpoint;
/// the deployed app reads the URL from the build environment instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the backend, e.g. `http://localhost:8080`.
    ///
    /// Not validated here: a malformed value surfaces as a request failure
    /// when the fetch is actually issued.
    pub base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the backend base URL from the build-time environment.
    ///
    /// Environment variable:
    /// - `MSGFETCH_BACKEND_URL`: backend base URL, baked in at compile time
    ///   (default: "http://localhost:8080")
    pub fn from_build_env() -> Self {
        let base_url = option_env!("MSGFETCH_BACKEND_URL").unwrap_or("http://localhost:8080");
        Self::new(base_url)
    }
}
