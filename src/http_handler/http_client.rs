use crate::warn;
use std::env;

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV_VAR: &str = "TOURSTAT_BASE_URL";
/// Base URL used when no override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the dashboard backend.
/// It sets a fixed timeout and allows easy reuse of the HTTP client
/// infrastructure. Configuration is immutable after construction; callers
/// needing a different base URL construct a new client.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// This client has a default request timeout of 10 seconds. There is no
    /// per-call override.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:5000"`).
    ///
    /// # Returns
    /// A configured `HTTPClient` instance.
    pub fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build().unwrap(),
            base_url: String::from(base_url),
        }
    }

    /// Constructs a `HTTPClient` with the base URL taken from
    /// [`BASE_URL_ENV_VAR`], falling back to [`DEFAULT_BASE_URL`] when the
    /// variable is unset or empty.
    pub fn from_env() -> HTTPClient {
        let base_url_var = env::var(BASE_URL_ENV_VAR);
        let base_url = match base_url_var.as_deref() {
            Ok(url) if !url.is_empty() => url,
            Ok(_) => {
                warn!("{BASE_URL_ENV_VAR} is set but empty, using {DEFAULT_BASE_URL}");
                DEFAULT_BASE_URL
            }
            Err(_) => DEFAULT_BASE_URL,
        };
        Self::new(base_url)
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }
}
