//! Client configuration.

/// Base urls for the cipherbin service.
///
/// Constructed explicitly and injected into [`crate::Messenger`] rather than
/// read from ambient globals, so tests can pin fake bases and stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Browser-facing base url embedded in share links
    pub browser_base_url: String,
    /// API-facing base url the client stores to and fetches from
    pub api_base_url: String,
}

impl Config {
    /// Browser base of the public cipherb.in service.
    pub const DEFAULT_BROWSER_BASE_URL: &'static str = "https://cipherb.in";

    /// API base of the public cipherb.in service.
    pub const DEFAULT_API_BASE_URL: &'static str = "https://api.cipherb.in";

    /// Build a config, trimming trailing `/` so link shapes stay exact.
    pub fn new(browser_base_url: &str, api_base_url: &str) -> Self {
        Self {
            browser_base_url: browser_base_url.trim_end_matches('/').to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BROWSER_BASE_URL, Self::DEFAULT_API_BASE_URL)
    }
}
