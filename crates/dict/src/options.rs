// ABOUTME: Configuration options for the dictionary client including Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::time::Duration;

use crate::client::Client;

/// Default dictionary endpoint; the looked-up word is appended as a path segment.
pub const DEFAULT_BASE_URL: &str = "https://en.langenscheidt.com/german-english";

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Default cap on the number of reported translations.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Configuration options for the dictionary client.
#[derive(Debug, Clone)]
pub struct Options {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_results: usize,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_results: DEFAULT_MAX_RESULTS,
            http_client: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Override the dictionary base URL (useful for tests against a local server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Cap the number of translations returned by a lookup.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.opts.max_results = max_results;
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
