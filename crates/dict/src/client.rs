// ABOUTME: The main Client struct that fetches a dictionary page and extracts translations.
// ABOUTME: Provides async lookup() for URLs and sync lookup_html() for pre-fetched documents.

use scraper::Html;
use url::Url;

use crate::error::LookupError;
use crate::extract::extract_translations;
use crate::options::{ClientBuilder, Options};
use crate::resource::fetch;
use crate::result::LookupResult;

/// Dictionary lookup client. Holds the configured options and a reusable
/// HTTP client; one instance can serve any number of sequential lookups.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http: reqwest::Client,
}

impl Client {
    /// Create a Client from options. A custom reqwest client takes
    /// precedence; otherwise one is built with the configured User-Agent
    /// and timeout.
    pub fn new(opts: Options) -> Self {
        let http = match opts.http_client.clone() {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(opts.user_agent.clone())
                .timeout(opts.timeout)
                .build()
                .unwrap_or_default(),
        };
        Self { opts, http }
    }

    /// Create a ClientBuilder with default options.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Build the dictionary URL for a word, percent-escaping it as a path
    /// segment.
    pub fn dictionary_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.opts.base_url).map_err(|e| {
            LookupError::invalid_url(
                &self.opts.base_url,
                "Lookup",
                Some(anyhow::anyhow!("invalid base URL: {}", e)),
            )
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                LookupError::invalid_url(&self.opts.base_url, "Lookup", None)
            })?
            .push(word);
        Ok(url)
    }

    /// Look up a word: fetch its dictionary page, extract translation
    /// candidates, and truncate to the configured maximum. Zero candidates
    /// is a normal success.
    pub async fn lookup(&self, word: &str) -> Result<LookupResult, LookupError> {
        let url = self.dictionary_url(word)?;
        let url_str = url.to_string();

        let fetched = fetch(&self.http, &url_str).await?;
        let html = fetched.text();
        if html.trim().is_empty() {
            return Err(LookupError::parse(
                &url_str,
                "Lookup",
                Some(anyhow::anyhow!("empty document")),
            ));
        }

        Ok(self.assemble(word, &url_str, &html))
    }

    /// Extract translations from already-fetched HTML, bypassing the
    /// network. Useful for tests and offline processing.
    pub fn lookup_html(&self, html: &str, word: &str) -> LookupResult {
        self.assemble(word, "", html)
    }

    fn assemble(&self, word: &str, url: &str, html: &str) -> LookupResult {
        let doc = Html::parse_document(html);
        let mut translations = extract_translations(&doc);
        translations.truncate(self.opts.max_results);

        LookupResult {
            word: word.to_string(),
            url: url.to_string(),
            translations,
        }
    }
}
