// ABOUTME: Error types for dictionary lookups including ErrorCode enum and LookupError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Fetch,
    Status,
    Read,
    Parse,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Status => "bad status",
            ErrorCode::Read => "read error",
            ErrorCode::Parse => "parse error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for lookup operations.
#[derive(Debug, thiserror::Error)]
pub struct LookupError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delook: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl LookupError {
    /// Create an InvalidUrl error (request construction failed).
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidUrl,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Fetch error (network/transport failure).
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Fetch,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Status error for a non-200 response.
    pub fn status(url: impl Into<String>, op: impl Into<String>, status: u16) -> Self {
        Self {
            code: ErrorCode::Status,
            url: url.into(),
            op: op.into(),
            source: Some(anyhow::anyhow!("HTTP status {}", status)),
        }
    }

    /// Create a Read error (body could not be read).
    pub fn read(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Read,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Parse error (markup could not be parsed).
    pub fn parse(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Parse,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is a Status error.
    pub fn is_status(&self) -> bool {
        self.code == ErrorCode::Status
    }

    /// Returns true if this is a Read error.
    pub fn is_read(&self) -> bool {
        self.code == ErrorCode::Read
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        self.code == ErrorCode::Parse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_code() {
        let err = LookupError::status("http://x/y", "Lookup", 404);
        let msg = err.to_string();
        assert!(msg.contains("bad status"));
        assert!(msg.contains("404"));
        assert!(err.is_status());
    }

    #[test]
    fn test_code_helpers() {
        assert!(LookupError::fetch("u", "op", None).is_fetch());
        assert!(LookupError::invalid_url("u", "op", None).is_invalid_url());
        assert!(LookupError::read("u", "op", None).is_read());
        assert!(LookupError::parse("u", "op", None).is_parse());
    }
}
