// ABOUTME: Resource handling module for fetching dictionary pages over HTTP.
// ABOUTME: Performs the GET request, status check, content-length limit, and charset decoding.

use bytes::Bytes;

use crate::error::LookupError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using charset hints from the
    /// content-type header when present.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using the charset from the content-type
/// header, falling back to chardetng detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Fetch a page with a single GET request. Only HTTP 200 is success; the
/// body is fully read before returning so the connection is always released.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<FetchResult, LookupError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LookupError::fetch(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e))))?;

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(LookupError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    if status != 200 {
        return Err(LookupError::status(url, "Fetch", status));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| LookupError::read(url, "Fetch", Some(anyhow::anyhow!("failed to read body: {}", e))))?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(LookupError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    Ok(FetchResult {
        status,
        url: url.to_string(),
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn create_test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .user_agent("test-agent")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_ok_utf8() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/test");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<html></html>");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/test")).await;
        mock.assert();

        let result = result.expect("fetch should succeed");
        assert_eq!(result.status, 200);
        assert_eq!(result.text(), "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_non_200_rejected() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/notfound");
            then.status(404).body("not found");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/notfound")).await;
        mock.assert();

        let err = result.expect_err("should fail on 404");
        assert!(err.is_status());
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        // Reserved port, nothing listens here.
        let client = create_test_client();
        let err = fetch(&client, "http://127.0.0.1:1/")
            .await
            .expect_err("should fail to connect");
        assert!(err.is_fetch());
    }

    #[test]
    fn test_extract_charset() {
        assert_eq!(
            extract_charset("text/html; charset=utf-8"),
            Some("utf-8".to_string())
        );
        assert_eq!(
            extract_charset("text/html; charset=\"ISO-8859-1\""),
            Some("iso-8859-1".to_string())
        );
        assert_eq!(extract_charset("text/html"), None);
    }

    #[test]
    fn test_decode_body_latin1_detected() {
        // ISO-8859-1 "café" with no charset header; chardetng should detect.
        let bytes: &[u8] = &[0x63, 0x61, 0x66, 0xe9];
        assert_eq!(decode_body(bytes, None), "café");
    }
}
