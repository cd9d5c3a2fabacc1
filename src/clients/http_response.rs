//! HTTP response types for the Twitter Ads SDK.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! information parsed from Ads API response headers.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

/// Rate limit information parsed from the `x-rate-limit-*` headers.
///
/// # Example
///
/// ```rust
/// use twitter_ads::clients::RateLimit;
///
/// let limit = RateLimit::parse("450", "449", "1700000000").unwrap();
/// assert_eq!(limit.limit, 450);
/// assert_eq!(limit.remaining, 449);
/// assert_eq!(limit.reset.timestamp(), 1_700_000_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// When the current window resets.
    pub reset: DateTime<Utc>,
}

impl RateLimit {
    /// Parses the three rate limit header values.
    ///
    /// Returns `None` if any of them is not a valid integer.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str, reset: &str) -> Option<Self> {
        let limit = limit.trim().parse().ok()?;
        let remaining = remaining.trim().parse().ok()?;
        let reset = Utc
            .timestamp_opt(reset.trim().parse().ok()?, 0)
            .single()?;

        Some(Self {
            limit,
            remaining,
            reset,
        })
    }
}

/// An HTTP response from the Ads API.
///
/// Contains the response status code, headers, the decoded JSON body and the
/// parsed rate limit and retry headers.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information, when all three headers are present.
    pub rate_limit: Option<RateLimit>,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit and
    /// `Retry-After` headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let rate_limit = match (
            first("x-rate-limit-limit"),
            first("x-rate-limit-remaining"),
            first("x-rate-limit-reset"),
        ) {
            (Some(limit), Some(remaining), Some(reset)) => {
                RateLimit::parse(limit, remaining, reset)
            }
            _ => None,
        };

        let retry_request_after = first("retry-after").and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            rate_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `x-transaction-id` header value, if present.
    ///
    /// Include this ID when reporting API problems.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-transaction-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `data` member of the response envelope, if present.
    #[must_use]
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.body.get("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_rate_limit_parsing() {
        let mut headers = HashMap::new();
        headers.insert("x-rate-limit-limit".to_string(), vec!["450".to_string()]);
        headers.insert("x-rate-limit-remaining".to_string(), vec!["0".to_string()]);
        headers.insert(
            "x-rate-limit-reset".to_string(),
            vec!["1700000000".to_string()],
        );

        let response = HttpResponse::new(429, headers, json!({}));
        let limit = response.rate_limit.unwrap();
        assert_eq!(limit.limit, 450);
        assert_eq!(limit.remaining, 0);
        assert_eq!(limit.reset.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_rate_limit_requires_all_headers() {
        let mut headers = HashMap::new();
        headers.insert("x-rate-limit-limit".to_string(), vec!["450".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert!(response.rate_limit.is_none());

        assert!(RateLimit::parse("abc", "1", "1").is_none());
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert(
            "x-transaction-id".to_string(),
            vec!["abc-123-xyz".to_string()],
        );

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }

    #[test]
    fn test_data_accessor() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"data": {"id": "8u94t"}}));
        assert_eq!(response.data(), Some(&json!({"id": "8u94t"})));

        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.data().is_none());
    }
}
