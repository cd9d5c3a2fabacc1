//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Ads account identifier.
///
/// Account identifiers are interpolated into resource paths, so they are
/// restricted to ASCII letters and digits (e.g. `18ce54d4x5t`).
///
/// # Example
///
/// ```rust
/// use twitter_ads::AccountId;
///
/// let id = AccountId::new("18ce54d4x5t").unwrap();
/// assert_eq!(id.as_ref(), "18ce54d4x5t");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new validated account identifier.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccountId`] if the identifier is empty, or
    /// [`ConfigError::InvalidAccountId`] if it contains anything other than
    /// ASCII letters and digits.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ConfigError::EmptyAccountId);
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidAccountId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Ads API access token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use twitter_ads::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API host URL.
///
/// The URL must carry a scheme and a host. A trailing slash is dropped so
/// that versioned paths (which start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use twitter_ads::ApiHost;
///
/// let host = ApiHost::new("https://ads-api.twitter.com/").unwrap();
/// assert_eq!(host.as_ref(), "https://ads-api.twitter.com");
/// assert_eq!(host.scheme(), "https");
/// assert_eq!(host.host_name(), Some("ads-api.twitter.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiHost {
    /// The production Ads API host.
    pub const DEFAULT: &'static str = "https://ads-api.twitter.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL has no scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiHost { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
