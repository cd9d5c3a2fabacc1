//! Configuration types for the Twitter Ads SDK.
//!
//! This module provides the configuration used to build an
//! [`HttpClient`](crate::clients::HttpClient) for the Ads API.
//!
//! # Overview
//!
//! - [`AdsConfig`]: The main configuration struct holding all SDK settings
//! - [`AdsConfigBuilder`]: A builder for constructing [`AdsConfig`] instances
//! - [`AccountId`]: A validated advertising account identifier
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`ApiHost`]: A validated API host URL
//! - [`API_VERSION`]: The API version prefix shared by every resource path
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::{AccessToken, AdsConfig};
//!
//! let config = AdsConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_host().as_ref(), "https://ads-api.twitter.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, AccountId, ApiHost};

use crate::error::ConfigError;

/// The Ads API version every resource path is prefixed with.
pub const API_VERSION: &str = "12";

/// Configuration for the Twitter Ads SDK.
///
/// # Thread Safety
///
/// `AdsConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct AdsConfig {
    access_token: AccessToken,
    api_host: ApiHost,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl AdsConfig {
    /// Creates a new builder for constructing an `AdsConfig`.
    #[must_use]
    pub fn builder() -> AdsConfigBuilder {
        AdsConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the default number of attempts per request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify AdsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdsConfig>();
};

/// Builder for constructing [`AdsConfig`] instances.
///
/// The only required field is `access_token`.
///
/// # Defaults
///
/// - `api_host`: `https://ads-api.twitter.com`
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct AdsConfigBuilder {
    access_token: Option<AccessToken>,
    api_host: Option<ApiHost>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl AdsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the API host, e.g. to point at a proxy or a mock server.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the default number of attempts for each request.
    ///
    /// Values above 1 enable retries for rate-limited and server-error
    /// responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`AdsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not
    /// set, or [`ConfigError::InvalidTries`] if `tries` is zero.
    pub fn build(self) -> Result<AdsConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(AdsConfig {
            access_token,
            api_host: self.api_host.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("token").unwrap()
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = AdsConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = AdsConfig::builder().access_token(token()).build().unwrap();

        assert_eq!(config.api_host().as_ref(), ApiHost::DEFAULT);
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.tries(), 1);
    }

    #[test]
    fn test_builder_rejects_zero_tries() {
        let result = AdsConfig::builder().access_token(token()).tries(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidTries { tries: 0 })));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = ApiHost::new("http://localhost:9000").unwrap();

        let config = AdsConfig::builder()
            .access_token(token())
            .api_host(host.clone())
            .user_agent_prefix("MyApp/1.0")
            .tries(3)
            .build()
            .unwrap();

        assert_eq!(config.api_host(), &host);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.tries(), 3);
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = AdsConfig::builder()
            .access_token(AccessToken::new("do-not-print").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("AdsConfig"));
        assert!(!debug_str.contains("do-not-print"));
    }
}
