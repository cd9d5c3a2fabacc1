//! Error types for the Twitter Ads SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::{AccountId, ConfigError};
//!
//! let result = AccountId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccountId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account identifier cannot be empty.
    #[error("Account ID cannot be empty. Please provide a valid Ads account ID.")]
    EmptyAccountId,

    /// Account identifier contains characters that cannot appear in a path segment.
    #[error("Invalid account ID '{id}'. Account IDs may only contain ASCII letters and digits.")]
    InvalidAccountId {
        /// The invalid identifier that was provided.
        id: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Ads API access token.")]
    EmptyAccessToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://ads-api.twitter.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Retry count must allow at least one attempt.
    #[error("Invalid tries value {tries}. At least one attempt is required.")]
    InvalidTries {
        /// The rejected value.
        tries: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_account_id_error_message() {
        let error = ConfigError::EmptyAccountId;
        let message = error.to_string();
        assert!(message.contains("Account ID cannot be empty"));
    }

    #[test]
    fn test_invalid_account_id_error_message() {
        let error = ConfigError::InvalidAccountId {
            id: "abc/def".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("abc/def"));
        assert!(message.contains("ASCII letters and digits"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "access_token",
        };
        let message = error.to_string();
        assert!(message.contains("access_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
