//! Resource-specific error types.
//!
//! Local contract failures (unknown or read-only attributes, coercion
//! failures, missing identifiers, malformed responses) are reported before or
//! instead of any network traffic and are never retried. Transport failures
//! arrive wrapped in [`ResourceError::Http`].
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::rest::ResourceError;
//!
//! match line_item.set("created_at", "2024-01-01T00:00:00Z") {
//!     Err(ResourceError::ReadOnlyAttribute { attribute, .. }) => {
//!         println!("{attribute} is managed by the server");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//!     Ok(()) => {}
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError};
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use twitter_ads::rest::ResourceError;
///
/// let error = ResourceError::MissingIdentifier {
///     resource: "LineItem",
///     placeholder: "id".to_string(),
/// };
/// assert!(error.to_string().contains("LineItem"));
/// assert!(error.to_string().contains("id"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The attribute is not declared in the resource schema.
    #[error("{resource} has no attribute '{attribute}'")]
    UnknownAttribute {
        /// The resource type name.
        resource: &'static str,
        /// The undeclared attribute name.
        attribute: String,
    },

    /// The attribute is read-only and cannot be assigned.
    #[error("{resource} attribute '{attribute}' is read-only")]
    ReadOnlyAttribute {
        /// The resource type name.
        resource: &'static str,
        /// The read-only attribute name.
        attribute: &'static str,
    },

    /// A raw value could not be coerced to the attribute's declared type.
    #[error("Cannot coerce {value} for attribute '{attribute}' to {expected}")]
    Coercion {
        /// The attribute being assigned.
        attribute: &'static str,
        /// The offending raw value, rendered for diagnostics.
        value: String,
        /// The declared type name.
        expected: &'static str,
    },

    /// A path placeholder has no value, usually because the record has no id yet.
    #[error("Cannot resolve path for {resource}: missing value for '%{{{placeholder}}}'")]
    MissingIdentifier {
        /// The resource type name.
        resource: &'static str,
        /// The unresolved placeholder name.
        placeholder: String,
    },

    /// The response body did not have the expected structure.
    #[error("Malformed {resource} response: {detail}")]
    MalformedResponse {
        /// The resource type name.
        resource: &'static str,
        /// What was missing or unexpected.
        detail: String,
    },

    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource type name.
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a failed HTTP call to a resource error.
    ///
    /// A 404 on a request for a known id becomes [`ResourceError::NotFound`];
    /// everything else is passed through as [`ResourceError::Http`].
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match (&error, id) {
            (
                HttpError::Response(HttpResponseError { code: 404, .. }),
                Some(id),
            ) => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            _ => Self::Http(error),
        }
    }
}
