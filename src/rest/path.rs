//! Path building infrastructure for REST resources.
//!
//! Every resource type declares three path templates (collection, single
//! item, batch) with named `%{account_id}` and `%{id}` placeholders. Resolved
//! paths are prefixed with the shared `/{API_VERSION}/` segment.
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::rest::{build_path, ResourcePaths};
//!
//! const PATHS: ResourcePaths = ResourcePaths::new(
//!     "Campaign",
//!     "accounts/%{account_id}/campaigns",
//!     "accounts/%{account_id}/campaigns/%{id}",
//!     "batch/accounts/%{account_id}/campaigns",
//! );
//!
//! assert_eq!(PATHS.collection_path("abc1").unwrap(), "/12/accounts/abc1/campaigns");
//! assert_eq!(
//!     PATHS.item_path("abc1", Some("f00")).unwrap(),
//!     "/12/accounts/abc1/campaigns/f00"
//! );
//! assert!(PATHS.item_path("abc1", None).is_err());
//!
//! let url = build_path("Campaign", "stats/%{id}/daily", &[("id", "f00")]).unwrap();
//! assert_eq!(url, "stats/f00/daily");
//! ```

use crate::clients::HttpMethod;
use crate::config::API_VERSION;
use crate::rest::ResourceError;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List resources (GET collection).
    All,
    /// Read a single resource (GET item).
    Find,
    /// Create a resource (POST collection).
    Create,
    /// Update a resource (PUT item).
    Update,
    /// Delete a resource (DELETE item).
    Delete,
    /// Submit a batch of changes (POST batch collection).
    Batch,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All => HttpMethod::Get,
            Self::Create | Self::Batch => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Find => "find",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Batch => "batch",
        }
    }

    /// Returns `true` if the operation addresses a single, existing entity.
    #[must_use]
    pub const fn requires_id(&self) -> bool {
        matches!(self, Self::Find | Self::Update | Self::Delete)
    }
}

/// The path templates of a resource type.
///
/// Templates are relative to the version prefix and use `%{account_id}` and
/// `%{id}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePaths {
    /// The resource type name, used in errors.
    pub resource: &'static str,
    /// List/create template.
    pub collection: &'static str,
    /// Read/update/delete template.
    pub item: &'static str,
    /// Batch template.
    pub batch: &'static str,
}

impl ResourcePaths {
    /// Creates a new `ResourcePaths`.
    ///
    /// This is a `const fn` so paths can be declared as constants.
    #[must_use]
    pub const fn new(
        resource: &'static str,
        collection: &'static str,
        item: &'static str,
        batch: &'static str,
    ) -> Self {
        Self {
            resource,
            collection,
            item,
            batch,
        }
    }

    /// Returns the template used for an operation.
    #[must_use]
    pub const fn template_for(&self, operation: ResourceOperation) -> &'static str {
        match operation {
            ResourceOperation::All | ResourceOperation::Create => self.collection,
            ResourceOperation::Find | ResourceOperation::Update | ResourceOperation::Delete => {
                self.item
            }
            ResourceOperation::Batch => self.batch,
        }
    }

    /// Resolves the path for an operation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] if the template needs an
    /// `id` and none was supplied.
    pub fn resolve(
        &self,
        operation: ResourceOperation,
        account_id: &str,
        id: Option<&str>,
    ) -> Result<String, ResourceError> {
        let template = self.template_for(operation);
        match id {
            Some(id) => versioned(self.resource, template, &[("account_id", account_id), ("id", id)]),
            None => versioned(self.resource, template, &[("account_id", account_id)]),
        }
    }

    /// Resolves the collection (list/create) path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] if the template carries a
    /// placeholder other than `account_id`.
    pub fn collection_path(&self, account_id: &str) -> Result<String, ResourceError> {
        self.resolve(ResourceOperation::All, account_id, None)
    }

    /// Resolves the single-item (read/update/delete) path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] if `id` is `None`.
    pub fn item_path(&self, account_id: &str, id: Option<&str>) -> Result<String, ResourceError> {
        self.resolve(ResourceOperation::Find, account_id, id)
    }

    /// Resolves the batch path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] if the template carries a
    /// placeholder other than `account_id`.
    pub fn batch_path(&self, account_id: &str) -> Result<String, ResourceError> {
        self.resolve(ResourceOperation::Batch, account_id, None)
    }
}

/// Resolves a type-level template (one that is not tied to an entity) and
/// adds the version prefix.
///
/// # Errors
///
/// Returns [`ResourceError::MissingIdentifier`] for any placeholder without a
/// value in `values`.
pub fn versioned(
    resource: &'static str,
    template: &str,
    values: &[(&str, &str)],
) -> Result<String, ResourceError> {
    Ok(format!("/{API_VERSION}/{}", build_path(resource, template, values)?))
}

/// Substitutes `%{name}` placeholders in a template.
///
/// Names must match exactly; text outside placeholders is copied unchanged,
/// and a `%{` with no closing brace is literal text. An empty value counts as
/// missing.
///
/// # Errors
///
/// Returns [`ResourceError::MissingIdentifier`] for any placeholder without a
/// non-empty value in `values`.
pub fn build_path(
    resource: &'static str,
    template: &str,
    values: &[(&str, &str)],
) -> Result<String, ResourceError> {
    let mut result = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };

        let name = &after[..end];
        let value = values
            .iter()
            .find(|(key, value)| *key == name && !value.is_empty())
            .map(|(_, value)| *value)
            .ok_or_else(|| ResourceError::MissingIdentifier {
                resource,
                placeholder: name.to_string(),
            })?;

        result.push_str(&rest[..start]);
        result.push_str(value);
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePaths>();
};
