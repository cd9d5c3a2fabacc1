//! The `Resource` trait and persistence operations.
//!
//! A resource type is a zero-sized marker that ties together a schema, a
//! set of path templates and an optional list of payload rules. Instances
//! are [`Record`]s; loading, listing, saving and deleting all go through a
//! [`RequestExecutor`], so tests can substitute canned responses.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use std::sync::OnceLock;
//! use twitter_ads::rest::{PropertyOptions, Resource, ResourcePaths, Schema};
//!
//! struct Campaign;
//!
//! impl Resource for Campaign {
//!     const NAME: &'static str = "Campaign";
//!     const PATHS: ResourcePaths = ResourcePaths::new(
//!         "Campaign",
//!         "accounts/%{account_id}/campaigns",
//!         "accounts/%{account_id}/campaigns/%{id}",
//!         "batch/accounts/%{account_id}/campaigns",
//!     );
//!
//!     fn schema() -> &'static Schema {
//!         static SCHEMA: OnceLock<Schema> = OnceLock::new();
//!         SCHEMA.get_or_init(|| {
//!             Schema::builder()
//!                 .declare("id", PropertyOptions::READ_ONLY)
//!                 .declare("name", PropertyOptions::OPAQUE)
//!                 .build()
//!         })
//!     }
//! }
//! ```

use serde_json::Value;

use crate::account::Account;
use crate::clients::{HttpError, HttpResponse, HttpResponseError, RequestExecutor};
use crate::rest::{PayloadRule, Record, ResourceError, ResourcePaths, Schema};

/// A REST resource type of the Ads API.
#[allow(async_fn_in_trait)]
pub trait Resource: Sized + 'static {
    /// The resource name (e.g., "`LineItem`"), used in errors and logs.
    const NAME: &'static str;

    /// Collection, item and batch path templates.
    const PATHS: ResourcePaths;

    /// The attribute holding the server-assigned identifier.
    const ID_ATTRIBUTE: &'static str = "id";

    /// The attribute table, built once per type.
    fn schema() -> &'static Schema;

    /// Rewrites applied to every payload after generic serialization.
    #[must_use]
    fn payload_rules() -> &'static [PayloadRule] {
        &[]
    }

    /// Loads a single entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for a 404,
    /// [`ResourceError::MalformedResponse`] if the response has no `data`
    /// object, and [`ResourceError::Http`] for other transport failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let line_item = LineItem::load(&client, &account, "8u94t").await?;
    /// println!("{:?}", line_item.get("name")?);
    /// ```
    async fn load<'a, E: RequestExecutor>(
        executor: &E,
        account: &'a Account,
        id: &str,
    ) -> Result<Record<'a, Self>, ResourceError> {
        let path = Self::PATHS.item_path(account.id().as_ref(), Some(id))?;
        tracing::debug!(resource = Self::NAME, %path, "Loading resource");

        let response = executor.get(&path, None).await;
        let response = checked::<Self>(response, Some(id))?;
        Record::from_response(account, data::<Self>(&response)?)
    }

    /// Lists the entities of an account.
    ///
    /// Only the first page is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if `data` is missing or
    /// not an array, and [`ResourceError::Http`] for transport failures.
    async fn all<'a, E: RequestExecutor>(
        executor: &E,
        account: &'a Account,
    ) -> Result<Vec<Record<'a, Self>>, ResourceError> {
        let path = Self::PATHS.collection_path(account.id().as_ref())?;
        tracing::debug!(resource = Self::NAME, %path, "Listing resources");

        let response = executor.get(&path, None).await;
        let response = checked::<Self>(response, None)?;
        let items = data::<Self>(&response)?
            .as_array()
            .ok_or_else(|| ResourceError::MalformedResponse {
                resource: Self::NAME,
                detail: "'data' is not an array".to_string(),
            })?;

        items
            .iter()
            .map(|item| Record::from_response(account, item))
            .collect()
    }
}

impl<R: Resource> Record<'_, R> {
    /// Creates or updates the entity.
    ///
    /// A record without an id is POSTed to the collection path; a record
    /// with one is PUT to its item path. Either way the body is
    /// [`to_payload`](Self::to_payload), and on success the record is
    /// refreshed from the response and marked clean.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if the response has no
    /// `data` object, [`ResourceError::NotFound`] when updating a missing
    /// entity, and [`ResourceError::Http`] for other transport failures.
    pub async fn save<E: RequestExecutor>(&mut self, executor: &E) -> Result<(), ResourceError> {
        let account_id = self.account().id().as_ref();
        let body = Value::Object(self.to_payload());
        let id = self.id();

        let response = match id.as_deref() {
            None => {
                let path = R::PATHS.collection_path(account_id)?;
                tracing::debug!(resource = R::NAME, %path, "Creating resource");
                executor.post(&path, body).await
            }
            Some(id) => {
                let path = R::PATHS.item_path(account_id, Some(id))?;
                tracing::debug!(resource = R::NAME, %path, "Updating resource");
                executor.put(&path, body).await
            }
        };

        let response = checked::<R>(response, id.as_deref())?;
        self.hydrate(data::<R>(&response)?)
    }

    /// Deletes the entity and refreshes the record from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] without sending anything
    /// if the record has no id, plus the errors of [`save`](Self::save).
    pub async fn delete<E: RequestExecutor>(&mut self, executor: &E) -> Result<(), ResourceError> {
        let id = self.id();
        let path = R::PATHS.item_path(self.account().id().as_ref(), id.as_deref())?;
        tracing::debug!(resource = R::NAME, %path, "Deleting resource");

        let response = executor.delete(&path).await;
        let response = checked::<R>(response, id.as_deref())?;
        self.hydrate(data::<R>(&response)?)
    }
}

/// Maps transport errors and non-2xx responses to resource errors.
fn checked<R: Resource>(
    response: Result<HttpResponse, HttpError>,
    id: Option<&str>,
) -> Result<HttpResponse, ResourceError> {
    let response = response.map_err(|e| ResourceError::from_http_error(e, R::NAME, id))?;
    if response.is_ok() {
        return Ok(response);
    }

    let error = HttpResponseError {
        code: response.code,
        message: response.body.to_string(),
        error_reference: response.request_id().map(String::from),
    };
    Err(ResourceError::from_http_error(
        HttpError::Response(error),
        R::NAME,
        id,
    ))
}

fn data<R: Resource>(response: &HttpResponse) -> Result<&Value, ResourceError> {
    response.data().ok_or_else(|| ResourceError::MalformedResponse {
        resource: R::NAME,
        detail: "missing 'data'".to_string(),
    })
}
