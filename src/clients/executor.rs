//! The request executor seam.
//!
//! Resources never talk to the network directly. Every request they issue
//! goes through a [`RequestExecutor`], which [`HttpClient`](crate::clients::HttpClient)
//! implements for real traffic and tests implement with canned responses.

use std::collections::HashMap;

use crate::clients::{DataType, HttpError, HttpMethod, HttpRequest, HttpResponse};

/// Executes Ads API requests.
///
/// Implementors only provide [`perform`](Self::perform); the verb helpers
/// build a validated [`HttpRequest`] and delegate to it. Retry, timeout and
/// cancellation policy live entirely inside the implementor.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_ads::clients::RequestExecutor;
///
/// let response = client.get("/12/line_items/placements", None).await?;
/// println!("{}", response.body);
/// ```
#[allow(async_fn_in_trait)]
pub trait RequestExecutor: Send + Sync {
    /// Sends a request and returns the decoded response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid requests, network failures,
    /// non-2xx responses and exhausted retries.
    async fn perform(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`perform`](Self::perform).
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.perform(builder.build()?).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`perform`](Self::perform).
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        self.perform(request).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`perform`](Self::perform).
    async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        self.perform(request).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`perform`](Self::perform).
    async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.perform(request).await
    }
}
