//! HTTP client types for Ads API communication.
//!
//! # Overview
//!
//! - [`RequestExecutor`]: The seam every resource request goes through
//! - [`HttpClient`]: The async reqwest-backed executor
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//!
//! # Retry Behavior
//!
//! [`HttpClient`] retries transient failures up to the configured number of
//! tries:
//!
//! - **429 (Rate Limited)**: waits for `Retry-After`, or 1 second if absent
//! - **500 / 503 (Server Error)**: waits a fixed 1 second
//! - **Other errors (4xx)**: returns immediately without retry
//!
//! The default is a single attempt. Configure via
//! [`AdsConfigBuilder::tries`](crate::config::AdsConfigBuilder::tries) or per
//! request with [`HttpRequestBuilder::tries`].

mod errors;
mod executor;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use executor::RequestExecutor;
pub use http_client::{HttpClient, MAX_RETRY_WAIT_TIME, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
