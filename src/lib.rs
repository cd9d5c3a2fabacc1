//! # Twitter Ads API Rust SDK
//!
//! A Rust SDK for the Twitter Ads API, providing type-safe configuration, an
//! async HTTP client and a typed property system for REST resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`AdsConfig`] and [`AdsConfigBuilder`]
//! - Validated newtypes for credentials and identifiers
//! - Async HTTP client with retry logic behind the [`RequestExecutor`] seam
//! - Declarative resource schemas with typed, optionally read-only attributes
//! - Payload serialization that sends only what the caller assigned
//! - The [`LineItem`](rest::resources::LineItem) resource and its
//!   placements lookup
//!
//! ## Quick Start
//!
//! ```rust
//! use twitter_ads::{AccessToken, AdsConfig};
//!
//! let config = AdsConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 1);
//! ```
//!
//! ## Working with Line Items
//!
//! ```rust
//! use serde_json::json;
//! use twitter_ads::rest::resources::{BidStrategy, LineItem};
//! use twitter_ads::{Account, AccountId};
//!
//! let account = Account::new(AccountId::new("18ce54d4x5t").unwrap());
//! let mut line_item = LineItem::new(&account);
//!
//! line_item.set("name", "Spring launch").unwrap();
//! line_item.set("automatically_select_bid", true).unwrap();
//! line_item.set("bid_strategy_type", BidStrategy::Max).unwrap();
//! line_item.set("start_time", "2024-06-01T09:00:00+02:00").unwrap();
//!
//! let payload = serde_json::Value::Object(line_item.to_payload());
//! assert_eq!(
//!     payload,
//!     json!({
//!         "name": "Spring launch",
//!         "start_time": "2024-06-01T07:00:00Z",
//!         "bid_strategy_type": "MAX"
//!     })
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use twitter_ads::{Account, AccountId, HttpClient};
//! use twitter_ads::rest::Resource;
//! use twitter_ads::rest::resources::{LineItem, ProductType};
//!
//! let client = HttpClient::new(&config);
//! let account = Account::new(AccountId::new("18ce54d4x5t")?);
//!
//! let placements = LineItem::placements(&client, Some(ProductType::PromotedTweets)).await?;
//! let mut line_item = LineItem::load(&client, &account, "8u94t").await?;
//! line_item.set("entity_status", "PAUSED")?;
//! line_item.save(&client).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Schemas, configuration and clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod account;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use account::Account;
pub use config::{AccessToken, AccountId, AdsConfig, AdsConfigBuilder, ApiHost, API_VERSION};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RateLimit,
    RequestExecutor,
};

// Re-export resource essentials
pub use rest::{Record, Resource, ResourceError};
