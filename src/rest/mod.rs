//! REST resource infrastructure for the Ads API.
//!
//! This module provides the typed property system that every resource is
//! built on:
//!
//! - **[`Schema`]**: the ordered, typed attribute table of a resource type
//! - **[`AttributeValue`] / [`RawValue`]**: coerced values and their inputs
//! - **[`Record`]**: a resource instance that tracks explicit assignments
//! - **[`PayloadRule`]**: resource-specific rewrites of request payloads
//! - **Path building**: `%{account_id}` / `%{id}` templates under the
//!   versioned prefix
//! - **[`Resource`] trait**: ties the above together and provides
//!   `load`, `all`, `save` and `delete`
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::{Account, AccountId, AccessToken, AdsConfig, HttpClient};
//! use twitter_ads::rest::Resource;
//! use twitter_ads::rest::resources::v12::LineItem;
//!
//! let config = AdsConfig::builder()
//!     .access_token(AccessToken::new("token")?)
//!     .build()?;
//! let client = HttpClient::new(&config);
//! let account = Account::new(AccountId::new("18ce54d4x5t")?);
//!
//! // Create
//! let mut line_item = LineItem::new(&account);
//! line_item.set("campaign_id", "8slvg")?;
//! line_item.set("start_time", "2024-06-01T00:00:00Z")?;
//! line_item.save(&client).await?;          // POST
//!
//! // Update only what changed
//! line_item.set("bid_strategy_type", "AUTO")?;
//! line_item.save(&client).await?;          // PUT {"bid_strategy_type": "AUTO", "bid_amount_local_micro": null}
//!
//! // Load, list, delete
//! let mut existing = LineItem::load(&client, &account, "8u94t").await?;
//! let everything = LineItem::all(&client, &account).await?;
//! existing.delete(&client).await?;
//! ```

mod errors;
mod path;
mod payload;
mod record;
mod resource;
mod schema;
mod value;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{build_path, versioned, ResourceOperation, ResourcePaths};
pub use payload::{apply_rules, Payload, PayloadRule, RuleContext};
pub use record::Record;
pub use resource::Resource;
pub use schema::{AttributeSpec, AttributeType, PropertyOptions, Schema, SchemaBuilder};
pub use value::{parse_timestamp, render_timestamp, AttributeValue, RawValue};
