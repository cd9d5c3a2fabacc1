//! `LineItem` resource implementation.
//!
//! A line item belongs to a campaign and controls bidding, placement and
//! scheduling of the promoted content under it.
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::rest::Resource;
//! use twitter_ads::rest::resources::v12::{BidStrategy, LineItem, ProductType};
//!
//! // Valid placement combinations for promoted posts
//! let placements = LineItem::placements(&client, Some(ProductType::PromotedTweets)).await?;
//!
//! // Create a line item
//! let mut line_item = LineItem::new(&account);
//! line_item.set("campaign_id", "8slvg")?;
//! line_item.set("product_type", ProductType::PromotedTweets)?;
//! line_item.set("placements", serde_json::json!(["ALL_ON_TWITTER"]))?;
//! line_item.set("bid_strategy_type", BidStrategy::Auto)?;
//! line_item.save(&client).await?;
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;

use crate::account::Account;
use crate::clients::RequestExecutor;
use crate::rest::{
    versioned, Payload, PayloadRule, PropertyOptions, Record, Resource, ResourceError,
    ResourcePaths, RuleContext, Schema,
};

use super::ProductType;

/// Bid strategy values that let the platform set the bid.
const AUTOMATIC_BID_STRATEGIES: &[&str] = &["AUTO", "automatic"];

/// The line item resource.
///
/// Instances are [`Record<LineItem>`](Record); create one with
/// [`LineItem::new`] or obtain one from [`Resource::load`] / [`Resource::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem;

impl LineItem {
    /// Type-level path of the placements lookup.
    pub const PLACEMENTS: &'static str = "line_items/placements";

    /// Creates an empty line item bound to `account`.
    #[must_use]
    pub fn new(account: &Account) -> Record<'_, Self> {
        Record::new(account)
    }

    /// Lists the valid placement combinations, optionally for one product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if the response has no
    /// `data[0].placements` array, and [`ResourceError::Http`] for transport
    /// failures.
    pub async fn placements<E: RequestExecutor>(
        executor: &E,
        product_type: Option<ProductType>,
    ) -> Result<Vec<Value>, ResourceError> {
        let path = versioned(Self::NAME, Self::PLACEMENTS, &[])?;
        let query = product_type.map(|product_type| {
            HashMap::from([("product_type".to_string(), product_type.as_str().to_string())])
        });
        tracing::debug!(%path, ?product_type, "Fetching line item placements");

        let response = executor
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_http_error(e, Self::NAME, None))?;

        response
            .data()
            .and_then(Value::as_array)
            .and_then(|data| data.first())
            .and_then(|first| first.get("placements"))
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| ResourceError::MalformedResponse {
                resource: Self::NAME,
                detail: "expected 'data[0].placements' to be an array".to_string(),
            })
    }
}

impl Resource for LineItem {
    const NAME: &'static str = "LineItem";
    const PATHS: ResourcePaths = ResourcePaths::new(
        "LineItem",
        "accounts/%{account_id}/line_items",
        "accounts/%{account_id}/line_items/%{id}",
        "batch/accounts/%{account_id}/line_items",
    );

    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder()
                .declare("id", PropertyOptions::READ_ONLY)
                .declare("deleted", PropertyOptions::BOOLEAN.read_only())
                .declare("created_at", PropertyOptions::TIMESTAMP.read_only())
                .declare("updated_at", PropertyOptions::TIMESTAMP.read_only())
                .declare("advertiser_domain", PropertyOptions::OPAQUE)
                .declare("automatically_select_bid", PropertyOptions::OPAQUE)
                .declare("bid_amount_local_micro", PropertyOptions::OPAQUE)
                .declare("bid_unit", PropertyOptions::OPAQUE)
                .declare("campaign_id", PropertyOptions::OPAQUE)
                .declare("categories", PropertyOptions::OPAQUE)
                .declare("charge_by", PropertyOptions::OPAQUE)
                .declare("end_time", PropertyOptions::TIMESTAMP)
                .declare("entity_status", PropertyOptions::OPAQUE)
                .declare("include_sentiment", PropertyOptions::OPAQUE)
                .declare("name", PropertyOptions::OPAQUE)
                .declare("objective", PropertyOptions::OPAQUE)
                .declare("optimization", PropertyOptions::OPAQUE)
                .declare("placements", PropertyOptions::OPAQUE)
                .declare("primary_web_event_tag", PropertyOptions::OPAQUE)
                .declare("product_type", PropertyOptions::OPAQUE)
                .declare("start_time", PropertyOptions::TIMESTAMP)
                .declare("target_cpa_local_micro", PropertyOptions::OPAQUE)
                .declare("total_budget_amount_local_micro", PropertyOptions::OPAQUE)
                // beta
                .declare("advertiser_user_id", PropertyOptions::OPAQUE)
                .declare("bid_strategy_type", PropertyOptions::OPAQUE)
                .declare("tracking_tags", PropertyOptions::OPAQUE)
                .declare("lookalike_expansion", PropertyOptions::OPAQUE)
                // client side only
                .declare("to_delete", PropertyOptions::BOOLEAN)
                .build()
        })
    }

    fn payload_rules() -> &'static [PayloadRule] {
        const RULES: &[PayloadRule] = &[
            PayloadRule::new("bid_strategy_excludes_auto_select", drop_automatically_select_bid),
            PayloadRule::new("automatic_bid_clears_amount", clear_bid_amount),
            PayloadRule::new("strip_advertiser_user_id", drop_advertiser_user_id),
            PayloadRule::new("strip_client_only", drop_to_delete),
        ];
        RULES
    }
}

/// `automatically_select_bid` must not accompany an explicit bid strategy.
fn drop_automatically_select_bid(mut payload: Payload, _ctx: &RuleContext<'_>) -> Payload {
    if payload.contains_key("bid_strategy_type") {
        payload.shift_remove("automatically_select_bid");
    }
    payload
}

/// Switching an existing line item to automatic bidding must clear its bid.
fn clear_bid_amount(mut payload: Payload, ctx: &RuleContext<'_>) -> Payload {
    let automatic = payload
        .get("bid_strategy_type")
        .and_then(Value::as_str)
        .is_some_and(|strategy| {
            AUTOMATIC_BID_STRATEGIES
                .iter()
                .any(|auto| auto.eq_ignore_ascii_case(strategy))
        });

    if automatic && ctx.has_id() {
        payload.insert("bid_amount_local_micro".to_string(), Value::Null);
    }
    payload
}

/// The API rejects `advertiser_user_id` on writes.
fn drop_advertiser_user_id(mut payload: Payload, _ctx: &RuleContext<'_>) -> Payload {
    payload.shift_remove("advertiser_user_id");
    payload
}

/// `to_delete` is client-side bookkeeping and never sent.
fn drop_to_delete(mut payload: Payload, _ctx: &RuleContext<'_>) -> Payload {
    payload.shift_remove("to_delete");
    payload
}
