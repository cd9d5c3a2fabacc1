//! Integration tests for the `LineItem` resource.
//!
//! Persistence and placements tests run against an in-process executor that
//! records every request and replays a canned response.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use twitter_ads::clients::{HttpMethod, HttpRequest, HttpResponse, RequestExecutor};
use twitter_ads::rest::resources::{BidStrategy, EntityStatus, LineItem, ProductType};
use twitter_ads::rest::{AttributeValue, Resource, ResourceError};
use twitter_ads::{Account, AccountId, HttpError};

const ACCOUNT_ID: &str = "18ce54d4x5t";

fn account() -> Account {
    Account::new(AccountId::new(ACCOUNT_ID).unwrap())
}

/// Replays queued responses and records requests.
#[derive(Default)]
struct MockExecutor {
    responses: Mutex<VecDeque<(u16, Value)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockExecutor {
    fn replying(code: u16, body: Value) -> Self {
        let executor = Self::default();
        executor.push(code, body);
        executor
    }

    fn push(&self, code: u16, body: Value) {
        self.responses.lock().unwrap().push_back((code, body));
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl RequestExecutor for MockExecutor {
    async fn perform(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        self.requests.lock().unwrap().push(request);
        let (code, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no response queued");
        Ok(HttpResponse::new(code, HashMap::new(), body))
    }
}

fn existing_line_item(account: &Account) -> twitter_ads::Record<'_, LineItem> {
    let body = json!({
        "id": "8u94t",
        "deleted": false,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-02T10:00:00Z",
        "name": "Existing",
        "bid_amount_local_micro": 1_500_000,
        "advertiser_user_id": "756201191646691328"
    });
    twitter_ads::Record::<LineItem>::from_response(account, &body).unwrap()
}

// ============================================================================
// Payload Rules
// ============================================================================

#[test]
fn test_bid_strategy_removes_automatically_select_bid() {
    let account = account();
    let mut line_item = LineItem::new(&account);
    line_item.set("automatically_select_bid", true).unwrap();
    line_item.set("bid_strategy_type", BidStrategy::Max).unwrap();

    let payload = line_item.to_payload();
    assert!(!payload.contains_key("automatically_select_bid"));
    assert_eq!(payload["bid_strategy_type"], json!("MAX"));
}

#[test]
fn test_automatically_select_bid_kept_without_bid_strategy() {
    let account = account();
    let mut line_item = LineItem::new(&account);
    line_item.set("automatically_select_bid", true).unwrap();

    assert_eq!(
        Value::Object(line_item.to_payload()),
        json!({"automatically_select_bid": true})
    );
}

#[test]
fn test_auto_bid_on_new_line_item_does_not_clear_amount() {
    let account = account();
    let mut line_item = LineItem::new(&account);
    line_item.set("bid_strategy_type", BidStrategy::Auto).unwrap();

    assert_eq!(
        Value::Object(line_item.to_payload()),
        json!({"bid_strategy_type": "AUTO"})
    );
}

#[test]
fn test_auto_bid_on_existing_line_item_clears_amount() {
    let account = account();
    let mut line_item = existing_line_item(&account);
    line_item.set("bid_strategy_type", "AUTO").unwrap();

    assert_eq!(
        Value::Object(line_item.to_payload()),
        json!({"bid_strategy_type": "AUTO", "bid_amount_local_micro": null})
    );
}

#[test]
fn test_auto_bid_overrides_assigned_amount_on_existing_line_item() {
    let account = account();
    let mut line_item = existing_line_item(&account);
    line_item.set("bid_amount_local_micro", 2_000_000).unwrap();
    line_item.set("bid_strategy_type", "automatic").unwrap();

    let payload = line_item.to_payload();
    assert_eq!(payload["bid_amount_local_micro"], Value::Null);
}

#[test]
fn test_manual_bid_on_existing_line_item_keeps_amount() {
    let account = account();
    let mut line_item = existing_line_item(&account);
    line_item.set("bid_amount_local_micro", 2_000_000).unwrap();
    line_item.set("bid_strategy_type", BidStrategy::Target).unwrap();

    let payload = line_item.to_payload();
    assert_eq!(payload["bid_amount_local_micro"], json!(2_000_000));
}

#[test]
fn test_advertiser_user_id_is_never_sent() {
    let account = account();
    let mut line_item = LineItem::new(&account);
    line_item.set("advertiser_user_id", "756201191646691328").unwrap();
    line_item.set("name", "n").unwrap();

    assert!(line_item.is_assigned("advertiser_user_id"));
    assert_eq!(Value::Object(line_item.to_payload()), json!({"name": "n"}));
}

#[test]
fn test_to_delete_is_never_sent() {
    let account = account();
    let mut line_item = existing_line_item(&account);
    line_item.set("to_delete", true).unwrap();
    line_item.set("name", "n").unwrap();

    assert!(line_item.is_assigned("to_delete"));
    assert_eq!(
        line_item.get("to_delete").unwrap(),
        Some(&AttributeValue::Bool(true))
    );
    assert_eq!(Value::Object(line_item.to_payload()), json!({"name": "n"}));
}

#[test]
fn test_all_rules_together() {
    let account = account();
    let mut line_item = existing_line_item(&account);
    line_item.set("automatically_select_bid", false).unwrap();
    line_item.set("advertiser_user_id", "1").unwrap();
    line_item.set("to_delete", "yes").unwrap();
    line_item.set("bid_strategy_type", "auto").unwrap();

    assert_eq!(
        Value::Object(line_item.to_payload()),
        json!({"bid_strategy_type": "auto", "bid_amount_local_micro": null})
    );
}

// ============================================================================
// Assignment and Serialization
// ============================================================================

#[test]
fn test_read_only_attributes_reject_assignment() {
    let account = account();
    let mut line_item = LineItem::new(&account);

    for name in ["id", "deleted", "created_at", "updated_at"] {
        let err = line_item.set(name, "x").unwrap_err();
        assert!(
            matches!(err, ResourceError::ReadOnlyAttribute { resource: "LineItem", attribute } if attribute == name),
            "{name} should be read-only"
        );
    }
    assert!(line_item.to_payload().is_empty());
}

#[test]
fn test_unknown_attribute_is_rejected() {
    let account = account();
    let mut line_item = LineItem::new(&account);
    assert!(matches!(
        line_item.set("bid_type", "AUTO"),
        Err(ResourceError::UnknownAttribute { ref attribute, .. }) if attribute == "bid_type"
    ));
}

#[test]
fn test_boolean_spellings_are_equivalent() {
    let account = account();
    for raw in [json!(true), json!("true"), json!("TRUE"), json!("1"), json!(1), json!("yes")] {
        let mut line_item = LineItem::new(&account);
        line_item.set("to_delete", raw.clone()).unwrap();
        assert_eq!(
            line_item.get("to_delete").unwrap(),
            Some(&AttributeValue::Bool(true)),
            "{raw} should coerce to true"
        );
    }
}

#[test]
fn test_invalid_boolean_is_a_coercion_error() {
    let account = account();
    let mut line_item = LineItem::new(&account);
    let err = line_item.set("to_delete", "perhaps").unwrap_err();
    assert!(matches!(
        err,
        ResourceError::Coercion { attribute: "to_delete", expected: "boolean", .. }
    ));
}

#[test]
fn test_timestamp_round_trips_through_payload() {
    let account = account();
    let instant = Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap();

    let mut from_string = LineItem::new(&account);
    from_string.set("start_time", "2024-06-01T09:00:00+02:00").unwrap();
    let mut from_instant = LineItem::new(&account);
    from_instant.set("start_time", instant).unwrap();

    assert_eq!(
        from_string.get("start_time").unwrap().unwrap().as_timestamp(),
        Some(&instant)
    );
    assert_eq!(from_string.to_payload(), from_instant.to_payload());
    assert_eq!(
        from_string.to_payload()["start_time"],
        json!("2024-06-01T07:00:00Z")
    );
}

#[test]
fn test_invalid_timestamp_is_a_coercion_error() {
    let account = account();
    let mut line_item = LineItem::new(&account);
    assert!(matches!(
        line_item.set("end_time", "next tuesday"),
        Err(ResourceError::Coercion { attribute: "end_time", expected: "timestamp", .. })
    ));
}

#[test]
fn test_never_assigned_attributes_are_excluded() {
    let account = account();
    let mut line_item = existing_line_item(&account);
    line_item.set("entity_status", EntityStatus::Paused).unwrap();

    assert_eq!(
        Value::Object(line_item.to_payload()),
        json!({"entity_status": "PAUSED"})
    );
}

#[test]
fn test_payload_keys_follow_declaration_order() {
    let account = account();
    let mut line_item = LineItem::new(&account);
    line_item.set("start_time", "2024-06-01T07:00:00Z").unwrap();
    line_item.set("name", "n").unwrap();
    line_item.set("entity_status", EntityStatus::Active).unwrap();
    line_item.set("campaign_id", "8slvg").unwrap();

    let keys: Vec<String> = line_item.to_payload().keys().cloned().collect();
    assert_eq!(keys, ["campaign_id", "entity_status", "name", "start_time"]);
}

#[test]
fn test_hydrated_values_are_readable() {
    let account = account();
    let line_item = existing_line_item(&account);

    assert_eq!(line_item.id().as_deref(), Some("8u94t"));
    assert_eq!(
        line_item.get("deleted").unwrap(),
        Some(&AttributeValue::Bool(false))
    );
    assert!(line_item.get("objective").unwrap().is_none());
    assert!(line_item.assigned_attributes().is_empty());
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn test_paths() {
    assert_eq!(
        LineItem::PATHS.item_path(ACCOUNT_ID, Some("8u94t")).unwrap(),
        "/12/accounts/18ce54d4x5t/line_items/8u94t"
    );
    assert_eq!(
        LineItem::PATHS.collection_path(ACCOUNT_ID).unwrap(),
        "/12/accounts/18ce54d4x5t/line_items"
    );
    assert_eq!(
        LineItem::PATHS.batch_path(ACCOUNT_ID).unwrap(),
        "/12/batch/accounts/18ce54d4x5t/line_items"
    );
    assert!(matches!(
        LineItem::PATHS.item_path(ACCOUNT_ID, None),
        Err(ResourceError::MissingIdentifier { resource: "LineItem", .. })
    ));
}

// ============================================================================
// Placements
// ============================================================================

#[tokio::test]
async fn test_placements_with_product_type() {
    let executor = MockExecutor::replying(
        200,
        json!({"data": [{"product_type": "PROMOTED_TWEETS", "placements": [["ALL_ON_TWITTER"], ["TWITTER_SEARCH"]]}]}),
    );

    let placements = LineItem::placements(&executor, Some(ProductType::PromotedTweets))
        .await
        .unwrap();
    assert_eq!(placements, vec![json!(["ALL_ON_TWITTER"]), json!(["TWITTER_SEARCH"])]);

    let request = executor.last();
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.path, "/12/line_items/placements");
    assert_eq!(
        request.query.unwrap().get("product_type").map(String::as_str),
        Some("PROMOTED_TWEETS")
    );
}

#[tokio::test]
async fn test_placements_without_product_type_sends_no_query() {
    let executor = MockExecutor::replying(200, json!({"data": [{"placements": []}]}));

    let placements = LineItem::placements(&executor, None).await.unwrap();
    assert!(placements.is_empty());
    assert!(executor.last().query.is_none());
}

#[tokio::test]
async fn test_placements_malformed_responses() {
    for body in [
        json!({}),
        json!({"data": []}),
        json!({"data": [{}]}),
        json!({"data": [{"placements": "ALL_ON_TWITTER"}]}),
        json!({"data": {"placements": []}}),
    ] {
        let executor = MockExecutor::replying(200, body.clone());
        let err = LineItem::placements(&executor, None).await.unwrap_err();
        assert!(
            matches!(err, ResourceError::MalformedResponse { resource: "LineItem", .. }),
            "{body} should be malformed"
        );
    }
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn test_save_new_line_item_posts_payload() {
    let account = account();
    let executor = MockExecutor::replying(
        200,
        json!({"data": {"id": "9f2k1", "name": "Launch", "created_at": "2024-06-01T00:00:00Z"}}),
    );

    let mut line_item = LineItem::new(&account);
    line_item.set("name", "Launch").unwrap();
    line_item.set("advertiser_user_id", "1").unwrap();
    line_item.save(&executor).await.unwrap();

    let request = executor.last();
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.path, "/12/accounts/18ce54d4x5t/line_items");
    assert_eq!(request.body, Some(json!({"name": "Launch"})));

    assert_eq!(line_item.id().as_deref(), Some("9f2k1"));
    assert!(line_item.get("created_at").unwrap().is_some());
    assert!(line_item.assigned_attributes().is_empty());
}

#[tokio::test]
async fn test_save_existing_line_item_puts_changes_only() {
    let account = account();
    let executor = MockExecutor::replying(200, json!({"data": {"id": "8u94t", "bid_strategy_type": "AUTO"}}));

    let mut line_item = existing_line_item(&account);
    line_item.set("bid_strategy_type", BidStrategy::Auto).unwrap();
    line_item.save(&executor).await.unwrap();

    let request = executor.last();
    assert_eq!(request.http_method, HttpMethod::Put);
    assert_eq!(request.path, "/12/accounts/18ce54d4x5t/line_items/8u94t");
    assert_eq!(
        request.body,
        Some(json!({"bid_strategy_type": "AUTO", "bid_amount_local_micro": null}))
    );
}

#[tokio::test]
async fn test_failed_save_keeps_assignments() {
    let account = account();
    let executor = MockExecutor::replying(400, json!({"errors": [{"code": "INVALID_PARAMETER"}]}));

    let mut line_item = LineItem::new(&account);
    line_item.set("name", "n").unwrap();
    let err = line_item.save(&executor).await.unwrap_err();

    assert!(matches!(err, ResourceError::Http(ref e) if e.status_code() == Some(400)));
    assert!(line_item.is_assigned("name"));
}

#[tokio::test]
async fn test_load_and_all() {
    let account = account();
    let executor = MockExecutor::default();
    executor.push(200, json!({"data": {"id": "8u94t", "name": "One"}}));
    executor.push(200, json!({"data": [{"id": "a1"}, {"id": "b2", "deleted": true}]}));

    let line_item = LineItem::load(&executor, &account, "8u94t").await.unwrap();
    assert_eq!(line_item.get("name").unwrap().and_then(AttributeValue::as_str), Some("One"));

    let all = LineItem::all(&executor, &account).await.unwrap();
    let ids: Vec<String> = all.iter().filter_map(twitter_ads::Record::id).collect();
    assert_eq!(ids, ["a1", "b2"]);
    assert_eq!(all[1].get("deleted").unwrap(), Some(&AttributeValue::Bool(true)));

    let paths: Vec<String> = executor.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        [
            "/12/accounts/18ce54d4x5t/line_items/8u94t",
            "/12/accounts/18ce54d4x5t/line_items"
        ]
    );
}

#[tokio::test]
async fn test_load_missing_line_item_is_not_found() {
    let account = account();
    let executor = MockExecutor::replying(404, json!({"errors": [{"code": "NOT_FOUND"}]}));

    let err = LineItem::load(&executor, &account, "gone").await.unwrap_err();
    assert!(matches!(err, ResourceError::NotFound { resource: "LineItem", ref id } if id == "gone"));
}

#[tokio::test]
async fn test_delete_marks_deleted() {
    let account = account();
    let executor = MockExecutor::replying(200, json!({"data": {"id": "8u94t", "deleted": true}}));

    let mut line_item = existing_line_item(&account);
    line_item.delete(&executor).await.unwrap();

    let request = executor.last();
    assert_eq!(request.http_method, HttpMethod::Delete);
    assert_eq!(request.path, "/12/accounts/18ce54d4x5t/line_items/8u94t");
    assert_eq!(line_item.get("deleted").unwrap(), Some(&AttributeValue::Bool(true)));
}

#[tokio::test]
async fn test_delete_new_line_item_fails_before_request() {
    let account = account();
    let executor = MockExecutor::default();

    let mut line_item = LineItem::new(&account);
    let err = line_item.delete(&executor).await.unwrap_err();

    assert!(matches!(err, ResourceError::MissingIdentifier { .. }));
    assert!(executor.requests().is_empty());
}

#[tokio::test]
async fn test_load_with_empty_id_fails_before_request() {
    let account = account();
    let executor = MockExecutor::default();

    let err = LineItem::load(&executor, &account, "").await.unwrap_err();

    assert!(matches!(
        err,
        ResourceError::MissingIdentifier { resource: "LineItem", ref placeholder }
            if placeholder == "id"
    ));
    assert!(executor.requests().is_empty());
}
