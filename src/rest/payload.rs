//! Request payloads and resource-specific payload rules.
//!
//! A record is first serialized generically (every explicitly assigned,
//! writable attribute in declaration order). Each resource type can then
//! rewrite the result with an ordered list of [`PayloadRule`]s. Rules are
//! plain functions, so adding one never touches the generic serializer.
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use twitter_ads::rest::{apply_rules, Payload, PayloadRule, RuleContext};
//!
//! fn drop_internal(mut payload: Payload, _ctx: &RuleContext<'_>) -> Payload {
//!     payload.remove("internal");
//!     payload
//! }
//!
//! const RULES: &[PayloadRule] = &[PayloadRule::new("drop_internal", drop_internal)];
//!
//! let mut payload = Payload::new();
//! payload.insert("internal".into(), json!(1));
//! payload.insert("name".into(), json!("n"));
//!
//! let payload = apply_rules(payload, RULES, &RuleContext::new(None));
//! assert_eq!(Value::Object(payload), json!({"name": "n"}));
//! ```

use std::fmt;

use serde_json::{Map, Value};

/// An ordered key/value request payload.
pub type Payload = Map<String, Value>;

/// What a payload rule may know about the record being serialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleContext<'a> {
    id: Option<&'a str>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for a record with the given server identifier.
    #[must_use]
    pub const fn new(id: Option<&'a str>) -> Self {
        Self { id }
    }

    /// Returns the record's server-assigned identifier, if it has one.
    #[must_use]
    pub const fn id(&self) -> Option<&'a str> {
        self.id
    }

    /// Returns `true` if the record already exists on the server.
    #[must_use]
    pub const fn has_id(&self) -> bool {
        self.id.is_some()
    }
}

/// A named rewrite of a serialized payload.
#[derive(Clone, Copy)]
pub struct PayloadRule {
    /// Name used in logs.
    pub name: &'static str,
    /// The rewrite itself.
    pub apply: fn(Payload, &RuleContext<'_>) -> Payload,
}

impl PayloadRule {
    /// Creates a rule.
    #[must_use]
    pub const fn new(name: &'static str, apply: fn(Payload, &RuleContext<'_>) -> Payload) -> Self {
        Self { name, apply }
    }
}

impl fmt::Debug for PayloadRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Applies `rules` to `payload` in order.
#[must_use]
pub fn apply_rules(payload: Payload, rules: &[PayloadRule], ctx: &RuleContext<'_>) -> Payload {
    rules.iter().fold(payload, |payload, rule| {
        tracing::debug!(rule = rule.name, "Applying payload rule");
        (rule.apply)(payload, ctx)
    })
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PayloadRule>();
    assert_send_sync::<RuleContext<'static>>();
};
