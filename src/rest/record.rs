//! Resource instances.
//!
//! A [`Record`] holds one slot per attribute of its resource's schema and
//! remembers which slots the caller assigned. Only assigned, writable
//! attributes reach a request payload; values decoded from server responses
//! are readable but never counted as assignments.
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::rest::resources::v12::LineItem;
//! use twitter_ads::{Account, AccountId};
//!
//! let account = Account::new(AccountId::new("18ce54d4x5t").unwrap());
//! let mut line_item = LineItem::new(&account);
//!
//! line_item.set("name", "Spring launch").unwrap();
//! line_item.set("paused", true).unwrap_err(); // not a LineItem attribute
//! line_item.set("id", "8u94t").unwrap_err(); // read-only
//!
//! assert!(line_item.is_assigned("name"));
//! assert_eq!(line_item.assigned_attributes(), ["name"]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::account::Account;
use crate::rest::{
    apply_rules, AttributeValue, Payload, RawValue, Resource, ResourceError, RuleContext,
};

/// An instance of resource type `R`, bound to an account.
pub struct Record<'a, R: Resource> {
    account: &'a Account,
    values: Vec<Option<AttributeValue>>,
    assigned: Vec<bool>,
    resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> Record<'a, R> {
    /// Creates an empty record: nothing set, nothing assigned.
    #[must_use]
    pub fn new(account: &'a Account) -> Self {
        let len = R::schema().len();
        Self {
            account,
            values: vec![None; len],
            assigned: vec![false; len],
            resource: PhantomData,
        }
    }

    /// Decodes a server object into a record.
    ///
    /// Every declared attribute present in `body` is stored, read-only ones
    /// included. Undeclared keys are skipped. Nothing is marked assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if `body` is not an object
    /// or a value does not fit its declared type.
    pub fn from_response(account: &'a Account, body: &Value) -> Result<Self, ResourceError> {
        let mut record = Self::new(account);
        record.hydrate(body)?;
        Ok(record)
    }

    /// Replaces every slot with the contents of a server object and clears
    /// all assignment flags.
    pub(crate) fn hydrate(&mut self, body: &Value) -> Result<(), ResourceError> {
        let object = body.as_object().ok_or_else(|| ResourceError::MalformedResponse {
            resource: R::NAME,
            detail: format!("expected an object, got {body}"),
        })?;

        let schema = R::schema();
        let mut values = vec![None; schema.len()];

        for (key, value) in object {
            let Some(position) = schema.position(key) else {
                tracing::debug!(resource = R::NAME, key = %key, "Ignoring undeclared response key");
                continue;
            };
            let Some(spec) = schema.at(position) else {
                continue;
            };

            let coerced = AttributeValue::coerce(spec, RawValue::Json(value.clone())).map_err(
                |e| ResourceError::MalformedResponse {
                    resource: R::NAME,
                    detail: e.to_string(),
                },
            )?;
            values[position] = Some(coerced);
        }

        self.values = values;
        self.mark_clean();
        Ok(())
    }

    /// Assigns an attribute.
    ///
    /// The value is coerced to the attribute's declared type and the
    /// attribute is marked as explicitly assigned.
    ///
    /// # Errors
    ///
    /// * [`ResourceError::UnknownAttribute`] if `name` is not declared.
    /// * [`ResourceError::ReadOnlyAttribute`] if the attribute is read-only.
    /// * [`ResourceError::Coercion`] if the value does not fit the type.
    pub fn set(&mut self, name: &str, value: impl Into<RawValue>) -> Result<(), ResourceError> {
        let position = Self::position(name)?;
        let spec = R::schema()
            .at(position)
            .ok_or_else(|| Self::unknown(name))?;

        if spec.read_only {
            return Err(ResourceError::ReadOnlyAttribute {
                resource: R::NAME,
                attribute: spec.name,
            });
        }

        let value = AttributeValue::coerce(spec, value.into())?;
        self.values[position] = Some(value);
        self.assigned[position] = true;
        Ok(())
    }

    /// Reads an attribute.
    ///
    /// Returns `Ok(None)` for a declared attribute that holds no value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownAttribute`] if `name` is not declared.
    pub fn get(&self, name: &str) -> Result<Option<&AttributeValue>, ResourceError> {
        let position = Self::position(name)?;
        Ok(self.values[position].as_ref())
    }

    /// Returns `true` if the caller assigned `name` since the record was
    /// created, loaded or last saved.
    #[must_use]
    pub fn is_assigned(&self, name: &str) -> bool {
        R::schema()
            .position(name)
            .is_some_and(|position| self.assigned[position])
    }

    /// Returns the explicitly assigned attribute names in declaration order.
    #[must_use]
    pub fn assigned_attributes(&self) -> Vec<&'static str> {
        R::schema()
            .iter()
            .zip(&self.assigned)
            .filter(|(_, assigned)| **assigned)
            .map(|(spec, _)| spec.name)
            .collect()
    }

    /// Iterates the attributes that hold a value, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &AttributeValue)> + '_ {
        R::schema()
            .iter()
            .zip(&self.values)
            .filter_map(|(spec, value)| value.as_ref().map(|v| (spec.name, v)))
    }

    /// Returns the server-assigned identifier, if the record has one.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.get(R::ID_ATTRIBUTE).ok().flatten()? {
            AttributeValue::Opaque(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            AttributeValue::Opaque(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns the account this record belongs to.
    #[must_use]
    pub const fn account(&self) -> &'a Account {
        self.account
    }

    /// Forgets every assignment, so the next payload is empty until the
    /// caller sets something again.
    pub fn mark_clean(&mut self) {
        self.assigned.iter_mut().for_each(|a| *a = false);
    }

    /// Builds the request payload.
    ///
    /// Every assigned, writable attribute is rendered in declaration order,
    /// then the resource's payload rules are applied in order.
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        let payload: Payload = R::schema()
            .iter()
            .zip(self.values.iter().zip(&self.assigned))
            .filter(|(spec, (_, assigned))| **assigned && !spec.read_only)
            .filter_map(|(spec, (value, _))| {
                value
                    .as_ref()
                    .map(|value| (spec.name.to_string(), value.to_wire()))
            })
            .collect();

        let id = self.id();
        apply_rules(payload, R::payload_rules(), &RuleContext::new(id.as_deref()))
    }

    fn position(name: &str) -> Result<usize, ResourceError> {
        R::schema().position(name).ok_or_else(|| Self::unknown(name))
    }

    fn unknown(name: &str) -> ResourceError {
        ResourceError::UnknownAttribute {
            resource: R::NAME,
            attribute: name.to_string(),
        }
    }
}

impl<R: Resource> Clone for Record<'_, R> {
    fn clone(&self) -> Self {
        Self {
            account: self.account,
            values: self.values.clone(),
            assigned: self.assigned.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for Record<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(R::NAME);
        for (name, value) in self.attributes() {
            s.field(name, value);
        }
        s.finish()
    }
}
