//! Attribute schemas for REST resources.
//!
//! A [`Schema`] is the ordered, typed list of attributes a resource type
//! declares. It is an ordinary value built once with a [`SchemaBuilder`] and
//! read-only afterwards, so it can be shared between any number of records
//! and threads without locking.
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::rest::{AttributeType, PropertyOptions, Schema};
//!
//! let schema = Schema::builder()
//!     .declare("id", PropertyOptions::READ_ONLY)
//!     .declare("paused", PropertyOptions::BOOLEAN)
//!     .declare("start_time", PropertyOptions::TIMESTAMP)
//!     .declare("name", PropertyOptions::OPAQUE)
//!     .build();
//!
//! assert_eq!(schema.len(), 4);
//! assert!(schema.get("id").unwrap().read_only);
//! assert_eq!(schema.get("paused").unwrap().kind, AttributeType::Boolean);
//! assert_eq!(schema.names().collect::<Vec<_>>(), ["id", "paused", "start_time", "name"]);
//! ```

use std::collections::HashMap;
use std::fmt;

/// The semantic type of an attribute, which drives coercion on assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// `true`/`false`, also accepting boolean-like strings and integers.
    Boolean,
    /// A point in time, normalized to UTC.
    Timestamp,
    /// Any JSON value, stored verbatim.
    #[default]
    Opaque,
}

impl AttributeType {
    /// Returns the type name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Opaque => "opaque",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options recognised by [`SchemaBuilder::declare`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropertyOptions {
    /// The semantic type (default [`AttributeType::Opaque`]).
    pub kind: AttributeType,
    /// Whether callers are barred from assigning the attribute (default `false`).
    pub read_only: bool,
}

impl PropertyOptions {
    /// A writable opaque attribute.
    pub const OPAQUE: Self = Self::new(AttributeType::Opaque, false);
    /// A writable boolean attribute.
    pub const BOOLEAN: Self = Self::new(AttributeType::Boolean, false);
    /// A writable timestamp attribute.
    pub const TIMESTAMP: Self = Self::new(AttributeType::Timestamp, false);
    /// A read-only opaque attribute.
    pub const READ_ONLY: Self = Self::new(AttributeType::Opaque, true);

    /// Creates options with an explicit type and read-only flag.
    #[must_use]
    pub const fn new(kind: AttributeType, read_only: bool) -> Self {
        Self { kind, read_only }
    }

    /// Returns these options with the read-only flag set.
    #[must_use]
    pub const fn read_only(self) -> Self {
        Self {
            read_only: true,
            ..self
        }
    }
}

/// A declared attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeSpec {
    /// The attribute name, as it appears in payloads and responses.
    pub name: &'static str,
    /// The semantic type.
    pub kind: AttributeType,
    /// Whether the attribute is managed by the server.
    pub read_only: bool,
}

/// The ordered attribute table of a resource type.
///
/// Iteration follows declaration order; lookups by name are O(1).
#[derive(Clone, Debug, Default)]
pub struct Schema {
    attributes: Vec<AttributeSpec>,
    index: HashMap<&'static str, usize>,
}

impl Schema {
    /// Creates a new, empty builder.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Returns the attribute declared under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeSpec> {
        self.position(name).map(|i| &self.attributes[i])
    }

    /// Returns the declaration position of `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the attribute at a declaration position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&AttributeSpec> {
        self.attributes.get(position)
    }

    /// Returns `true` if `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates attributes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeSpec> {
        self.attributes.iter()
    }

    /// Iterates attribute names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes.iter().map(|a| a.name)
    }

    /// Returns the number of declared attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if no attributes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a AttributeSpec;
    type IntoIter = std::slice::Iter<'a, AttributeSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Verify Schema is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
};

/// Builder for [`Schema`].
///
/// Redeclaring a name replaces its options but keeps its original position.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Declares an attribute.
    ///
    /// A second declaration of the same name wins, and is logged as a
    /// warning because it is almost always a copy-paste slip. Use
    /// [`redeclare`](Self::redeclare) to override on purpose.
    #[must_use]
    pub fn declare(self, name: &'static str, options: PropertyOptions) -> Self {
        if self.schema.contains(name) {
            tracing::warn!(attribute = name, "Attribute declared more than once; last declaration wins");
        }
        self.insert(name, options)
    }

    /// Replaces the options of an attribute, declaring it if needed, without
    /// a duplicate warning.
    #[must_use]
    pub fn redeclare(self, name: &'static str, options: PropertyOptions) -> Self {
        self.insert(name, options)
    }

    fn insert(mut self, name: &'static str, options: PropertyOptions) -> Self {
        let spec = AttributeSpec {
            name,
            kind: options.kind,
            read_only: options.read_only,
        };

        match self.schema.index.get(name) {
            Some(&i) => self.schema.attributes[i] = spec,
            None => {
                self.schema.index.insert(name, self.schema.attributes.len());
                self.schema.attributes.push(spec);
            }
        }
        self
    }

    /// Finishes the schema.
    #[must_use]
    pub fn build(self) -> Schema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_writable_opaque() {
        let options = PropertyOptions::default();
        assert_eq!(options.kind, AttributeType::Opaque);
        assert!(!options.read_only);
        assert_eq!(options, PropertyOptions::OPAQUE);
    }

    #[test]
    fn test_read_only_modifier_keeps_kind() {
        let options = PropertyOptions::TIMESTAMP.read_only();
        assert_eq!(options.kind, AttributeType::Timestamp);
        assert!(options.read_only);
    }

    #[test]
    fn test_lookup_by_name_and_position() {
        let schema = Schema::builder()
            .declare("id", PropertyOptions::READ_ONLY)
            .declare("deleted", PropertyOptions::BOOLEAN.read_only())
            .declare("name", PropertyOptions::OPAQUE)
            .build();

        assert_eq!(schema.position("deleted"), Some(1));
        assert_eq!(schema.at(2).unwrap().name, "name");
        assert!(schema.get("missing").is_none());
        assert!(!schema.contains("missing"));
        assert!(!schema.is_empty());
    }

    #[test]
    fn test_redeclare_overwrites_in_place() {
        let schema = Schema::builder()
            .declare("a", PropertyOptions::OPAQUE)
            .declare("b", PropertyOptions::OPAQUE)
            .redeclare("a", PropertyOptions::BOOLEAN)
            .build();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.position("a"), Some(0));
        assert_eq!(schema.get("a").unwrap().kind, AttributeType::Boolean);
    }

    #[test]
    fn test_duplicate_declare_is_last_write_wins() {
        let schema = Schema::builder()
            .declare("a", PropertyOptions::OPAQUE)
            .declare("a", PropertyOptions::TIMESTAMP.read_only())
            .build();

        assert_eq!(schema.len(), 1);
        let spec = schema.get("a").unwrap();
        assert_eq!(spec.kind, AttributeType::Timestamp);
        assert!(spec.read_only);
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let schema = Schema::builder()
            .declare("z", PropertyOptions::OPAQUE)
            .declare("a", PropertyOptions::OPAQUE)
            .declare("m", PropertyOptions::OPAQUE)
            .build();

        let names: Vec<&str> = (&schema).into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn test_attribute_type_display() {
        assert_eq!(AttributeType::Boolean.to_string(), "boolean");
        assert_eq!(AttributeType::Timestamp.to_string(), "timestamp");
        assert_eq!(AttributeType::Opaque.to_string(), "opaque");
    }
}
