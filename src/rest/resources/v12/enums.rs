//! Enumerated values accepted by line item attributes.
//!
//! Each enum can be passed straight to [`Record::set`](crate::rest::Record::set).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rest::RawValue;

/// The product a line item promotes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Promoted posts.
    PromotedTweets,
    /// Promoted accounts (follower campaigns).
    PromotedAccount,
}

impl ProductType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PromotedTweets => "PROMOTED_TWEETS",
            Self::PromotedAccount => "PROMOTED_ACCOUNT",
        }
    }
}

/// How bids are placed for a line item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStrategy {
    /// The platform bids automatically within the budget.
    Auto,
    /// A maximum bid set by the advertiser.
    Max,
    /// A target cost the platform aims for.
    Target,
}

impl BidStrategy {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Max => "MAX",
            Self::Target => "TARGET",
        }
    }
}

/// The serving status of an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    /// Serving.
    Active,
    /// Not yet launched.
    Draft,
    /// Stopped by the advertiser.
    Paused,
}

impl EntityStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Draft => "DRAFT",
            Self::Paused => "PAUSED",
        }
    }
}

macro_rules! wire_enum {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    Self::from(value.as_str())
                }
            }
        )*
    };
}

wire_enum!(ProductType, BidStrategy, EntityStatus);
