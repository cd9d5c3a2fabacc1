//! Resources of Ads API version 12.

mod enums;
mod line_item;

pub use enums::{BidStrategy, EntityStatus, ProductType};
pub use line_item::LineItem;
