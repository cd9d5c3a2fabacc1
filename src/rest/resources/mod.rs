//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v12/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! The current version is re-exported at this level for convenience:
//!
//! ```rust
//! use twitter_ads::rest::resources::LineItem;       // current version
//! use twitter_ads::rest::resources::v12::LineItem as V12LineItem;
//! ```

pub mod v12;

// Re-export types from the latest version for convenience
pub use v12::*;
