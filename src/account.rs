//! The advertising account context resources are bound to.

use crate::config::AccountId;

/// An advertising account.
///
/// Every [`Record`](crate::rest::Record) borrows the account it belongs to;
/// the account supplies the `account_id` placeholder of resource paths.
///
/// # Example
///
/// ```rust
/// use twitter_ads::{Account, AccountId};
///
/// let account = Account::new(AccountId::new("18ce54d4x5t").unwrap());
/// assert_eq!(account.id().as_ref(), "18ce54d4x5t");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
}

impl Account {
    /// Creates an account context for the given identifier.
    #[must_use]
    pub const fn new(id: AccountId) -> Self {
        Self { id }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> &AccountId {
        &self.id
    }
}

// Verify Account is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Account>();
};
