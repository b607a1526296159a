//! Customer record as exposed by the host platform.

use serde::{Deserialize, Serialize};

use super::id::{CustomerGroupId, CustomerId, StoreId};

/// An authenticated visitor's account.
///
/// Owned by the host platform; the gate only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer's account id.
    pub id: CustomerId,
    /// Store the account was created in.
    pub store_id: StoreId,
    /// Customer group the account belongs to.
    pub group_id: CustomerGroupId,
}

impl Customer {
    /// Create a customer record.
    #[must_use]
    pub const fn new(id: CustomerId, store_id: StoreId, group_id: CustomerGroupId) -> Self {
        Self {
            id,
            store_id,
            group_id,
        }
    }

    /// Whether the account was created from the back office.
    ///
    /// Such accounts are not bound to any single storefront.
    #[must_use]
    pub const fn is_admin_created(&self) -> bool {
        self.store_id.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_created() {
        let admin_made = Customer::new(CustomerId::new(1), StoreId::ADMIN, CustomerGroupId::new(1));
        let signed_up = Customer::new(CustomerId::new(2), StoreId::new(3), CustomerGroupId::new(1));

        assert!(admin_made.is_admin_created());
        assert!(!signed_up.is_admin_created());
    }
}
