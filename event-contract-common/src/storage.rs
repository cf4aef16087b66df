use near_sdk::{env, AccountId, NearToken, Promise, StorageUsage};

/// Meters the bytes a call adds to contract storage so the caller pays
/// for them out of the attached deposit.
pub struct StorageCharge {
    initial_usage: StorageUsage,
}

impl StorageCharge {
    pub fn start() -> Self {
        Self {
            initial_usage: env::storage_usage(),
        }
    }

    /// Bytes added since `start`. Freed bytes count as zero.
    pub fn bytes_added(&self) -> StorageUsage {
        env::storage_usage().saturating_sub(self.initial_usage)
    }

    pub fn cost(&self) -> NearToken {
        env::storage_byte_cost().saturating_mul(u128::from(self.bytes_added()))
    }

    /// Panics unless `deposit` covers the added bytes, then refunds the
    /// excess to `payer`. Returns the refunded amount.
    pub fn settle(self, payer: &AccountId, deposit: NearToken) -> NearToken {
        let required = self.cost();
        assert!(
            deposit >= required,
            "Insufficient storage deposit. Required: {} yoctoNEAR, attached: {} yoctoNEAR",
            required.as_yoctonear(),
            deposit.as_yoctonear()
        );

        let excess = deposit.saturating_sub(required);
        refund(payer, excess);
        excess
    }
}

/// Send `amount` back to `payer`, if there is anything to send
pub fn refund(payer: &AccountId, amount: NearToken) {
    if !amount.is_zero() {
        Promise::new(payer.clone()).transfer(amount);
    }
}
