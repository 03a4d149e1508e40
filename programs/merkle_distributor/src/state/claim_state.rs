use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};

/**
 * Per-account claim ledger
 *
 * Tracks the cumulative amount paid to every claimant of a distribution.
 * Supports single claim (when root set once) or incremental distributions
 * by raising max_amount in a later root without resetting previous claims.
 *
 * Design Notes:
 * - Unseen accounts read as zero
 * - Amounts only grow through `record`; a failed claim is undone by the
 *   caller restoring the whole ledger
 */
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ClaimLedger {
    claimed: BTreeMap<Address, U256>,
}

impl ClaimLedger {
    /// Total amount claimed by this account (cumulative)
    pub fn claimed_amount(&self, account: &Address) -> U256 {
        self.claimed.get(account).copied().unwrap_or(U256::ZERO)
    }

    /// Sets the cumulative amount for an account
    pub(crate) fn record(&mut self, account: Address, amount: U256) {
        self.claimed.insert(account, amount);
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.claimed.iter()
    }
}
