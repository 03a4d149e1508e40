use alloy_primitives::{Address, B256, U256};

use crate::constants::NATIVE_ASSET;
use crate::event::DistributorEvent;
use crate::state::ClaimLedger;

/**
 * Main distributor state
 *
 * This struct represents the complete state of one distribution instance.
 * It stores the immutable identity bindings, the operator-managed root and
 * window, and the cumulative claim accounting.
 *
 * Lifecycle:
 * 1. Created during create_distributor
 * 2. Updated when the window and merkle root are rotated
 * 3. Updated during claims (claimed amounts and total_claimed grow)
 * 4. Drained, but never destroyed, by recover_funds
 */
#[derive(Debug, Clone)]
pub struct DistributionLedger {
    /// Asset being distributed
    /// - `NATIVE_ASSET` selects native currency, anything else is a token address
    pub(crate) asset: Address,

    /// Operator who can manage the distribution
    /// - Can rotate the window and the merkle root
    pub(crate) operator: Address,

    /// Owner of the distributor
    /// - Can recover remaining funds after the window ends
    pub(crate) owner: Address,

    /// Address holding the distributor's funds in the host bank
    pub(crate) vault: Address,

    /// Merkle root for claim verification
    /// - Zero means no root has been set
    /// - Can be updated by operator at any time
    pub(crate) merkle_root: B256,

    /// Start time of distribution (Unix timestamp)
    /// - Zero until the operator rotates the window for the first time
    pub(crate) start_time: i64,

    /// End time of distribution (Unix timestamp)
    /// - Always start_time + DURATION once set
    /// - Claims are only allowed up to this time, recovery only after it
    pub(crate) end_time: i64,

    /// Total amount paid to all claimants
    pub(crate) total_claimed: U256,

    /// Cumulative amount paid per claimant
    pub(crate) claims: ClaimLedger,

    /// Reentrancy flag, set while a guarded operation is running
    pub(crate) locked: bool,

    /// Events emitted and not yet drained by the host
    pub(crate) events: Vec<DistributorEvent>,
}

/// Effective claim eligibility derived from root presence and window timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionPhase {
    /// No window has ever been configured
    Uninitialized,
    /// A window exists but claims are not possible yet
    /// (before start, or inside the window while no root is set)
    WindowScheduled,
    /// Inside the window with a root set
    Active,
    /// Past the end of the window
    Expired,
}

impl DistributionLedger {
    pub(crate) fn new(asset: Address, operator: Address, owner: Address, vault: Address) -> Self {
        Self {
            asset,
            operator,
            owner,
            vault,
            merkle_root: B256::ZERO,
            start_time: 0,
            end_time: 0,
            total_claimed: U256::ZERO,
            claims: ClaimLedger::default(),
            locked: false,
            events: Vec::new(),
        }
    }

    pub fn asset(&self) -> Address {
        self.asset
    }

    pub fn is_native(&self) -> bool {
        self.asset == NATIVE_ASSET
    }

    pub fn operator(&self) -> Address {
        self.operator
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn vault(&self) -> Address {
        self.vault
    }

    pub fn merkle_root(&self) -> B256 {
        self.merkle_root
    }

    pub fn has_root(&self) -> bool {
        self.merkle_root != B256::ZERO
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    pub fn end_time(&self) -> i64 {
        self.end_time
    }

    /// Window bounds as `(start_time, end_time)`, `(0, 0)` when never configured.
    pub fn window(&self) -> (i64, i64) {
        (self.start_time, self.end_time)
    }

    pub fn total_claimed(&self) -> U256 {
        self.total_claimed
    }

    pub fn claimed_amount(&self, account: &Address) -> U256 {
        self.claims.claimed_amount(account)
    }

    pub fn claims(&self) -> &ClaimLedger {
        &self.claims
    }

    pub fn phase(&self, now: i64) -> DistributionPhase {
        if self.start_time == 0 {
            DistributionPhase::Uninitialized
        } else if now > self.end_time {
            DistributionPhase::Expired
        } else if now >= self.start_time && self.has_root() {
            DistributionPhase::Active
        } else {
            DistributionPhase::WindowScheduled
        }
    }
}
