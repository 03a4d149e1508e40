pub mod constants;
pub mod context;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

pub use context::CallContext;
pub use error::DistributorError;
pub use event::DistributorEvent;
pub use instructions::DistributorConfig;
pub use state::{DistributionLedger, DistributionPhase};
pub use utils::{Bank, TokenCallOutcome};

/**
 * Merkle Distributor
 *
 * Distributes a fixed pool of native currency or a single token to many
 * recipients using merkle tree verification. Entitlements live off-ledger;
 * the distributor only stores the current root and what each account has
 * already been paid.
 *
 * Key Features:
 * - Merkle tree-based claim verification (keccak256, sorted pairs)
 * - Cumulative entitlements: a new root raises max amounts and accounts
 *   receive only the difference from what they already claimed
 * - Root can be rotated by the operator at any time
 * - Time-bounded distribution window (start_time .. start_time + 30 days)
 * - Operator delegation (separate owner and operator roles)
 * - Native currency or token payouts behind one transfer adapter
 * - Reentrancy lock plus checks-effects-interactions ordering on payouts
 *
 * Workflow:
 * 1. Host creates the distributor and funds its vault
 * 2. Operator rotates the window and the merkle root
 * 3. Users claim with valid merkle proofs
 * 4. Owner recovers remaining funds after the window ends
 */
pub mod merkle_distributor {
    use alloy_primitives::{B256, U256};
    use anchor_lang::prelude::*;

    use super::*;
    use crate::instructions::*;

    /**
     * Creates a new distributor
     *
     * @param config - Asset, operator, owner and vault bindings
     */
    pub fn create_distributor(config: DistributorConfig) -> Result<DistributionLedger> {
        handle_create_distributor(config)
    }

    /**
     * Rotates the distribution window
     *
     * Schedules when the distribution begins and derives the end time
     * (start_time + 30 days). Rejected once the current window has opened.
     *
     * @param ctx - Call context
     * @param start_time - Unix timestamp when distribution should begin
     *
     * Access Control: Operator only
     */
    pub fn rotate_window<B: ?Sized>(ctx: CallContext<'_, B>, start_time: i64) -> Result<()> {
        handle_rotate_window(ctx, start_time)
    }

    /**
     * Rotates the merkle root for claim verification
     *
     * @param ctx - Call context
     * @param merkle_root - 32-byte hash representing the merkle tree root
     *
     * Access Control: Operator only
     * Note: The merkle root can be updated at any time
     */
    pub fn rotate_root<B: ?Sized>(ctx: CallContext<'_, B>, merkle_root: B256) -> Result<()> {
        handle_rotate_root(ctx, merkle_root)
    }

    /**
     * Claims funds with merkle proof verification
     *
     * @param ctx - Call context; the caller receives the payout
     * @param max_amount - Cumulative amount this caller is eligible for
     * @param proof - Sibling hashes forming the merkle proof
     *
     * Access Control: Any caller with a valid merkle proof
     */
    pub fn claim<B: Bank + ?Sized>(
        ctx: CallContext<'_, B>,
        max_amount: U256,
        proof: &[B256],
    ) -> Result<()> {
        handle_claim(ctx, max_amount, proof)
    }

    /**
     * Recovers remaining funds after the distribution ends
     *
     * @param ctx - Call context
     *
     * Access Control: Owner only
     * Note: Can be repeated; an empty vault reports NoTokens
     */
    pub fn recover_funds<B: Bank + ?Sized>(ctx: CallContext<'_, B>) -> Result<()> {
        handle_recover_funds(ctx)
    }

    /**
     * Accepts native value sent to the vault
     *
     * Access Control: Anyone, native-currency distributors only
     */
    pub fn receive_native<B: ?Sized>(ctx: CallContext<'_, B>, amount: U256) -> Result<()> {
        handle_receive_native(ctx, amount)
    }
}
