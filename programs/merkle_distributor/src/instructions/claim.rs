use alloy_primitives::{B256, U256};
use anchor_lang::prelude::*;

use crate::context::CallContext;
use crate::error::*;
use crate::event::*;
use crate::utils::{asset_balance, leaf_hash, non_reentrant, transfer_asset, verify, Bank};

/**
 * Processes a claim with merkle proof verification
 *
 * @param ctx - The call context; the caller is both claimant and recipient
 * @param max_amount - Cumulative amount this caller is entitled to (from merkle tree)
 * @param proof - Sibling hashes forming the merkle proof path
 *
 * Validation Process:
 * 1. Verify the window is set and currently open
 * 2. Verify a merkle root is set
 * 3. Check the caller has something left to claim
 * 4. Verify merkle proof for (caller, max_amount) pair
 * 5. Record the claim, then transfer the pending amount
 *
 * Access Control: Any caller with a valid merkle proof, paid to itself
 */
pub fn handle_claim<B: Bank + ?Sized>(
    ctx: CallContext<'_, B>,
    max_amount: U256,
    proof: &[B256],
) -> Result<()> {
    non_reentrant(ctx, |ctx| process_claim(ctx, max_amount, proof))
}

fn process_claim<B: Bank + ?Sized>(
    ctx: &mut CallContext<'_, B>,
    max_amount: U256,
    proof: &[B256],
) -> Result<()> {
    let claimant = ctx.caller;

    // ===== VALIDATION PHASE =====

    let distributor = &*ctx.distributor;

    require!(distributor.start_time > 0, DistributorError::StartTimeNotSet);
    require!(ctx.now >= distributor.start_time, DistributorError::TooEarly);
    require!(ctx.now <= distributor.end_time, DistributorError::TooLate);

    require!(distributor.has_root(), DistributorError::NoRoot);

    // Check if user can still claim more
    let claimed_amount = distributor.claimed_amount(&claimant);
    require!(max_amount > claimed_amount, DistributorError::InvalidAmount);

    // ===== MERKLE PROOF VERIFICATION =====

    let leaf = leaf_hash(&claimant, &max_amount);
    require!(
        verify(proof, distributor.merkle_root, leaf),
        DistributorError::InvalidProof
    );

    // Calculate the amount to transfer (incremental claiming)
    let pending_amount = max_amount - claimed_amount;

    require!(
        asset_balance(&*ctx.bank, distributor) >= pending_amount,
        DistributorError::InsufficientVaultBalance
    );

    let new_total_claimed = distributor
        .total_claimed
        .checked_add(pending_amount)
        .ok_or(DistributorError::ArithmeticOverflow)?;

    // ===== EFFECTS PHASE (State Updates) =====

    let distributor = &mut *ctx.distributor;
    distributor.claims.record(claimant, max_amount);
    distributor.total_claimed = new_total_claimed;

    // ===== INTERACTIONS PHASE (Transfer) =====

    // A failed payout aborts the whole claim; the guard restores the ledger
    transfer_asset(&mut *ctx.bank, &mut *ctx.distributor, &claimant, pending_amount)?;

    ctx.distributor.emit(Claimed {
        claimant,
        amount: pending_amount,
        max_amount,
        total_claimed: new_total_claimed,
    });

    Ok(())
}
