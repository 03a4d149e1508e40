use alloy_primitives::B256;
use anchor_lang::prelude::*;

use crate::context::CallContext;
use crate::error::*;
use crate::event::*;

/**
 * Rotates the merkle root used for claim verification
 *
 * @param ctx - The call context; the caller must be the operator
 * @param merkle_root - 32-byte hash representing the root of the merkle tree
 *
 * Merkle Tree Structure:
 * - Each leaf: keccak256(claimant_address ++ max_amount as 32 big-endian bytes)
 * - Intermediate nodes: keccak256(smaller_child ++ larger_child)
 * - Leaves padded with a zero hash up to the next power of two
 *
 * Validation Rules:
 * - Merkle root cannot be all zeros (reserved for "unset")
 * - The root can be replaced at any time, even mid-window
 *
 * Claimed amounts are not reset: each root encodes cumulative entitlements,
 * so previously paid accounts only receive the difference.
 */
pub fn handle_rotate_root<B: ?Sized>(ctx: CallContext<'_, B>, merkle_root: B256) -> Result<()> {
    let distributor = ctx.distributor;

    require!(
        ctx.caller == distributor.operator,
        DistributorError::OnlyOperator
    );
    require!(merkle_root != B256::ZERO, DistributorError::InvalidRoot);

    distributor.merkle_root = merkle_root;

    distributor.emit(RootRotated {
        operator: ctx.caller,
        merkle_root,
    });

    Ok(())
}
