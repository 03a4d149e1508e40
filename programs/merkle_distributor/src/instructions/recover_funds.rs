use anchor_lang::prelude::*;

use crate::context::CallContext;
use crate::error::*;
use crate::event::*;
use crate::utils::{asset_balance, non_reentrant, transfer_asset, Bank};

/**
 * Recovers remaining funds from the distributor
 *
 * @param ctx - The call context; the caller must be the owner
 *
 * Business Logic:
 * - Can be called in two scenarios:
 *   1. After the distribution window has ended (now > end_time)
 *   2. If the window was never set (start_time = 0, end_time = 0)
 * - Sends the entire held balance to the owner
 * - Leaves claim accounting untouched; the distributor stays queryable
 *   and can be drained again if it is topped up later
 */
pub fn handle_recover_funds<B: Bank + ?Sized>(ctx: CallContext<'_, B>) -> Result<()> {
    require!(
        ctx.caller == ctx.distributor.owner,
        DistributorError::OnlyOwner
    );

    non_reentrant(ctx, |ctx| {
        // Ensure distribution has ended or was never started
        require!(
            ctx.now > ctx.distributor.end_time,
            DistributorError::InvalidTime
        );

        let remaining_balance = asset_balance(&*ctx.bank, &*ctx.distributor);
        require!(!remaining_balance.is_zero(), DistributorError::NoTokens);

        let owner = ctx.distributor.owner;
        transfer_asset(&mut *ctx.bank, &mut *ctx.distributor, &owner, remaining_balance)?;

        ctx.distributor.emit(FundsRecovered {
            recipient: owner,
            amount: remaining_balance,
        });

        Ok(())
    })
}
