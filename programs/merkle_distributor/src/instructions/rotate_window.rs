use anchor_lang::prelude::*;

use crate::constants::*;
use crate::context::CallContext;
use crate::error::*;
use crate::event::*;

/**
 * Rotates the distribution window
 *
 * @param ctx - The call context; the caller must be the operator
 * @param start_time - Unix timestamp when distribution should begin
 *
 * Business Logic:
 * - The window can be rescheduled freely until it opens
 * - Once the current window has opened, it can never be modified again
 * - Start time must be in the future (prevents backdating)
 * - Start time must be positive; zero is reserved for "never set"
 * - End time is always start_time + DURATION
 */
pub fn handle_rotate_window<B: ?Sized>(ctx: CallContext<'_, B>, start_time: i64) -> Result<()> {
    let distributor = ctx.distributor;

    require!(
        ctx.caller == distributor.operator,
        DistributorError::OnlyOperator
    );

    // Check if distribution has already started - if so, cannot modify time
    if distributor.start_time > 0 && ctx.now >= distributor.start_time {
        return err!(DistributorError::AlreadyStarted);
    }

    require!(
        start_time > ctx.now && start_time > 0,
        DistributorError::InvalidTime
    );

    let end_time = start_time
        .checked_add(DURATION)
        .ok_or(DistributorError::ArithmeticOverflow)?;

    distributor.start_time = start_time;
    distributor.end_time = end_time;

    distributor.emit(WindowRotated {
        operator: ctx.caller,
        start_time,
        end_time,
    });

    Ok(())
}
