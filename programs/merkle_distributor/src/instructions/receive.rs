use alloy_primitives::U256;
use anchor_lang::prelude::*;

use crate::context::CallContext;
use crate::error::*;

/**
 * Accepts incoming native value
 *
 * Called by the bank before crediting native value to the vault. Only a
 * native-currency distributor takes native value; a token distributor
 * rejects it so value cannot be stranded where nobody can pay it out.
 */
pub fn handle_receive_native<B: ?Sized>(ctx: CallContext<'_, B>, amount: U256) -> Result<()> {
    require!(
        ctx.distributor.is_native(),
        DistributorError::NativeNotAccepted
    );

    msg!("Received {} native from {}", amount, ctx.caller);

    Ok(())
}
