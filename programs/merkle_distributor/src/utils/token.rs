use alloy_primitives::{Address, U256};
use anchor_lang::prelude::*;

use crate::constants::NATIVE_TRANSFER_GAS_STIPEND;
use crate::error::DistributorError;
use crate::state::DistributionLedger;

/// Raw outcome of a token `transfer` call as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCallOutcome {
    /// The call completed and returned a boolean
    Returned(bool),
    /// The call completed without return data (non-standard tokens)
    NoReturnData,
    /// The call reverted
    Reverted,
}

/**
 * Host ledger holding balances for every address
 *
 * Transfers receive the distributor mutably so that a programmable
 * recipient can attempt to call back into it while the payout is in flight.
 * Funds always move out of `distributor.vault()`.
 */
pub trait Bank {
    fn native_balance(&self, holder: &Address) -> U256;

    fn token_balance(&self, token: &Address, holder: &Address) -> U256;

    /// Sends native value with a limited gas stipend. Returns false when the
    /// recipient rejects the value or the vault cannot cover it.
    fn send_native(
        &mut self,
        distributor: &mut DistributionLedger,
        to: &Address,
        amount: U256,
        gas_limit: u64,
    ) -> bool;

    /// Invokes `token.transfer(to, amount)` from the vault.
    fn call_token_transfer(
        &mut self,
        distributor: &mut DistributionLedger,
        token: &Address,
        to: &Address,
        amount: U256,
    ) -> TokenCallOutcome;
}

/// Balance of the configured asset currently held by the distributor
pub fn asset_balance<B: Bank + ?Sized>(bank: &B, distributor: &DistributionLedger) -> U256 {
    if distributor.is_native() {
        bank.native_balance(&distributor.vault())
    } else {
        bank.token_balance(&distributor.asset(), &distributor.vault())
    }
}

/// Universal transfer function that supports both native currency and tokens
pub fn transfer_asset<B: Bank + ?Sized>(
    bank: &mut B,
    distributor: &mut DistributionLedger,
    to: &Address,
    amount: U256,
) -> Result<()> {
    if distributor.is_native() {
        require!(
            bank.send_native(distributor, to, amount, NATIVE_TRANSFER_GAS_STIPEND),
            DistributorError::NativeSendFailed
        );
        return Ok(());
    }

    // Safe transfer: a revert or an explicit `false` is a failure, missing return data is not
    let token = distributor.asset();
    match bank.call_token_transfer(distributor, &token, to, amount) {
        TokenCallOutcome::Returned(true) | TokenCallOutcome::NoReturnData => Ok(()),
        TokenCallOutcome::Returned(false) | TokenCallOutcome::Reverted => {
            err!(DistributorError::TokenTransferFailed)
        }
    }
}
