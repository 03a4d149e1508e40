use alloy_primitives::Address;

use crate::state::DistributionLedger;

/**
 * Invocation context for a distributor operation
 *
 * Bundles everything a handler may touch during one call:
 * - the distributor being operated on
 * - the host bank that holds balances and performs transfers
 * - the authenticated caller and the current ledger time
 *
 * A context is consumed by the handler it is passed to. Programmable
 * recipients reached through the bank build their own context to call back in.
 */
pub struct CallContext<'a, B: ?Sized> {
    pub distributor: &'a mut DistributionLedger,
    pub bank: &'a mut B,
    pub caller: Address,
    pub now: i64,
}

impl<'a, B: ?Sized> CallContext<'a, B> {
    pub fn new(distributor: &'a mut DistributionLedger, bank: &'a mut B, caller: Address, now: i64) -> Self {
        Self {
            distributor,
            bank,
            caller,
            now,
        }
    }
}
