use alloy_primitives::Address;
use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Identity bindings for a new distributor
 *
 * All fields are fixed for the lifetime of the distributor.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributorConfig {
    /// Asset to distribute, `NATIVE_ASSET` for native currency
    pub asset: Address,
    /// Account that can rotate the window and the merkle root
    pub operator: Address,
    /// Account that can recover remaining funds after the window ends
    pub owner: Address,
    /// Address under which the host bank keeps the distributor's funds
    pub vault: Address,
}

/**
 * Creates a new distributor
 *
 * @param config - Asset, operator, owner and vault bindings
 *
 * Validation Rules:
 * - Operator and owner cannot be the zero address
 *
 * Note: merkle_root, start_time, end_time and total_claimed start at zero.
 * Funding happens separately through the bank (token transfer to the vault,
 * or native value through receive_native).
 */
pub fn handle_create_distributor(config: DistributorConfig) -> Result<DistributionLedger> {
    require!(
        config.operator != Address::ZERO,
        DistributorError::InvalidOperator
    );
    require!(config.owner != Address::ZERO, DistributorError::InvalidOwner);

    let mut distributor =
        DistributionLedger::new(config.asset, config.operator, config.owner, config.vault);

    distributor.emit(DistributorCreated {
        vault: config.vault,
        asset: config.asset,
        owner: config.owner,
        operator: config.operator,
    });

    Ok(distributor)
}
