use alloy_primitives::{Address, B256, U256};
use anchor_lang::prelude::*;

use crate::state::DistributionLedger;

/// Event emitted when a new distributor is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributorCreated {
    /// Address holding the distributor's funds
    pub vault: Address,
    /// Asset being distributed (`NATIVE_ASSET` for native currency)
    pub asset: Address,
    /// Owner of the distributor
    pub owner: Address,
    /// Operator of the distributor
    pub operator: Address,
}

/// Event emitted when the window is rotated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRotated {
    /// Operator who set the window
    pub operator: Address,
    /// Start time of the distribution
    pub start_time: i64,
    /// End time of the distribution
    pub end_time: i64,
}

/// Event emitted when the merkle root is rotated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootRotated {
    /// Operator who set the merkle root
    pub operator: Address,
    /// The merkle root hash
    pub merkle_root: B256,
}

/// Event emitted when funds are claimed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claimed {
    /// Address of the claimant
    pub claimant: Address,
    /// Amount paid to the claimant in this call
    pub amount: U256,
    /// Cumulative amount the claimant is entitled to under the current root
    pub max_amount: U256,
    /// Total amount claimed from the distributor by all users
    pub total_claimed: U256,
}

/// Event emitted when remaining funds are recovered by the owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundsRecovered {
    /// Owner who received the funds
    pub recipient: Address,
    /// Amount recovered
    pub amount: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributorEvent {
    Created(DistributorCreated),
    WindowRotated(WindowRotated),
    RootRotated(RootRotated),
    Claimed(Claimed),
    FundsRecovered(FundsRecovered),
}

macro_rules! impl_from_event {
    ($($variant:ident => $event:ty),* $(,)?) => {
        $(
            impl From<$event> for DistributorEvent {
                fn from(event: $event) -> Self {
                    DistributorEvent::$variant(event)
                }
            }
        )*
    };
}

impl_from_event! {
    Created => DistributorCreated,
    WindowRotated => WindowRotated,
    RootRotated => RootRotated,
    Claimed => Claimed,
    FundsRecovered => FundsRecovered,
}

impl DistributionLedger {
    /// Appends an event to the instance log and mirrors it to the program log.
    pub(crate) fn emit(&mut self, event: impl Into<DistributorEvent>) {
        let event = event.into();
        msg!("{:?}", event);
        self.events.push(event);
    }

    /// Drains every event emitted since the last call.
    pub fn take_events(&mut self) -> Vec<DistributorEvent> {
        std::mem::take(&mut self.events)
    }
}
