use alloy_primitives::Address;
use anchor_lang::prelude::*;

/**
 * Distributor Constants
 *
 * This module defines the constant values used throughout the merkle distributor.
 * These constants control window timing, asset selection and leaf layout.
 */

#[constant]
/// ===== TIMING CONSTANTS =====

/// Duration of each distribution window (30 days)
/// - Applied when rotating the window to calculate end_time
/// - Value: 30 days * 24 hours * 60 minutes * 60 seconds = 2,592,000 seconds
pub const DURATION: i64 = 30 * 24 * 60 * 60; // 30 days in seconds

/// ===== ASSET CONSTANTS =====

/// Sentinel asset identifier for native currency
/// - A distributor created with this asset pays out native value instead of a token
/// - Only native distributors accept incoming native value
pub const NATIVE_ASSET: Address = Address::ZERO;

/// Gas forwarded with a native payout
/// - Enough for the recipient to log, not enough to do meaningful work
pub const NATIVE_TRANSFER_GAS_STIPEND: u64 = 2300;

/// ===== LEAF CONSTANTS =====

/// Byte length of an encoded leaf: 20-byte address followed by a 32-byte big-endian amount
pub const LEAF_ENCODING_LEN: usize = 20 + 32;
