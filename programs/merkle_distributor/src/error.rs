use anchor_lang::prelude::*;

#[error_code]
pub enum DistributorError {
    // Access control errors
    #[msg("Only operator can perform this action")]
    OnlyOperator,
    #[msg("Only owner can perform this action")]
    OnlyOwner,
    #[msg("Invalid operator account")]
    InvalidOperator,
    #[msg("Invalid owner account")]
    InvalidOwner,

    // Time validation errors
    #[msg("Invalid time")]
    InvalidTime,
    #[msg("Distribution has already started, cannot modify time")]
    AlreadyStarted,
    #[msg("Start time not set")]
    StartTimeNotSet,
    #[msg("Distribution not started")]
    TooEarly,
    #[msg("Distribution has ended")]
    TooLate,

    // Distribution state errors
    #[msg("No merkle root set")]
    NoRoot,
    #[msg("Invalid merkle root")]
    InvalidRoot,
    #[msg("Nothing to recover")]
    NoTokens,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // Claim validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid proof")]
    InvalidProof,

    // Transfer errors
    #[msg("Native transfer rejected by recipient")]
    NativeSendFailed,
    #[msg("Distributor does not accept native currency")]
    NativeNotAccepted,
    #[msg("Token transfer failed")]
    TokenTransferFailed,

    // System level errors
    #[msg("Reentrant call")]
    ReentrantCall,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
