use anchor_lang::prelude::*;

/// Custom error codes for the pooled vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: caller is not the owner")]
    NotOwner,

    #[msg("Token address cannot be zero")]
    ZeroTokenAddress,

    #[msg("Vesting has not started")]
    VestingNotStarted,

    #[msg("You have already joined, use claim to receive your reward")]
    AlreadyJoined,

    #[msg("Maximum number of participants reached")]
    CapacityExhausted,

    #[msg("You have not joined the vesting")]
    NotJoined,

    #[msg("You have received all tokens")]
    AllTokensReceived,

    #[msg("Insufficient token balance for transfer")]
    InsufficientBalance,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Vesting round is still active")]
    VestingStillActive,
}
