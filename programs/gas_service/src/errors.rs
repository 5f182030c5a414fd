use anchor_lang::prelude::*;

#[error_code]
pub enum GasServiceError {
    #[msg("Nothing received")]
    NothingReceived,

    #[msg("Caller is not the owner")]
    NotOwner,

    #[msg("Tokens and amounts differ in length")]
    InvalidAmounts,

    #[msg("Too many tokens in one fee collection")]
    TooManyFeeTokens,

    #[msg("Empty destination chain")]
    EmptyDestinationChain,

    #[msg("Destination chain too long")]
    DestinationChainTooLong,

    #[msg("Empty destination address")]
    EmptyDestinationAddress,

    #[msg("Destination address too long")]
    DestinationAddressTooLong,

    #[msg("Token symbol too long")]
    SymbolTooLong,

    #[msg("Insufficient vault balance")]
    InsufficientBalance,

    #[msg("Required account not provided")]
    MissingAccount,

    #[msg("Token program not provided")]
    MissingTokenProgram,

    #[msg("Invalid implementation")]
    InvalidImplementation,

    #[msg("Invalid owner")]
    InvalidOwner,

    #[msg("Signer is not the program upgrade authority")]
    NotUpgradeAuthority,
}
