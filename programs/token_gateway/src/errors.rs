use anchor_lang::prelude::*;

#[error_code]
pub enum GatewayError {
    #[msg("System is disabled")]
    SystemDisabled,

    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,

    #[msg("Configuration arrays differ in length")]
    ArityMismatch,

    #[msg("Required signature count must be between 1 and the signer count")]
    InvalidQuorum,

    #[msg("Duplicate signer address")]
    DuplicateSigner,

    #[msg("Signer set capacity exceeded")]
    TooManySigners,

    #[msg("Token is not mapped for this chain")]
    UnmappedToken,

    #[msg("Token mapping capacity exceeded")]
    TooManyMappings,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Amount must be non-zero and exceed the fee")]
    InsufficientAmount,

    #[msg("Recovered address is not a registered signer")]
    UnknownSigner,

    #[msg("Withdrawal entry does not exist")]
    UnknownWithdrawal,

    #[msg("Withdrawal has already been fulfilled")]
    AlreadyFulfilled,

    #[msg("Supplied parameters do not match the stored withdrawal entry")]
    StaleParameters,

    #[msg("Not enough distinct registered signatures")]
    QuorumNotMet,

    #[msg("Threshold tiers must be ascending with non-zero requirements")]
    InvalidThresholds,

    #[msg("Entry id does not match the counter")]
    InvalidEntryId,

    #[msg("Invalid signature recovery id")]
    InvalidRecoveryId,

    #[msg("Signature recovery failed")]
    InvalidSignature,

    #[msg("Amount does not fit the local token precision")]
    AmountOverflow,

    #[msg("Invalid chain id")]
    InvalidChainId,
}
