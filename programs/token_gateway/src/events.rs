use anchor_lang::prelude::*;

/// Emitted when tokens are locked for bridging to another chain.
/// Validators watch this event on the counterpart gateway's history.
#[event]
pub struct DepositRequested {
    pub dest_chain_id: u64,
    pub deposit_id: u64,
    pub sender: Pubkey,
    pub recipient: [u8; 32],
    pub token: Pubkey,
    pub amount: u64,
}

/// Emitted when a withdrawal entry is created on the source side
#[event]
pub struct WithdrawalRequested {
    pub chain_id: u64,
    pub withdrawal_id: u64,
    pub recipient: [u8; 32],
    pub token: [u8; 32],
    pub amount: u128,
    pub fee: u128,
}

/// Emitted for every accepted validator signature
#[event]
pub struct WithdrawalSignatureSubmitted {
    pub chain_id: u64,
    pub withdrawal_id: u64,
    pub signer: [u8; 20],
}

/// Emitted when a withdrawal reaches quorum and funds are released
#[event]
pub struct Withdrawn {
    pub chain_id: u64,
    pub withdrawal_id: u64,
    pub recipient: Pubkey,
    pub token: Pubkey,
    pub amount: u128,
    pub fee: u128,
}

/// Emitted once per mapping written by `map_tokens`
#[event]
pub struct TokensMapped {
    pub remote_chain_id: u64,
    pub remote_token: [u8; 32],
    pub local_token: Pubkey,
    pub local_decimals: u8,
    pub remote_decimals: u8,
}

/// Emitted when the validator signer set or its baseline quorum changes
#[event]
pub struct SignersUpdated {
    pub signer_count: u8,
    pub required_number: u8,
}

/// Emitted when the tiered threshold policy is replaced
#[event]
pub struct ThresholdsUpdated {
    pub tier_count: u8,
}

/// Emitted when system status changes
#[event]
pub struct SystemStatusChanged {
    pub enabled: bool,
}

/// Emitted when the fee sink is rotated
#[event]
pub struct FeeRecipientUpdated {
    pub fee_recipient: Pubkey,
}
