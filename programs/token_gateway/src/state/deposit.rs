use anchor_lang::prelude::*;

/// Deposit id allocator for one destination chain. Ids start at 0 and only
/// this counter may assign them; an id is consumed only by a transaction
/// that commits.
#[account]
pub struct DepositCounter {
    pub dest_chain_id: u64,

    /// Next id to be assigned, i.e. the number of deposits so far
    pub count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl DepositCounter {
    pub const SIZE: usize = 8   // dest_chain_id
        + 8                     // count
        + 1;                    // bump
}

/// Immutable record of one lock on the source side. Never deleted; its
/// fulfillment is the destination chain's withdrawal, keyed independently.
#[account]
pub struct DepositEntry {
    pub dest_chain_id: u64,
    pub deposit_id: u64,
    pub sender: Pubkey,

    /// Recipient in the destination chain's address space
    pub recipient: [u8; 32],

    pub token: Pubkey,

    /// Locked amount in this chain's decimals; conversion happens on the
    /// destination side
    pub amount: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl DepositEntry {
    pub const SIZE: usize = 8   // dest_chain_id
        + 8                     // deposit_id
        + 32                    // sender
        + 32                    // recipient
        + 32                    // token
        + 8                     // amount
        + 1;                    // bump
}
