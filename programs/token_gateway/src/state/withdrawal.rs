use anchor_lang::prelude::*;

use crate::constants::MAX_SIGNATURES_PER_WITHDRAWAL;
use crate::errors::GatewayError;

/// Withdrawal id allocator, one per destination chain id. Two destination
/// chains have fully independent id spaces.
#[account]
pub struct WithdrawalCounter {
    pub dest_chain_id: u64,

    /// Next id to be assigned
    pub count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl WithdrawalCounter {
    pub const SIZE: usize = 8   // dest_chain_id
        + 8                     // count
        + 1;                    // bump
}

/// A withdrawal request and its collected authorizations.
///
/// Lifecycle: created Pending by `request_withdrawal`, accepts signatures
/// until `withdraw` flips `fulfilled`. The flip is terminal. Entries are
/// never deleted; one that never reaches quorum stays Pending indefinitely
/// and keeps accepting signatures.
#[account]
pub struct WithdrawalEntry {
    /// Destination chain id as seen from the chain holding the entry
    pub chain_id: u64,

    pub withdrawal_id: u64,

    /// Recipient in the destination chain's address space
    pub recipient: [u8; 32],

    /// Token in the destination chain's address space
    pub token: [u8; 32],

    /// Amount in destination decimals, already converted
    pub amount: u128,

    /// Fee in destination decimals, routed to the fee sink on fulfillment
    pub fee: u128,

    pub fulfilled: bool,

    /// Collected signatures in insertion order, at most one per signer
    pub signatures: Vec<WithdrawalSignature>,

    /// PDA bump seed
    pub bump: u8,
}

/// One validator's signature over the canonical withdrawal hash
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct WithdrawalSignature {
    /// Recovered signer address
    pub signer: [u8; 20],

    /// r and s components, 32 bytes each
    pub signature: [u8; 64],

    /// v component
    pub recovery_id: u8,
}

impl WithdrawalSignature {
    pub const SIZE: usize = 20  // signer
        + 64                    // signature
        + 1;                    // recovery_id
}

impl WithdrawalEntry {
    pub const SIZE: usize = 8                                               // chain_id
        + 8                                                                 // withdrawal_id
        + 32                                                                // recipient
        + 32                                                                // token
        + 16                                                                // amount (u128)
        + 16                                                                // fee (u128)
        + 1                                                                 // fulfilled
        + 4 + WithdrawalSignature::SIZE * MAX_SIGNATURES_PER_WITHDRAWAL     // signatures vec
        + 1;                                                                // bump

    /// Store or overwrite one signer's signature. Keyed by signer, so
    /// resubmission is idempotent and submissions commute.
    pub fn record_signature(&mut self, signature: WithdrawalSignature) -> Result<()> {
        if let Some(existing) = self
            .signatures
            .iter_mut()
            .find(|s| s.signer == signature.signer)
        {
            *existing = signature;
            return Ok(());
        }
        require!(
            self.signatures.len() < MAX_SIGNATURES_PER_WITHDRAWAL,
            GatewayError::TooManySigners
        );
        self.signatures.push(signature);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> WithdrawalEntry {
        WithdrawalEntry {
            chain_id: 5,
            withdrawal_id: 0,
            recipient: [1; 32],
            token: [2; 32],
            amount: 1_000,
            fee: 10,
            fulfilled: false,
            signatures: vec![],
            bump: 255,
        }
    }

    fn sig(signer_tag: u8, sig_tag: u8) -> WithdrawalSignature {
        WithdrawalSignature {
            signer: [signer_tag; 20],
            signature: [sig_tag; 64],
            recovery_id: 0,
        }
    }

    #[test]
    fn resubmission_overwrites_in_place() {
        let mut entry = entry();
        entry.record_signature(sig(1, 10)).unwrap();
        entry.record_signature(sig(2, 20)).unwrap();
        entry.record_signature(sig(1, 30)).unwrap();

        assert_eq!(entry.signatures.len(), 2);
        // insertion order is preserved, newer bytes win
        assert_eq!(entry.signatures[0].signer, [1; 20]);
        assert_eq!(entry.signatures[0].signature, [30; 64]);
        assert_eq!(entry.signatures[1].signer, [2; 20]);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut entry = entry();
        for i in 0..MAX_SIGNATURES_PER_WITHDRAWAL {
            entry.record_signature(sig(i as u8, 0)).unwrap();
        }
        let err = entry.record_signature(sig(200, 0)).unwrap_err();
        assert_eq!(err, GatewayError::TooManySigners.into());

        // overwriting still works at capacity
        entry.record_signature(sig(0, 99)).unwrap();
        assert_eq!(entry.signatures[0].signature, [99; 64]);
    }
}
