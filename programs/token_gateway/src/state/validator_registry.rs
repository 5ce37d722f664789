use anchor_lang::prelude::*;

use crate::constants::MAX_SIGNERS;
use crate::errors::GatewayError;

/// M-of-N signer set consulted for withdrawal authorization.
///
/// Signers are Ethereum-style secp256k1 addresses so one validator key can
/// attest on every chain the bridge spans.
#[account]
pub struct ValidatorRegistry {
    /// Registered signer addresses, no duplicates
    pub signers: Vec<[u8; 20]>,

    /// Baseline number of signatures required
    pub required_number: u8,

    /// PDA bump seed
    pub bump: u8,
}

impl ValidatorRegistry {
    pub const SIZE: usize = 4 + 20 * MAX_SIGNERS  // signers vec
        + 1                                       // required_number
        + 1;                                      // bump

    pub fn is_signer(&self, address: &[u8; 20]) -> bool {
        self.signers.contains(address)
    }

    /// Replace the whole signer set, upholding the quorum invariant.
    pub fn set_signers(&mut self, signers: Vec<[u8; 20]>, required_number: u8) -> Result<()> {
        validate_signer_set(&signers, required_number)?;
        self.signers = signers;
        self.required_number = required_number;
        Ok(())
    }
}

/// Shared validation for every signer-set mutation:
/// `1 <= required_number <= |signers|` and address uniqueness.
pub fn validate_signer_set(signers: &[[u8; 20]], required_number: u8) -> Result<()> {
    require!(signers.len() <= MAX_SIGNERS, GatewayError::TooManySigners);
    require!(
        required_number > 0 && (required_number as usize) <= signers.len(),
        GatewayError::InvalidQuorum
    );
    for (i, signer) in signers.iter().enumerate() {
        require!(!signers[..i].contains(signer), GatewayError::DuplicateSigner);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> [u8; 20] {
        [tag; 20]
    }

    #[test]
    fn accepts_a_valid_set() {
        assert!(validate_signer_set(&[addr(1), addr(2), addr(3)], 2).is_ok());
        assert!(validate_signer_set(&[addr(1)], 1).is_ok());
    }

    #[test]
    fn rejects_zero_required_number() {
        let err = validate_signer_set(&[addr(1), addr(2)], 0).unwrap_err();
        assert_eq!(err, GatewayError::InvalidQuorum.into());
    }

    #[test]
    fn rejects_required_number_above_set_size() {
        let err = validate_signer_set(&[addr(1), addr(2)], 3).unwrap_err();
        assert_eq!(err, GatewayError::InvalidQuorum.into());
    }

    #[test]
    fn rejects_duplicate_signers() {
        let err = validate_signer_set(&[addr(1), addr(2), addr(1)], 2).unwrap_err();
        assert_eq!(err, GatewayError::DuplicateSigner.into());
    }

    #[test]
    fn set_signers_replaces_and_checks() {
        let mut registry = ValidatorRegistry {
            signers: vec![addr(1)],
            required_number: 1,
            bump: 255,
        };
        registry.set_signers(vec![addr(2), addr(3)], 2).unwrap();
        assert!(!registry.is_signer(&addr(1)));
        assert!(registry.is_signer(&addr(2)));
        assert_eq!(registry.required_number, 2);

        // a failed replacement must leave the registry untouched
        assert!(registry.set_signers(vec![addr(4)], 2).is_err());
        assert!(registry.is_signer(&addr(2)));
        assert_eq!(registry.required_number, 2);
    }
}
