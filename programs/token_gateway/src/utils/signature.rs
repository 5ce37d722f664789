use std::collections::HashSet;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use anchor_lang::solana_program::secp256k1_recover::secp256k1_recover;

use crate::errors::GatewayError;

/// Signature material supplied by a relayer alongside a withdrawal
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct SignaturePayload {
    /// r and s components, 32 bytes each
    pub signature: [u8; 64],

    /// v component; 0/1 or the Ethereum 27/28 form
    pub recovery_id: u8,
}

/// Recover the Ethereum-style address that signed `message_hash`.
pub fn recover_signer_address(
    message_hash: &[u8; 32],
    signature: &[u8; 64],
    recovery_id: u8,
) -> Result<[u8; 20]> {
    let recovery_id = match recovery_id {
        0 | 1 => recovery_id,
        27 | 28 => recovery_id - 27,
        _ => return err!(GatewayError::InvalidRecoveryId),
    };

    let pubkey = secp256k1_recover(message_hash, recovery_id, signature)
        .map_err(|_| GatewayError::InvalidSignature)?;

    // address = keccak256(uncompressed pubkey)[12..32]
    let digest = keccak::hash(&pubkey.to_bytes()).to_bytes();
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..32]);
    Ok(address)
}

/// Count the distinct registered signers among `signatures`.
///
/// Accepts signatures in any order and de-duplicates by recovered address.
/// Malformed signatures and unknown signers are skipped rather than fatal, so
/// one bad entry cannot poison an otherwise sufficient set.
pub fn count_distinct_signers(
    message_hash: &[u8; 32],
    signatures: &[SignaturePayload],
    registered: &[[u8; 20]],
) -> usize {
    let mut seen: HashSet<[u8; 20]> = HashSet::new();
    for payload in signatures {
        if let Ok(address) =
            recover_signer_address(message_hash, &payload.signature, payload.recovery_id)
        {
            if registered.contains(&address) {
                seen.insert(address);
            }
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::SigningKey;
    use k256::elliptic_curve::sec1::ToEncodedPoint;

    fn signing_key(seed: u8) -> SigningKey {
        SigningKey::from_slice(&[seed; 32]).unwrap()
    }

    fn eth_address(key: &SigningKey) -> [u8; 20] {
        let point = key.verifying_key().to_encoded_point(false);
        let digest = keccak::hash(&point.as_bytes()[1..]).to_bytes();
        let mut address = [0u8; 20];
        address.copy_from_slice(&digest[12..32]);
        address
    }

    fn sign(key: &SigningKey, hash: &[u8; 32]) -> SignaturePayload {
        let (signature, recovery_id) = key.sign_prehash_recoverable(hash).unwrap();
        SignaturePayload {
            signature: signature.to_bytes().as_slice().try_into().unwrap(),
            recovery_id: recovery_id.to_byte(),
        }
    }

    #[test]
    fn recovers_the_signing_address() {
        let key = signing_key(1);
        let hash = [42u8; 32];
        let payload = sign(&key, &hash);

        let recovered =
            recover_signer_address(&hash, &payload.signature, payload.recovery_id).unwrap();
        assert_eq!(recovered, eth_address(&key));
    }

    #[test]
    fn accepts_ethereum_style_recovery_ids() {
        let key = signing_key(2);
        let hash = [42u8; 32];
        let payload = sign(&key, &hash);

        let recovered =
            recover_signer_address(&hash, &payload.signature, payload.recovery_id + 27).unwrap();
        assert_eq!(recovered, eth_address(&key));
    }

    #[test]
    fn rejects_out_of_range_recovery_ids() {
        let err = recover_signer_address(&[42u8; 32], &[0u8; 64], 9).unwrap_err();
        assert_eq!(err, GatewayError::InvalidRecoveryId.into());
    }

    #[test]
    fn different_message_never_recovers_the_signer() {
        let key = signing_key(3);
        let payload = sign(&key, &[42u8; 32]);

        // valid signature, wrong message: recovery yields some other key or
        // fails outright, never the original signer
        match recover_signer_address(&[43u8; 32], &payload.signature, payload.recovery_id) {
            Ok(recovered) => assert_ne!(recovered, eth_address(&key)),
            Err(_) => {}
        }
    }

    #[test]
    fn counts_distinct_registered_signers() {
        let keys: Vec<SigningKey> = (1..=3).map(signing_key).collect();
        let registered: Vec<[u8; 20]> = keys.iter().map(eth_address).collect();
        let hash = [7u8; 32];

        let outsider = signing_key(9);
        let payloads = vec![
            sign(&keys[0], &hash),
            sign(&keys[1], &hash),
            sign(&keys[0], &hash), // duplicate signer
            sign(&outsider, &hash),
        ];

        assert_eq!(count_distinct_signers(&hash, &payloads, &registered), 2);
    }

    #[test]
    fn signatures_over_another_hash_do_not_count() {
        let key = signing_key(4);
        let registered = vec![eth_address(&key)];

        let payloads = vec![sign(&key, &[1u8; 32])];
        assert_eq!(count_distinct_signers(&[2u8; 32], &payloads, &registered), 0);
    }
}
