use anchor_lang::solana_program::keccak;

use crate::constants::WITHDRAWAL_HASH_DOMAIN;

/// Canonical hash of a withdrawal, the exact message validators sign.
///
/// Fixed field order with fixed-width little-endian integers; any change to
/// order or widths breaks every previously collected signature.
pub fn withdrawal_hash(
    chain_id: u64,
    withdrawal_id: u64,
    recipient: &[u8; 32],
    token: &[u8; 32],
    amount: u128,
    fee: u128,
) -> [u8; 32] {
    let mut encoded =
        Vec::with_capacity(WITHDRAWAL_HASH_DOMAIN.len() + 8 + 8 + 32 + 32 + 16 + 16);

    encoded.extend_from_slice(WITHDRAWAL_HASH_DOMAIN);
    encoded.extend_from_slice(&chain_id.to_le_bytes());
    encoded.extend_from_slice(&withdrawal_id.to_le_bytes());
    encoded.extend_from_slice(recipient);
    encoded.extend_from_slice(token);
    encoded.extend_from_slice(&amount.to_le_bytes());
    encoded.extend_from_slice(&fee.to_le_bytes());

    keccak::hash(&encoded).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> [u8; 32] {
        withdrawal_hash(5, 7, &[1; 32], &[2; 32], 1_000, 10)
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(base(), base());
    }

    #[test]
    fn every_field_is_bound() {
        let variants = [
            withdrawal_hash(6, 7, &[1; 32], &[2; 32], 1_000, 10),
            withdrawal_hash(5, 8, &[1; 32], &[2; 32], 1_000, 10),
            withdrawal_hash(5, 7, &[9; 32], &[2; 32], 1_000, 10),
            withdrawal_hash(5, 7, &[1; 32], &[9; 32], 1_000, 10),
            withdrawal_hash(5, 7, &[1; 32], &[2; 32], 1_001, 10),
            withdrawal_hash(5, 7, &[1; 32], &[2; 32], 1_000, 11),
        ];
        for variant in variants {
            assert_ne!(base(), variant);
        }
    }

    #[test]
    fn swapped_fields_of_equal_width_differ() {
        // chain_id and withdrawal_id are both u64; the order must matter
        let a = withdrawal_hash(5, 7, &[1; 32], &[2; 32], 1_000, 10);
        let b = withdrawal_hash(7, 5, &[1; 32], &[2; 32], 1_000, 10);
        assert_ne!(a, b);

        // amount and fee are both u128
        let c = withdrawal_hash(5, 7, &[1; 32], &[2; 32], 10, 1_000);
        assert_ne!(a, c);
    }
}
