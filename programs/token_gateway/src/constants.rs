/// PDA seeds for the token gateway accounts
pub const GATEWAY_SEED: &[u8] = b"gateway";
pub const VALIDATOR_REGISTRY_SEED: &[u8] = b"validator_registry";
pub const TOKEN_REGISTRY_SEED: &[u8] = b"token_registry";
pub const DEPOSIT_COUNTER_SEED: &[u8] = b"deposit_counter";
pub const DEPOSIT_SEED: &[u8] = b"deposit";
pub const WITHDRAWAL_COUNTER_SEED: &[u8] = b"withdrawal_counter";
pub const WITHDRAWAL_SEED: &[u8] = b"withdrawal";

/// Domain separator prefixed to every canonical withdrawal hash. Changing it
/// invalidates all previously collected signatures.
pub const WITHDRAWAL_HASH_DOMAIN: &[u8] = b"token_gateway:withdrawal";

/// Capacity caps sizing the fixed account allocations
pub const MAX_SIGNERS: usize = 16;
pub const MAX_SIGNATURES_PER_WITHDRAWAL: usize = MAX_SIGNERS;
pub const MAX_TOKEN_MAPPINGS: usize = 32;
pub const MAX_THRESHOLD_TIERS: usize = 8;

/// Signature format constants
pub const SECP256K1_SIGNATURE_SIZE: usize = 64;
pub const EVM_ADDRESS_SIZE: usize = 20;
