use anchor_lang::prelude::*;

use crate::constants::MAX_TOKEN_MAPPINGS;
use crate::errors::GatewayError;

/// Mapping table between local mints and their counterparts on remote chains
#[account]
pub struct TokenRegistry {
    pub mappings: Vec<TokenMapping>,

    /// PDA bump seed
    pub bump: u8,
}

/// One remote-token / local-mint pair. Decimal precisions are fixed at
/// mapping time and drive all subsequent amount conversions; remapping a
/// token with different decimals while entries under the old mapping are
/// still pending changes how they convert.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TokenMapping {
    pub remote_chain_id: u64,
    pub remote_token: [u8; 32],
    pub local_token: Pubkey,
    pub local_decimals: u8,
    pub remote_decimals: u8,
}

impl TokenMapping {
    pub const SIZE: usize = 8   // remote_chain_id
        + 32                    // remote_token
        + 32                    // local_token
        + 1                     // local_decimals
        + 1;                    // remote_decimals
}

impl TokenRegistry {
    pub const SIZE: usize = 4 + TokenMapping::SIZE * MAX_TOKEN_MAPPINGS  // mappings vec
        + 1;                                                             // bump

    /// Look up by the remote-chain key
    pub fn resolve_remote(
        &self,
        remote_chain_id: u64,
        remote_token: &[u8; 32],
    ) -> Option<&TokenMapping> {
        self.mappings
            .iter()
            .find(|m| m.remote_chain_id == remote_chain_id && &m.remote_token == remote_token)
    }

    /// Reverse lookup: which remote token a local mint bridges to on
    /// `remote_chain_id`
    pub fn resolve_local(&self, remote_chain_id: u64, local_token: &Pubkey) -> Option<&TokenMapping> {
        self.mappings
            .iter()
            .find(|m| m.remote_chain_id == remote_chain_id && &m.local_token == local_token)
    }

    /// Insert or replace. The registry is a function of
    /// (remote_chain_id, remote_token) and of (remote_chain_id, local_token);
    /// a mapping touching either key replaces the existing row.
    pub fn upsert(&mut self, mapping: TokenMapping) -> Result<()> {
        if let Some(existing) = self.mappings.iter_mut().find(|m| {
            m.remote_chain_id == mapping.remote_chain_id
                && (m.remote_token == mapping.remote_token || m.local_token == mapping.local_token)
        }) {
            *existing = mapping;
            return Ok(());
        }
        require!(
            self.mappings.len() < MAX_TOKEN_MAPPINGS,
            GatewayError::TooManyMappings
        );
        self.mappings.push(mapping);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(tag: u8) -> [u8; 32] {
        [tag; 32]
    }

    fn mapping(chain: u64, remote_tag: u8, local: Pubkey) -> TokenMapping {
        TokenMapping {
            remote_chain_id: chain,
            remote_token: remote(remote_tag),
            local_token: local,
            local_decimals: 9,
            remote_decimals: 18,
        }
    }

    #[test]
    fn resolve_returns_the_supplied_decimals() {
        let mut registry = TokenRegistry {
            mappings: vec![],
            bump: 255,
        };
        let local = Pubkey::new_unique();
        registry.upsert(mapping(5, 1, local)).unwrap();

        let found = registry.resolve_remote(5, &remote(1)).unwrap();
        assert_eq!(found.local_token, local);
        assert_eq!(found.local_decimals, 9);
        assert_eq!(found.remote_decimals, 18);
        assert_eq!(registry.resolve_local(5, &local).unwrap().remote_token, remote(1));
    }

    #[test]
    fn unmapped_keys_resolve_to_none() {
        let mut registry = TokenRegistry {
            mappings: vec![],
            bump: 255,
        };
        let local = Pubkey::new_unique();
        registry.upsert(mapping(5, 1, local)).unwrap();

        assert!(registry.resolve_remote(5, &remote(2)).is_none());
        assert!(registry.resolve_remote(6, &remote(1)).is_none());
        assert!(registry.resolve_local(6, &local).is_none());
    }

    #[test]
    fn upsert_replaces_instead_of_duplicating() {
        let mut registry = TokenRegistry {
            mappings: vec![],
            bump: 255,
        };
        let local = Pubkey::new_unique();
        registry.upsert(mapping(5, 1, local)).unwrap();

        let mut updated = mapping(5, 1, local);
        updated.remote_decimals = 6;
        registry.upsert(updated).unwrap();

        assert_eq!(registry.mappings.len(), 1);
        assert_eq!(registry.resolve_remote(5, &remote(1)).unwrap().remote_decimals, 6);
    }

    #[test]
    fn same_chain_distinct_tokens_coexist() {
        let mut registry = TokenRegistry {
            mappings: vec![],
            bump: 255,
        };
        registry.upsert(mapping(5, 1, Pubkey::new_unique())).unwrap();
        registry.upsert(mapping(5, 2, Pubkey::new_unique())).unwrap();
        assert_eq!(registry.mappings.len(), 2);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut registry = TokenRegistry {
            mappings: vec![],
            bump: 255,
        };
        for i in 0..MAX_TOKEN_MAPPINGS {
            registry
                .upsert(mapping(5, i as u8, Pubkey::new_unique()))
                .unwrap();
        }
        let err = registry
            .upsert(mapping(5, 200, Pubkey::new_unique()))
            .unwrap_err();
        assert_eq!(err, GatewayError::TooManyMappings.into());
    }
}
