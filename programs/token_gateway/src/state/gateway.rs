use anchor_lang::prelude::*;

use crate::constants::MAX_THRESHOLD_TIERS;

/// Per-chain gateway configuration and withdrawal threshold policy
#[account]
pub struct GatewayConfig {
    /// Admin authority that can modify gateway settings
    pub authority: Pubkey,

    /// Chain identifier for this gateway instance
    pub chain_id: u64,

    /// Account credited with withdrawal fees
    pub fee_recipient: Pubkey,

    /// System enable flag for emergency stops
    pub system_enabled: bool,

    /// Amount-tiered signature requirements, ascending by ceiling
    pub thresholds: Vec<ThresholdTier>,

    /// PDA bump seed
    pub bump: u8,
}

impl GatewayConfig {
    pub const SIZE: usize = 32                               // authority
        + 8                                                  // chain_id
        + 32                                                 // fee_recipient
        + 1                                                  // system_enabled
        + 4 + ThresholdTier::SIZE * MAX_THRESHOLD_TIERS      // thresholds vec
        + 1;                                                 // bump

    /// Quorum for a withdrawal of `amount`: the smallest tier whose ceiling
    /// covers the amount. Amounts above every tier, or an empty tier list,
    /// fall back to the registry baseline.
    pub fn effective_quorum(&self, amount: u128, baseline: u8) -> u8 {
        self.thresholds
            .iter()
            .find(|tier| amount <= tier.amount_ceiling)
            .map(|tier| tier.required_number)
            .unwrap_or(baseline)
    }
}

/// One row of the tiered threshold policy
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThresholdTier {
    /// Largest withdrawal amount this tier covers, in destination decimals
    pub amount_ceiling: u128,

    /// Distinct registered signatures required at this tier
    pub required_number: u8,
}

impl ThresholdTier {
    pub const SIZE: usize = 16  // amount_ceiling (u128)
        + 1;                    // required_number
}

#[cfg(test)]
mod tests {
    use super::*;

    const E18: u128 = 1_000_000_000_000_000_000;

    fn gateway_with(thresholds: Vec<ThresholdTier>) -> GatewayConfig {
        GatewayConfig {
            authority: Pubkey::new_unique(),
            chain_id: 1,
            fee_recipient: Pubkey::new_unique(),
            system_enabled: true,
            thresholds,
            bump: 255,
        }
    }

    fn two_tiers() -> Vec<ThresholdTier> {
        vec![
            ThresholdTier {
                amount_ceiling: 1_000 * E18,
                required_number: 1,
            },
            ThresholdTier {
                amount_ceiling: 200_000 * E18,
                required_number: 2,
            },
        ]
    }

    #[test]
    fn quorum_uses_smallest_covering_tier() {
        let gateway = gateway_with(two_tiers());
        assert_eq!(gateway.effective_quorum(500 * E18, 3), 1);
        assert_eq!(gateway.effective_quorum(150_000 * E18, 3), 2);
    }

    #[test]
    fn quorum_above_all_tiers_is_baseline() {
        let gateway = gateway_with(two_tiers());
        assert_eq!(gateway.effective_quorum(1_000_000 * E18, 3), 3);
    }

    #[test]
    fn quorum_without_tiers_is_baseline() {
        let gateway = gateway_with(vec![]);
        assert_eq!(gateway.effective_quorum(1, 4), 4);
        assert_eq!(gateway.effective_quorum(u128::MAX, 4), 4);
    }

    #[test]
    fn tier_ceiling_is_inclusive() {
        let gateway = gateway_with(two_tiers());
        assert_eq!(gateway.effective_quorum(1_000 * E18, 3), 1);
        assert_eq!(gateway.effective_quorum(1_000 * E18 + 1, 3), 2);
    }
}
