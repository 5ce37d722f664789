use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::{FeeRecipientUpdated, SystemStatusChanged, ThresholdsUpdated};
use crate::state::{GatewayConfig, ThresholdTier};

pub fn set_system_enabled(ctx: Context<UpdateGateway>, enabled: bool) -> Result<()> {
    let gateway = &mut ctx.accounts.gateway;
    gateway.system_enabled = enabled;

    emit!(SystemStatusChanged { enabled });

    msg!("System {}", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

/// Replace the tiered threshold policy. The two arrays are the original
/// admin-facing shape: one ceiling and one requirement per tier, ascending.
pub fn set_thresholds(
    ctx: Context<UpdateGateway>,
    amount_ceilings: Vec<u128>,
    required_numbers: Vec<u8>,
) -> Result<()> {
    let gateway = &mut ctx.accounts.gateway;
    gateway.thresholds = build_tiers(amount_ceilings, required_numbers)?;

    emit!(ThresholdsUpdated {
        tier_count: gateway.thresholds.len() as u8,
    });

    msg!("Thresholds updated: {} tiers", gateway.thresholds.len());
    Ok(())
}

/// Validate and assemble the tier list: equal-length arrays, strictly
/// ascending ceilings, no zero requirement.
fn build_tiers(amount_ceilings: Vec<u128>, required_numbers: Vec<u8>) -> Result<Vec<ThresholdTier>> {
    require!(
        amount_ceilings.len() == required_numbers.len(),
        GatewayError::ArityMismatch
    );
    require!(
        amount_ceilings.len() <= MAX_THRESHOLD_TIERS,
        GatewayError::InvalidThresholds
    );

    let mut tiers: Vec<ThresholdTier> = Vec::with_capacity(amount_ceilings.len());
    for (amount_ceiling, required_number) in amount_ceilings.into_iter().zip(required_numbers) {
        require!(required_number > 0, GatewayError::InvalidThresholds);
        if let Some(previous) = tiers.last() {
            require!(
                amount_ceiling > previous.amount_ceiling,
                GatewayError::InvalidThresholds
            );
        }
        tiers.push(ThresholdTier {
            amount_ceiling,
            required_number,
        });
    }
    Ok(tiers)
}

pub fn set_fee_recipient(ctx: Context<UpdateGateway>, fee_recipient: Pubkey) -> Result<()> {
    let gateway = &mut ctx.accounts.gateway;
    gateway.fee_recipient = fee_recipient;

    emit!(FeeRecipientUpdated { fee_recipient });

    msg!("Fee recipient updated: {}", fee_recipient);
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateGateway<'info> {
    #[account(
        mut,
        seeds = [GATEWAY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump = gateway.bump,
        has_one = authority @ GatewayError::UnauthorizedAuthority
    )]
    pub gateway: Account<'info, GatewayConfig>,

    pub authority: Signer<'info>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_arrays_fail_arity() {
        let err = build_tiers(vec![100, 200], vec![1]).unwrap_err();
        assert_eq!(err, GatewayError::ArityMismatch.into());
    }

    #[test]
    fn tiers_must_ascend_strictly() {
        let err = build_tiers(vec![100, 100], vec![1, 2]).unwrap_err();
        assert_eq!(err, GatewayError::InvalidThresholds.into());

        let err = build_tiers(vec![200, 100], vec![1, 2]).unwrap_err();
        assert_eq!(err, GatewayError::InvalidThresholds.into());
    }

    #[test]
    fn zero_requirement_is_rejected() {
        let err = build_tiers(vec![100], vec![0]).unwrap_err();
        assert_eq!(err, GatewayError::InvalidThresholds.into());
    }

    #[test]
    fn valid_input_builds_in_order() {
        let tiers = build_tiers(vec![100, 200], vec![1, 2]).unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[0].amount_ceiling, 100);
        assert_eq!(tiers[1].required_number, 2);
    }

    #[test]
    fn empty_input_clears_the_policy() {
        assert!(build_tiers(vec![], vec![]).unwrap().is_empty());
    }
}
