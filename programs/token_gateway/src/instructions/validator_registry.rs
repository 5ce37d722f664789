use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::SignersUpdated;
use crate::state::{validate_signer_set, GatewayConfig, ValidatorRegistry};

/// Create the validator registry for this gateway
#[derive(Accounts)]
pub struct InitializeValidatorRegistry<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + ValidatorRegistry::SIZE,
        seeds = [VALIDATOR_REGISTRY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub validator_registry: Account<'info, ValidatorRegistry>,

    #[account(
        seeds = [GATEWAY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump = gateway.bump,
        has_one = authority @ GatewayError::UnauthorizedAuthority
    )]
    pub gateway: Account<'info, GatewayConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_validator_registry(
    ctx: Context<InitializeValidatorRegistry>,
    initial_signers: Vec<[u8; 20]>,
    required_number: u8,
) -> Result<()> {
    validate_signer_set(&initial_signers, required_number)?;

    let registry = &mut ctx.accounts.validator_registry;
    registry.signers = initial_signers;
    registry.required_number = required_number;
    registry.bump = ctx.bumps.validator_registry;

    emit!(SignersUpdated {
        signer_count: registry.signers.len() as u8,
        required_number,
    });

    msg!(
        "Validator registry initialized: {} signers, requiring {}",
        registry.signers.len(),
        required_number
    );
    Ok(())
}

/// Mutate an existing registry; shared by every signer-set operation
#[derive(Accounts)]
pub struct UpdateValidatorRegistry<'info> {
    #[account(
        mut,
        seeds = [VALIDATOR_REGISTRY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump = validator_registry.bump
    )]
    pub validator_registry: Account<'info, ValidatorRegistry>,

    #[account(
        seeds = [GATEWAY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump = gateway.bump,
        has_one = authority @ GatewayError::UnauthorizedAuthority
    )]
    pub gateway: Account<'info, GatewayConfig>,

    pub authority: Signer<'info>,
}

pub fn set_signers(
    ctx: Context<UpdateValidatorRegistry>,
    new_signers: Vec<[u8; 20]>,
    new_required_number: u8,
) -> Result<()> {
    let registry = &mut ctx.accounts.validator_registry;
    registry.set_signers(new_signers, new_required_number)?;

    emit!(SignersUpdated {
        signer_count: registry.signers.len() as u8,
        required_number: new_required_number,
    });

    msg!(
        "Signer set replaced: {} signers, requiring {}",
        registry.signers.len(),
        new_required_number
    );
    Ok(())
}

pub fn add_signer(ctx: Context<UpdateValidatorRegistry>, signer: [u8; 20]) -> Result<()> {
    let registry = &mut ctx.accounts.validator_registry;

    require!(!registry.is_signer(&signer), GatewayError::DuplicateSigner);
    require!(
        registry.signers.len() < MAX_SIGNERS,
        GatewayError::TooManySigners
    );
    registry.signers.push(signer);

    emit!(SignersUpdated {
        signer_count: registry.signers.len() as u8,
        required_number: registry.required_number,
    });

    msg!("Signer added (total: {})", registry.signers.len());
    Ok(())
}

pub fn remove_signer(ctx: Context<UpdateValidatorRegistry>, signer: [u8; 20]) -> Result<()> {
    let registry = &mut ctx.accounts.validator_registry;

    let position = registry
        .signers
        .iter()
        .position(|s| *s == signer)
        .ok_or(GatewayError::UnknownSigner)?;

    // a removal that would leave fewer signers than the quorum is rejected
    require!(
        (registry.required_number as usize) <= registry.signers.len() - 1,
        GatewayError::InvalidQuorum
    );
    registry.signers.remove(position);

    emit!(SignersUpdated {
        signer_count: registry.signers.len() as u8,
        required_number: registry.required_number,
    });

    msg!("Signer removed (remaining: {})", registry.signers.len());
    Ok(())
}

pub fn change_required_number(
    ctx: Context<UpdateValidatorRegistry>,
    new_required_number: u8,
) -> Result<()> {
    let registry = &mut ctx.accounts.validator_registry;

    require!(
        new_required_number > 0
            && (new_required_number as usize) <= registry.signers.len(),
        GatewayError::InvalidQuorum
    );
    registry.required_number = new_required_number;

    emit!(SignersUpdated {
        signer_count: registry.signers.len() as u8,
        required_number: new_required_number,
    });

    msg!("Required number changed to {}", new_required_number);
    Ok(())
}
