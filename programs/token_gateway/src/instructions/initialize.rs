use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::state::GatewayConfig;

pub fn handler(
    ctx: Context<InitializeGateway>,
    chain_id: u64,
    fee_recipient: Pubkey,
) -> Result<()> {
    require!(chain_id > 0, GatewayError::InvalidChainId);

    let gateway = &mut ctx.accounts.gateway;
    gateway.authority = ctx.accounts.authority.key();
    gateway.chain_id = chain_id;
    gateway.fee_recipient = fee_recipient;
    gateway.system_enabled = true;
    gateway.thresholds = Vec::new();
    gateway.bump = ctx.bumps.gateway;

    msg!("Gateway initialized for chain: {}", chain_id);
    Ok(())
}

#[derive(Accounts)]
#[instruction(chain_id: u64)]
pub struct InitializeGateway<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + GatewayConfig::SIZE,
        seeds = [GATEWAY_SEED, chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub gateway: Account<'info, GatewayConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
