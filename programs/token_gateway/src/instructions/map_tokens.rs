use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::TokensMapped;
use crate::state::{GatewayConfig, TokenMapping, TokenRegistry};

/// Batch upsert of token mappings, the original admin surface: five
/// parallel arrays, one row per mapping.
pub fn handler(
    ctx: Context<MapTokens>,
    remote_chain_ids: Vec<u64>,
    remote_tokens: Vec<[u8; 32]>,
    local_tokens: Vec<Pubkey>,
    local_decimals: Vec<u8>,
    remote_decimals: Vec<u8>,
) -> Result<()> {
    let len = remote_chain_ids.len();
    require!(
        remote_tokens.len() == len
            && local_tokens.len() == len
            && local_decimals.len() == len
            && remote_decimals.len() == len,
        GatewayError::ArityMismatch
    );

    let registry = &mut ctx.accounts.token_registry;
    if registry.bump == 0 {
        // first use, the account was just created
        registry.bump = ctx.bumps.token_registry;
    }

    for i in 0..len {
        require!(remote_chain_ids[i] > 0, GatewayError::InvalidChainId);
        let mapping = TokenMapping {
            remote_chain_id: remote_chain_ids[i],
            remote_token: remote_tokens[i],
            local_token: local_tokens[i],
            local_decimals: local_decimals[i],
            remote_decimals: remote_decimals[i],
        };
        registry.upsert(mapping)?;

        emit!(TokensMapped {
            remote_chain_id: remote_chain_ids[i],
            remote_token: remote_tokens[i],
            local_token: local_tokens[i],
            local_decimals: local_decimals[i],
            remote_decimals: remote_decimals[i],
        });
    }

    msg!("Mapped {} tokens", len);
    Ok(())
}

#[derive(Accounts)]
pub struct MapTokens<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + TokenRegistry::SIZE,
        seeds = [TOKEN_REGISTRY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub token_registry: Account<'info, TokenRegistry>,

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
