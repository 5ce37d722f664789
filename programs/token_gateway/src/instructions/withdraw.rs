use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::Withdrawn;
use crate::state::{GatewayConfig, ValidatorRegistry, WithdrawalEntry};
use crate::utils::{count_distinct_signers, withdrawal_hash, SignaturePayload};

pub fn handler(
    ctx: Context<Withdraw>,
    chain_id: u64,
    withdrawal_id: u64,
    recipient: Pubkey,
    token: Pubkey,
    amount: u128,
    fee: u128,
    signatures: Vec<SignaturePayload>,
) -> Result<()> {
    let gateway = &ctx.accounts.gateway;
    require!(gateway.system_enabled, GatewayError::SystemDisabled);

    let entry = &mut ctx.accounts.withdrawal_entry;
    require!(!entry.fulfilled, GatewayError::AlreadyFulfilled);

    // the payout tuple must be exactly what was requested; signatures over
    // anything else authorize a different withdrawal
    require!(
        entry.recipient == recipient.to_bytes()
            && entry.token == token.to_bytes()
            && entry.amount == amount
            && entry.fee == fee,
        GatewayError::StaleParameters
    );

    // re-derived from the supplied tuple, not from stored state
    let message_hash = withdrawal_hash(
        chain_id,
        withdrawal_id,
        &recipient.to_bytes(),
        &token.to_bytes(),
        amount,
        fee,
    );

    let registry = &ctx.accounts.validator_registry;
    let valid = count_distinct_signers(&message_hash, &signatures, &registry.signers);
    let required = gateway.effective_quorum(amount, registry.required_number);
    require!(valid >= required as usize, GatewayError::QuorumNotMet);

    let amount_out = u64::try_from(amount).map_err(|_| GatewayError::AmountOverflow)?;
    let fee_out = u64::try_from(fee).map_err(|_| GatewayError::AmountOverflow)?;
    let total = amount_out
        .checked_add(fee_out)
        .ok_or(GatewayError::AmountOverflow)?;
    require!(
        ctx.accounts.vault_token.amount >= total,
        GatewayError::TransferFailed
    );

    // terminal flip before any funds move; a replayed call observes
    // AlreadyFulfilled and nothing after this point can fail validation
    entry.fulfilled = true;

    let chain_id_bytes = gateway.chain_id.to_le_bytes();
    let gateway_seeds = &[GATEWAY_SEED, chain_id_bytes.as_ref(), &[gateway.bump]];
    let signer_seeds = &[&gateway_seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault_token.to_account_info(),
                to: ctx.accounts.recipient_token.to_account_info(),
                authority: ctx.accounts.gateway.to_account_info(),
            },
            signer_seeds,
        ),
        amount_out,
    )?;

    if fee_out > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault_token.to_account_info(),
                    to: ctx.accounts.fee_token.to_account_info(),
                    authority: ctx.accounts.gateway.to_account_info(),
                },
                signer_seeds,
            ),
            fee_out,
        )?;
    }

    emit!(Withdrawn {
        chain_id,
        withdrawal_id,
        recipient,
        token,
        amount,
        fee,
    });

    msg!(
        "Withdrawal fulfilled: chain={}, withdrawal={}, signers={}/{}",
        chain_id,
        withdrawal_id,
        valid,
        required
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(chain_id: u64, withdrawal_id: u64, recipient: Pubkey, token: Pubkey)]
pub struct Withdraw<'info> {
    #[account(
        seeds = [GATEWAY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump = gateway.bump
    )]
    pub gateway: Account<'info, GatewayConfig>,

    #[account(
        seeds = [VALIDATOR_REGISTRY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump = validator_registry.bump
    )]
    pub validator_registry: Account<'info, ValidatorRegistry>,

    #[account(
        mut,
        seeds = [
            WITHDRAWAL_SEED,
            chain_id.to_le_bytes().as_ref(),
            withdrawal_id.to_le_bytes().as_ref()
        ],
        bump = withdrawal_entry.bump,
        constraint = withdrawal_entry.withdrawal_id == withdrawal_id
            @ GatewayError::UnknownWithdrawal
    )]
    pub withdrawal_entry: Account<'info, WithdrawalEntry>,

    #[account(address = token @ GatewayError::StaleParameters)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = gateway
    )]
    pub vault_token: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        constraint = recipient_token.owner == recipient @ GatewayError::StaleParameters
    )]
    pub recipient_token: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        constraint = fee_token.owner == gateway.fee_recipient @ GatewayError::StaleParameters
    )]
    pub fee_token: Account<'info, TokenAccount>,

    pub executor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
