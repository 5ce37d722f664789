use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::WithdrawalRequested;
use crate::state::{GatewayConfig, TokenRegistry, WithdrawalCounter, WithdrawalEntry};
use crate::utils::convert_amount;

pub fn handler(
    ctx: Context<RequestWithdrawal>,
    dest_chain_id: u64,
    withdrawal_id: u64,
    recipient: [u8; 32],
    amount: u64,
    fee: u64,
) -> Result<()> {
    let gateway = &ctx.accounts.gateway;
    require!(gateway.system_enabled, GatewayError::SystemDisabled);
    require!(
        dest_chain_id > 0 && dest_chain_id != gateway.chain_id,
        GatewayError::InvalidChainId
    );
    // covers both amount == 0 and amount <= fee
    require!(amount > fee, GatewayError::InsufficientAmount);

    let mapping = ctx
        .accounts
        .token_registry
        .resolve_local(dest_chain_id, &ctx.accounts.mint.key())
        .copied()
        .ok_or(GatewayError::UnmappedToken)?;

    // the gross amount + fee is locked so the destination can pay the
    // recipient and the fee sink without minting
    let total = amount
        .checked_add(fee)
        .ok_or(GatewayError::AmountOverflow)?;
    require!(
        ctx.accounts.withdrawer_token.amount >= total,
        GatewayError::TransferFailed
    );

    let counter = &mut ctx.accounts.withdrawal_counter;
    if counter.bump == 0 {
        counter.dest_chain_id = dest_chain_id;
        counter.bump = ctx.bumps.withdrawal_counter;
    }
    require!(withdrawal_id == counter.count, GatewayError::InvalidEntryId);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.withdrawer_token.to_account_info(),
                to: ctx.accounts.vault_token.to_account_info(),
                authority: ctx.accounts.withdrawer.to_account_info(),
            },
        ),
        total,
    )?;

    counter.count += 1;

    let dest_amount = convert_amount(
        amount as u128,
        mapping.local_decimals,
        mapping.remote_decimals,
    )?;
    let dest_fee = convert_amount(
        fee as u128,
        mapping.local_decimals,
        mapping.remote_decimals,
    )?;

    let entry = &mut ctx.accounts.withdrawal_entry;
    entry.chain_id = dest_chain_id;
    entry.withdrawal_id = withdrawal_id;
    entry.recipient = recipient;
    entry.token = mapping.remote_token;
    entry.amount = dest_amount;
    entry.fee = dest_fee;
    entry.fulfilled = false;
    entry.signatures = Vec::new();
    entry.bump = ctx.bumps.withdrawal_entry;

    emit!(WithdrawalRequested {
        chain_id: dest_chain_id,
        withdrawal_id,
        recipient,
        token: entry.token,
        amount: dest_amount,
        fee: dest_fee,
    });

    msg!(
        "Withdrawal requested: dest_chain={}, withdrawal_id={}, amount={}, fee={}",
        dest_chain_id,
        withdrawal_id,
        dest_amount,
        dest_fee
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(dest_chain_id: u64, withdrawal_id: u64)]
pub struct RequestWithdrawal<'info> {
    #[account(
        seeds = [GATEWAY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump = gateway.bump
    )]
    pub gateway: Account<'info, GatewayConfig>,

    #[account(
        seeds = [TOKEN_REGISTRY_SEED, gateway.chain_id.to_le_bytes().as_ref()],
        bump = token_registry.bump
    )]
    pub token_registry: Account<'info, TokenRegistry>,

    #[account(
        init_if_needed,
        payer = withdrawer,
        space = 8 + WithdrawalCounter::SIZE,
        seeds = [WITHDRAWAL_COUNTER_SEED, dest_chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub withdrawal_counter: Account<'info, WithdrawalCounter>,

    #[account(
        init,
        payer = withdrawer,
        space = 8 + WithdrawalEntry::SIZE,
        seeds = [
            WITHDRAWAL_SEED,
            dest_chain_id.to_le_bytes().as_ref(),
            withdrawal_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub withdrawal_entry: Account<'info, WithdrawalEntry>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = withdrawer
    )]
    pub withdrawer_token: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = withdrawer,
        associated_token::mint = mint,
        associated_token::authority = gateway
    )]
    pub vault_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub withdrawer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
