use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::DepositRequested;
use crate::state::{DepositCounter, DepositEntry, GatewayConfig, TokenRegistry};

pub fn handler(
    ctx: Context<RequestDeposit>,
    dest_chain_id: u64,
    deposit_id: u64,
    recipient: [u8; 32],
    amount: u64,
) -> Result<()> {
    let gateway = &ctx.accounts.gateway;
    require!(gateway.system_enabled, GatewayError::SystemDisabled);
    require!(
        dest_chain_id > 0 && dest_chain_id != gateway.chain_id,
        GatewayError::InvalidChainId
    );
    require!(amount > 0, GatewayError::InsufficientAmount);

    // the mint must be bridgeable to the destination; amounts stay in this
    // chain's decimals, conversion is the destination's concern
    require!(
        ctx.accounts
            .token_registry
            .resolve_local(dest_chain_id, &ctx.accounts.mint.key())
            .is_some(),
        GatewayError::UnmappedToken
    );

    // funds are checked before the counter moves, so a failed lock consumes
    // no id
    require!(
        ctx.accounts.depositor_token.amount >= amount,
        GatewayError::TransferFailed
    );

    let counter = &mut ctx.accounts.deposit_counter;
    if counter.bump == 0 {
        // first deposit towards this destination, the account was just created
        counter.dest_chain_id = dest_chain_id;
        counter.bump = ctx.bumps.deposit_counter;
    }
    require!(deposit_id == counter.count, GatewayError::InvalidEntryId);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token.to_account_info(),
                to: ctx.accounts.vault_token.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    counter.count += 1;

    let entry = &mut ctx.accounts.deposit_entry;
    entry.dest_chain_id = dest_chain_id;
    entry.deposit_id = deposit_id;
    entry.sender = ctx.accounts.depositor.key();
    entry.recipient = recipient;
    entry.token = ctx.accounts.mint.key();
    entry.amount = amount;
    entry.bump = ctx.bumps.deposit_entry;

    emit!(DepositRequested {
        dest_chain_id,
        deposit_id,
        sender: entry.sender,
        recipient,
        token: entry.token,
        amount,
    });

    msg!(
        "Deposit requested: dest_chain={}, deposit_id={}, amount={}",
        dest_chain_id,
        deposit_id,
        amount
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(dest_chain_id: u64, deposit_id: u64)]
pub struct RequestDeposit<'info> {
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
        payer = depositor,
        space = 8 + DepositCounter::SIZE,
        seeds = [DEPOSIT_COUNTER_SEED, dest_chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub deposit_counter: Account<'info, DepositCounter>,

    #[account(
        init,
        payer = depositor,
        space = 8 + DepositEntry::SIZE,
        seeds = [
            DEPOSIT_SEED,
            dest_chain_id.to_le_bytes().as_ref(),
            deposit_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub deposit_entry: Account<'info, DepositEntry>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = depositor
    )]
    pub depositor_token: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = mint,
        associated_token::authority = gateway
    )]
    pub vault_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
