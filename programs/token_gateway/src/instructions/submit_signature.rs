use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::WithdrawalSignatureSubmitted;
use crate::state::{GatewayConfig, ValidatorRegistry, WithdrawalEntry, WithdrawalSignature};
use crate::utils::{recover_signer_address, withdrawal_hash};

/// Record one validator's signature over a pending withdrawal. Collection
/// only: payout is a separate explicit `withdraw` call so relayers control
/// timing and batching.
pub fn handler(
    ctx: Context<SubmitSignature>,
    chain_id: u64,
    withdrawal_id: u64,
    signature: [u8; 64],
    recovery_id: u8,
) -> Result<()> {
    let entry = &mut ctx.accounts.withdrawal_entry;
    require!(!entry.fulfilled, GatewayError::AlreadyFulfilled);

    // the signature must cover the entry as stored, not whatever the
    // submitter claims it covers
    let message_hash = withdrawal_hash(
        entry.chain_id,
        entry.withdrawal_id,
        &entry.recipient,
        &entry.token,
        entry.amount,
        entry.fee,
    );
    let signer = recover_signer_address(&message_hash, &signature, recovery_id)?;
    require!(
        ctx.accounts.validator_registry.is_signer(&signer),
        GatewayError::UnknownSigner
    );

    entry.record_signature(WithdrawalSignature {
        signer,
        signature,
        recovery_id,
    })?;

    emit!(WithdrawalSignatureSubmitted {
        chain_id,
        withdrawal_id,
        signer,
    });

    msg!(
        "Signature recorded: chain={}, withdrawal={}, collected={}",
        chain_id,
        withdrawal_id,
        entry.signatures.len()
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(chain_id: u64, withdrawal_id: u64)]
pub struct SubmitSignature<'info> {
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

    pub submitter: Signer<'info>,
}
