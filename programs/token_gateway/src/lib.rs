use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use utils::SignaturePayload;

declare_id!("BLGfXMVqT8AoZjtmya3mURMneDJPRMt8eWmzFRA6Eu3m");

/// Token Bridge Gateway Program
///
/// Accounting and authorization core for one side of a two-chain token
/// bridge: deposit/withdrawal ledgers, a token registry with decimal
/// conversion, and tiered validator-quorum withdrawal authorization. The
/// counterpart chain runs the same program with mirrored configuration; the
/// two deployments are synchronized only by relayers observing events and
/// submitting signed withdrawal proofs.
#[program]
pub mod token_gateway {
    use super::*;

    /// Initialize the gateway for a specific chain
    pub fn initialize_gateway(
        ctx: Context<InitializeGateway>,
        chain_id: u64,
        fee_recipient: Pubkey,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, chain_id, fee_recipient)
    }

    /// Create the validator registry with its initial signer set
    pub fn initialize_validator_registry(
        ctx: Context<InitializeValidatorRegistry>,
        initial_signers: Vec<[u8; 20]>,
        required_number: u8,
    ) -> Result<()> {
        instructions::validator_registry::initialize_validator_registry(
            ctx,
            initial_signers,
            required_number,
        )
    }

    /// Replace the signer set and baseline quorum (admin only)
    pub fn set_signers(
        ctx: Context<UpdateValidatorRegistry>,
        new_signers: Vec<[u8; 20]>,
        new_required_number: u8,
    ) -> Result<()> {
        instructions::validator_registry::set_signers(ctx, new_signers, new_required_number)
    }

    /// Add a signer to the registry (admin only)
    pub fn add_signer(ctx: Context<UpdateValidatorRegistry>, signer: [u8; 20]) -> Result<()> {
        instructions::validator_registry::add_signer(ctx, signer)
    }

    /// Remove a signer from the registry (admin only)
    pub fn remove_signer(ctx: Context<UpdateValidatorRegistry>, signer: [u8; 20]) -> Result<()> {
        instructions::validator_registry::remove_signer(ctx, signer)
    }

    /// Change the baseline required signature count (admin only)
    pub fn change_required_number(
        ctx: Context<UpdateValidatorRegistry>,
        new_required_number: u8,
    ) -> Result<()> {
        instructions::validator_registry::change_required_number(ctx, new_required_number)
    }

    /// Replace the amount-tiered threshold policy (admin only)
    pub fn set_thresholds(
        ctx: Context<UpdateGateway>,
        amount_ceilings: Vec<u128>,
        required_numbers: Vec<u8>,
    ) -> Result<()> {
        instructions::admin::set_thresholds(ctx, amount_ceilings, required_numbers)
    }

    /// Batch upsert of token mappings (admin only)
    pub fn map_tokens(
        ctx: Context<MapTokens>,
        remote_chain_ids: Vec<u64>,
        remote_tokens: Vec<[u8; 32]>,
        local_tokens: Vec<Pubkey>,
        local_decimals: Vec<u8>,
        remote_decimals: Vec<u8>,
    ) -> Result<()> {
        instructions::map_tokens::handler(
            ctx,
            remote_chain_ids,
            remote_tokens,
            local_tokens,
            local_decimals,
            remote_decimals,
        )
    }

    /// Update system enabled status (admin only)
    pub fn set_system_enabled(ctx: Context<UpdateGateway>, enabled: bool) -> Result<()> {
        instructions::admin::set_system_enabled(ctx, enabled)
    }

    /// Rotate the fee sink (admin only)
    pub fn set_fee_recipient(ctx: Context<UpdateGateway>, fee_recipient: Pubkey) -> Result<()> {
        instructions::admin::set_fee_recipient(ctx, fee_recipient)
    }

    /// Lock tokens for bridging to `dest_chain_id`
    pub fn request_deposit(
        ctx: Context<RequestDeposit>,
        dest_chain_id: u64,
        deposit_id: u64,
        recipient: [u8; 32],
        amount: u64,
    ) -> Result<()> {
        instructions::request_deposit::handler(ctx, dest_chain_id, deposit_id, recipient, amount)
    }

    /// Lock tokens and open a withdrawal entry towards `dest_chain_id`
    pub fn request_withdrawal(
        ctx: Context<RequestWithdrawal>,
        dest_chain_id: u64,
        withdrawal_id: u64,
        recipient: [u8; 32],
        amount: u64,
        fee: u64,
    ) -> Result<()> {
        instructions::request_withdrawal::handler(
            ctx,
            dest_chain_id,
            withdrawal_id,
            recipient,
            amount,
            fee,
        )
    }

    /// Record one validator signature for a pending withdrawal
    pub fn submit_signature(
        ctx: Context<SubmitSignature>,
        chain_id: u64,
        withdrawal_id: u64,
        signature: [u8; 64],
        recovery_id: u8,
    ) -> Result<()> {
        instructions::submit_signature::handler(ctx, chain_id, withdrawal_id, signature, recovery_id)
    }

    /// Release a withdrawal once enough distinct validator signatures are
    /// presented for its amount tier
    pub fn withdraw(
        ctx: Context<Withdraw>,
        chain_id: u64,
        withdrawal_id: u64,
        recipient: Pubkey,
        token: Pubkey,
        amount: u128,
        fee: u128,
        signatures: Vec<SignaturePayload>,
    ) -> Result<()> {
        instructions::withdraw::handler(
            ctx,
            chain_id,
            withdrawal_id,
            recipient,
            token,
            amount,
            fee,
            signatures,
        )
    }
}
