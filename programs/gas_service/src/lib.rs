use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::TxHash;

declare_id!("CtR83PZNZ5YEd4HcUZhAFJW9aPPtzn3guvnWdAZTRRAb");

/// Gas Service Program
///
/// Collects prepaid gas for cross-chain contract calls in native lamports or
/// SPL tokens. Relayers read the emitted events to decide which calls to
/// execute; the owner refunds unspent gas and sweeps the rest.
#[program]
pub mod gas_service {
    use super::*;

    /// Create the gas service state and its vault
    pub fn initialize(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, owner)
    }

    /// Pay gas in a token for a contract call
    pub fn pay_gas_for_contract_call(
        ctx: Context<PayGas>,
        sender: Pubkey,
        destination_chain: String,
        destination_address: String,
        payload: Vec<u8>,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_gas::pay_gas_for_contract_call(
            ctx,
            sender,
            destination_chain,
            destination_address,
            payload,
            gas_fee_amount,
            refund_address,
        )
    }

    /// Pay gas in a token for a contract call that also transfers a token
    #[allow(clippy::too_many_arguments)]
    pub fn pay_gas_for_contract_call_with_token(
        ctx: Context<PayGas>,
        sender: Pubkey,
        destination_chain: String,
        destination_address: String,
        payload: Vec<u8>,
        symbol: String,
        amount: u64,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_gas::pay_gas_for_contract_call_with_token(
            ctx,
            sender,
            destination_chain,
            destination_address,
            payload,
            symbol,
            amount,
            gas_fee_amount,
            refund_address,
        )
    }

    /// Pay gas in a token for an express call that also transfers a token
    #[allow(clippy::too_many_arguments)]
    pub fn pay_gas_for_express_call_with_token(
        ctx: Context<PayGas>,
        sender: Pubkey,
        destination_chain: String,
        destination_address: String,
        payload: Vec<u8>,
        symbol: String,
        amount: u64,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_gas::pay_gas_for_express_call_with_token(
            ctx,
            sender,
            destination_chain,
            destination_address,
            payload,
            symbol,
            amount,
            gas_fee_amount,
            refund_address,
        )
    }

    /// Pay native gas for a contract call
    pub fn pay_native_gas_for_contract_call(
        ctx: Context<PayNativeGas>,
        sender: Pubkey,
        destination_chain: String,
        destination_address: String,
        payload: Vec<u8>,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_native_gas::pay_native_gas_for_contract_call(
            ctx,
            sender,
            destination_chain,
            destination_address,
            payload,
            value,
            refund_address,
        )
    }

    /// Pay native gas for a contract call that also transfers a token
    #[allow(clippy::too_many_arguments)]
    pub fn pay_native_gas_for_contract_call_with_token(
        ctx: Context<PayNativeGas>,
        sender: Pubkey,
        destination_chain: String,
        destination_address: String,
        payload: Vec<u8>,
        symbol: String,
        amount: u64,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_native_gas::pay_native_gas_for_contract_call_with_token(
            ctx,
            sender,
            destination_chain,
            destination_address,
            payload,
            symbol,
            amount,
            value,
            refund_address,
        )
    }

    /// Pay native gas for an express call that also transfers a token
    #[allow(clippy::too_many_arguments)]
    pub fn pay_native_gas_for_express_call_with_token(
        ctx: Context<PayNativeGas>,
        sender: Pubkey,
        destination_chain: String,
        destination_address: String,
        payload: Vec<u8>,
        symbol: String,
        amount: u64,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_native_gas::pay_native_gas_for_express_call_with_token(
            ctx,
            sender,
            destination_chain,
            destination_address,
            payload,
            symbol,
            amount,
            value,
            refund_address,
        )
    }

    /// Top up token gas for a call that was already sent
    pub fn add_gas(
        ctx: Context<PayGas>,
        tx_hash: TxHash,
        log_index: u64,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_gas::add_gas(ctx, tx_hash, log_index, gas_fee_amount, refund_address)
    }

    /// Top up token express gas for a call that was already sent
    pub fn add_express_gas(
        ctx: Context<PayGas>,
        tx_hash: TxHash,
        log_index: u64,
        gas_fee_amount: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_gas::add_express_gas(
            ctx,
            tx_hash,
            log_index,
            gas_fee_amount,
            refund_address,
        )
    }

    /// Top up native gas for a call that was already sent
    pub fn add_native_gas(
        ctx: Context<PayNativeGas>,
        tx_hash: TxHash,
        log_index: u64,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_native_gas::add_native_gas(ctx, tx_hash, log_index, value, refund_address)
    }

    /// Top up native express gas for a call that was already sent
    pub fn add_native_express_gas(
        ctx: Context<PayNativeGas>,
        tx_hash: TxHash,
        log_index: u64,
        value: u64,
        refund_address: Pubkey,
    ) -> Result<()> {
        instructions::pay_native_gas::add_native_express_gas(
            ctx,
            tx_hash,
            log_index,
            value,
            refund_address,
        )
    }

    /// Refund gas to `receiver` (owner only)
    pub fn refund(ctx: Context<Refund>, token: Pubkey, amount: u64) -> Result<()> {
        instructions::refund::refund(ctx, token, amount)
    }

    /// Refund gas for a specific message to `receiver` (owner only)
    pub fn refund_with_message_id(
        ctx: Context<Refund>,
        tx_hash: TxHash,
        log_index: u64,
        token: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::refund::refund_with_message_id(ctx, tx_hash, log_index, token, amount)
    }

    /// Sweep collected gas to `receiver` (owner only)
    pub fn collect_fees<'info>(
        ctx: Context<'_, '_, 'info, 'info, CollectFees<'info>>,
        tokens: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::collect_fees::handler(ctx, tokens, amounts)
    }

    /// Hand the service over to a new owner (owner only)
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership(ctx, new_owner)
    }

    /// Deploy new program code from a buffer (owner only)
    pub fn upgrade(ctx: Context<Upgrade>) -> Result<()> {
        instructions::upgrade::handler(ctx)
    }
}
