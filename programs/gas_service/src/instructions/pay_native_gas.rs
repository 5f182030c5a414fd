use anchor_lang::prelude::*;

use crate::constants::*;
use crate::ledger::{ContractCall, GasLedger, TokenTransfer};
use crate::state::{GasService, MessageId, TxHash};
use crate::utils::VaultCpi;

pub fn pay_native_gas_for_contract_call(
    ctx: Context<PayNativeGas>,
    sender: Pubkey,
    destination_chain: String,
    destination_address: String,
    payload: Vec<u8>,
    value: u64,
    refund_address: Pubkey,
) -> Result<()> {
    let accounts = &ctx.accounts;
    let call = ContractCall::new(sender, &destination_chain, &destination_address, &payload);

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault)
        .pay_native_gas_for_contract_call(accounts.payer.key, &call, value, refund_address)?;

    msg!("Native gas paid: {} for call to {}", value, destination_chain);
    emit!(event);
    Ok(())
}

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
    let accounts = &ctx.accounts;
    let call = ContractCall::new(sender, &destination_chain, &destination_address, &payload);
    let transfer = TokenTransfer::new(&symbol, amount);

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault)
        .pay_native_gas_for_contract_call_with_token(
            accounts.payer.key,
            &call,
            &transfer,
            value,
            refund_address,
        )?;

    msg!(
        "Native gas paid: {} for call with {} {} to {}",
        value,
        amount,
        symbol,
        destination_chain
    );
    emit!(event);
    Ok(())
}

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
    let accounts = &ctx.accounts;
    let call = ContractCall::new(sender, &destination_chain, &destination_address, &payload);
    let transfer = TokenTransfer::new(&symbol, amount);

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault)
        .pay_native_gas_for_express_call_with_token(
            accounts.payer.key,
            &call,
            &transfer,
            value,
            refund_address,
        )?;

    msg!(
        "Native express gas paid: {} for call with {} {} to {}",
        value,
        amount,
        symbol,
        destination_chain
    );
    emit!(event);
    Ok(())
}

pub fn add_native_gas(
    ctx: Context<PayNativeGas>,
    tx_hash: TxHash,
    log_index: u64,
    value: u64,
    refund_address: Pubkey,
) -> Result<()> {
    let accounts = &ctx.accounts;

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault).add_native_gas(
        accounts.payer.key,
        MessageId::new(tx_hash, log_index),
        value,
        refund_address,
    )?;

    msg!("Native gas added: {} at log index {}", value, log_index);
    emit!(event);
    Ok(())
}

pub fn add_native_express_gas(
    ctx: Context<PayNativeGas>,
    tx_hash: TxHash,
    log_index: u64,
    value: u64,
    refund_address: Pubkey,
) -> Result<()> {
    let accounts = &ctx.accounts;

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault).add_native_express_gas(
        accounts.payer.key,
        MessageId::new(tx_hash, log_index),
        value,
        refund_address,
    )?;

    msg!("Native express gas added: {} at log index {}", value, log_index);
    emit!(event);
    Ok(())
}

/// Native payment. `value` lamports move from the payer to the vault.
#[derive(Accounts)]
pub struct PayNativeGas<'info> {
    #[account(
        seeds = [GAS_SERVICE_SEED],
        bump = gas_service.bump
    )]
    pub gas_service: Account<'info, GasService>,

    #[account(
        mut,
        seeds = [GAS_VAULT_SEED],
        bump = gas_service.vault_bump
    )]
    pub gas_vault: SystemAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> PayNativeGas<'info> {
    fn vault(&self) -> VaultCpi<'info> {
        VaultCpi::new(
            self.gas_vault.to_account_info(),
            self.gas_service.vault_bump,
            self.system_program.to_account_info(),
        )
        .with_accounts([self.payer.to_account_info()])
    }
}
