use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::ledger::{ContractCall, GasLedger, TokenTransfer};
use crate::state::{GasService, MessageId, TxHash};
use crate::utils::VaultCpi;

pub fn pay_gas_for_contract_call(
    ctx: Context<PayGas>,
    sender: Pubkey,
    destination_chain: String,
    destination_address: String,
    payload: Vec<u8>,
    gas_fee_amount: u64,
    refund_address: Pubkey,
) -> Result<()> {
    let accounts = &ctx.accounts;
    let call = ContractCall::new(sender, &destination_chain, &destination_address, &payload);

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault).pay_gas_for_contract_call(
        accounts.payer.key,
        &call,
        accounts.gas_token.key(),
        gas_fee_amount,
        refund_address,
    )?;

    msg!(
        "Gas paid: {} of {} for call to {}",
        gas_fee_amount,
        event.gas_token,
        destination_chain
    );
    emit!(event);
    Ok(())
}

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
    let accounts = &ctx.accounts;
    let call = ContractCall::new(sender, &destination_chain, &destination_address, &payload);
    let transfer = TokenTransfer::new(&symbol, amount);

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault)
        .pay_gas_for_contract_call_with_token(
            accounts.payer.key,
            &call,
            &transfer,
            accounts.gas_token.key(),
            gas_fee_amount,
            refund_address,
        )?;

    msg!(
        "Gas paid: {} of {} for call with {} {} to {}",
        gas_fee_amount,
        event.gas_token,
        amount,
        symbol,
        destination_chain
    );
    emit!(event);
    Ok(())
}

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
    let accounts = &ctx.accounts;
    let call = ContractCall::new(sender, &destination_chain, &destination_address, &payload);
    let transfer = TokenTransfer::new(&symbol, amount);

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault)
        .pay_gas_for_express_call_with_token(
            accounts.payer.key,
            &call,
            &transfer,
            accounts.gas_token.key(),
            gas_fee_amount,
            refund_address,
        )?;

    msg!(
        "Express gas paid: {} of {} for call with {} {} to {}",
        gas_fee_amount,
        event.gas_token,
        amount,
        symbol,
        destination_chain
    );
    emit!(event);
    Ok(())
}

pub fn add_gas(
    ctx: Context<PayGas>,
    tx_hash: TxHash,
    log_index: u64,
    gas_fee_amount: u64,
    refund_address: Pubkey,
) -> Result<()> {
    let accounts = &ctx.accounts;

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault).add_gas(
        accounts.payer.key,
        MessageId::new(tx_hash, log_index),
        accounts.gas_token.key(),
        gas_fee_amount,
        refund_address,
    )?;

    msg!("Gas added: {} of {} at log index {}", gas_fee_amount, event.gas_token, log_index);
    emit!(event);
    Ok(())
}

pub fn add_express_gas(
    ctx: Context<PayGas>,
    tx_hash: TxHash,
    log_index: u64,
    gas_fee_amount: u64,
    refund_address: Pubkey,
) -> Result<()> {
    let accounts = &ctx.accounts;

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault).add_express_gas(
        accounts.payer.key,
        MessageId::new(tx_hash, log_index),
        accounts.gas_token.key(),
        gas_fee_amount,
        refund_address,
    )?;

    msg!(
        "Express gas added: {} of {} at log index {}",
        gas_fee_amount,
        event.gas_token,
        log_index
    );
    emit!(event);
    Ok(())
}

/// Token-funded payment. The payer signs for the pull from its associated
/// token account; the vault's account is created on first use.
#[derive(Accounts)]
pub struct PayGas<'info> {
    #[account(
        seeds = [GAS_SERVICE_SEED],
        bump = gas_service.bump
    )]
    pub gas_service: Account<'info, GasService>,

    #[account(
        seeds = [GAS_VAULT_SEED],
        bump = gas_service.vault_bump
    )]
    pub gas_vault: SystemAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub gas_token: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = gas_token,
        associated_token::authority = payer
    )]
    pub payer_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = gas_token,
        associated_token::authority = gas_vault
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> PayGas<'info> {
    fn vault(&self) -> VaultCpi<'info> {
        VaultCpi::new(
            self.gas_vault.to_account_info(),
            self.gas_service.vault_bump,
            self.system_program.to_account_info(),
        )
        .with_token_program(self.token_program.to_account_info())
        .with_accounts([
            self.payer.to_account_info(),
            self.gas_token.to_account_info(),
            self.payer_token_account.to_account_info(),
            self.vault_token_account.to_account_info(),
        ])
    }
}
