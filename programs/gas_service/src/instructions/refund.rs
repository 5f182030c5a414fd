use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::ledger::GasLedger;
use crate::state::{GasService, MessageId, TxHash};
use crate::utils::VaultCpi;

pub fn refund(ctx: Context<Refund>, token: Pubkey, amount: u64) -> Result<()> {
    process(ctx, None, token, amount)
}

pub fn refund_with_message_id(
    ctx: Context<Refund>,
    tx_hash: TxHash,
    log_index: u64,
    token: Pubkey,
    amount: u64,
) -> Result<()> {
    process(ctx, Some(MessageId::new(tx_hash, log_index)), token, amount)
}

fn process(
    ctx: Context<Refund>,
    message_id: Option<MessageId>,
    token: Pubkey,
    amount: u64,
) -> Result<()> {
    let accounts = &ctx.accounts;

    let mut vault = accounts.vault();
    let event = GasLedger::new(&accounts.gas_service, &mut vault).refund(
        accounts.owner.key,
        message_id,
        accounts.receiver.key(),
        token,
        amount,
    )?;

    msg!("Refunded {} of {} to {}", amount, token, event.receiver);
    emit!(event);
    Ok(())
}

/// Owner-directed payout from the vault.
///
/// Native refunds only need the receiver. Token refunds also take the mint,
/// the token program and the associated token accounts of the vault and the
/// receiver.
#[derive(Accounts)]
pub struct Refund<'info> {
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

    pub owner: Signer<'info>,

    /// CHECK: any account may be refunded to
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,

    pub token_mint: Option<Account<'info, Mint>>,

    #[account(mut)]
    pub vault_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub receiver_token_account: Option<Account<'info, TokenAccount>>,

    pub token_program: Option<Program<'info, Token>>,
    pub system_program: Program<'info, System>,
}

impl<'info> Refund<'info> {
    fn vault(&self) -> VaultCpi<'info> {
        let vault = VaultCpi::new(
            self.gas_vault.to_account_info(),
            self.gas_service.vault_bump,
            self.system_program.to_account_info(),
        );
        let vault = match &self.token_program {
            Some(token_program) => vault.with_token_program(token_program.to_account_info()),
            None => vault,
        };

        let token_accounts = [
            self.token_mint.as_ref().map(|mint| mint.to_account_info()),
            self.vault_token_account.as_ref().map(|account| account.to_account_info()),
            self.receiver_token_account.as_ref().map(|account| account.to_account_info()),
        ];
        vault
            .with_accounts([self.receiver.to_account_info()])
            .with_accounts(token_accounts.into_iter().flatten())
    }
}
