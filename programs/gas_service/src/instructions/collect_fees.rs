use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::constants::*;
use crate::ledger::GasLedger;
use crate::state::GasService;
use crate::utils::VaultCpi;

/// Sweeps accumulated gas to `receiver`. `Pubkey::default()` in `tokens`
/// selects native lamports.
///
/// Remaining accounts carry, for every token swept, its mint and the
/// associated token accounts of the vault and the receiver.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, CollectFees<'info>>,
    tokens: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let accounts = &ctx.accounts;

    let vault = VaultCpi::new(
        accounts.gas_vault.to_account_info(),
        accounts.gas_service.vault_bump,
        accounts.system_program.to_account_info(),
    );
    let vault = match &accounts.token_program {
        Some(token_program) => vault.with_token_program(token_program.to_account_info()),
        None => vault,
    };
    let mut vault = vault
        .with_accounts([accounts.receiver.to_account_info()])
        .with_accounts(ctx.remaining_accounts.iter().cloned());

    GasLedger::new(&accounts.gas_service, &mut vault).collect_fees(
        accounts.owner.key,
        accounts.receiver.key(),
        &tokens,
        &amounts,
    )?;

    msg!("Collected fees in {} tokens to {}", tokens.len(), accounts.receiver.key());
    Ok(())
}

#[derive(Accounts)]
pub struct CollectFees<'info> {
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

    /// CHECK: fees may be swept to any account
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,

    pub token_program: Option<Program<'info, Token>>,
    pub system_program: Program<'info, System>,
}
