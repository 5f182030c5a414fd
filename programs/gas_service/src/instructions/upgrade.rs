use anchor_lang::prelude::*;
use anchor_lang::solana_program::{bpf_loader_upgradeable, program::invoke_signed};

use crate::constants::*;
use crate::state::GasService;

/// Deploys the code in `buffer` under the program's upgrade authority PDA.
///
/// The `GasService` account is not touched beyond its `implementation`, so
/// owner and vault balances carry over to the new code.
pub fn handler(ctx: Context<Upgrade>) -> Result<()> {
    let new_implementation = ctx.accounts.buffer.key();
    let event = ctx
        .accounts
        .gas_service
        .upgrade(ctx.accounts.owner.key, new_implementation)?;

    invoke_signed(
        &bpf_loader_upgradeable::upgrade(
            &crate::ID,
            &new_implementation,
            &ctx.accounts.upgrade_authority.key(),
            &ctx.accounts.spill.key(),
        ),
        &ctx.accounts.to_account_infos(),
        &[&[UPGRADE_AUTHORITY_SEED, &[ctx.bumps.upgrade_authority]]],
    )?;

    emit!(event);

    msg!("Upgraded to {}", new_implementation);
    Ok(())
}

#[derive(Accounts)]
pub struct Upgrade<'info> {
    #[account(
        mut,
        seeds = [GAS_SERVICE_SEED],
        bump = gas_service.bump
    )]
    pub gas_service: Account<'info, GasService>,

    pub owner: Signer<'info>,

    /// CHECK: Upgrade authority of this program, signs the loader CPI.
    #[account(
        seeds = [UPGRADE_AUTHORITY_SEED],
        bump
    )]
    pub upgrade_authority: UncheckedAccount<'info>,

    /// CHECK: Receives the buffer's lamports.
    #[account(mut)]
    pub spill: UncheckedAccount<'info>,

    /// CHECK: Checked by the loader.
    #[account(mut)]
    pub buffer: UncheckedAccount<'info>,

    /// CHECK: Checked by the loader.
    #[account(mut)]
    pub program_data: UncheckedAccount<'info>,

    /// CHECK: This program.
    #[account(mut, address = crate::ID)]
    pub this_program: UncheckedAccount<'info>,

    pub rent: Sysvar<'info, Rent>,
    pub clock: Sysvar<'info, Clock>,

    /// CHECK: BPF Loader Upgradeable program.
    #[account(address = bpf_loader_upgradeable::ID)]
    pub bpf_loader_upgradeable_program: UncheckedAccount<'info>,
}
