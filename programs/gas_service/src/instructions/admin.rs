use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{GasService, Ownable};

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let gas_service = &mut ctx.accounts.gas_service;
    let event = gas_service.transfer_ownership(ctx.accounts.owner.key, new_owner)?;

    emit!(event);

    msg!("Ownership transferred to {}", new_owner);
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [GAS_SERVICE_SEED],
        bump = gas_service.bump
    )]
    pub gas_service: Account<'info, GasService>,

    pub owner: Signer<'info>,
}
