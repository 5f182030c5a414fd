use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable;
use anchor_lang::system_program;

use crate::constants::*;
use crate::errors::GasServiceError;
use crate::state::GasService;

pub fn handler(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
    require_keys_neq!(owner, Pubkey::default(), GasServiceError::InvalidOwner);

    ctx.accounts.gas_service.set_inner(GasService::new(
        owner,
        crate::ID,
        ctx.bumps.gas_service,
        ctx.bumps.gas_vault,
    ));

    // Top the vault up to its rent-exempt reserve so native gas can always be
    // paid out in full.
    let reserve = Rent::get()?.minimum_balance(0);
    let missing = reserve.saturating_sub(ctx.accounts.gas_vault.lamports());
    if missing > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.gas_vault.to_account_info(),
                },
            ),
            missing,
        )?;
    }

    msg!("Gas service initialized, owner: {}", owner);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + GasService::SIZE,
        seeds = [GAS_SERVICE_SEED],
        bump
    )]
    pub gas_service: Account<'info, GasService>,

    #[account(
        mut,
        seeds = [GAS_VAULT_SEED],
        bump
    )]
    pub gas_vault: SystemAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// Only the deployer may bootstrap the service and pick its owner.
    #[account(
        seeds = [crate::ID.as_ref()],
        bump,
        seeds::program = bpf_loader_upgradeable::id(),
        constraint = is_upgrade_authority(payer.key, &program_data)
            @ GasServiceError::NotUpgradeAuthority
    )]
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

/// An immutable program has no upgrade authority, so nobody matches.
fn is_upgrade_authority(signer: &Pubkey, program_data: &ProgramData) -> bool {
    program_data.upgrade_authority_address == Some(*signer)
}

#[cfg(test)]
mod test {
    use super::*;

    fn program_data(upgrade_authority_address: Option<Pubkey>) -> ProgramData {
        ProgramData {
            slot: 42,
            upgrade_authority_address,
        }
    }

    #[test]
    fn deployer_may_initialize() {
        let deployer = Pubkey::new_unique();

        assert!(is_upgrade_authority(&deployer, &program_data(Some(deployer))));
    }

    #[test]
    fn other_signers_may_not_initialize() {
        let deployer = Pubkey::new_unique();
        let attacker = Pubkey::new_unique();

        assert!(!is_upgrade_authority(&attacker, &program_data(Some(deployer))));
        assert!(!is_upgrade_authority(&Pubkey::default(), &program_data(Some(deployer))));
    }

    #[test]
    fn immutable_program_cannot_be_initialized() {
        assert!(!is_upgrade_authority(&Pubkey::default(), &program_data(None)));
        assert!(!is_upgrade_authority(&Pubkey::new_unique(), &program_data(None)));
    }
}
