use anchor_lang::prelude::*;

use crate::constants::STATE_VERSION;
use crate::errors::GasServiceError;
use crate::events::Upgraded;
use crate::state::Ownable;

/// Persistent gas service state. Survives program upgrades unchanged.
///
/// Balances are not stored here: native gas sits in the vault PDA and token
/// gas in the vault's associated token accounts.
#[account]
#[derive(Debug, PartialEq)]
pub struct GasService {
    /// Owner allowed to refund, collect fees, upgrade and hand over ownership
    pub owner: Pubkey,

    /// Buffer address of the code currently deployed
    pub implementation: Pubkey,

    /// Account layout version, bumped only together with a migration
    pub version: u8,

    /// PDA bump seed
    pub bump: u8,

    /// Vault PDA bump seed
    pub vault_bump: u8,

    /// Space held back for fields added by later versions
    pub reserved: [u8; 32],
}

impl GasService {
    pub const SIZE: usize = 32  // owner
        + 32                    // implementation
        + 1                     // version
        + 1                     // bump
        + 1                     // vault_bump
        + 32;                   // reserved

    pub fn new(owner: Pubkey, implementation: Pubkey, bump: u8, vault_bump: u8) -> Self {
        Self {
            owner,
            implementation,
            version: STATE_VERSION,
            bump,
            vault_bump,
            reserved: [0; 32],
        }
    }

    /// Points the service at new code. Owner and balances are left untouched.
    pub fn upgrade(&mut self, caller: &Pubkey, new_implementation: Pubkey) -> Result<Upgraded> {
        self.ensure_owner(caller)?;
        require_keys_neq!(
            new_implementation,
            Pubkey::default(),
            GasServiceError::InvalidImplementation
        );

        self.implementation = new_implementation;

        Ok(Upgraded {
            implementation: new_implementation,
        })
    }
}

impl Ownable for GasService {
    fn owner(&self) -> &Pubkey {
        &self.owner
    }

    fn set_owner(&mut self, new_owner: Pubkey) {
        self.owner = new_owner;
    }
}
